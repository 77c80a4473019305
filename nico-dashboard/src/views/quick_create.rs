//! Quick-create modals reachable from the inquiry form
//!
//! Each form validates presence, posts once, and on success resets itself.
//! The inquiry view refreshes its dropdown options afterwards.

use nico_client::HttpClient;
use shared::models::{ConsultantPayload, ConsumerPayload, IdRef, SignupPayload};
use shared::{EntityId, FieldErrors};

use super::ViewContext;
use super::product::ProductForm;
use crate::error::DashboardResult;
use crate::notify::Notifier;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConsumerForm {
    pub consumer_name: String,
    pub email_id: String,
    pub address: String,
    pub contact: String,
}

impl ConsumerForm {
    pub fn validate(&self) -> Result<ConsumerPayload, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require_text("consumerName", &self.consumer_name, "Consumer Name is required.");
        errors.into_result()?;
        Ok(ConsumerPayload {
            consumer_name: self.consumer_name.trim().to_string(),
            email_id: self.email_id.trim().to_string(),
            address: self.address.trim().to_string(),
            contact: self.contact.trim().to_string(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConsultantForm {
    pub consultant_name: String,
    pub contact_person: String,
    pub contact_number: String,
}

impl ConsultantForm {
    pub fn validate(&self, created_by: EntityId) -> Result<ConsultantPayload, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors
            .require_text("consultantName", &self.consultant_name, "Consultant Name is required.")
            .require_text("contactPerson", &self.contact_person, "Contact Person is required.")
            .require_text("contactNumber", &self.contact_number, "Contact Number is required.");
        errors.into_result()?;
        Ok(ConsultantPayload {
            consultant_name: self.consultant_name.trim().to_string(),
            contact_person: self.contact_person.trim().to_string(),
            contact_number: self.contact_number.trim().to_string(),
            created_by: IdRef::new(created_by),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserForm {
    /// Existing user id when re-saving
    pub user_id: Option<EntityId>,
    pub name: String,
    pub email: String,
    /// Left out of the request when blank
    pub password: String,
    pub designation: String,
    pub role_id: Option<EntityId>,
    pub mobile_no: String,
}

impl UserForm {
    pub fn validate(&self) -> Result<SignupPayload, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors
            .require_text("name", &self.name, "Name is required.")
            .require_text("email", &self.email, "Email is required.")
            .require_some("role", &self.role_id, "Role is required.");
        errors.into_result()?;
        let role_id = self.role_id.unwrap_or_default();
        Ok(SignupPayload {
            id: self.user_id,
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: Some(self.password.clone()).filter(|p| !p.is_empty()),
            designation: self.designation.trim().to_string(),
            role: IdRef::new(role_id),
            mobile_no: self.mobile_no.trim().to_string(),
        })
    }
}

/// Toast the first field error and hand the errors back
fn rejected<T>(notifier: &Notifier, errors: FieldErrors) -> DashboardResult<T> {
    if let Some(message) = errors.first() {
        notifier.error(message);
    }
    Err(errors.into())
}

pub async fn save_consumer<C: HttpClient>(
    ctx: &ViewContext<C>,
    form: &mut ConsumerForm,
) -> DashboardResult<()> {
    let payload = match form.validate() {
        Ok(payload) => payload,
        Err(errors) => return rejected(&ctx.notifier, errors),
    };
    match ctx.api.create_consumer(&payload).await {
        Ok(ack) => {
            ctx.notifier.acked(&ack, "Consumer saved successfully!");
            *form = ConsumerForm::default();
            Ok(())
        }
        Err(e) => {
            ctx.notifier
                .request_failed(&e, "Failed to save consumer. Please try again.");
            Err(e.into())
        }
    }
}

pub async fn save_consultant<C: HttpClient>(
    ctx: &ViewContext<C>,
    form: &mut ConsultantForm,
) -> DashboardResult<()> {
    let user_id = ctx.acting_user().await?;
    let payload = match form.validate(user_id) {
        Ok(payload) => payload,
        Err(errors) => return rejected(&ctx.notifier, errors),
    };
    match ctx.api.create_consultant(&payload).await {
        Ok(ack) => {
            ctx.notifier.acked(&ack, "Consultant saved successfully!");
            *form = ConsultantForm::default();
            Ok(())
        }
        Err(e) => {
            ctx.notifier
                .request_failed(&e, "Failed to save consultant. Please try again.");
            Err(e.into())
        }
    }
}

pub async fn save_user<C: HttpClient>(ctx: &ViewContext<C>, form: &mut UserForm) -> DashboardResult<()> {
    let payload = match form.validate() {
        Ok(payload) => payload,
        Err(errors) => return rejected(&ctx.notifier, errors),
    };
    match ctx.api.signup_user(&payload).await {
        Ok(ack) => {
            ctx.notifier.acked(&ack, "User saved successfully!");
            *form = UserForm::default();
            Ok(())
        }
        Err(e) => {
            ctx.notifier
                .request_failed(&e, "Failed to save new user. Please try again.");
            Err(e.into())
        }
    }
}

/// Product created from inside the inquiry form
pub async fn save_product<C: HttpClient>(
    ctx: &ViewContext<C>,
    form: &mut ProductForm,
) -> DashboardResult<()> {
    let user_id = ctx.acting_user().await?;
    let payload = match form.payload(user_id) {
        Ok(payload) => payload,
        Err(errors) => {
            form.error = errors.first().map(str::to_string);
            return Err(errors.into());
        }
    };
    match ctx.api.create_product(&payload).await {
        Ok(ack) => {
            ctx.notifier.acked(&ack, "Product created successfully!");
            *form = ProductForm::default();
            Ok(())
        }
        Err(e) => {
            ctx.notifier
                .request_failed(&e, "Error submitting product. Please try again.");
            Err(e.into())
        }
    }
}
