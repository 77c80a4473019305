//! User / role endpoints

use shared::ApiResponse;
use shared::models::{Role, SignupPayload, User};
use shared::response::{RoleList, UserList};

use super::{Ack, NicoApi};
use crate::error::ClientResult;
use crate::http::HttpClient;
use crate::query::QueryParams;

impl<C: HttpClient> NicoApi<C> {
    pub async fn list_users(&self, search: &str) -> ClientResult<Vec<User>> {
        let query = QueryParams::new().push("search", search);
        let response: ApiResponse<UserList> = self.http().get("/api/user/list", &query).await?;
        Ok(response.data.map(|d| d.list).unwrap_or_default())
    }

    pub async fn list_roles(&self) -> ClientResult<Vec<Role>> {
        let response: ApiResponse<RoleList> =
            self.http().get("/api/roles/list", &QueryParams::new()).await?;
        Ok(response.data.map(|d| d.roles).unwrap_or_default())
    }

    pub async fn signup_user(&self, payload: &SignupPayload) -> ClientResult<Ack> {
        self.http()
            .post("/api/user/signup", &QueryParams::new(), payload)
            .await
    }
}
