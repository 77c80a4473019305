//! `nico-admin` command line
//!
//! Every subcommand drives the same view-models a screen would. Tables go to
//! the given writer (stdout in the binary); toasts are left on the
//! [`Notifier`] for the caller to print.

use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use nico_client::{HttpClient, NicoApi};
use shared::EntityId;
use shared::models::{Brand, InquiryFilter, InquiryStatus, SelectOption};
use std::io::Write;
use std::path::PathBuf;

use crate::config::DashboardConfig;
use crate::confirm::{AssumeYes, Confirm, TerminalConfirm};
use crate::debounce::Debouncer;
use crate::export;
use crate::notify::Notifier;
use crate::paging::Pager;
use crate::route::Route;
use crate::views::inquiry::{InquiryForm, ModalKind};
use crate::views::quick_create::{ConsultantForm, ConsumerForm, UserForm};
use crate::views::{BrandView, InquiryView, ProductForm, ProductView, ViewContext, quick_create};

#[derive(Debug, Parser)]
#[command(name = "nico-admin")]
#[command(about = "Admin dashboard for the Nico inquiry service")]
#[command(
    after_help = "Environment:\n  NICO_API_URL        Service base URL\n  NICO_SESSION_FILE   Session store\n  NICO_LOG_LEVEL      Log verbosity"
)]
pub struct Cli {
    /// Service base URL
    #[arg(long, global = true, env = "NICO_API_URL")]
    pub api_url: Option<String>,

    /// Session file (token, user id, role)
    #[arg(long, global = true, env = "NICO_SESSION_FILE")]
    pub session_file: Option<PathBuf>,

    /// Answer yes to every confirmation
    #[arg(long, short = 'y', global = true, default_value_t = false)]
    pub yes: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Fold flag overrides into the environment configuration
    pub fn apply(&self, config: &mut DashboardConfig) {
        if let Some(url) = &self.api_url {
            config.client.base_url = url.clone();
        }
        if let Some(path) = &self.session_file {
            config.client.session_file = Some(path.clone());
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sign in / out
    Session {
        #[command(subcommand)]
        command: SessionCommand,
    },
    Brand {
        #[command(subcommand)]
        command: BrandCommand,
    },
    Product {
        #[command(subcommand)]
        command: ProductCommand,
    },
    Consumer {
        #[command(subcommand)]
        command: ConsumerCommand,
    },
    Consultant {
        #[command(subcommand)]
        command: ConsultantCommand,
    },
    User {
        #[command(subcommand)]
        command: UserCommand,
    },
    Inquiry {
        #[command(subcommand)]
        command: InquiryCommand,
    },
}

#[derive(Debug, Subcommand)]
pub enum SessionCommand {
    /// Store the token issued by the sign-in page
    SignIn {
        #[arg(long)]
        token: String,
        #[arg(long)]
        user_id: EntityId,
        #[arg(long)]
        role: Option<String>,
    },
    Show,
    SignOut,
}

/// Paging flags shared by the list commands
#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    #[arg(long, default_value_t = 1)]
    pub page: u32,
    /// 10, 25, 50 or 100
    #[arg(long)]
    pub size: Option<u32>,
    #[arg(long, default_value = "")]
    pub search: String,
}

#[derive(Debug, Subcommand)]
pub enum BrandCommand {
    List(ListArgs),
    Create { name: String },
    Update { id: EntityId, name: String },
    Delete { id: EntityId },
}

#[derive(Debug, Clone, Args)]
pub struct ProductArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub price: String,
    #[arg(long)]
    pub brand_id: Option<EntityId>,
}

#[derive(Debug, Subcommand)]
pub enum ProductCommand {
    List(ListArgs),
    Create(ProductArgs),
    Update {
        id: EntityId,
        #[command(flatten)]
        product: ProductArgs,
    },
    Delete {
        id: EntityId,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConsumerCommand {
    List {
        #[arg(long, default_value = "")]
        search: String,
    },
    Create {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        address: String,
        #[arg(long, default_value = "")]
        contact: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConsultantCommand {
    List {
        #[arg(long, default_value = "")]
        search: String,
    },
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        contact_person: String,
        #[arg(long)]
        contact_number: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum UserCommand {
    List {
        #[arg(long, default_value = "")]
        search: String,
    },
    Roles,
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        role_id: Option<EntityId>,
        #[arg(long, default_value = "")]
        password: String,
        #[arg(long, default_value = "")]
        designation: String,
        #[arg(long, default_value = "")]
        mobile_no: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutcomeArg {
    Won,
    Lost,
}

impl OutcomeArg {
    fn is_win(self) -> bool {
        self == OutcomeArg::Won
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    Tender,
    Purchase,
    Procurement,
    Urgent,
}

impl From<StatusArg> for InquiryStatus {
    fn from(status: StatusArg) -> Self {
        match status {
            StatusArg::Tender => InquiryStatus::Tender,
            StatusArg::Purchase => InquiryStatus::Purchase,
            StatusArg::Procurement => InquiryStatus::Procurement,
            StatusArg::Urgent => InquiryStatus::Urgent,
        }
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct InquiryFilterArgs {
    #[arg(long, value_enum)]
    pub status: Option<StatusArg>,
    #[arg(long)]
    pub consumer: Option<EntityId>,
    #[arg(long)]
    pub consultant: Option<EntityId>,
    #[arg(long)]
    pub brand: Option<EntityId>,
    /// Admin only
    #[arg(long)]
    pub follow_up_user: Option<EntityId>,
    /// Admin only
    #[arg(long)]
    pub follow_up_quotation: Option<EntityId>,
    #[arg(long, value_enum)]
    pub outcome: Option<OutcomeArg>,
}

/// Fields of the inquiry form; on update, unset flags keep the stored value
#[derive(Debug, Clone, Default, Args)]
pub struct InquiryFormArgs {
    #[arg(long)]
    pub project_name: Option<String>,
    #[arg(long, value_enum)]
    pub status: Option<StatusArg>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub consumer: Option<EntityId>,
    /// Repeat for several brands
    #[arg(long = "brand")]
    pub brands: Vec<EntityId>,
    /// Repeat for several products
    #[arg(long = "product")]
    pub products: Vec<EntityId>,
    #[arg(long)]
    pub consultant: Option<EntityId>,
    #[arg(long)]
    pub follow_up_user: Option<EntityId>,
    #[arg(long)]
    pub follow_up_quotation: Option<EntityId>,
    #[arg(long)]
    pub remark: Option<String>,
    #[arg(long)]
    pub estimate_price: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum InquiryCommand {
    List {
        #[command(flatten)]
        list: ListArgs,
        #[command(flatten)]
        filter: InquiryFilterArgs,
    },
    Create(InquiryFormArgs),
    Update {
        id: EntityId,
        #[command(flatten)]
        form: InquiryFormArgs,
    },
    Delete {
        id: EntityId,
    },
    /// Change the workflow status
    Status {
        id: EntityId,
        #[arg(value_enum)]
        status: StatusArg,
        /// Defaults to the latest description
        #[arg(long)]
        reason: Option<String>,
    },
    /// Record the outcome
    Mark {
        id: EntityId,
        #[arg(value_enum)]
        outcome: OutcomeArg,
        #[arg(long)]
        reason: String,
    },
    QuotationDone {
        id: EntityId,
        #[arg(long)]
        reason: String,
    },
    /// Send back for a new quotation
    Reassign {
        id: EntityId,
        /// Defaults to the current description
        #[arg(long)]
        reason: Option<String>,
    },
    /// Admin only
    Remind {
        id: EntityId,
        #[arg(long)]
        note: String,
    },
    /// Show the answer to a reminder
    Reminder {
        id: EntityId,
    },
    Comment {
        id: EntityId,
        #[arg(long)]
        text: String,
    },
    /// Admin only
    Export {
        #[arg(long)]
        month: Option<u32>,
        #[arg(long)]
        year: Option<i32>,
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

fn pager_footer(out: &mut impl Write, pager: &Pager) -> anyhow::Result<()> {
    writeln!(
        out,
        "{}  (page {} of {})",
        pager.label(),
        pager.page(),
        pager.total_pages()
    )?;
    Ok(())
}

/// Execute one command
pub async fn run<C: HttpClient>(
    command: Command,
    api: NicoApi<C>,
    notifier: Notifier,
    config: &DashboardConfig,
    yes: bool,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let ctx = ViewContext::new(api, notifier);
    let mut confirm = |prompt: &str| {
        if yes {
            AssumeYes.confirm(prompt)
        } else {
            TerminalConfirm::stdio().confirm(prompt)
        }
    };

    if let Command::Session { command } = command {
        return session(command, &ctx, out).await;
    }
    if ctx.route().await == Route::SignIn {
        bail!("Not signed in; run `nico-admin session sign-in` first");
    }

    let debouncer = || Debouncer::from_millis(config.search_debounce_ms);

    match command {
        Command::Session { .. } => Ok(()),
        Command::Brand { command } => {
            let size = match &command {
                BrandCommand::List(args) => args.size.unwrap_or(config.page_size),
                _ => config.page_size,
            };
            let mut view = BrandView::new(ctx, size, debouncer());
            match command {
                BrandCommand::List(args) => {
                    if args.search.is_empty() {
                        view.load().await?;
                    } else {
                        view.apply_search(args.search).await?;
                    }
                    view.go_to_page(args.page).await?;
                    for brand in view.rows() {
                        writeln!(out, "{:>6}  {}", brand.brand_id, brand.brand_name)?;
                    }
                    pager_footer(out, view.pager())
                }
                BrandCommand::Create { name } => {
                    view.open_create();
                    view.form.name = name;
                    view.submit().await?;
                    Ok(())
                }
                BrandCommand::Update { id, name } => {
                    let brand = brand_row(id, name.clone());
                    view.open_edit(&brand).await?;
                    view.form.name = name;
                    view.submit().await?;
                    Ok(())
                }
                BrandCommand::Delete { id } => {
                    view.delete(id, &mut confirm).await?;
                    Ok(())
                }
            }
        }
        Command::Product { command } => {
            let size = match &command {
                ProductCommand::List(args) => args.size.unwrap_or(config.page_size),
                _ => config.page_size,
            };
            let mut view = ProductView::new(ctx, size, debouncer());
            match command {
                ProductCommand::List(args) => {
                    if args.search.is_empty() {
                        view.load().await?;
                    } else {
                        view.apply_search(args.search).await?;
                    }
                    view.go_to_page(args.page).await?;
                    for row in view.table() {
                        writeln!(
                            out,
                            "{:>6}  {:<30} {:>10}  {:<20} {:<16} {}",
                            row.id, row.name, row.price, row.brand_name, row.created_by, row.created_at
                        )?;
                    }
                    pager_footer(out, view.pager())
                }
                ProductCommand::Create(args) => {
                    view.open_create();
                    fill_product(&mut view.form, args);
                    view.submit().await?;
                    Ok(())
                }
                ProductCommand::Update { id, product } => {
                    view.open_create();
                    view.form.editing = Some(id);
                    fill_product(&mut view.form, product);
                    view.submit().await?;
                    Ok(())
                }
                ProductCommand::Delete { id } => {
                    view.delete(id, &mut confirm).await?;
                    Ok(())
                }
            }
        }
        Command::Consumer { command } => match command {
            ConsumerCommand::List { search } => {
                for consumer in ctx.api.list_consumers(&search).await? {
                    writeln!(
                        out,
                        "{:>6}  {:<30} {}",
                        consumer.consumer_id,
                        consumer.consumer_name,
                        consumer.contact.unwrap_or_default()
                    )?;
                }
                Ok(())
            }
            ConsumerCommand::Create {
                name,
                email,
                address,
                contact,
            } => {
                let mut form = ConsumerForm {
                    consumer_name: name,
                    email_id: email,
                    address,
                    contact,
                };
                quick_create::save_consumer(&ctx, &mut form).await?;
                Ok(())
            }
        },
        Command::Consultant { command } => match command {
            ConsultantCommand::List { search } => {
                for consultant in ctx.api.list_consultants(&search).await? {
                    writeln!(
                        out,
                        "{:>6}  {:<30} {}",
                        consultant.consultant_id,
                        consultant.consultant_name,
                        consultant.contact_person.unwrap_or_default()
                    )?;
                }
                Ok(())
            }
            ConsultantCommand::Create {
                name,
                contact_person,
                contact_number,
            } => {
                let mut form = ConsultantForm {
                    consultant_name: name,
                    contact_person,
                    contact_number,
                };
                quick_create::save_consultant(&ctx, &mut form).await?;
                Ok(())
            }
        },
        Command::User { command } => match command {
            UserCommand::List { search } => {
                for user in ctx.api.list_users(&search).await? {
                    writeln!(
                        out,
                        "{:>6}  {:<24} {:<30} {}",
                        user.id,
                        user.name,
                        user.email.unwrap_or_default(),
                        user.role.map(|r| r.name).unwrap_or_default()
                    )?;
                }
                Ok(())
            }
            UserCommand::Roles => {
                for role in ctx.api.list_roles().await? {
                    writeln!(out, "{:>6}  {}", role.id, role.name)?;
                }
                Ok(())
            }
            UserCommand::Create {
                name,
                email,
                role_id,
                password,
                designation,
                mobile_no,
            } => {
                let mut form = UserForm {
                    user_id: None,
                    name,
                    email,
                    password,
                    designation,
                    role_id,
                    mobile_no,
                };
                quick_create::save_user(&ctx, &mut form).await?;
                Ok(())
            }
        },
        Command::Inquiry { command } => inquiry(command, ctx, config, &mut confirm, out).await,
    }
}

/// Row as the list would show it; `open_edit` fetches the stored brand
/// when the name is blank
fn brand_row(id: EntityId, name: String) -> Brand {
    Brand {
        brand_id: id,
        brand_name: name,
        created_at: None,
        updated_at: None,
    }
}

fn fill_product(form: &mut ProductForm, args: ProductArgs) {
    form.name = args.name;
    form.price = args.price;
    form.brand_id = args.brand_id;
}

async fn session<C: HttpClient>(
    command: SessionCommand,
    ctx: &ViewContext<C>,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let store = ctx.api.session();
    match command {
        SessionCommand::SignIn {
            token,
            user_id,
            role,
        } => {
            store
                .sign_in(token, user_id, role)
                .await
                .context("failed to store session")?;
            ctx.notifier.success("Signed in");
        }
        SessionCommand::Show => {
            let session = store.snapshot().await;
            match session.user_id {
                Some(user_id) if session.is_signed_in() => writeln!(
                    out,
                    "user {user_id} ({})",
                    session.user_role.as_deref().unwrap_or("no role")
                )?,
                _ => writeln!(out, "signed out")?,
            }
        }
        SessionCommand::SignOut => {
            store.clear().await.context("failed to clear session")?;
            ctx.notifier.success("Signed out");
        }
    }
    Ok(())
}

fn apply_form_args(form: &mut InquiryForm, args: InquiryFormArgs) {
    if let Some(name) = args.project_name {
        form.project_name = name;
    }
    if let Some(status) = args.status {
        form.status = Some(status.into());
    }
    if let Some(description) = args.description {
        form.description = description;
    }
    if args.consumer.is_some() {
        form.consumer = args.consumer;
    }
    if !args.products.is_empty() {
        form.products = args.products;
    }
    if args.consultant.is_some() {
        form.consultant = args.consultant;
    }
    if args.follow_up_user.is_some() {
        form.follow_up_user = args.follow_up_user;
    }
    if args.follow_up_quotation.is_some() {
        form.follow_up_quotation = args.follow_up_quotation;
    }
    if let Some(remark) = args.remark {
        form.remark = remark;
    }
    if let Some(price) = args.estimate_price {
        form.estimate_price = price;
    }
}

async fn inquiry<C: HttpClient>(
    command: InquiryCommand,
    ctx: ViewContext<C>,
    config: &DashboardConfig,
    confirm: &mut impl Confirm,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    if let InquiryCommand::Export { month, year, dir } = &command {
        let dir = dir.clone().unwrap_or_else(|| config.export_dir.clone());
        let path = export::export_inquiries(&ctx, *month, *year, &dir).await?;
        writeln!(out, "{}", path.display())?;
        return Ok(());
    }

    let size = match &command {
        InquiryCommand::List { list, .. } => list.size.unwrap_or(config.page_size),
        _ => config.page_size,
    };
    let mut view = InquiryView::new(
        ctx,
        size,
        Debouncer::from_millis(config.search_debounce_ms),
    );

    match command {
        InquiryCommand::Export { .. } => Ok(()),
        InquiryCommand::List { list, filter } => {
            let assignee_filter =
                filter.follow_up_user.is_some() || filter.follow_up_quotation.is_some();
            if assignee_filter && !view.is_admin().await {
                bail!("Assignee filters are available to admins only");
            }
            view = view.with_filter(InquiryFilter {
                status: filter.status.map(Into::into),
                follow_up_quotation: filter.follow_up_quotation,
                follow_up_user: filter.follow_up_user,
                consumer: filter.consumer,
                consultant: filter.consultant,
                brand: filter.brand,
                win_or_loss: filter.outcome.map(OutcomeArg::is_win),
            });
            if list.search.is_empty() {
                view.load().await?;
            } else {
                view.apply_search(list.search).await?;
            }
            view.go_to_page(list.page).await?;

            for row in view.table().await {
                let marker = if row.actions.highlighted { "*" } else { " " };
                writeln!(
                    out,
                    "{marker}{:>4}  {:>6}  {:<28} {:<12} {:<20} {:<30} {}",
                    row.number,
                    row.id,
                    row.project_name,
                    row.status.as_str(),
                    row.consumer,
                    row.products,
                    row.result.unwrap_or("Pending"),
                )?;
            }
            pager_footer(out, view.pager())
        }
        InquiryCommand::Create(args) => {
            view.open_create();
            select_brands(&mut view, &args.brands).await?;
            apply_form_args(&mut view.form, args);
            view.submit().await?;
            Ok(())
        }
        InquiryCommand::Update { id, form } => {
            let inquiry = view.fetch_inquiry(id).await?;
            view.open_edit(&inquiry).await?;
            if !form.brands.is_empty() {
                select_brands(&mut view, &form.brands).await?;
            }
            apply_form_args(&mut view.form, form);
            view.submit().await?;
            Ok(())
        }
        InquiryCommand::Delete { id } => {
            view.delete(id, confirm).await?;
            Ok(())
        }
        InquiryCommand::Status { id, status, reason } => {
            view.open_status_change(id, status.into()).await?;
            if let Some(reason) = reason {
                view.set_modal_text(reason);
            }
            view.submit_modal().await?;
            Ok(())
        }
        InquiryCommand::Mark { id, outcome, reason } => {
            let inquiry = view.fetch_inquiry(id).await?;
            view.open_win_loss(&inquiry, outcome.is_win())?;
            view.set_modal_text(reason);
            view.submit_modal().await?;
            Ok(())
        }
        InquiryCommand::QuotationDone { id, reason } => {
            let inquiry = view.fetch_inquiry(id).await?;
            view.open_quotation_done(&inquiry).await?;
            view.set_modal_text(reason);
            view.submit_modal().await?;
            Ok(())
        }
        InquiryCommand::Reassign { id, reason } => {
            let inquiry = view.fetch_inquiry(id).await?;
            view.open_reassign(&inquiry).await?;
            if let Some(reason) = reason {
                view.set_modal_text(reason);
            }
            view.submit_modal().await?;
            Ok(())
        }
        InquiryCommand::Remind { id, note } => {
            let inquiry = view.fetch_inquiry(id).await?;
            view.open_reminder(&inquiry).await?;
            view.set_modal_text(note);
            view.submit_modal().await?;
            Ok(())
        }
        InquiryCommand::Reminder { id } => {
            let inquiry = view.fetch_inquiry(id).await?;
            view.open_reminder_response(&inquiry)?;
            if let Some(ModalKind::ReminderResponse(data)) = view.modal().map(|m| &m.kind) {
                writeln!(out, "Project:   {}", data.project_name)?;
                writeln!(out, "Question:  {}", data.reminder_question)?;
                let answer = if data.is_answered() {
                    data.reminder_answer.as_str()
                } else {
                    "(no answer yet)"
                };
                writeln!(out, "Answer:    {answer}")?;
                writeln!(out, "From:      {}", data.creator_name)?;
                writeln!(out, "To:        {}", data.user_id_name)?;
                writeln!(out, "Sent:      {}", data.created_at)?;
            }
            view.close_modal();
            Ok(())
        }
        InquiryCommand::Comment { id, text } => {
            let inquiry = view.fetch_inquiry(id).await?;
            view.open_description(&inquiry).await?;
            view.set_modal_text(text);
            let result = view.submit_modal().await;
            if view.route().await == Route::SignIn {
                bail!("Session rejected by the server; sign in again");
            }
            result?;
            Ok(())
        }
    }
}

async fn select_brands<C: HttpClient>(view: &mut InquiryView<C>, ids: &[EntityId]) -> anyhow::Result<()> {
    if ids.is_empty() {
        return Ok(());
    }
    let brands = ids.iter().map(|id| SelectOption::new(*id, id.to_string())).collect();
    view.select_brands(brands).await?;
    Ok(())
}
