// nico-dashboard/tests/inquiry_view.rs
// Inquiry list, form cascade and per-row workflow against the mock client

use nico_client::mock::{Method, MockHttpClient, MockReply};
use nico_client::{NicoApi, SessionStore};
use nico_dashboard::debounce::Debouncer;
use nico_dashboard::export::export_inquiries;
use nico_dashboard::views::inquiry::ModalKind;
use nico_dashboard::{InquiryView, Notifier, Route, ViewContext};
use serde_json::{Value, json};
use shared::models::{Inquiry, InquiryStatus, SelectOption};

const INQUIRY_LIST: &str = "/api/inquiry/all";

fn context(mock: &MockHttpClient) -> ViewContext<MockHttpClient> {
    ViewContext::new(NicoApi::new(mock.clone()), Notifier::new())
}

fn view(ctx: ViewContext<MockHttpClient>) -> InquiryView<MockHttpClient> {
    InquiryView::new(ctx, 10, Debouncer::from_millis(500))
}

/// Pending tender inquiry: follow-up user 10, quotation assignee 11
fn inquiry_json(is_win: Value, quotation_given: bool) -> Value {
    json!({
        "inquiryId": 42,
        "projectName": "Riverside Mall",
        "inquiryStatus": "TENDER",
        "description": "first contact",
        "consumer": {"consumerId": 3, "consumerName": "Acme"},
        "products": [
            {"productId": 1, "productName": "Pump", "brand": {"brandId": 7, "brandName": "Grundfos"}}
        ],
        "consultant": {"consultantId": 5, "consultantName": "Lee"},
        "followUpUser": {"id": 10, "name": "Asha"},
        "followUpQuotation": {"id": 11, "name": "Ravi"},
        "remark": "site visit",
        "isWin": is_win,
        "quotationGiven": quotation_given
    })
}

fn inquiry(is_win: Value, quotation_given: bool) -> Inquiry {
    serde_json::from_value(inquiry_json(is_win, quotation_given)).unwrap()
}

fn list_reply(items: Vec<Value>, total_pages: u32) -> MockReply {
    MockReply::ok(
        None,
        json!({
            "inquiries": {"content": items},
            "totalPages": total_pages,
            "totalItems": 12
        }),
    )
}

#[tokio::test]
async fn test_clearing_brands_clears_products_without_request() {
    let mock = MockHttpClient::signed_in(9, "Admin");
    let mut view = view(context(&mock));
    view.open_create();
    view.form.products = vec![1, 2];
    view.form.product_options = vec![SelectOption::new(1, "Pump")];

    view.select_brands(Vec::new()).await.unwrap();

    assert!(view.form.products.is_empty());
    assert!(view.form.product_options.is_empty());
    assert!(!view.form.products_enabled());
    assert!(mock.requests().is_empty());
}

#[tokio::test]
async fn test_selected_brands_load_product_options() {
    let mock = MockHttpClient::signed_in(9, "Admin");
    mock.on(
        Method::GET,
        "/api/product/listByBrands",
        MockReply::ok(
            None,
            json!([
                {"productId": 1, "productName": "Pump", "price": 120.5},
                {"productId": 2, "productName": "Valve"}
            ]),
        ),
    );
    let mut view = view(context(&mock));
    view.open_create();

    view.select_brands(vec![SelectOption::new(7, "Grundfos"), SelectOption::new(8, "Danfoss")])
        .await
        .unwrap();

    let sent = mock.last_request().unwrap();
    assert_eq!(sent.path, "/api/product/listByBrands");
    assert_eq!(sent.query.get("brandIds"), Some("7,8"));
    assert_eq!(sent.query.get("search"), None);
    assert_eq!(
        view.form.product_options,
        vec![SelectOption::new(1, "Pump - $120.5"), SelectOption::new(2, "Valve")]
    );
}

#[tokio::test]
async fn test_empty_form_reports_all_fields_and_sends_nothing() {
    let mock = MockHttpClient::signed_in(9, "Admin");
    let mut view = view(context(&mock));
    view.open_create();

    assert!(view.submit().await.is_err());
    assert_eq!(view.form.errors.len(), 10);
    assert!(view.form.open);
    assert!(mock.requests().is_empty());
}

#[tokio::test]
async fn test_filter_change_goes_back_to_first_page() {
    let mock = MockHttpClient::signed_in(9, "Admin");
    mock.on(Method::GET, INQUIRY_LIST, list_reply(vec![inquiry_json(Value::Null, false)], 3));
    let mut view = view(context(&mock));
    view.load().await.unwrap();
    view.go_to_page(2).await.unwrap();
    mock.clear_requests();

    view.set_status_filter(Some(InquiryStatus::Urgent)).await.unwrap();
    assert_eq!(view.pager().page(), 1);
    let sent = mock.last_request().unwrap();
    assert_eq!(sent.query.get("inquiry-status"), Some("URGENT"));
    assert_eq!(sent.query.get("page"), Some("1"));
    assert_eq!(sent.query.get("followUpUserId"), Some(""));

    // unchanged filter, no refetch
    view.set_status_filter(Some(InquiryStatus::Urgent)).await.unwrap();
    assert_eq!(mock.count(Method::GET, INQUIRY_LIST), 1);
}

#[tokio::test]
async fn test_assignee_filters_are_admin_only() {
    let mock = MockHttpClient::signed_in(10, "Sales");
    let ctx = context(&mock);
    let notifier = ctx.notifier.clone();
    let mut view = view(ctx);

    assert!(view.set_follow_up_user_filter(Some(10)).await.is_err());
    assert!(mock.requests().is_empty());
    assert_eq!(
        notifier.last().unwrap().message,
        "Follow-up user filter is available to admins only"
    );
}

#[tokio::test]
async fn test_win_marks_row_and_hides_action() {
    let mock = MockHttpClient::signed_in(9, "Admin");
    mock.on(Method::GET, INQUIRY_LIST, list_reply(vec![inquiry_json(Value::Null, false)], 1))
        .on(Method::GET, INQUIRY_LIST, list_reply(vec![inquiry_json(json!(true), false)], 1));
    mock.on(Method::PUT, "/api/inquiry/winorloss/42", MockReply::message("Marked"));
    let ctx = context(&mock);
    let notifier = ctx.notifier.clone();
    let mut view = view(ctx);

    view.load().await.unwrap();
    let row = view.table().await.remove(0);
    assert_eq!(row.result, None);
    assert!(row.actions.win_loss);

    let pending = view.rows()[0].clone();
    view.open_win_loss(&pending, true).unwrap();
    view.set_modal_text("signed the order");
    view.submit_modal().await.unwrap();

    let sent = &mock.requests_to(Method::PUT, "/api/inquiry/winorloss/42")[0];
    assert_eq!(sent.query.get("isWin"), Some("true"));
    assert_eq!(sent.query.get("userId"), Some("9"));
    assert_eq!(sent.body.as_ref().unwrap()["description"], "signed the order");
    assert_eq!(notifier.last().unwrap().message, "Marked");
    assert!(view.modal().is_none());

    let row = view.table().await.remove(0);
    assert_eq!(row.result, Some("Won"));
    assert!(!row.actions.win_loss);
}

#[tokio::test]
async fn test_failed_win_loss_still_closes_modal() {
    let mock = MockHttpClient::signed_in(9, "Admin");
    mock.on(Method::PUT, "/api/inquiry/winorloss/42", MockReply::status(500, ""));
    let ctx = context(&mock);
    let notifier = ctx.notifier.clone();
    let mut view = view(ctx);

    view.open_win_loss(&inquiry(Value::Null, false), false).unwrap();
    view.set_modal_text("price too high");
    assert!(view.submit_modal().await.is_err());

    assert!(view.modal().is_none());
    assert_eq!(notifier.last().unwrap().message, "Error updating status.");
    assert_eq!(mock.count(Method::GET, INQUIRY_LIST), 0);
}

#[tokio::test]
async fn test_blank_reason_keeps_modal_open() {
    let mock = MockHttpClient::signed_in(9, "Admin");
    let mut view = view(context(&mock));

    view.open_win_loss(&inquiry(Value::Null, false), true).unwrap();
    view.set_modal_text("   ");
    assert!(view.submit_modal().await.is_err());

    let modal = view.modal().unwrap();
    assert_eq!(modal.error.as_deref(), Some("Please enter a reason."));
    assert!(mock.requests().is_empty());
}

#[tokio::test]
async fn test_decided_inquiry_offers_no_win_loss() {
    let mock = MockHttpClient::signed_in(9, "Admin");
    let mut view = view(context(&mock));

    assert!(view.open_win_loss(&inquiry(json!(false), false), true).is_err());
    assert!(view.modal().is_none());
}

#[tokio::test]
async fn test_status_change_patches_row_in_place() {
    let mock = MockHttpClient::signed_in(9, "Admin");
    mock.on(Method::GET, INQUIRY_LIST, list_reply(vec![inquiry_json(Value::Null, false)], 1));
    let mut detail = inquiry_json(Value::Null, false);
    detail["description"] = json!([
        {"description": "first contact"},
        {"description": "sent catalogue"}
    ]);
    mock.on(Method::GET, "/api/inquiry/get/42", MockReply::ok(None, detail));
    mock.on(Method::PUT, "/api/inquiry/update/42", MockReply::ok(None, Value::Null));
    let ctx = context(&mock);
    let notifier = ctx.notifier.clone();
    let mut view = view(ctx);
    view.load().await.unwrap();

    view.open_status_change(42, InquiryStatus::Urgent).await.unwrap();
    let modal = view.modal().unwrap();
    assert_eq!(modal.text, "sent catalogue");
    assert!(matches!(modal.kind, ModalKind::StatusChange { status: InquiryStatus::Urgent, .. }));

    view.set_modal_text("customer needs it this week");
    view.submit_modal().await.unwrap();

    let body = mock.requests_to(Method::PUT, "/api/inquiry/update/42")[0]
        .body
        .clone()
        .unwrap();
    assert_eq!(body["inquiryStatus"], "URGENT");
    assert_eq!(body["updatedBy"], 9);
    assert_eq!(body["productIds"], json!([1]));
    assert_eq!(body["followUpQuotation"], 11);

    assert_eq!(notifier.last().unwrap().message, "Inquiry updated successfully!");
    assert_eq!(view.rows()[0].inquiry_status, InquiryStatus::Urgent);
    assert_eq!(view.rows()[0].latest_description(), "customer needs it this week");
    assert_eq!(mock.count(Method::GET, INQUIRY_LIST), 1);
}

#[tokio::test]
async fn test_quotation_done_hands_back_to_follow_up_user() {
    let mock = MockHttpClient::signed_in(11, "Sales");
    mock.on(Method::PUT, "/api/inquiry/quotation/done/42", MockReply::message(""));
    let ctx = context(&mock);
    let notifier = ctx.notifier.clone();
    let mut view = view(ctx);

    view.open_quotation_done(&inquiry(Value::Null, false)).await.unwrap();
    view.set_modal_text("quote sent");
    view.submit_modal().await.unwrap();

    let body = mock.requests_to(Method::PUT, "/api/inquiry/quotation/done/42")[0]
        .body
        .clone()
        .unwrap();
    assert_eq!(body["assignTo"], 10);
    assert_eq!(body["followUpUser"], 10);
    assert_eq!(body["userId"], 11);
    assert_eq!(body["isQuotationGiven"], true);
    assert_eq!(notifier.last().unwrap().message, "Quotation successful");
}

#[tokio::test]
async fn test_reassign_is_only_for_follow_up_user() {
    let mock = MockHttpClient::signed_in(11, "Sales");
    let mut view = view(context(&mock));

    assert!(view.open_reassign(&inquiry(Value::Null, true)).await.is_err());
    assert!(view.modal().is_none());
}

#[tokio::test]
async fn test_reminder_goes_to_quotation_assignee() {
    let mock = MockHttpClient::signed_in(9, "Admin");
    mock.on(
        Method::POST,
        "/api/reminder/alert",
        MockReply::message("Reminder sent successfully!"),
    );
    let mut view = view(context(&mock));

    view.open_reminder(&inquiry(Value::Null, false)).await.unwrap();
    assert_eq!(view.modal().unwrap().kind, ModalKind::Reminder { target: 11 });
    view.set_modal_text("any update?");
    view.submit_modal().await.unwrap();

    let body = mock.requests_to(Method::POST, "/api/reminder/alert")[0]
        .body
        .clone()
        .unwrap();
    assert_eq!(body["userId"], 11);
    assert_eq!(body["createdBy"], 9);
    assert_eq!(body["reminderQuestion"], "any update?");
    assert!(view.modal().is_none());
}

#[tokio::test]
async fn test_reminder_failure_shows_inline_error() {
    let mock = MockHttpClient::signed_in(9, "Admin");
    mock.on(Method::POST, "/api/reminder/alert", MockReply::status(500, ""));
    let ctx = context(&mock);
    let notifier = ctx.notifier.clone();
    let mut view = view(ctx);

    view.open_reminder(&inquiry(Value::Null, true)).await.unwrap();
    assert_eq!(view.modal().unwrap().kind, ModalKind::Reminder { target: 10 });
    view.set_modal_text("ping");
    assert!(view.submit_modal().await.is_err());

    assert_eq!(
        view.modal().unwrap().error.as_deref(),
        Some("Failed to send reminder")
    );
    assert!(notifier.toasts().is_empty());
}

#[tokio::test]
async fn test_reminders_are_admin_only() {
    let mock = MockHttpClient::signed_in(10, "Sales");
    let mut view = view(context(&mock));

    assert!(view.open_reminder(&inquiry(Value::Null, false)).await.is_err());
    assert!(view.modal().is_none());
}

#[tokio::test]
async fn test_rejected_session_signs_out_on_comment() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    let store = SessionStore::load(&path).unwrap();
    store.sign_in("stale-token", 10, Some("Sales".into())).await.unwrap();
    assert!(path.exists());

    let mock = MockHttpClient::new(store);
    mock.on(Method::POST, "/api/inquiry/adddescription", MockReply::status(401, "Token expired"));
    let mut view = view(context(&mock));
    assert_eq!(view.route().await, Route::Dashboard);

    view.open_description(&inquiry(Value::Null, true)).await.unwrap();
    view.set_modal_text("called the client");
    assert!(view.submit_modal().await.is_err());

    let sent = mock.last_request().unwrap();
    assert_eq!(sent.query.get("isForFollowUpDescription"), Some("true"));
    assert!(view.modal().is_none());
    assert!(!path.exists());
    assert_eq!(view.route().await, Route::SignIn);
}

#[tokio::test]
async fn test_blank_comment_is_refused() {
    let mock = MockHttpClient::signed_in(10, "Sales");
    let ctx = context(&mock);
    let notifier = ctx.notifier.clone();
    let mut view = view(ctx);

    view.open_description(&inquiry(Value::Null, true)).await.unwrap();
    assert_eq!(view.modal().unwrap().text, "first contact");
    view.set_modal_text("  ");
    assert!(view.submit_modal().await.is_err());
    assert_eq!(notifier.last().unwrap().message, "Please enter a description");
    assert!(mock.requests().is_empty());
    assert!(view.modal().is_some());
}

#[tokio::test]
async fn test_delete_refetches_after_confirmation() {
    let mock = MockHttpClient::signed_in(9, "Admin");
    mock.on(Method::DELETE, "/api/inquiry/delete/42", MockReply::message(""));
    let ctx = context(&mock);
    let notifier = ctx.notifier.clone();
    let mut view = view(ctx);

    let mut prompts = Vec::new();
    let deleted = view
        .delete(42, &mut |prompt: &str| {
            prompts.push(prompt.to_string());
            true
        })
        .await
        .unwrap();

    assert!(deleted);
    assert_eq!(prompts, vec!["Are you sure you want to delete this inquiry?"]);
    assert_eq!(notifier.last().unwrap().message, "Inquiry deleted successfully!");
    assert_eq!(mock.count(Method::GET, INQUIRY_LIST), 1);
}

#[tokio::test]
async fn test_export_is_admin_only() {
    let mock = MockHttpClient::signed_in(10, "Sales");
    let dir = tempfile::tempdir().unwrap();

    assert!(export_inquiries(&context(&mock), Some(3), Some(2024), dir.path()).await.is_err());
    assert!(mock.requests().is_empty());
}

#[tokio::test]
async fn test_export_needs_month_and_year() {
    let mock = MockHttpClient::signed_in(9, "Admin");
    let ctx = context(&mock);
    let notifier = ctx.notifier.clone();
    let dir = tempfile::tempdir().unwrap();

    assert!(export_inquiries(&ctx, None, Some(2024), dir.path()).await.is_err());
    assert_eq!(notifier.last().unwrap().message, "Please select both month and year.");
    assert!(mock.requests().is_empty());
}

#[tokio::test]
async fn test_export_saves_spreadsheet() {
    let mock = MockHttpClient::signed_in(9, "Admin");
    mock.on(Method::GET, "/api/inquiry/excel", MockReply::Bytes(b"PK\x03\x04".to_vec()));
    let dir = tempfile::tempdir().unwrap();

    let path = export_inquiries(&context(&mock), Some(3), Some(2024), dir.path())
        .await
        .unwrap();

    assert_eq!(path, dir.path().join("inquiry_3_2024.xlsx"));
    assert_eq!(std::fs::read(&path).unwrap(), b"PK\x03\x04");
    let sent = mock.last_request().unwrap();
    assert_eq!(sent.query.get("month"), Some("3"));
    assert_eq!(sent.query.get("year"), Some("2024"));
}

#[tokio::test]
async fn test_unanswered_reminder_row_still_loads() {
    let mock = MockHttpClient::signed_in(9, "Admin");
    let mut row = inquiry_json(Value::Null, false);
    row["reminder"] = json!(true);
    row["reminderData"] = json!({
        "inquiryReminderId": 5,
        "inquiryId": 42,
        "projectName": "Riverside Mall",
        "inquiryStatus": "TENDER",
        "reminderQuestion": "any update?",
        "reminderAnswer": null,
        "createrName": "Admin",
        "createdAt": "2024-03-05T10:20:30",
        "userIdName": null
    });
    mock.on(Method::GET, INQUIRY_LIST, list_reply(vec![row], 1));
    let mut view = view(context(&mock));

    view.load().await.unwrap();

    assert_eq!(view.rows().len(), 1);
    let reminder = view.rows()[0].reminder_data.clone().unwrap();
    assert!(!reminder.is_answered());
    let row = view.table().await.remove(0);
    assert!(row.actions.highlighted);
    assert!(row.actions.view_reminder_response);
}

#[tokio::test]
async fn test_delete_on_vanished_last_page_fetches_previous_page() {
    let mock = MockHttpClient::signed_in(9, "Admin");
    mock.on(Method::GET, INQUIRY_LIST, list_reply(vec![inquiry_json(Value::Null, false)], 2))
        .on(Method::GET, INQUIRY_LIST, list_reply(vec![inquiry_json(Value::Null, false)], 2))
        .on(Method::GET, INQUIRY_LIST, list_reply(Vec::new(), 1))
        .on(Method::GET, INQUIRY_LIST, list_reply(vec![inquiry_json(Value::Null, false)], 1));
    mock.on(Method::DELETE, "/api/inquiry/delete/42", MockReply::message(""));
    let mut view = view(context(&mock));
    view.load().await.unwrap();
    view.go_to_page(2).await.unwrap();

    assert!(view.delete(42, &mut |_: &str| true).await.unwrap());

    let fetches = mock.requests_to(Method::GET, INQUIRY_LIST);
    assert_eq!(fetches.len(), 4);
    assert_eq!(fetches[2].query.get("page"), Some("2"));
    assert_eq!(fetches[3].query.get("page"), Some("1"));
    assert_eq!(view.pager().page(), 1);
    assert_eq!(view.rows().len(), 1);
}

#[tokio::test]
async fn test_reassign_sends_back_to_quotation_assignee() {
    let mock = MockHttpClient::signed_in(10, "Sales");
    mock.on(
        Method::PUT,
        "/api/inquiry/quotation/reassing/42",
        MockReply::message(""),
    );
    mock.on(Method::GET, INQUIRY_LIST, list_reply(vec![inquiry_json(Value::Null, false)], 1));
    let ctx = context(&mock);
    let notifier = ctx.notifier.clone();
    let mut view = view(ctx);

    view.open_reassign(&inquiry(Value::Null, true)).await.unwrap();
    assert_eq!(view.modal().unwrap().text, "first contact");
    view.set_modal_text("customer changed the spec");
    view.submit_modal().await.unwrap();

    let body = mock.requests_to(Method::PUT, "/api/inquiry/quotation/reassing/42")[0]
        .body
        .clone()
        .unwrap();
    assert_eq!(body["assignTo"], 11);
    assert_eq!(body["followUpQuotation"], 11);
    assert_eq!(body["userId"], 10);
    assert_eq!(body["isQuotationGiven"], false);
    assert_eq!(body["description"], "customer changed the spec");
    assert_eq!(notifier.last().unwrap().message, "Follow-up reassigned successfully");
    assert!(view.modal().is_none());
    assert_eq!(mock.count(Method::GET, INQUIRY_LIST), 1);
}

#[tokio::test]
async fn test_new_consumer_refreshes_consumer_options() {
    let mock = MockHttpClient::signed_in(9, "Admin");
    mock.on(Method::POST, "/api/consumer/save", MockReply::message("Consumer added"));
    mock.on(
        Method::GET,
        "/api/consumer/all",
        MockReply::ok(
            None,
            json!({"consumers": [{"consumerId": 3, "consumerName": "Acme"}]}),
        ),
    );
    let ctx = context(&mock);
    let notifier = ctx.notifier.clone();
    let mut view = view(ctx);

    view.consumer_form.consumer_name = "  ".into();
    assert!(view.save_consumer().await.is_err());
    assert!(mock.requests().is_empty());
    assert_eq!(notifier.last().unwrap().message, "Consumer Name is required.");

    view.consumer_form.consumer_name = " Acme ".into();
    view.save_consumer().await.unwrap();

    let saved = mock.requests_to(Method::POST, "/api/consumer/save");
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].body.as_ref().unwrap()["consumerName"], "Acme");
    assert_eq!(mock.count(Method::GET, "/api/consumer/all"), 1);
    assert_eq!(view.options().consumers, vec![SelectOption::new(3, "Acme")]);
    assert_eq!(view.consumer_form.consumer_name, "");
    assert_eq!(notifier.last().unwrap().message, "Consumer added");
}

#[tokio::test]
async fn test_new_consultant_refreshes_consultant_options() {
    let mock = MockHttpClient::signed_in(9, "Admin");
    mock.on(
        Method::GET,
        "/api/consultant/all",
        MockReply::ok(
            None,
            json!({"Consultants": [{"consultantId": 5, "consultantName": "Lee"}]}),
        ),
    );
    let mut view = view(context(&mock));

    view.consultant_form.consultant_name = "Lee".into();
    view.consultant_form.contact_person = "Kim".into();
    view.consultant_form.contact_number = "555-0100".into();
    view.save_consultant().await.unwrap();

    let body = mock.requests_to(Method::POST, "/api/consultant/save")[0]
        .body
        .clone()
        .unwrap();
    assert_eq!(body["createdBy"]["id"], 9);
    assert_eq!(view.options().consultants, vec![SelectOption::new(5, "Lee")]);
}

#[tokio::test]
async fn test_new_user_with_role_from_role_list() {
    let mock = MockHttpClient::signed_in(9, "Admin");
    mock.on(
        Method::GET,
        "/api/roles/list",
        MockReply::ok(None, json!({"roles": [{"Id": 2, "name": " Sales "}]})),
    );
    mock.on(
        Method::GET,
        "/api/user/list",
        MockReply::ok(None, json!({"list": [{"id": 12, "name": "Mira"}]})),
    );
    let mut view = view(context(&mock));

    view.load_roles().await;
    assert_eq!(view.options().roles[0].name, "Sales");

    view.user_form.name = "Mira".into();
    view.user_form.email = "mira@example.com".into();
    view.user_form.role_id = Some(view.options().roles[0].id);
    view.save_user().await.unwrap();

    let body = mock.requests_to(Method::POST, "/api/user/signup")[0]
        .body
        .clone()
        .unwrap();
    assert_eq!(body["role"]["id"], 2);
    assert!(body.get("password").is_none());
    assert_eq!(view.options().users, vec![SelectOption::new(12, "Mira")]);
}

#[tokio::test]
async fn test_new_product_reloads_options_for_selected_brands() {
    let mock = MockHttpClient::signed_in(9, "Admin");
    mock.on(
        Method::GET,
        "/api/product/listByBrands",
        MockReply::ok(None, json!([{"productId": 1, "productName": "Pump"}])),
    )
    .on(
        Method::GET,
        "/api/product/listByBrands",
        MockReply::ok(
            None,
            json!([
                {"productId": 1, "productName": "Pump"},
                {"productId": 4, "productName": "Filter", "price": 15}
            ]),
        ),
    );
    let mut view = view(context(&mock));
    view.open_create();
    view.select_brands(vec![SelectOption::new(7, "Grundfos")]).await.unwrap();

    view.product_form.name = "Filter".into();
    view.product_form.price = "15".into();
    view.product_form.brand_id = Some(7);
    view.save_product().await.unwrap();

    assert_eq!(mock.count(Method::POST, "/api/product/create"), 1);
    assert_eq!(mock.count(Method::GET, "/api/product/listByBrands"), 2);
    assert_eq!(view.form.product_options[1], SelectOption::new(4, "Filter - $15"));
}

#[tokio::test]
async fn test_product_search_is_scoped_to_selected_brands() {
    let mock = MockHttpClient::signed_in(9, "Admin");
    mock.on(
        Method::GET,
        "/api/product/listByBrands",
        MockReply::ok(
            None,
            json!([
                {"productId": 1, "productName": "Pump"},
                {"productId": 2, "productName": "Pump Seal"}
            ]),
        ),
    );
    let mut view = view(context(&mock));
    view.open_create();
    view.select_brands(vec![SelectOption::new(7, "Grundfos")]).await.unwrap();

    view.search_products("pump").await.unwrap();
    let sent = mock.last_request().unwrap();
    assert_eq!(sent.query.get("brandIds"), Some("7"));
    assert_eq!(sent.query.get("search"), Some("pump"));
    assert_eq!(sent.query.get("page"), Some("1"));
    assert_eq!(sent.query.get("size"), Some("10"));

    let picked = view.form.product_options[1..].to_vec();
    view.select_products(&picked);
    assert_eq!(view.form.products, vec![2]);
}
