// nico-dashboard/tests/cli.rs
// `nico-admin` commands run against the mock client

use clap::Parser;
use nico_client::mock::{Method, MockHttpClient, MockReply};
use nico_client::{NicoApi, Session, SessionStore};
use nico_dashboard::cli::{self, Cli};
use nico_dashboard::{DashboardConfig, Notifier};
use serde_json::json;

async fn run(mock: &MockHttpClient, args: &[&str]) -> (anyhow::Result<()>, String, Notifier) {
    let cli = Cli::try_parse_from(std::iter::once("nico-admin").chain(args.iter().copied())).unwrap();
    let notifier = Notifier::new();
    let mut out = Vec::new();
    let result = cli::run(
        cli.command,
        NicoApi::new(mock.clone()),
        notifier.clone(),
        &DashboardConfig::default(),
        cli.yes,
        &mut out,
    )
    .await;
    (result, String::from_utf8(out).unwrap(), notifier)
}

#[tokio::test]
async fn test_brand_list_prints_rows_and_footer() {
    let mock = MockHttpClient::signed_in(9, "Admin");
    mock.on(
        Method::GET,
        "/api/brand/list",
        MockReply::ok(
            None,
            json!({
                "brands": [{"brandId": 3, "brandName": "Grundfos"}],
                "totalPages": 1,
                "totalItems": 1
            }),
        ),
    );

    let (result, out, _) = run(&mock, &["brand", "list", "--size", "25", "--search", "gru"]).await;
    result.unwrap();

    assert!(out.contains("     3  Grundfos"));
    assert!(out.contains("Showing 1 to 1 of 1 results  (page 1 of 1)"));
    let sent = mock.last_request().unwrap();
    assert_eq!(sent.query.get("size"), Some("25"));
    assert_eq!(sent.query.get("search"), Some("gru"));
}

#[tokio::test]
async fn test_signed_out_commands_are_refused() {
    let mock = MockHttpClient::new(SessionStore::in_memory(Session::default()));

    let (result, _, _) = run(&mock, &["brand", "list"]).await;
    assert!(result.is_err());
    assert!(mock.requests().is_empty());

    let (result, out, _) = run(&mock, &["session", "show"]).await;
    result.unwrap();
    assert_eq!(out.trim(), "signed out");
}

#[tokio::test]
async fn test_yes_flag_skips_the_prompt() {
    let mock = MockHttpClient::signed_in(9, "Admin");
    mock.on(Method::DELETE, "/api/brand/delete/3", MockReply::message("Brand removed"));

    let (result, _, notifier) = run(&mock, &["brand", "delete", "3", "--yes"]).await;
    result.unwrap();

    assert_eq!(mock.count(Method::DELETE, "/api/brand/delete/3"), 1);
    assert_eq!(notifier.last().unwrap().message, "Brand removed");
}
