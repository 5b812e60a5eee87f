use mockito::Server;

use release_check::config::CheckerConfig;
use release_check::update::checker::{CheckOutcome, UpdateChecker};
use release_check::update::error::UpdateError;

fn checker_for(server: &Server) -> UpdateChecker {
    UpdateChecker::new(&CheckerConfig {
        api_base_url: server.url(),
        ..Default::default()
    })
}

#[tokio::test]
async fn outdated_local_version_reports_the_new_tag() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/repos/skanehira/version-lsp/releases/latest")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "tag_name": "v0.5.1",
                "name": "v0.5.1",
                "prerelease": false,
                "published_at": "2025-06-01T00:00:00Z"
            }"#,
        )
        .expect(2)
        .create_async()
        .await;

    let checker = checker_for(&server);
    let outcome = checker
        .check("v0.5.0", "https://github.com/skanehira/version-lsp")
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(
        outcome,
        CheckOutcome {
            update_available: true,
            remote_version: "v0.5.1".to_string(),
        }
    );
}

#[tokio::test]
async fn trailing_slash_in_repo_url_hits_the_same_endpoint() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/repos/Owner/Repo/releases/latest")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"tag_name": "v1.0.0"}"#)
        .expect(2)
        .create_async()
        .await;

    let checker = checker_for(&server);
    let outcome = checker
        .check("v1.0.0", "https://github.com/Owner/Repo/")
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(!outcome.update_available);
    assert_eq!(outcome.remote_version, "v1.0.0");
}

#[tokio::test]
async fn server_error_during_probe_is_reported_as_nothing_to_check() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/repos/Owner/Repo/releases/latest")
        .with_status(500)
        .with_body("internal error")
        .expect(1)
        .create_async()
        .await;

    let checker = checker_for(&server);
    let outcome = checker
        .check("v1.0.0", "https://github.com/Owner/Repo")
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(
        outcome,
        CheckOutcome {
            update_available: false,
            remote_version: String::new(),
        }
    );
}

#[tokio::test]
async fn repository_without_releases_surfaces_not_found() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/repos/Owner/Repo/releases/latest")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message": "no releases yet"}"#)
        .expect(2)
        .create_async()
        .await;

    let checker = checker_for(&server);
    let result = checker.check("v1.0.0", "https://github.com/Owner/Repo").await;

    mock.assert_async().await;
    assert!(matches!(result, Err(UpdateError::NotFound)));
}
