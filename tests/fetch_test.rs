use std::time::Duration;

use aa_leaderboard::fetch::FetchClient;
use aa_leaderboard::Error;
use wiremock::matchers::{header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn retries_server_errors_until_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/leaderboard"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(2)
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/leaderboard"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<table></table>"))
        .expect(1)
        .mount(&server)
        .await;

    let client = FetchClient::new(Duration::from_secs(5));
    let url = format!("{}/leaderboard", server.uri());
    let result = client.fetch_html(&url, 3, Duration::ZERO).await;
    match result {
        Ok(body) => assert_eq!(body, "<table></table>"),
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[tokio::test]
async fn gives_up_after_the_configured_retries() {
    let server = MockServer::start().await;

    // Initial attempt plus two retries
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .expect(3)
        .mount(&server)
        .await;

    let client = FetchClient::new(Duration::from_secs(5));
    let result = client.fetch_html(&server.uri(), 2, Duration::ZERO).await;
    match result {
        Err(Error::Fetch(message)) => assert!(message.contains("3 attempts")),
        other => panic!("expected Err(Fetch(_)), got {other:?}"),
    }
}

#[tokio::test]
async fn sends_a_browser_user_agent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(header_exists("user-agent"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&server)
        .await;

    let client = FetchClient::new(Duration::from_secs(5));
    let body = client
        .fetch_html(&server.uri(), 0, Duration::ZERO)
        .await
        .expect("fetch failed");
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn follows_redirects() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/start"))
        .respond_with(
            ResponseTemplate::new(302).insert_header("Location", format!("{}/end", server.uri())),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/end"))
        .respond_with(ResponseTemplate::new(200).set_body_string("landed"))
        .mount(&server)
        .await;

    let client = FetchClient::new(Duration::from_secs(5));
    let url = format!("{}/start", server.uri());
    let body = client
        .fetch_html(&url, 0, Duration::ZERO)
        .await
        .expect("fetch failed");
    assert_eq!(body, "landed");
}
