mod fixture;

use fixture::{modem_client, mount_session};
use hilinkd::client::paths;
use hilinkd::control;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_post(server: &MockServer, api_path: &str) {
    Mock::given(method("POST"))
        .and(path(api_path))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            "<response>OK</response>",
            "text/xml",
        ))
        .mount(server)
        .await;
}

#[tokio::test]
async fn it_posts_the_dataswitch_payloads() {
    let server = MockServer::start().await;
    mount_session(&server).await;
    mount_post(&server, paths::MOBILE_DATASWITCH).await;
    let client = modem_client(&server);

    control::connect(&client).await.expect("connect failed");
    control::disconnect(&client).await.expect("disconnect failed");

    let requests = server.received_requests().await.unwrap();
    let bodies: Vec<String> = requests
        .iter()
        .filter(|r| r.url.path() == paths::MOBILE_DATASWITCH)
        .map(|r| String::from_utf8_lossy(&r.body).into_owned())
        .collect();

    assert_eq!(bodies.len(), 2);
    assert!(bodies[0].contains("<dataswitch>1</dataswitch>"));
    assert!(bodies[1].contains("<dataswitch>0</dataswitch>"));
}

#[tokio::test]
async fn it_posts_the_reboot_control_payload() {
    let server = MockServer::start().await;
    mount_session(&server).await;
    Mock::given(method("POST"))
        .and(path(paths::DEVICE_CONTROL))
        .and(body_string_contains("<Control>1</Control>"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    control::reboot(&modem_client(&server))
        .await
        .expect("reboot failed");
}

#[tokio::test]
async fn it_sends_a_fresh_session_with_every_command() {
    let server = MockServer::start().await;
    mount_session(&server).await;
    mount_post(&server, paths::MOBILE_DATASWITCH).await;
    let client = modem_client(&server);

    control::connect(&client).await.expect("connect failed");

    let requests = server.received_requests().await.unwrap();
    let post = requests
        .iter()
        .find(|r| r.url.path() == paths::MOBILE_DATASWITCH)
        .expect("no dataswitch POST");

    assert_eq!(
        post.headers.get("Cookie").and_then(|v| v.to_str().ok()),
        Some("SessionID=abc123")
    );
    assert_eq!(
        post.headers
            .get("__RequestVerificationToken")
            .and_then(|v| v.to_str().ok()),
        Some("token456")
    );

    // the command triggered its own token refresh first
    assert!(requests
        .iter()
        .any(|r| r.url.path() == paths::SES_TOK_INFO));
}

#[tokio::test]
async fn it_reports_failure_when_the_control_endpoint_rejects_the_post() {
    let server = MockServer::start().await;
    mount_session(&server).await;
    Mock::given(method("POST"))
        .and(path(paths::DEVICE_CONTROL))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let result = control::reboot(&modem_client(&server)).await;

    assert!(result.is_err());
}
