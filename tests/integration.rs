use course_generator::{
    ai::MockContentClient,
    app::App,
    models::GenerateReply,
    presenter::{
        HttpGenerateApi, PageView, Presenter, Status, View, DONE_MESSAGE, VALIDATION_MESSAGE,
    },
};
use pretty_assertions::assert_eq;
use std::sync::Arc;

/// Start a server backed by `service` on an ephemeral port; returns its base URL.
async fn spawn_server(service: MockContentClient) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = App::with_service(Arc::new(service), addr);

    tokio::spawn(async move {
        app.serve(listener).await.unwrap();
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn test_presenter_renders_outline_from_server() {
    let service =
        MockContentClient::new().with_response("**Intro**\n- point one\n1. step one\nplain line");
    let base_url = spawn_server(service.clone()).await;

    let view = PageView::new().with_title("  Distributed Systems ");
    let mut presenter = Presenter::new(view, HttpGenerateApi::new(&base_url));

    assert_eq!(presenter.generate().await, Status::Success);

    let view = presenter.view();
    assert_eq!(view.status(), DONE_MESSAGE);
    assert!(view.is_trigger_enabled());
    assert!(view.results().contains(concat!(
        "<h2 class='text-xl font-semibold mt-6 mb-2 text-indigo-800'>Intro</h2>",
        "<li class='text-gray-700'>point one</li>",
        "<li class='text-gray-700'>step one</li>",
        "<br/>plain line"
    )));
    assert_eq!(service.get_titles(), vec!["Distributed Systems".to_string()]);
}

#[tokio::test]
async fn test_presenter_surfaces_backend_failure() {
    let base_url = spawn_server(MockContentClient::new().with_failure("quota exceeded")).await;

    let mut presenter = Presenter::new(
        PageView::new().with_title("Rust"),
        HttpGenerateApi::new(&base_url),
    );

    let status = presenter.generate().await;

    assert_eq!(
        status,
        Status::ServerError("AI provider error: quota exceeded".to_string())
    );
    assert_eq!(presenter.view().results(), "");
    assert!(presenter.view().is_trigger_enabled());
}

#[tokio::test]
async fn test_blank_title_never_reaches_server() {
    let service = MockContentClient::new();
    let base_url = spawn_server(service.clone()).await;

    let mut presenter = Presenter::new(
        PageView::new().with_title("   "),
        HttpGenerateApi::new(&base_url),
    );

    assert_eq!(presenter.generate().await, Status::ValidationFailed);
    assert_eq!(presenter.view().status(), VALIDATION_MESSAGE);
    assert_eq!(service.get_call_count(), 0);
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let mut presenter = Presenter::new(
        PageView::new().with_title("Rust"),
        HttpGenerateApi::new(&format!("http://{}", addr)),
    );

    match presenter.generate().await {
        Status::NetworkFailure(message) => assert!(message.starts_with("Network error: ")),
        other => panic!("unexpected status: {:?}", other),
    }
    assert!(presenter.view().is_trigger_enabled());
    assert!(!presenter.view().is_pulsing());
}

#[tokio::test]
async fn test_clear_after_generation() {
    let base_url = spawn_server(MockContentClient::new()).await;
    let mut presenter = Presenter::new(
        PageView::new().with_title("Biology"),
        HttpGenerateApi::new(&base_url),
    );
    presenter.generate().await;
    assert!(!presenter.view().results().is_empty());

    presenter.clear();

    let view = presenter.view();
    assert_eq!(view.title(), "");
    assert_eq!(view.status(), "");
    assert_eq!(view.results(), "");
}

#[tokio::test]
async fn test_api_generate_json_contract() {
    let base_url = spawn_server(MockContentClient::new().with_response("**Week 1**")).await;
    let client = reqwest::Client::new();

    let ok = client
        .post(format!("{}/api/generate", base_url))
        .json(&serde_json::json!({ "title": "Chemistry" }))
        .send()
        .await
        .unwrap();
    assert_eq!(ok.status().as_u16(), 200);
    assert_eq!(
        ok.json::<GenerateReply>().await.unwrap(),
        GenerateReply::content("Chemistry", "**Week 1**")
    );

    let rejected = client
        .post(format!("{}/api/generate", base_url))
        .json(&serde_json::json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(rejected.status().as_u16(), 400);
    assert_eq!(
        rejected.json::<serde_json::Value>().await.unwrap(),
        serde_json::json!({ "error": "Course title is required." })
    );

    let health = client
        .get(format!("{}/health", base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(
        health.json::<serde_json::Value>().await.unwrap(),
        serde_json::json!({ "status": "ok" })
    );
}
