use httpmock::prelude::HttpMockRequest;
use httpmock::Method::POST;
use httpmock::MockServer;
use characterize::{OllamaReasoner, Reasoner, ReasonerOptions};

fn body_has_prompt_and_temperature(req: &HttpMockRequest) -> bool {
    req.body
        .as_ref()
        .map(|b| {
            let body = std::str::from_utf8(b).unwrap_or_default();
            body.contains("'chat', 'robe'") && body.contains("temperature")
        })
        .unwrap_or(false)
}

#[tokio::test]
async fn relays_the_chat_reply_text() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/chat")
            .matches(body_has_prompt_and_temperature);
        then.status(200)
            .header("content-type", "application/json")
            .body(
                r#"{"model":"aya-expanse:32B","created_at":"now","message":{"role":"assistant","content":"['m', 'f']"},"done":true}"#,
            );
    });

    let client = ollama_rs::Ollama::new(format!("http://{}", server.host()), server.port());
    let reasoner = OllamaReasoner::new(client);
    let prompt = characterize::gender_prompt(&["chat", "robe"]);
    let reply = reasoner
        .chat("aya-expanse:32B", &prompt, &ReasonerOptions { temperature: 0.8 })
        .await
        .unwrap();
    mock.assert();
    assert_eq!(reply, "['m', 'f']");
}
