use std::sync::{Arc, Mutex};

use bytes::Bytes;
use serde_json::{Value, json};

use docchat::application::ports::{InferenceEndpoint, InferenceError};
use docchat::application::services::InferenceClient;

struct RecordingEndpoint {
    reply: Result<&'static str, &'static str>,
    requests: Mutex<Vec<Value>>,
}

impl RecordingEndpoint {
    fn replying(reply: &'static str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(reply),
            requests: Mutex::new(Vec::new()),
        })
    }

    fn failing(error: &'static str) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(error),
            requests: Mutex::new(Vec::new()),
        })
    }

    fn last_request(&self) -> Value {
        self.requests.lock().unwrap().last().cloned().unwrap()
    }
}

#[async_trait::async_trait]
impl InferenceEndpoint for RecordingEndpoint {
    async fn invoke(&self, body: Bytes) -> Result<Bytes, InferenceError> {
        self.requests
            .lock()
            .unwrap()
            .push(serde_json::from_slice(&body).unwrap());
        match self.reply {
            Ok(reply) => Ok(Bytes::from_static(reply.as_bytes())),
            Err(error) => Err(InferenceError::RequestFailed(error.to_string())),
        }
    }
}

#[tokio::test]
async fn given_plain_chat_when_completing_then_payload_has_no_documents_field() {
    let endpoint = RecordingEndpoint::replying(r#"{"generated_text": "hello"}"#);
    let client = InferenceClient::new(endpoint.clone());

    client.complete_chat("hi", None).await.unwrap();

    let request = endpoint.last_request();
    assert_eq!(
        request,
        json!({
            "inputs": "hi",
            "parameters": {"max_new_tokens": 500, "temperature": 0.7}
        })
    );
}

#[tokio::test]
async fn given_documents_when_completing_then_payload_carries_them_in_order() {
    let endpoint = RecordingEndpoint::replying(r#"{"generated_text": "ok"}"#);
    let client = InferenceClient::new(endpoint.clone());

    client
        .complete_chat("compare", Some(vec!["one".into(), "two".into()]))
        .await
        .unwrap();

    assert_eq!(endpoint.last_request()["documents"], json!(["one", "two"]));
}

#[tokio::test]
async fn given_endpoint_json_when_completing_then_returns_it_unchanged() {
    let endpoint =
        RecordingEndpoint::replying(r#"[{"generated_text": "hello", "details": {"tokens": 3}}]"#);
    let client = InferenceClient::new(endpoint);

    let response = client.complete_chat("hi", None).await.unwrap();

    assert_eq!(
        response,
        json!([{"generated_text": "hello", "details": {"tokens": 3}}])
    );
}

#[tokio::test]
async fn given_transport_failure_when_completing_then_error_keeps_original_text() {
    let endpoint = RecordingEndpoint::failing("connection refused");
    let client = InferenceClient::new(endpoint);

    let result = client.complete_chat("hi", None).await;

    match result {
        Err(InferenceError::RequestFailed(message)) => {
            assert!(message.contains("connection refused"))
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[tokio::test]
async fn given_non_json_response_when_completing_then_returns_invalid_response() {
    let endpoint = RecordingEndpoint::replying("<html>gateway timeout</html>");
    let client = InferenceClient::new(endpoint);

    let result = client.complete_chat("hi", None).await;

    assert!(matches!(result, Err(InferenceError::InvalidResponse(_))));
}
