use super::client::{GenerationRequest, TextGenerator};
use super::config::ServiceConfig;
use super::error::ServiceError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, warn};

const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: [Content<'a>; 1],
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: [TextPart<'a>; 1],
}

#[derive(Debug, Serialize)]
struct TextPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'static str,
    response_schema: &'a Value,
}

#[derive(Debug, Default, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate; empty if there is none.
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Client for the Generative Language `generateContent` endpoint.
pub struct GeminiClient {
    http: reqwest::Client,
    url: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl GeminiClient {
    pub fn new(config: &ServiceConfig) -> Result<Self, ServiceError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ServiceError::Transport(e.to_string()))?;
        Ok(Self {
            http,
            url: format!("{}/models/{}:generateContent", config.endpoint, config.model),
            api_key: config.api_key.clone(),
            timeout: config.timeout,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn map_send_error(&self, err: reqwest::Error) -> ServiceError {
        if err.is_timeout() {
            ServiceError::Timeout(self.timeout)
        } else {
            ServiceError::Transport(err.to_string())
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn generate(&self, request: GenerationRequest<'_>) -> Result<String, ServiceError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ServiceError::MissingCredential)?;

        let body = GenerateContentRequest {
            contents: [Content {
                role: "user",
                parts: [TextPart {
                    text: request.prompt,
                }],
            }],
            generation_config: request.schema.map(|schema| GenerationConfig {
                response_mime_type: "application/json",
                response_schema: schema,
            }),
        };

        info!(url = %self.url, structured = request.schema.is_some(), "Sending generateContent request");
        let response = self
            .http
            .post(&self.url)
            .header(API_KEY_HEADER, api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        let response = response.error_for_status().map_err(|e| {
            warn!(%status, "generateContent returned an error status");
            ServiceError::Transport(e.to_string())
        })?;

        let envelope: GenerateContentResponse =
            response.json().await.map_err(|e| self.map_send_error(e))?;
        let text = envelope.text();
        debug!(chars = text.chars().count(), "Received model text");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::ServiceConfigBuilder;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer, api_key: Option<&str>, timeout: Duration) -> GeminiClient {
        let config = ServiceConfigBuilder::new()
            .endpoint(server.uri())
            .model("gemini-2.5-flash")
            .api_key(api_key.map(str::to_string))
            .timeout(timeout)
            .build()
            .unwrap();
        GeminiClient::new(&config).unwrap()
    }

    fn candidate(parts: Value) -> Value {
        json!({ "candidates": [{ "content": { "role": "model", "parts": parts } }] })
    }

    #[test]
    fn envelope_text_concatenates_parts_of_first_candidate() {
        let envelope: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [
                { "content": { "parts": [{ "text": "a" }, { "inlineData": {} }, { "text": "b" }] } },
                { "content": { "parts": [{ "text": "ignored" }] } }
            ]
        }))
        .unwrap();
        assert_eq!(envelope.text(), "ab");

        let empty: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(empty.text(), "");
    }

    #[test]
    fn request_body_uses_camel_case_generation_config() {
        let schema = json!({ "type": "OBJECT" });
        let body = GenerateContentRequest {
            contents: [Content {
                role: "user",
                parts: [TextPart { text: "hi" }],
            }],
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json",
                response_schema: &schema,
            }),
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["contents"][0]["parts"][0]["text"], "hi");
        assert_eq!(value["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(value["generationConfig"]["responseSchema"]["type"], "OBJECT");
    }

    #[tokio::test]
    async fn generate_posts_prompt_with_api_key_header() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/models/gemini-2.5-flash:generateContent"))
            .and(header("x-goog-api-key", "test-key"))
            .and(body_partial_json(json!({
                "contents": [{ "role": "user", "parts": [{ "text": "解释乙烯" }] }]
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(candidate(json!([
                    { "text": "**π 键** " },
                    { "text": "容易断裂。" }
                ]))),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, Some("test-key"), Duration::from_secs(5));
        assert!(client.is_configured());
        let text = client
            .generate(GenerationRequest::text("解释乙烯"))
            .await
            .unwrap();
        assert_eq!(text, "**π 键** 容易断裂。");
    }

    #[tokio::test]
    async fn generate_sends_schema_for_structured_requests() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({
                "generationConfig": {
                    "responseMimeType": "application/json",
                    "responseSchema": { "type": "OBJECT" }
                }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(candidate(json!([
                { "text": "{}" }
            ]))))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, Some("k"), Duration::from_secs(5));
        let schema = json!({ "type": "OBJECT" });
        let text = client
            .generate(GenerationRequest::json("quiz", &schema))
            .await
            .unwrap();
        assert_eq!(text, "{}");
    }

    #[tokio::test]
    async fn missing_credential_sends_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = client_for(&server, None, Duration::from_secs(5));
        assert!(!client.is_configured());
        let err = client
            .generate(GenerationRequest::text("x"))
            .await
            .unwrap_err();
        assert_eq!(err, ServiceError::MissingCredential);
    }

    #[tokio::test]
    async fn error_status_maps_to_transport_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
            .mount(&server)
            .await;

        let client = client_for(&server, Some("k"), Duration::from_secs(5));
        let err = client
            .generate(GenerationRequest::text("x"))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Transport(_)));
    }

    #[tokio::test]
    async fn undecodable_envelope_maps_to_transport_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let client = client_for(&server, Some("k"), Duration::from_secs(5));
        let err = client
            .generate(GenerationRequest::text("x"))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Transport(_)));
    }

    #[tokio::test]
    async fn slow_response_maps_to_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(candidate(json!([{ "text": "late" }])))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let timeout = Duration::from_millis(50);
        let client = client_for(&server, Some("k"), timeout);
        let err = client
            .generate(GenerationRequest::text("x"))
            .await
            .unwrap_err();
        assert_eq!(err, ServiceError::Timeout(timeout));
    }
}
