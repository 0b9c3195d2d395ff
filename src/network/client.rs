//! Gemini API client - builds generateContent calls and decodes replies

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::config::GeminiConfig;
use crate::messages::NetworkResponse;
use crate::models::PromptRequest;
use crate::prompt;

const X_GOOG_API_KEY: &str = "x-goog-api-key";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    system_instruction: Content,
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: Option<ErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Build the generateContent body from the form parameters
fn build_body(request: &PromptRequest) -> GenerateContentRequest {
    GenerateContentRequest {
        system_instruction: Content {
            role: None,
            parts: vec![Part { text: String::from(prompt::SYSTEM_INSTRUCTION) }],
        },
        contents: vec![Content {
            role: Some(String::from("user")),
            parts: vec![Part { text: prompt::assemble(request) }],
        }],
        generation_config: GenerationConfig { temperature: 0.8 },
    }
}

/// Pull the nested Google error message out of a non-2xx body
fn extract_api_error(body: &str) -> Option<String> {
    let envelope: ErrorEnvelope = serde_json::from_str(body).ok()?;
    let message = envelope.error?.message?;
    let message = message.trim();
    if message.is_empty() {
        None
    } else {
        Some(message.to_string())
    }
}

/// Concatenate the text parts of the first candidate
fn extract_text(reply: &GenerateContentResponse) -> Option<String> {
    let content = reply.candidates.first()?.content.as_ref()?;
    let text: String = content.parts.iter().map(|p| p.text.as_str()).collect();
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

fn decode_reply(body: &str, request_id: u64, elapsed: u64) -> NetworkResponse {
    let reply: GenerateContentResponse = match serde_json::from_str(body) {
        Ok(reply) => reply,
        Err(e) => {
            return NetworkResponse::Failed {
                id: request_id,
                message: format!("Error decoding response: {}", e),
                time_ms: elapsed,
            }
        }
    };

    if let Some(reason) = reply
        .prompt_feedback
        .as_ref()
        .and_then(|feedback| feedback.block_reason.as_deref())
    {
        return NetworkResponse::Failed {
            id: request_id,
            message: format!("Prompt was blocked by the service ({})", reason),
            time_ms: elapsed,
        };
    }

    match extract_text(&reply) {
        Some(text) => NetworkResponse::Completed { id: request_id, text, time_ms: elapsed },
        None => NetworkResponse::Failed {
            id: request_id,
            message: String::from("The service returned an empty reply. Please try again."),
            time_ms: elapsed,
        },
    }
}

/// Execute one generation call and map the outcome to a response message
pub async fn execute_generate(
    client: &reqwest::Client,
    config: &GeminiConfig,
    request: PromptRequest,
    request_id: u64,
) -> NetworkResponse {
    let start = Instant::now();
    let body = build_body(&request);

    let result = client
        .post(config.endpoint())
        .header(X_GOOG_API_KEY, &config.api_key)
        .json(&body)
        .send()
        .await;
    let elapsed = start.elapsed().as_millis() as u64;

    match result {
        Ok(resp) => {
            let status = resp.status();
            match resp.text().await {
                Ok(text) => {
                    if status.is_success() {
                        decode_reply(&text, request_id, elapsed)
                    } else {
                        let message = extract_api_error(&text)
                            .unwrap_or_else(|| format!("API error ({})", status.as_u16()));
                        NetworkResponse::Failed { id: request_id, message, time_ms: elapsed }
                    }
                }
                Err(e) => NetworkResponse::Failed {
                    id: request_id,
                    message: format!("Error reading body: {}", e),
                    time_ms: elapsed,
                },
            }
        }
        Err(e) => {
            let message = if e.is_connect() {
                format!("Connection failed: {}", e)
            } else {
                format!("Request failed: {}", e)
            };
            NetworkResponse::Failed { id: request_id, message, time_ms: elapsed }
        }
    }
}

/// Create an HTTP client with default configuration
///
/// No request timeout is set: a stalled generation keeps the loading state
/// up until the connection resolves or drops, and quitting stays available
/// from the UI loop.
pub fn create_client() -> reqwest::Client {
    reqwest::Client::builder()
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}
