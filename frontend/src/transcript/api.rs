use crate::env_variable_utils::BACKEND_URL;
use crate::models::{
    ChatRequest, ChatResponse, ErrorResponse, SummaryResponse, TranscriptRequest,
    TranscriptResponse,
};
use crate::transcript::error::ApiError;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub const TRANSCRIPT_FALLBACK: &str = "Failed to fetch transcript";
pub const SUMMARY_FALLBACK: &str = "Failed to generate summary";
pub const CHAT_FALLBACK: &str = "Failed to get a chat response";

pub async fn fetch_transcript(
    request: &TranscriptRequest,
) -> Result<TranscriptResponse, ApiError> {
    post_json("transcript/", request, TRANSCRIPT_FALLBACK).await
}

pub async fn summarize_video(request: &TranscriptRequest) -> Result<SummaryResponse, ApiError> {
    post_json("summarize/", request, SUMMARY_FALLBACK).await
}

pub async fn send_chat(request: &ChatRequest) -> Result<ChatResponse, ApiError> {
    post_json("chat/", request, CHAT_FALLBACK).await
}

async fn post_json<B, T>(path: &str, body: &B, fallback: &str) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let url = format!("{}/{}", &*BACKEND_URL, path);
    log::debug!("POST {url}");

    let response = Request::post(&url)
        .json(body)
        .map_err(|e| ApiError::Request(e.to_string()))?
        .send()
        .await?;

    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    } else {
        Err(read_error(response, fallback).await)
    }
}

async fn read_error(response: Response, fallback: &str) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    log::warn!("Backend answered HTTP {status}: {body}");
    error_from_body(status, &body, fallback)
}

/// Maps a non-2xx body onto an error, using `detail` when the backend sent one.
pub fn error_from_body(status: u16, body: &str, fallback: &str) -> ApiError {
    let detail = serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(|e| e.detail)
        .and_then(|detail| match detail {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) if s.is_empty() => None,
            serde_json::Value::String(s) => Some(s),
            other => Some(other.to_string()),
        })
        .unwrap_or_else(|| fallback.to_string());

    ApiError::Server { status, detail }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn detail_string_is_used_verbatim() {
        let body = json!({"detail": "No transcript available in the requested language"});
        assert_eq!(
            error_from_body(404, &body.to_string(), TRANSCRIPT_FALLBACK),
            ApiError::Server {
                status: 404,
                detail: "No transcript available in the requested language".to_string(),
            }
        );
    }

    #[test]
    fn missing_or_unreadable_detail_uses_fallback() {
        for body in [
            "",
            "Internal Server Error",
            "{}",
            r#"{"detail": null}"#,
            r#"{"detail": ""}"#,
        ] {
            assert_eq!(
                error_from_body(500, body, SUMMARY_FALLBACK),
                ApiError::Server {
                    status: 500,
                    detail: SUMMARY_FALLBACK.to_string(),
                },
                "body: {body:?}"
            );
        }
    }

    #[test]
    fn structured_detail_is_surfaced_as_json() {
        let body = json!({"detail": [{"loc": ["body", "video_id"], "msg": "field required"}]});
        match error_from_body(422, &body.to_string(), CHAT_FALLBACK) {
            ApiError::Server { status, detail } => {
                assert_eq!(status, 422);
                assert!(detail.contains("field required"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
