use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptItem {
    pub start: f64,
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TranscriptRequest {
    pub video_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptResponse {
    pub transcript: Vec<TranscriptItem>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "channelTitle", default)]
    pub channel_title: String,
    #[serde(rename = "channelId", default)]
    pub channel_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub summary: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatType {
    #[default]
    Transcript,
    Summary,
}

impl ChatType {
    pub fn display_name(&self) -> &'static str {
        match self {
            ChatType::Transcript => "Transcript",
            ChatType::Summary => "Summary",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ChatRequest {
    pub content: String,
    #[serde(rename = "type")]
    pub chat_type: ChatType,
    #[serde(rename = "contentText")]
    pub content_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Ai,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    #[serde(rename = "type")]
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn ai(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Ai,
            content: content.into(),
        }
    }
}

/// Body the backend sends with non-2xx responses. `detail` is usually a
/// string but validation failures carry a list.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyPoint {
    pub title: String,
    pub description: String,
}

/// Structured summary document produced by the backend's summarizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub sub_title: String,
    pub overview: String,
    pub main_topics: Vec<String>,
    pub key_points: Vec<KeyPoint>,
    pub keywords: Vec<String>,
    pub action_items: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn chat_request_uses_backend_field_names() {
        let request = ChatRequest {
            content: "what is this about?".to_string(),
            chat_type: ChatType::Summary,
            content_text: "summary text".to_string(),
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "content": "what is this about?",
                "type": "summary",
                "contentText": "summary text",
            })
        );
    }

    #[test]
    fn transcript_response_tolerates_missing_channel_fields() {
        let response: TranscriptResponse = serde_json::from_value(json!({
            "video_id": "abc123",
            "transcript": [{"start": 1.5, "duration": 2.0, "text": "hi"}],
            "title": "T",
            "description": "D",
        }))
        .unwrap();

        assert_eq!(response.transcript.len(), 1);
        assert_eq!(response.transcript[0].start, 1.5);
        assert_eq!(response.channel_title, "");
        assert_eq!(response.channel_id, "");
    }
}
