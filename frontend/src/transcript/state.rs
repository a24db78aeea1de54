use crate::models::{
    ChatMessage, ChatRequest, ChatType, TranscriptItem, TranscriptRequest, TranscriptResponse,
};
use crate::transcript::error::ApiError;
use crate::transcript::summary::{parse_summary, SummaryView};
use crate::utils::{extract_video_id, join_transcript_text};
use std::rc::Rc;
use yew::functional::Reducible;

/// Everything the transcript page shows. Lives only in memory.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub video_url: String,
    pub transcript: Vec<TranscriptItem>,
    pub title: String,
    pub description: String,
    pub channel_title: String,
    pub channel_id: String,
    /// Id of the video whose transcript is shown. Fixed when the request is
    /// made, so editing the URL field does not move the row links.
    pub loaded_video_id: String,
    /// Raw summary document as returned by the backend.
    pub summary: Option<String>,
    pub chat_type: ChatType,
    pub chat_input: String,
    pub transcript_chat: Vec<ChatMessage>,
    pub summary_chat: Vec<ChatMessage>,
    pub is_loading: bool,
    pub is_summarizing: bool,
    pub is_chat_loading: bool,
    pub is_transcript_expanded: bool,
    pub is_description_expanded: bool,
    pub error: Option<ApiError>,
    /// Bumped on every transcript submission. Completions tagged with an
    /// older value are stale and get dropped.
    pub generation: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            video_url: String::new(),
            transcript: Vec::new(),
            title: String::new(),
            description: String::new(),
            channel_title: String::new(),
            channel_id: String::new(),
            loaded_video_id: String::new(),
            summary: None,
            chat_type: ChatType::Transcript,
            chat_input: String::new(),
            transcript_chat: Vec::new(),
            summary_chat: Vec::new(),
            is_loading: false,
            is_summarizing: false,
            is_chat_loading: false,
            is_transcript_expanded: true,
            is_description_expanded: false,
            error: None,
            generation: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    SetVideoUrl(String),
    SetChatInput(String),
    SetChatType(ChatType),
    ToggleTranscript,
    ToggleDescription,

    TranscriptRequested { generation: u64 },
    TranscriptLoaded { generation: u64, response: TranscriptResponse },
    TranscriptFailed { generation: u64, error: ApiError },

    SummarizeRequested,
    SummaryLoaded { generation: u64, summary: String },
    SummaryFailed { generation: u64, error: ApiError },

    /// Appends the user's message and clears the input.
    ChatSent { chat_type: ChatType, content: String },
    /// Chat histories outlive transcript submissions, so replies are never stale.
    ChatReplied { chat_type: ChatType, content: String },
    ChatFailed { error: ApiError },
}

impl Reducible for AppState {
    type Action = AppAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = (*self).clone();
        state.apply(action);
        Rc::new(state)
    }
}

impl AppState {
    pub fn apply(&mut self, action: AppAction) {
        match action {
            AppAction::SetVideoUrl(url) => self.video_url = url,
            AppAction::SetChatInput(text) => self.chat_input = text,
            AppAction::SetChatType(chat_type) => self.chat_type = chat_type,
            AppAction::ToggleTranscript => {
                self.is_transcript_expanded = !self.is_transcript_expanded
            }
            AppAction::ToggleDescription => {
                self.is_description_expanded = !self.is_description_expanded
            }

            AppAction::TranscriptRequested { generation } => {
                self.generation = generation;
                self.transcript.clear();
                self.summary = None;
                self.title.clear();
                self.description.clear();
                self.channel_title.clear();
                self.channel_id.clear();
                self.loaded_video_id = self.video_id();
                self.error = None;
                self.is_transcript_expanded = true;
                self.is_description_expanded = false;
                self.is_loading = true;
            }
            AppAction::TranscriptLoaded {
                generation,
                response,
            } => {
                if generation != self.generation {
                    log::debug!("Dropping stale transcript (generation {generation})");
                    return;
                }
                self.transcript = response.transcript;
                self.title = response.title;
                self.description = response.description;
                self.channel_title = response.channel_title;
                self.channel_id = response.channel_id;
                self.is_loading = false;
            }
            AppAction::TranscriptFailed { generation, error } => {
                if generation != self.generation {
                    return;
                }
                self.error = Some(error);
                self.is_loading = false;
            }

            AppAction::SummarizeRequested => {
                self.error = None;
                self.is_summarizing = true;
            }
            AppAction::SummaryLoaded {
                generation,
                summary,
            } => {
                self.is_summarizing = false;
                if generation != self.generation {
                    log::debug!("Dropping stale summary (generation {generation})");
                    return;
                }
                if !summary.is_empty() {
                    if let Err(reason) = parse_summary(&summary) {
                        log::warn!("Could not decode summary: {reason}");
                    }
                }
                self.summary = Some(summary).filter(|s| !s.is_empty());
                self.is_transcript_expanded = false;
            }
            AppAction::SummaryFailed { generation, error } => {
                self.is_summarizing = false;
                if generation == self.generation {
                    self.error = Some(error);
                }
            }

            AppAction::ChatSent { chat_type, content } => {
                self.chat_log_mut(chat_type).push(ChatMessage::user(content));
                self.chat_input.clear();
                self.is_chat_loading = true;
            }
            AppAction::ChatReplied { chat_type, content } => {
                self.is_chat_loading = false;
                self.chat_log_mut(chat_type).push(ChatMessage::ai(content));
            }
            AppAction::ChatFailed { error } => {
                self.is_chat_loading = false;
                self.error = Some(error);
            }
        }
    }

    fn chat_log_mut(&mut self, chat_type: ChatType) -> &mut Vec<ChatMessage> {
        match chat_type {
            ChatType::Transcript => &mut self.transcript_chat,
            ChatType::Summary => &mut self.summary_chat,
        }
    }

    pub fn chat_log(&self, chat_type: ChatType) -> &[ChatMessage] {
        match chat_type {
            ChatType::Transcript => &self.transcript_chat,
            ChatType::Summary => &self.summary_chat,
        }
    }

    pub fn active_chat(&self) -> &[ChatMessage] {
        self.chat_log(self.chat_type)
    }

    pub fn video_id(&self) -> String {
        extract_video_id(&self.video_url)
    }

    pub fn can_submit(&self) -> bool {
        !self.is_loading && !self.video_url.trim().is_empty()
    }

    pub fn can_summarize(&self) -> bool {
        !self.is_summarizing && !self.transcript.is_empty()
    }

    /// Chat needs something to talk about.
    pub fn has_chat_context(&self) -> bool {
        !self.transcript.is_empty() || self.summary.is_some()
    }

    pub fn can_send_chat(&self) -> bool {
        !self.is_chat_loading && !self.chat_input.trim().is_empty()
    }

    pub fn show_empty_state(&self) -> bool {
        !self.is_loading && self.error.is_none() && self.transcript.is_empty()
    }

    pub fn summary_view(&self) -> Option<SummaryView> {
        self.summary.as_deref().map(SummaryView::from_raw)
    }

    /// Returns the request to issue for a transcript submission, or `None`
    /// when the form should not submit.
    pub fn transcript_request(&self) -> Option<TranscriptRequest> {
        self.can_submit().then(|| TranscriptRequest {
            video_id: self.video_id(),
        })
    }

    pub fn summarize_request(&self) -> Option<TranscriptRequest> {
        self.can_summarize().then(|| TranscriptRequest {
            video_id: self.video_id(),
        })
    }

    /// Builds the chat request for the current input and context. Whitespace
    /// input or an in-flight chat yields `None`.
    pub fn chat_request(&self) -> Option<ChatRequest> {
        if !self.can_send_chat() {
            return None;
        }

        let content_text = match self.chat_type {
            ChatType::Transcript => join_transcript_text(&self.transcript),
            ChatType::Summary => self.summary.clone().unwrap_or_default(),
        };

        Some(ChatRequest {
            content: self.chat_input.clone(),
            chat_type: self.chat_type,
            content_text,
        })
    }
}
