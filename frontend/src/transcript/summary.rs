use crate::models::Summary;
use serde_json::Value;
use thiserror::Error;

pub const SUMMARY_PARSE_FAILED: &str = "Failed to parse the summary data.";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SummaryParseError {
    #[error("summary is not valid JSON: {0}")]
    Syntax(String),

    #[error("summary does not match the expected shape: {0}")]
    Shape(String),
}

/// Decoded summary ready for rendering. `pretty` is the raw document
/// re-indented for the JSON panel.
#[derive(Debug, Clone, PartialEq)]
pub enum SummaryView {
    Parsed { summary: Summary, pretty: String },
    Invalid { reason: SummaryParseError },
}

pub fn parse_summary(raw: &str) -> Result<(Summary, String), SummaryParseError> {
    let value: Value =
        serde_json::from_str(raw).map_err(|e| SummaryParseError::Syntax(e.to_string()))?;
    let pretty =
        serde_json::to_string_pretty(&value).map_err(|e| SummaryParseError::Syntax(e.to_string()))?;
    let summary =
        serde_json::from_value(value).map_err(|e| SummaryParseError::Shape(e.to_string()))?;
    Ok((summary, pretty))
}

impl SummaryView {
    pub fn from_raw(raw: &str) -> Self {
        match parse_summary(raw) {
            Ok((summary, pretty)) => SummaryView::Parsed { summary, pretty },
            Err(reason) => SummaryView::Invalid { reason },
        }
    }

    /// Message shown in place of the summary when decoding failed.
    pub fn fallback_message(&self) -> Option<&'static str> {
        match self {
            SummaryView::Parsed { .. } => None,
            SummaryView::Invalid { .. } => Some(SUMMARY_PARSE_FAILED),
        }
    }

    /// Pretty JSON for the raw panel; only a decoded summary has one.
    pub fn raw_json(&self) -> Option<&str> {
        match self {
            SummaryView::Parsed { pretty, .. } => Some(pretty),
            SummaryView::Invalid { .. } => None,
        }
    }
}
