use crate::models::TranscriptItem;

const WATCH_MARKER: &str = "youtube.com/watch?v=";

/// Pulls the video id out of a watch URL; anything else is taken as an id.
pub fn extract_video_id(input: &str) -> String {
    match input.find(WATCH_MARKER) {
        Some(pos) => {
            let rest = &input[pos + WATCH_MARKER.len()..];
            rest.split('&').next().unwrap_or_default().to_string()
        }
        None => input.to_string(),
    }
}

// m:ss, minutes are not padded
pub fn format_timestamp(seconds: f64) -> String {
    let total = seconds.max(0.0).floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

pub fn join_transcript_text(items: &[TranscriptItem]) -> String {
    items
        .iter()
        .map(|item| item.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn format_watch_url(video_id: &str, start: f64) -> String {
    format!(
        "https://www.youtube.com/watch?v={}&t={}s",
        urlencoding::encode(video_id),
        start.max(0.0).floor() as u64
    )
}

pub fn format_channel_url(channel_id: &str) -> String {
    format!(
        "https://www.youtube.com/channel/{}",
        urlencoding::encode(channel_id)
    )
}
