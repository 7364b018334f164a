//! Rendering of Miniflux entries into Feishu posts.

use super::model::{FeishuMessage, PostElement};
use crate::domain::miniflux::{Entry, Feed};

/// Maximum number of characters of entry content carried in a post
pub const CONTENT_MAX_CHARS: usize = 200;

const TRUNCATION_MARKER: &str = "...";
const PUBLISHED_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Build the post sent for one entry of `feed`
pub fn format_entry_message(entry: &Entry, feed: &Feed) -> FeishuMessage {
    let mut paragraphs = vec![
        vec![PostElement::bold(feed.title.clone())],
        vec![PostElement::link(entry.title.clone(), entry.url.clone())],
    ];

    let content = truncate_chars(&strip_html(&entry.content), CONTENT_MAX_CHARS);
    if !content.is_empty() {
        paragraphs.push(vec![PostElement::text(content)]);
    }

    if !entry.tags.is_empty() {
        paragraphs.push(vec![PostElement::text(format!(
            "Tags: {}",
            entry.tags.join(", ")
        ))]);
    }

    paragraphs.push(vec![PostElement::text(format!(
        "Published: {}",
        entry.published_at.format(PUBLISHED_FORMAT)
    ))]);

    FeishuMessage::post(message_title(entry, feed), paragraphs)
}

pub fn message_title(entry: &Entry, feed: &Feed) -> String {
    format!("[{}] - {}", feed.title, entry.title)
}

/// Reduce HTML to plain text with line breaks kept.
///
/// Break and paragraph tags become newlines, every other `<...>` run is
/// dropped, doubled newlines are collapsed once and the result is trimmed.
/// Entities are left encoded.
pub fn strip_html(html: &str) -> String {
    let with_breaks = html
        .replace("<br>", "\n")
        .replace("<br/>", "\n")
        .replace("<br />", "\n")
        .replace("<p>", "\n")
        .replace("</p>", "");

    let mut in_tag = false;
    let mut cleaned = String::with_capacity(with_breaks.len());
    for ch in with_breaks.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => cleaned.push(ch),
            _ => {}
        }
    }

    cleaned.replace("\n\n", "\n").trim().to_string()
}

/// Cut `text` to `max_chars` characters, appending a marker when anything was dropped
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}{}", &text[..cut], TRUNCATION_MARKER),
        None => text.to_string(),
    }
}
