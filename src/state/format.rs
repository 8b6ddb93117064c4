//! Display-ready projections of store data.
//!
//! Pure functions so the card and detail screens, and the tests, share one
//! definition of preview text, image fallbacks and the header date.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};
use time::{Date, OffsetDateTime};

use crate::net::ContentItem;

pub const PLACEHOLDER_IMAGE: &str = "/placeholder-image.jpg";
pub const PLACEHOLDER_LOGO: &str = "/placeholder-logo.jpg";
pub const PREVIEW_CHARS: usize = 200;
pub const PREVIEW_SUFFIX: &str = "...";

static MARKUP_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("markup tag pattern is valid"));

/// The current content item with preview text and guaranteed image paths.
#[derive(Debug, Clone, PartialEq)]
pub struct FormattedContent {
    pub id: Value,
    pub title: Option<String>,
    pub text: Option<String>,
    pub text_preview: String,
    pub thumb_nail_image: String,
    pub main_image: String,
    pub logo: String,
    pub extra: Map<String, Value>,
}

impl FormattedContent {
    #[must_use]
    pub fn from_item(item: &ContentItem) -> Self {
        Self {
            id: item.id.clone(),
            title: item.title().map(str::to_owned),
            text: item.text.clone(),
            text_preview: text_preview(item.text.as_deref()),
            thumb_nail_image: image_or(item.thumb_nail_image(), PLACEHOLDER_IMAGE),
            main_image: image_or(item.main_image(), PLACEHOLDER_IMAGE),
            logo: image_or(item.logo(), PLACEHOLDER_LOGO),
            extra: item.extra.clone(),
        }
    }
}

/// Remove every `<...>` tag, keeping the text between them.
#[must_use]
pub fn strip_markup(text: &str) -> String {
    MARKUP_TAG.replace_all(text, "").into_owned()
}

/// Plain-text preview: markup stripped, cut to [`PREVIEW_CHARS`] characters,
/// [`PREVIEW_SUFFIX`] appended. Absent or empty text yields an empty preview.
#[must_use]
pub fn text_preview(text: Option<&str>) -> String {
    let Some(text) = text.filter(|t| !t.is_empty()) else {
        return String::new();
    };
    let mut preview: String = strip_markup(text).chars().take(PREVIEW_CHARS).collect();
    preview.push_str(PREVIEW_SUFFIX);
    preview
}

fn image_or(path: Option<&str>, fallback: &str) -> String {
    path.filter(|p| !p.is_empty()).unwrap_or(fallback).to_owned()
}

/// `MONDAY, OCTOBER 19` style header date.
#[must_use]
pub fn display_date(date: Date) -> String {
    format!("{}, {} {}", date.weekday(), date.month(), date.day()).to_uppercase()
}

/// Today's [`display_date`] in local time, falling back to UTC when the local
/// offset cannot be determined.
#[must_use]
pub fn today() -> String {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    display_date(now.date())
}
