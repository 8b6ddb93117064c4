use super::*;
use serde_json::json;
use time::Month;

fn item(value: serde_json::Value) -> ContentItem {
    serde_json::from_value(value).unwrap()
}

// =============================================================
// Preview text
// =============================================================

#[test]
fn strip_markup_removes_tags() {
    assert_eq!(strip_markup("<p>Hello <b>world</b></p>"), "Hello world");
    assert_eq!(strip_markup("no tags"), "no tags");
}

#[test]
fn text_preview_strips_and_appends_suffix() {
    let preview = text_preview(Some(
        "<p>This is a long text content that should be truncated for preview</p>",
    ));
    assert_eq!(
        preview,
        "This is a long text content that should be truncated for preview..."
    );
}

#[test]
fn text_preview_truncates_to_limit() {
    let long = format!("<div>{}</div>", "a".repeat(450));
    let preview = text_preview(Some(&long));
    assert_eq!(preview.chars().count(), PREVIEW_CHARS + PREVIEW_SUFFIX.len());
    assert!(preview.starts_with(&"a".repeat(PREVIEW_CHARS)));
    assert!(preview.ends_with("..."));
}

#[test]
fn text_preview_counts_characters_not_bytes() {
    let long = "進撃".repeat(150);
    let preview = text_preview(Some(&long));
    assert_eq!(preview.chars().count(), PREVIEW_CHARS + 3);
}

#[test]
fn text_preview_empty_or_missing_is_empty() {
    assert_eq!(text_preview(None), "");
    assert_eq!(text_preview(Some("")), "");
}

// =============================================================
// FormattedContent
// =============================================================

#[test]
fn formatted_content_keeps_present_images() {
    let formatted = FormattedContent::from_item(&item(json!({
        "id": 1,
        "title": "Test Anime",
        "text": "<p>Body</p>",
        "thumbNailImage": "test-thumb.jpg",
        "mainImage": "test-main.jpg",
        "logo": "test-logo.jpg",
    })));
    assert_eq!(formatted.thumb_nail_image, "test-thumb.jpg");
    assert_eq!(formatted.main_image, "test-main.jpg");
    assert_eq!(formatted.logo, "test-logo.jpg");
    assert_eq!(formatted.text_preview, "Body...");
    assert_eq!(formatted.title.as_deref(), Some("Test Anime"));
}

#[test]
fn formatted_content_falls_back_to_placeholders() {
    let formatted = FormattedContent::from_item(&item(json!({
        "id": 1,
        "title": "Test Anime",
        "text": "Test content",
    })));
    assert_eq!(formatted.thumb_nail_image, "/placeholder-image.jpg");
    assert_eq!(formatted.main_image, "/placeholder-image.jpg");
    assert_eq!(formatted.logo, "/placeholder-logo.jpg");
}

#[test]
fn formatted_content_treats_empty_image_as_missing() {
    let formatted = FormattedContent::from_item(&item(json!({ "id": 1, "logo": "" })));
    assert_eq!(formatted.logo, PLACEHOLDER_LOGO);
}

#[test]
fn formatted_content_treats_non_string_image_as_missing() {
    let formatted = FormattedContent::from_item(&item(json!({
        "id": 1,
        "title": { "en": "Test Anime" },
        "logo": { "url": "x" },
        "thumbNailImage": 5,
    })));
    assert_eq!(formatted.logo, PLACEHOLDER_LOGO);
    assert_eq!(formatted.thumb_nail_image, PLACEHOLDER_IMAGE);
    assert_eq!(formatted.title, None);
    assert_eq!(formatted.extra.get("logo"), Some(&json!({ "url": "x" })));
}

#[test]
fn formatted_content_passes_extra_fields_through() {
    let formatted = FormattedContent::from_item(&item(json!({ "id": 1, "genre": "mecha" })));
    assert_eq!(formatted.extra.get("genre"), Some(&json!("mecha")));
}

// =============================================================
// Header date
// =============================================================

#[test]
fn display_date_is_weekday_month_day_uppercase() {
    let date = Date::from_calendar_date(2026, Month::October, 19).unwrap();
    assert_eq!(display_date(date), "MONDAY, OCTOBER 19");
}

#[test]
fn display_date_single_digit_day_is_not_padded() {
    let date = Date::from_calendar_date(2024, Month::February, 3).unwrap();
    assert_eq!(display_date(date), "SATURDAY, FEBRUARY 3");
}

#[test]
fn today_is_uppercase() {
    let today = today();
    assert_eq!(today, today.to_uppercase());
    assert!(today.contains(", "));
}
