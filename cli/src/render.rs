//! Plain-text screens for the login, card and detail routes.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::fmt::Write as _;

use animecards::net::{ContentItem, DISPLAY_FIELDS};
use animecards::router::Route;
use animecards::state::FormattedContent;
use animecards::state::format::strip_markup;
use animecards::ContentStore;
use serde_json::Value;

const RULE: &str = "----------------------------------------";
const UNTITLED: &str = "(untitled)";

/// Screen for whichever route the router currently sits on.
pub fn screen<A>(route: Route, store: &ContentStore<A>) -> String {
    match route {
        Route::Root | Route::Login => login_screen(store.error()),
        Route::Card => card_screen(&store.current_date(), store.formatted_content().as_ref(), store.error()),
        Route::Detail => detail_screen(store.formatted_content().as_ref(), store.error()),
    }
}

pub fn login_screen(error: Option<&str>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "Sign in");
    let _ = writeln!(out, "{RULE}");
    push_error(&mut out, error);
    let _ = writeln!(out, "Enter `login <email>` to request an access token.");
    out
}

pub fn card_screen(date: &str, content: Option<&FormattedContent>, error: Option<&str>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{date}");
    let _ = writeln!(out, "{RULE}");
    push_error(&mut out, error);
    let Some(content) = content else {
        let _ = writeln!(out, "No content loaded. Enter `refresh` to fetch one.");
        return out;
    };
    let _ = writeln!(out, "{}", content.title.as_deref().unwrap_or(UNTITLED));
    let _ = writeln!(out);
    if !content.text_preview.is_empty() {
        let _ = writeln!(out, "{}", content.text_preview);
        let _ = writeln!(out);
    }
    let _ = writeln!(out, "thumbnail: {}", content.thumb_nail_image);
    let _ = writeln!(out, "logo:      {}", content.logo);
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "`detail` for more, `refresh` for another");
    out
}

pub fn detail_screen(content: Option<&FormattedContent>, error: Option<&str>) -> String {
    let mut out = String::new();
    push_error(&mut out, error);
    let Some(content) = content else {
        let _ = writeln!(out, "No content loaded. Enter `card` to go back.");
        return out;
    };
    let _ = writeln!(out, "{}", content.title.as_deref().unwrap_or(UNTITLED));
    let _ = writeln!(out, "{RULE}");
    if let Some(text) = content.text.as_deref().filter(|t| !t.is_empty()) {
        let _ = writeln!(out, "{}", strip_markup(text).trim());
        let _ = writeln!(out);
    }
    let _ = writeln!(out, "main image: {}", content.main_image);
    let _ = writeln!(out, "thumbnail:  {}", content.thumb_nail_image);
    let _ = writeln!(out, "logo:       {}", content.logo);
    let others = content.extra.iter().filter(|(key, _)| !DISPLAY_FIELDS.contains(&key.as_str()));
    for (key, value) in others {
        let _ = writeln!(out, "{key}: {}", display_value(value));
    }
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "`card` to go back");
    out
}

/// Numbered history listing, most recent first.
pub fn history_list(items: &[ContentItem]) -> String {
    if items.is_empty() {
        return "History is empty.\n".to_owned();
    }
    let mut out = String::new();
    for (index, item) in items.iter().enumerate() {
        let title = item.title().unwrap_or(UNTITLED);
        let _ = writeln!(out, "{:>2}. {title} [{}]", index + 1, display_value(&item.id));
    }
    out
}

fn push_error(out: &mut String, error: Option<&str>) {
    if let Some(error) = error {
        let _ = writeln!(out, "! {error}");
        let _ = writeln!(out);
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
