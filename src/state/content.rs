//! Session and content state for the signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `ContentStore` is constructed at startup and owned by whatever drives
//! the screens. The route guard reads its authentication flag; the screens read
//! the current item, history, loading flag and last error.
//!
//! DESIGN
//! ======
//! Async actions follow one shape: clear `error` and raise `is_loading` on
//! entry, lower `is_loading` on every exit, record the failure message, then
//! hand the error back so the caller decides what to show. Actions take
//! `&mut self`, so two fetches can never interleave on the same store.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use std::sync::Arc;

use super::format::{self, FormattedContent};
use crate::net::{ApiError, ContentApi, ContentItem};
use crate::router::AuthStatus;
use crate::storage::{KeyValueStore, USER_EMAIL_KEY};

/// Maximum number of previously shown items kept in history.
pub const HISTORY_LIMIT: usize = 10;

/// Which content screen is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ContentView {
    #[default]
    Card,
    Detail,
}

pub struct ContentStore<A> {
    api: A,
    storage: Arc<dyn KeyValueStore>,

    is_authenticated: bool,
    user_email: String,

    current_content: Option<ContentItem>,
    content_history: Vec<ContentItem>,

    is_loading: bool,
    error: Option<String>,

    current_view: ContentView,
}

impl<A: ContentApi> ContentStore<A> {
    /// New store over `api`, restoring the signed-in email from `storage`.
    pub fn new(api: A, storage: Arc<dyn KeyValueStore>) -> Self {
        let user_email = storage.get(USER_EMAIL_KEY).unwrap_or_default();
        Self {
            api,
            storage,
            is_authenticated: false,
            user_email,
            current_content: None,
            content_history: Vec::new(),
            is_loading: false,
            error: None,
            current_view: ContentView::Card,
        }
    }

    // =========================================================================
    // ACTIONS
    // =========================================================================

    /// Request a token for `email`, then load the first content item.
    ///
    /// # Errors
    ///
    /// Returns the token or content failure. `error` holds its message and the
    /// store is left unauthenticated.
    pub async fn authenticate(&mut self, email: &str) -> Result<(), ApiError> {
        self.begin_action();
        let result = self.authenticate_inner(email).await;
        if let Err(e) = &result {
            self.error = Some(e.to_string());
            self.is_authenticated = false;
        }
        self.is_loading = false;
        result
    }

    async fn authenticate_inner(&mut self, email: &str) -> Result<(), ApiError> {
        self.api.request_token(email).await?;
        self.is_authenticated = true;
        self.user_email = email.to_owned();
        if let Err(e) = self.storage.set(USER_EMAIL_KEY, email) {
            tracing::warn!(error = %e, "failed to persist user email");
        }
        tracing::info!(email = %email, "authenticated");
        self.load_content().await
    }

    /// Fetch a new content item, moving the outgoing one into history when its
    /// id differs.
    ///
    /// # Errors
    ///
    /// Returns the transport failure; `error` holds its message.
    pub async fn fetch_content(&mut self) -> Result<(), ApiError> {
        self.begin_action();
        let result = self.load_content().await;
        if let Err(e) = &result {
            self.error = Some(e.to_string());
        }
        self.is_loading = false;
        result
    }

    /// Same as [`ContentStore::fetch_content`].
    ///
    /// # Errors
    ///
    /// See [`ContentStore::fetch_content`].
    pub async fn refresh_content(&mut self) -> Result<(), ApiError> {
        self.fetch_content().await
    }

    /// Resume a stored session. A stored token plus a stored email count as
    /// signed in; if the first fetch then fails the session is discarded.
    pub async fn initialize(&mut self) {
        if !(self.api.is_authenticated() && !self.user_email.is_empty()) {
            return;
        }
        self.is_authenticated = true;
        if let Err(e) = self.fetch_content().await {
            tracing::info!(error = %e, "stored session rejected, logging out");
            self.logout();
        }
    }

    /// Forget the session: state back to defaults, token and email removed
    /// from storage. `error` is left alone so the login screen can show why.
    pub fn logout(&mut self) {
        self.is_authenticated = false;
        self.user_email.clear();
        self.current_content = None;
        self.content_history.clear();
        self.current_view = ContentView::Card;

        self.api.clear_token();
        if let Err(e) = self.storage.remove(USER_EMAIL_KEY) {
            tracing::warn!(error = %e, "failed to remove stored user email");
        }
        tracing::info!("logged out");
    }

    pub fn show_detail(&mut self) {
        self.current_view = ContentView::Detail;
    }

    pub fn show_card(&mut self) {
        self.current_view = ContentView::Card;
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    fn begin_action(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    async fn load_content(&mut self) -> Result<(), ApiError> {
        let content = self.api.fetch_content().await?;
        self.replace_content(content);
        Ok(())
    }

    fn replace_content(&mut self, content: ContentItem) {
        if let Some(previous) = self.current_content.take() {
            if !previous.same_id(&content) {
                self.content_history.insert(0, previous);
                self.content_history.truncate(HISTORY_LIMIT);
            }
        }
        tracing::debug!(id = %content.id, history = self.content_history.len(), "content replaced");
        self.current_content = Some(content);
    }
}

impl<A> ContentStore<A> {
    // =========================================================================
    // READS
    // =========================================================================

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    #[must_use]
    pub fn user_email(&self) -> &str {
        &self.user_email
    }

    #[must_use]
    pub fn current_content(&self) -> Option<&ContentItem> {
        self.current_content.as_ref()
    }

    /// Previously shown items, most recent first.
    #[must_use]
    pub fn history(&self) -> &[ContentItem] {
        &self.content_history
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn current_view(&self) -> ContentView {
        self.current_view
    }

    #[must_use]
    pub fn has_content(&self) -> bool {
        self.current_content.is_some()
    }

    /// Current item prepared for display, or `None` before the first fetch.
    #[must_use]
    pub fn formatted_content(&self) -> Option<FormattedContent> {
        self.current_content.as_ref().map(FormattedContent::from_item)
    }

    /// Today's header date. Computed on every call.
    #[must_use]
    pub fn current_date(&self) -> String {
        format::today()
    }

    #[must_use]
    pub fn api(&self) -> &A {
        &self.api
    }
}

impl<A> AuthStatus for ContentStore<A> {
    fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }
}
