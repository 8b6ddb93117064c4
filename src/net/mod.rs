//! Transport layer: HTTP calls to the token and content services.

pub mod api;
pub mod error;
pub mod types;

pub use api::{ApiClient, ContentApi};
pub use error::{ApiError, AuthError, TransportError};
pub use types::{ContentItem, DISPLAY_FIELDS};
