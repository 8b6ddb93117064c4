//! Client for the anime content service.
//!
//! A user trades an email for a bearer token, then pages through content items
//! one fetch at a time. The crate is the non-visual half of that client:
//!
//! - [`net`]: HTTP transport with normalized errors
//! - [`state`]: session and content store driving the screens
//! - [`router`]: route table and auth guard
//! - [`storage`]: durable key-value port for the token and email
//! - [`config`]: environment-driven settings

pub mod config;
pub mod net;
pub mod router;
pub mod state;
pub mod storage;

pub use config::ClientConfig;
pub use net::{ApiClient, ApiError, ContentApi, ContentItem};
pub use router::{Route, Router};
pub use state::{ContentStore, ContentView};
