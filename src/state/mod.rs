pub mod content;
pub mod format;

pub use content::{ContentStore, ContentView, HISTORY_LIMIT};
pub use format::FormattedContent;
