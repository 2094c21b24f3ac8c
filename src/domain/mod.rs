//! ドメイン型（型と不変条件）

pub mod answer;
pub mod command;
pub mod history;
pub mod payload;
pub mod query;
pub use answer::{BackendAnswer, ReferencedDocument};
pub use command::Command;
pub use history::HistoryEntry;
pub use payload::QueryPayload;
pub use query::{Query, CONTEXT_MARKER};
