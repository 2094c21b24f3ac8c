//! Outbound ポート: usecase が外界（ファイル・プロセス・ネットワーク）を使うための trait

pub mod backend;
pub mod context_expander;
pub mod fs;
pub mod history_repository;
pub mod log;
pub mod process;
pub mod session_recorder;

pub use backend::QueryBackend;
pub use context_expander::ContextExpander;
pub use fs::FileSystem;
pub use history_repository::HistoryRepository;
pub use log::{now_iso8601, Log, LogLevel, LogRecord};
pub use process::Process;
pub use session_recorder::SessionRecorder;
