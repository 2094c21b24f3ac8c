//! 標準アダプタ（std / HTTP / ファイル実装）

pub mod context_expander;
pub mod http_backend;
pub mod json_history;
pub mod script_session;
pub mod settings_loader;
pub mod std_fs;
pub mod std_process;
pub mod stderr_log;

pub use context_expander::CapturedOutputExpander;
pub use http_backend::HttpQueryBackend;
pub use json_history::JsonHistoryRepository;
pub use script_session::ScriptSessionRecorder;
pub use settings_loader::{expand_tilde, load_or_create};
pub use std_fs::StdFileSystem;
pub use std_process::StdProcess;
#[cfg(test)]
pub use stderr_log::NoopLog;
pub use stderr_log::StderrLog;
