//! stderr への人間向けログ出力（Log 実装）
//!
//! 標準出力は回答の表示に予約されているため、ログは stderr にのみ書く。

use crate::error::Error;
use crate::ports::outbound::{Log, LogRecord};

/// stderr へ `[level] message` 形式で出力する Log 実装
#[derive(Debug, Clone, Default)]
pub struct StderrLog;

impl Log for StderrLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        match &record.fields {
            Some(fields) => {
                let fields_json =
                    serde_json::to_string(fields).unwrap_or_else(|_| "{}".to_string());
                eprintln!(
                    "[{}] {} {}",
                    record.level.as_str(),
                    record.message,
                    fields_json
                );
            }
            None => eprintln!("[{}] {}", record.level.as_str(), record.message),
        }
        Ok(())
    }
}

/// 何も出力しない Log 実装（テスト用）
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct NoopLog;

#[cfg(test)]
impl Log for NoopLog {
    fn log(&self, _record: &LogRecord) -> Result<(), Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::LogLevel;

    #[test]
    fn test_noop_log_accepts_records() {
        let log = NoopLog;
        assert!(log.log(&LogRecord::new(LogLevel::Info, "test")).is_ok());
    }

    #[test]
    fn test_stderr_log_accepts_records() {
        let log = StderrLog;
        assert!(log.log(&LogRecord::new(LogLevel::Warn, "test")).is_ok());
    }
}
