//! 会話履歴の JSON ファイル永続化（HistoryRepository 実装）
//!
//! 読み込み時にのみ max_size で打ち切り、書き込みは渡された列全体を
//! そのまま上書き保存する。ディスク上のログは max_size を超えて
//! 伸び続けるが、次の読み込みが上限を強制する。この非対称は観測可能な
//! 挙動であり、そのまま維持する。

use crate::config::HistorySettings;
use crate::domain::HistoryEntry;
use crate::error::Error;
use crate::ports::outbound::{FileSystem, HistoryRepository, Log, LogLevel, LogRecord};
use std::sync::Arc;

/// JSON ファイルに履歴を読み書きする HistoryRepository 実装
pub struct JsonHistoryRepository {
    fs: Arc<dyn FileSystem>,
    log: Arc<dyn Log>,
}

impl JsonHistoryRepository {
    pub fn new(fs: Arc<dyn FileSystem>, log: Arc<dyn Log>) -> Self {
        Self { fs, log }
    }
}

impl HistoryRepository for JsonHistoryRepository {
    fn load(&self, settings: &HistorySettings) -> Result<Vec<HistoryEntry>, Error> {
        if !settings.enabled {
            return Ok(Vec::new());
        }

        if !self.fs.exists(&settings.file) {
            let _ = self.log.log(&LogRecord::new(
                LogLevel::Warn,
                format!("History file {} does not exist.", settings.file.display()),
            ));
            let _ = self.log.log(&LogRecord::new(
                LogLevel::Warn,
                "File will be created with first response.",
            ));
            return Ok(Vec::new());
        }

        // 履歴が読めない・壊れている場合もクエリは止めない
        let text = match self.fs.read_to_string(&settings.file) {
            Ok(text) => text,
            Err(e) => {
                let _ = self.log.log(&LogRecord::new(
                    LogLevel::Error,
                    format!(
                        "Failed to read history file {}: {}",
                        settings.file.display(),
                        e
                    ),
                ));
                return Ok(Vec::new());
            }
        };
        let mut entries: Vec<HistoryEntry> = match serde_json::from_str(&text) {
            Ok(entries) => entries,
            Err(e) => {
                let _ = self.log.log(&LogRecord::new(
                    LogLevel::Error,
                    format!(
                        "Failed to parse history file {}: {}",
                        settings.file.display(),
                        e
                    ),
                ));
                return Ok(Vec::new());
            }
        };

        let _ = self.log.log(&LogRecord::new(
            LogLevel::Info,
            format!("Taking maximum of {} entries from history.", settings.max_size),
        ));
        entries.truncate(settings.max_size);
        Ok(entries)
    }

    fn save(
        &self,
        settings: &HistorySettings,
        mut entries: Vec<HistoryEntry>,
        response: &str,
    ) -> Result<(), Error> {
        if !settings.enabled {
            return Ok(());
        }

        if let Some(parent) = settings.file.parent() {
            if !parent.as_os_str().is_empty() {
                self.fs.create_dir_all(parent)?;
            }
        }

        if !response.is_empty() {
            entries.push(HistoryEntry::assistant(response));
        }

        let text = serde_json::to_string(&entries)?;
        self.fs.write(&settings.file, &text)
    }
}
