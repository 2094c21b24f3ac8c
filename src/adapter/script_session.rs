//! script(1) によるキャプチャセッション（SessionRecorder 実装）
//!
//! `script -f <file>` を起動して端末の制御をユーザーに委ね、
//! セッション終了後にキャプチャファイルを削除する。

use crate::error::Error;
use crate::ports::outbound::{FileSystem, Log, LogLevel, LogRecord, Process, SessionRecorder};
use std::path::Path;
use std::sync::Arc;

/// `script` コマンドを使う SessionRecorder 実装
pub struct ScriptSessionRecorder {
    fs: Arc<dyn FileSystem>,
    process: Arc<dyn Process>,
    log: Arc<dyn Log>,
}

impl ScriptSessionRecorder {
    pub fn new(fs: Arc<dyn FileSystem>, process: Arc<dyn Process>, log: Arc<dyn Log>) -> Self {
        Self { fs, process, log }
    }
}

impl SessionRecorder for ScriptSessionRecorder {
    fn record(&self, capture_file: &Path) -> Result<i32, Error> {
        let args = vec!["-f".to_string(), capture_file.display().to_string()];
        let code = self.process.run(Path::new("script"), &args)?;

        // セッションが終わったらキャプチャを残さない
        if self.fs.exists(capture_file) {
            let _ = self.log.log(&LogRecord::new(
                LogLevel::Info,
                format!("Removing {}", capture_file.display()),
            ));
            if let Err(e) = self.fs.remove_file(capture_file) {
                let _ = self.log.log(&LogRecord::new(
                    LogLevel::Warn,
                    format!("Failed to remove capture file: {}", e),
                ));
            }
        }
        Ok(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::{NoopLog, StdFileSystem};
    use std::path::PathBuf;
    use std::sync::Mutex;

    /// テスト用: 呼び出しを記録して固定の終了コードを返す Process
    struct FakeProcess {
        calls: Mutex<Vec<(PathBuf, Vec<String>)>>,
        code: i32,
    }

    impl FakeProcess {
        fn new(code: i32) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                code,
            }
        }
    }

    impl Process for FakeProcess {
        fn run(&self, program: &Path, args: &[String]) -> Result<i32, Error> {
            self.calls
                .lock()
                .unwrap()
                .push((program.to_path_buf(), args.to_vec()));
            Ok(self.code)
        }
    }

    #[test]
    fn test_record_invokes_script_and_removes_capture_file() {
        let dir = tempfile::tempdir().unwrap();
        let capture = dir.path().join("capture.txt");
        std::fs::write(&capture, "$ ls\n").unwrap();

        let process = Arc::new(FakeProcess::new(0));
        let recorder = ScriptSessionRecorder::new(
            Arc::new(StdFileSystem),
            Arc::clone(&process) as Arc<dyn Process>,
            Arc::new(NoopLog),
        );
        let code = recorder.record(&capture).unwrap();

        assert_eq!(code, 0);
        assert!(!capture.exists());
        let calls = process.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, PathBuf::from("script"));
        assert_eq!(calls[0].1, vec!["-f".to_string(), capture.display().to_string()]);
    }

    #[test]
    fn test_record_without_capture_file_skips_removal() {
        let dir = tempfile::tempdir().unwrap();
        let capture = dir.path().join("never_created.txt");
        let recorder = ScriptSessionRecorder::new(
            Arc::new(StdFileSystem),
            Arc::new(FakeProcess::new(2)),
            Arc::new(NoopLog),
        );
        let code = recorder.record(&capture).unwrap();
        assert_eq!(code, 2);
    }
}
