//! キャプチャ出力によるマーカー展開（ContextExpander 実装）
//!
//! キャプチャファイルを区切り文字列で分割し、最後のセグメント
//! （＝直近のコマンド出力）だけをクエリに差し込む。

use crate::config::OutputSettings;
use crate::domain::{Query, CONTEXT_MARKER};
use crate::error::Error;
use crate::ports::outbound::{ContextExpander, FileSystem};
use std::sync::Arc;

/// キャプチャファイルを読んでマーカーを展開する ContextExpander 実装
pub struct CapturedOutputExpander {
    fs: Arc<dyn FileSystem>,
}

impl CapturedOutputExpander {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }
}

impl ContextExpander for CapturedOutputExpander {
    fn expand(&self, query: &Query, output: &OutputSettings) -> Result<String, Error> {
        if !query.wants_context() {
            return Ok(query.to_string());
        }

        if !self.fs.exists(&output.file) {
            return Err(Error::context_unavailable(format!(
                "Output file {} does not exist, change location of file in config to use '{}'.",
                output.file.display(),
                CONTEXT_MARKER
            )));
        }

        let contents = self.fs.read_to_string(&output.file)?;
        // 区切りが空文字列の場合は分割できないため全文を使う
        let segment = if output.prompt_separator.is_empty() {
            contents.trim()
        } else {
            contents
                .split(output.prompt_separator.as_str())
                .last()
                .unwrap_or("")
                .trim()
        };

        let stripped = query.replace(CONTEXT_MARKER, "");
        Ok(format!("Context data: {}\nQuestion: {}", segment, stripped))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::StdFileSystem;
    use std::path::PathBuf;

    fn output_settings(file: PathBuf, separator: &str) -> OutputSettings {
        OutputSettings {
            enforce_capture: false,
            file,
            prompt_separator: separator.to_string(),
        }
    }

    fn expander() -> CapturedOutputExpander {
        CapturedOutputExpander::new(Arc::new(StdFileSystem))
    }

    #[test]
    fn test_query_without_marker_is_unchanged() {
        let settings = output_settings(PathBuf::from("/nonexistent/capture.txt"), "$");
        let result = expander()
            .expand(&Query::new("what is this"), &settings)
            .unwrap();
        assert_eq!(result, "what is this");
    }

    #[test]
    fn test_missing_capture_file_is_fatal() {
        let settings = output_settings(PathBuf::from("/nonexistent/capture.txt"), "$");
        let err = expander()
            .expand(&Query::new("^ what is this"), &settings)
            .unwrap_err();
        assert!(matches!(err, Error::ContextUnavailable(_)));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_trailing_prompt_yields_empty_context() {
        let dir = tempfile::tempdir().unwrap();
        let capture = dir.path().join("capture.txt");
        std::fs::write(&capture, "$ ls\nfile.txt\n$ ").unwrap();
        let settings = output_settings(capture, "$");
        let result = expander()
            .expand(&Query::new("^ what is this"), &settings)
            .unwrap();
        assert_eq!(result, "Context data: \nQuestion:  what is this");
    }

    #[test]
    fn test_only_last_segment_is_used() {
        let dir = tempfile::tempdir().unwrap();
        let capture = dir.path().join("capture.txt");
        std::fs::write(&capture, "$ echo one\none\n$ echo two\ntwo\n").unwrap();
        let settings = output_settings(capture, "$");
        let result = expander()
            .expand(&Query::new("what happened? ^"), &settings)
            .unwrap();
        assert_eq!(
            result,
            "Context data: echo two\ntwo\nQuestion: what happened? "
        );
    }

    #[test]
    fn test_all_marker_occurrences_are_stripped() {
        let dir = tempfile::tempdir().unwrap();
        let capture = dir.path().join("capture.txt");
        std::fs::write(&capture, "$ pwd\n/home\n").unwrap();
        let settings = output_settings(capture, "$");
        let result = expander()
            .expand(&Query::new("^where^ am I^"), &settings)
            .unwrap();
        assert_eq!(result, "Context data: pwd\n/home\nQuestion: where am I");
    }

    #[test]
    fn test_empty_separator_uses_whole_file() {
        let dir = tempfile::tempdir().unwrap();
        let capture = dir.path().join("capture.txt");
        std::fs::write(&capture, "  all of it  ").unwrap();
        let settings = output_settings(capture, "");
        let result = expander().expand(&Query::new("^ why"), &settings).unwrap();
        assert_eq!(result, "Context data: all of it\nQuestion:  why");
    }
}
