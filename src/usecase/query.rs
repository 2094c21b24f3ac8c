//! クエリディスパッチのユースケース
//!
//! 展開 → 履歴読み込み → 送信 → 整形 → 永続化 の直列パイプライン。
//! 分岐して戻るステートマシンではなく、`?` で上から下へ合成する。
//! 履歴の永続化失敗は警告ログに留め、回答の表示は妨げない。

use crate::config::Settings;
use crate::domain::{HistoryEntry, Query, QueryPayload};
use crate::error::Error;
use crate::ports::outbound::{
    ContextExpander, FileSystem, HistoryRepository, Log, LogLevel, LogRecord, QueryBackend,
};
use std::sync::Arc;

/// クエリ 1 回分を実行するユースケース
pub struct QueryUseCase {
    fs: Arc<dyn FileSystem>,
    context_expander: Arc<dyn ContextExpander>,
    history: Arc<dyn HistoryRepository>,
    backend: Arc<dyn QueryBackend>,
    log: Arc<dyn Log>,
}

impl QueryUseCase {
    pub fn new(
        fs: Arc<dyn FileSystem>,
        context_expander: Arc<dyn ContextExpander>,
        history: Arc<dyn HistoryRepository>,
        backend: Arc<dyn QueryBackend>,
        log: Arc<dyn Log>,
    ) -> Self {
        Self {
            fs,
            context_expander,
            history,
            backend,
            log,
        }
    }

    /// クエリを実行し、表示用の文字列（回答 + References フッタ）を返す。
    /// 履歴への書き込みはこの中で終えており、呼び出し側は表示するだけでよい。
    pub fn run(&self, settings: &Settings, query: &Query) -> Result<String, Error> {
        if settings.output.enforce_capture && !self.fs.exists(&settings.output.file) {
            return Err(Error::invalid_argument(format!(
                "Output capture is enforced but {} does not exist. Run 'shai --record' first.",
                settings.output.file.display()
            )));
        }

        let expanded = self.context_expander.expand(query, &settings.output)?;
        let _ = self.log.log(&LogRecord::new(
            LogLevel::Info,
            format!("Query: {}", expanded),
        ));

        let history = self.history.load(&settings.history)?;

        let payload = QueryPayload::new(expanded.clone());
        let _ = self.log.log(&LogRecord::new(
            LogLevel::Info,
            "Waiting for response from AI...",
        ));
        let answer = self.backend.send(&settings.backend.endpoint, &payload)?;

        let rendered = answer.render();

        // 履歴にはマーカー展開後のクエリを残す
        let mut entries = history;
        entries.push(HistoryEntry::user(expanded));
        if let Err(e) = self.history.save(&settings.history, entries, &answer.response) {
            let _ = self.log.log(&LogRecord::new(
                LogLevel::Warn,
                format!("Failed to write history: {}", e),
            ));
        }

        Ok(rendered)
    }
}
