//! 会話履歴永続化の Outbound ポート

use crate::config::HistorySettings;
use crate::domain::HistoryEntry;
use crate::error::Error;

/// 会話履歴を読み書きする能力
pub trait HistoryRepository: Send + Sync {
    /// 履歴を読み込む。無効なら空。未作成・読めない・壊れている場合も
    /// 空として扱い、クエリを止めない。返す件数は max_size まで。
    fn load(&self, settings: &HistorySettings) -> Result<Vec<HistoryEntry>, Error>;

    /// 渡されたエントリ列全体を永続化する（件数制限なし）。
    /// `response` が非空なら assistant エントリを 1 件追記してから書く。
    fn save(
        &self,
        settings: &HistorySettings,
        entries: Vec<HistoryEntry>,
        response: &str,
    ) -> Result<(), Error>;
}
