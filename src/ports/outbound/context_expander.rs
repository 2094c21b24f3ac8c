//! コンテキスト展開の Outbound ポート
//!
//! クエリ中のマーカーをキャプチャ出力で置き換えた文字列を返す。

use crate::config::OutputSettings;
use crate::domain::Query;
use crate::error::Error;

/// クエリへキャプチャ出力を差し込む能力
pub trait ContextExpander: Send + Sync {
    /// マーカーが無ければクエリをそのまま返す。
    /// マーカーがあるのにキャプチャファイルが無い場合は致命的エラー。
    fn expand(&self, query: &Query, output: &OutputSettings) -> Result<String, Error>;
}
