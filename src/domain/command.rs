//! CLI から解決された実行コマンド

/// 1 回の起動で実行するコマンド
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    /// キャプチャセッション（script）を開始する
    Record,
    /// クエリをバックエンドへ送る
    Query { query: String },
}
