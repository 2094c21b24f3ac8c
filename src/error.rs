//! エラーハンドリング
//!
//! 終了コードと対になる単一のエラー型。クエリパイプラインの致命的失敗
//! （キャプチャ欠如・バックエンド到達不能）は exit 1、それ以外は
//! sysexits 風のコードに割り当てる。

/// プロセス全体で使うエラー型
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// `^` 展開に必要なキャプチャファイルが無い（exit 1）
    #[error("{0}")]
    ContextUnavailable(String),
    /// バックエンド呼び出しの失敗（接続・タイムアウト・非 2xx、exit 1）
    #[error("{0}")]
    BackendUnreachable(String),
    /// CLI の使い方の誤り（exit 64）
    #[error("{0}")]
    InvalidArgument(String),
    /// JSON の変換失敗（exit 65）
    #[error("{0}")]
    Json(String),
    /// I/O 失敗（exit 74）
    #[error("{0}")]
    Io(String),
    /// 設定ファイルの読み込み・解析失敗（exit 78）
    #[error("{0}")]
    Config(String),
}

impl Error {
    pub fn context_unavailable(msg: impl Into<String>) -> Self {
        Error::ContextUnavailable(msg.into())
    }

    pub fn backend_unreachable(msg: impl Into<String>) -> Self {
        Error::BackendUnreachable(msg.into())
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    pub fn io_msg(msg: impl Into<String>) -> Self {
        Error::Io(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// このエラーで終了する場合のプロセス終了コード
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::ContextUnavailable(_) | Error::BackendUnreachable(_) => 1,
            Error::InvalidArgument(_) => 64,
            Error::Json(_) => 65,
            Error::Io(_) => 74,
            Error::Config(_) => 78,
        }
    }

    /// 使い方の誤りか（true なら usage を表示する）
    pub fn is_usage(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e.to_string())
    }
}
