//! 推論バックエンド呼び出しの Outbound ポート

use crate::domain::{BackendAnswer, QueryPayload};
use crate::error::Error;

/// バックエンドへペイロードを送り、回答を受け取る能力
///
/// 実装は 1 回の呼び出しにつき 1 回だけ試行する（リトライしない）。
pub trait QueryBackend: Send + Sync {
    fn send(&self, endpoint: &str, payload: &QueryPayload) -> Result<BackendAnswer, Error>;
}
