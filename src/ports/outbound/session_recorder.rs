//! キャプチャセッション起動の Outbound ポート

use crate::error::Error;
use std::path::Path;

/// 端末のキャプチャセッションを開始する能力
///
/// 端末の制御はユーザーに委ねたまま、セッション終了まで戻らない。
pub trait SessionRecorder: Send + Sync {
    fn record(&self, capture_file: &Path) -> Result<i32, Error>;
}
