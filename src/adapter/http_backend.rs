//! バックエンド HTTP クライアント（QueryBackend 実装）
//!
//! 固定 30 秒タイムアウトの blocking POST を 1 回だけ行う。接続失敗・
//! タイムアウト・非 2xx はすべて BackendUnreachable に分類する。

use crate::domain::{BackendAnswer, QueryPayload};
use crate::error::Error;
use crate::ports::outbound::QueryBackend;
use std::time::Duration;

/// バックエンド呼び出しのタイムアウト（これ以上待っても意味がない）
pub const BACKEND_TIMEOUT_SECS: u64 = 30;

/// reqwest::blocking でバックエンドを呼ぶ QueryBackend 実装
#[derive(Debug, Clone, Default)]
pub struct HttpQueryBackend;

impl HttpQueryBackend {
    pub fn new() -> Self {
        Self
    }
}

impl QueryBackend for HttpQueryBackend {
    fn send(&self, endpoint: &str, payload: &QueryPayload) -> Result<BackendAnswer, Error> {
        let body = serde_json::to_string(payload)?;
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(BACKEND_TIMEOUT_SECS))
            .build()
            .map_err(|e| Error::backend_unreachable(format!("Failed to build HTTP client: {}", e)))?;

        let response = client
            .post(endpoint)
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .map_err(|e| {
                Error::backend_unreachable(format!("Failed to get response from AI: {}", e))
            })?;

        let status = response.status();
        let text = response.text().map_err(|e| {
            Error::backend_unreachable(format!("Failed to read backend response: {}", e))
        })?;
        if !status.is_success() {
            return Err(Error::backend_unreachable(format!(
                "Backend returned HTTP {}: {}",
                status, text
            )));
        }

        parse_answer(&text)
    }
}

/// 2xx レスポンスの本文を解析する。response / referenced_documents は
/// 欠けていれば空として扱う。
pub(crate) fn parse_answer(body: &str) -> Result<BackendAnswer, Error> {
    serde_json::from_str(body)
        .map_err(|e| Error::backend_unreachable(format!("Failed to parse backend response: {}", e)))
}
