//! バックエンドへ送るリクエストボディ

use serde::Serialize;

/// リクエストボディ `{"query": ...}`。フィールド追加の拡張点。
#[derive(Debug, Clone, Serialize)]
pub struct QueryPayload {
    pub query: String,
}

impl QueryPayload {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_shape() {
        let payload = QueryPayload::new("how do I list files");
        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(json, r#"{"query":"how do I list files"}"#);
    }
}
