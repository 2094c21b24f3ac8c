//! ユーザークエリのドメイン型

/// クエリ中でキャプチャ出力への置換を指示する予約文字
pub const CONTEXT_MARKER: char = '^';

/// ユーザーが入力した生のクエリ文字列
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// キャプチャ出力の差し込みを要求しているか
    pub fn wants_context(&self) -> bool {
        self.0.contains(CONTEXT_MARKER)
    }
}

impl std::ops::Deref for Query {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for Query {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
