//! 会話履歴のドメイン型
//!
//! エントリは追記専用・時系列順で、一度書かれたら変更しない。

use serde::{Deserialize, Serialize};

/// 履歴の 1 エントリ（role は "user" / "assistant"）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub role: String,
    pub content: String,
}

impl HistoryEntry {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let u = HistoryEntry::user("hi");
        assert_eq!(u.role, "user");
        assert_eq!(u.content, "hi");
        let a = HistoryEntry::assistant("hello");
        assert_eq!(a.role, "assistant");
    }

    #[test]
    fn test_serde_shape() {
        let entries = vec![HistoryEntry::user("hi"), HistoryEntry::assistant("hello")];
        let json = serde_json::to_string(&entries).unwrap();
        assert_eq!(
            json,
            r#"[{"role":"user","content":"hi"},{"role":"assistant","content":"hello"}]"#
        );
        let back: Vec<HistoryEntry> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entries);
    }
}
