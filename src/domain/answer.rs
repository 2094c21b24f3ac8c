//! バックエンドの回答と参照ドキュメントの表示整形

use serde::Deserialize;

/// バックエンドのレスポンスボディ。欠けたフィールドは空として扱う。
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BackendAnswer {
    #[serde(default)]
    pub response: String,
    #[serde(default)]
    pub referenced_documents: Vec<ReferencedDocument>,
}

/// 回答が引用したドキュメント
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReferencedDocument {
    pub title: String,
    pub docs_url: String,
}

impl BackendAnswer {
    /// 回答本文に References フッタを連結した表示用文字列。
    /// 参照が無ければ本文のみ。
    pub fn render(&self) -> String {
        if self.referenced_documents.is_empty() {
            return self.response.clone();
        }
        let references = self
            .referenced_documents
            .iter()
            .map(|d| format!("{}: {}", d.title, d.docs_url))
            .collect::<Vec<_>>()
            .join("\n");
        format!("{}\n\nReferences:\n{}", self.response, references)
    }
}
