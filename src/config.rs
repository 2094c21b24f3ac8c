//! 設定ファイル（TOML）のスキーマとデフォルト
//!
//! serde 用の Raw 構造体でパースし、欠けたキーをデフォルトで埋めてから
//! クリーンな `Settings` に変換する。ファイル I/O と `~` 展開は
//! `adapter::settings_loader` が行い、ここでは型と parse のみ。

use crate::error::Error;
use serde::Deserialize;
use std::path::PathBuf;

/// デフォルトの設定ファイルパス（`~` は読み込み時に展開）
pub const DEFAULT_CONFIG_PATH: &str = "~/.config/shai/config.toml";

const DEFAULT_OUTPUT_FILE: &str = "/tmp/shai_output.txt";
const DEFAULT_PROMPT_SEPARATOR: &str = "$";
const DEFAULT_HISTORY_FILE: &str = "~/.local/share/shai/history.json";
const DEFAULT_HISTORY_MAX_SIZE: usize = 100;
const DEFAULT_ENDPOINT: &str = "http://0.0.0.0:8080/v1/query/";

/// 設定全体。起動時に一度だけ読み込み、以後は参照渡しのまま不変。
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub output: OutputSettings,
    pub history: HistorySettings,
    pub backend: BackendSettings,
}

/// `[output]`: キャプチャファイル関連の設定
#[derive(Debug, Clone, PartialEq)]
pub struct OutputSettings {
    /// true の場合、キャプチャファイルが無い限りクエリを拒否する
    pub enforce_capture: bool,
    /// キャプチャセッション（script）の出力先
    pub file: PathBuf,
    /// キャプチャファイル内のプロンプト区切り文字列
    pub prompt_separator: String,
}

/// `[history]`: 会話履歴の設定
#[derive(Debug, Clone, PartialEq)]
pub struct HistorySettings {
    pub enabled: bool,
    pub file: PathBuf,
    /// 読み込み時に履歴から取り出す最大件数。書き込みは無制限。
    pub max_size: usize,
}

/// `[backend]`: 推論バックエンドの設定
#[derive(Debug, Clone, PartialEq)]
pub struct BackendSettings {
    pub endpoint: String,
}

/// serde 用の内部構造（全キー省略可）
#[derive(Debug, Default, Deserialize)]
struct SettingsRaw {
    output: Option<OutputRaw>,
    history: Option<HistoryRaw>,
    backend: Option<BackendRaw>,
}

#[derive(Debug, Default, Deserialize)]
struct OutputRaw {
    enforce_capture: Option<bool>,
    file: Option<String>,
    prompt_separator: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct HistoryRaw {
    enabled: Option<bool>,
    file: Option<String>,
    max_size: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
struct BackendRaw {
    endpoint: Option<String>,
}

impl Settings {
    /// TOML 文字列からパースする。欠けたキー・テーブルはデフォルト値になる。
    pub fn parse(text: &str) -> Result<Self, Error> {
        let raw: SettingsRaw = toml::from_str(text)
            .map_err(|e| Error::config(format!("Invalid config file: {}", e)))?;
        Ok(raw.into())
    }

    /// 新規作成時に書き出す設定テンプレート。
    /// TOML ライタではコメントを残せないのでテキストとして組み立てる。
    pub fn default_template() -> String {
        format!(
            r#"[output]
# otherwise recording via capture session will be enforced
enforce_capture = {enforce_capture}
# file with output(s) of regular commands (e.g. ls, echo, etc.)
file = "{output_file}"
# keep non-empty if your file contains only output of commands (not prompt itself)
prompt_separator = "{prompt_separator}"

[history]
enabled = {enabled}
file = "{history_file}"
# max number of entries read back from history (including responses)
max_size = {max_size}

[backend]
endpoint = "{endpoint}"
"#,
            enforce_capture = false,
            output_file = DEFAULT_OUTPUT_FILE,
            prompt_separator = DEFAULT_PROMPT_SEPARATOR,
            enabled = true,
            history_file = DEFAULT_HISTORY_FILE,
            max_size = DEFAULT_HISTORY_MAX_SIZE,
            endpoint = DEFAULT_ENDPOINT,
        )
    }
}

impl Default for Settings {
    fn default() -> Self {
        SettingsRaw::default().into()
    }
}

impl From<SettingsRaw> for Settings {
    fn from(raw: SettingsRaw) -> Self {
        let output = raw.output.unwrap_or_default();
        let history = raw.history.unwrap_or_default();
        let backend = raw.backend.unwrap_or_default();
        Settings {
            output: OutputSettings {
                enforce_capture: output.enforce_capture.unwrap_or(false),
                file: PathBuf::from(
                    output.file.unwrap_or_else(|| DEFAULT_OUTPUT_FILE.to_string()),
                ),
                prompt_separator: output
                    .prompt_separator
                    .unwrap_or_else(|| DEFAULT_PROMPT_SEPARATOR.to_string()),
            },
            history: HistorySettings {
                enabled: history.enabled.unwrap_or(true),
                file: PathBuf::from(
                    history.file.unwrap_or_else(|| DEFAULT_HISTORY_FILE.to_string()),
                ),
                max_size: history.max_size.unwrap_or(DEFAULT_HISTORY_MAX_SIZE),
            },
            backend: BackendSettings {
                endpoint: backend.endpoint.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            },
        }
    }
}
