//! 設定ファイルの読み込みと新規作成（adapter 層）
//!
//! 指定パスにファイルが無ければデフォルト値のテンプレートを書き出して
//! から読む。`output.file` と `history.file` の `~` はここで展開する。

use crate::config::Settings;
use crate::error::Error;
use crate::ports::outbound::{Log, LogLevel, LogRecord};
use std::path::{Path, PathBuf};

/// パス先頭の `~` をホームディレクトリに展開する
pub fn expand_tilde(path: &str) -> PathBuf {
    if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    } else if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

fn expand_tilde_path(path: &Path) -> PathBuf {
    expand_tilde(&path.to_string_lossy())
}

/// 設定ファイルを読み込む。無ければデフォルト値で作成してから読む。
pub fn load_or_create(config_path: &str, log: &dyn Log) -> Result<Settings, Error> {
    let path = expand_tilde(config_path);

    if !path.exists() {
        create_default(&path, log)?;
    }

    let text = std::fs::read_to_string(&path).map_err(|e| {
        Error::config(format!(
            "Failed to read config file '{}': {}",
            path.display(),
            e
        ))
    })?;
    let mut settings = Settings::parse(&text)?;

    // 設定に書かれたファイルパスを正規化
    settings.output.file = expand_tilde_path(&settings.output.file);
    settings.history.file = expand_tilde_path(&settings.history.file);
    Ok(settings)
}

fn create_default(path: &Path, log: &dyn Log) -> Result<(), Error> {
    let _ = log.log(&LogRecord::new(
        LogLevel::Info,
        format!("Creating new config file at {}", path.display()),
    ));
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                Error::config(format!(
                    "Failed to create config directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }
    std::fs::write(path, Settings::default_template()).map_err(|e| {
        Error::config(format!(
            "Failed to create config file '{}': {}",
            path.display(),
            e
        ))
    })
}
