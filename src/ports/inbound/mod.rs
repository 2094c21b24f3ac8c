//! Inbound ポート: CLI からユースケースを起動するための trait

use crate::cli::CliConfig;
use crate::error::Error;

/// CLI 設定を受け取りコマンドを実行する能力
pub trait UseCaseRunner {
    fn run(&self, config: CliConfig) -> Result<i32, Error>;
}
