//! サブプロセス実行の Outbound ポート

use crate::error::Error;
use std::path::Path;

/// サブプロセス実行の抽象
///
/// 実装は `adapter::StdProcess`（std::process::Command）など。
pub trait Process: Send + Sync {
    /// プログラムを引数付きで実行し、終了コードを返す
    fn run(&self, program: &Path, args: &[String]) -> Result<i32, Error>;
}
