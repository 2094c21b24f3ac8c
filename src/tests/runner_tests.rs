//! Runner レベルのテスト（標準アダプタで組み立てて入口から実行する）

use crate::cli::CliConfig;
use crate::ports::inbound::UseCaseRunner;
use crate::wiring;

/// 標準アダプターで App を組み立て、Runner で run する（テスト用の入口）
fn run_app(config: CliConfig) -> Result<i32, crate::error::Error> {
    let app = wiring::wire_app();
    let runner = crate::Runner { app };
    runner.run(config)
}

#[test]
fn test_run_app_with_help() {
    let config = CliConfig {
        help: true,
        ..Default::default()
    };
    let result = run_app(config);
    assert!(result.is_ok());
    assert_eq!(result.unwrap(), 0);
}

#[test]
fn test_run_app_without_query() {
    // 引数なしの shai → クエリ未指定エラー（設定ファイルにも触れない）
    let config = CliConfig::default();
    let result = run_app(config);
    assert!(result.is_err());
    let err = result.unwrap_err();
    assert!(
        err.to_string().contains("No query provided"),
        "expected 'No query provided', got: {}",
        err
    );
    assert_eq!(err.exit_code(), 64);
}

#[test]
fn test_run_app_with_blank_query() {
    let config = CliConfig {
        message_args: vec!["   ".to_string()],
        ..Default::default()
    };
    let err = run_app(config).unwrap_err();
    assert!(err.is_usage());
}
