//! クロスモジュールのテスト（スタブアダプタでパイプラインを検証）

mod runner_tests;
