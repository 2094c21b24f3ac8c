//! CLI レイヤー（引数解析と補完生成）

pub mod args;

pub use args::{
    config_to_command, parse_args, parse_args_from, print_completion, CliConfig, ParseOutcome,
};
