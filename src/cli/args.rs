//! CLI 引数解析（clap builder）

use crate::domain::Command;
use crate::error::Error;
use clap::builder::ArgAction;
use clap::value_parser;
use clap_complete::Shell;

/// CLI から受け取った生の設定
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CliConfig {
    pub help: bool,
    pub record: bool,
    /// 設定ファイルパス（None ならデフォルトパス）
    pub config_path: Option<String>,
    pub message_args: Vec<String>,
}

/// 解析結果: 通常の CliConfig または補完スクリプト生成
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(CliConfig),
    GenerateCompletion(Shell),
}

fn build_clap_command() -> clap::Command {
    clap::Command::new("shai")
        .disable_help_flag(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Show this help message")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("record")
                .short('r')
                .long("record")
                .help("Start a terminal capture session (script) instead of sending a query")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("config")
                .short('c')
                .long("config")
                .value_name("path")
                .help("Use an alternative config file")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("generate")
                .long("generate")
                .value_name("shell")
                .help("Generate shell completion script (bash, zsh, fish)")
                .value_parser(value_parser!(Shell))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("message")
                .index(1)
                .help("Query words sent to the AI backend")
                .num_args(0..)
                .trailing_var_arg(true),
        )
}

fn matches_to_config(matches: &clap::ArgMatches) -> CliConfig {
    let help = matches.get_flag("help");
    let record = matches.get_flag("record");
    let config_path = matches.get_one::<String>("config").cloned();
    let message_args: Vec<String> = matches
        .get_many::<String>("message")
        .map(|i| i.cloned().collect())
        .unwrap_or_default();
    CliConfig {
        help,
        record,
        config_path,
        message_args,
    }
}

/// コマンドラインを解析する。補完生成が要求された場合は
/// ParseOutcome::GenerateCompletion を返す。
pub fn parse_args() -> Result<ParseOutcome, Error> {
    let cmd = build_clap_command();
    let matches = cmd
        .try_get_matches()
        .map_err(|e| Error::invalid_argument(e.to_string()))?;

    if let Some(&shell) = matches.get_one::<Shell>("generate") {
        return Ok(ParseOutcome::GenerateCompletion(shell));
    }

    Ok(ParseOutcome::Config(matches_to_config(&matches)))
}

/// テスト用: 引数スライスから解析する
#[allow(dead_code)]
pub fn parse_args_from(args: &[&str]) -> Result<CliConfig, Error> {
    let cmd = build_clap_command();
    let matches = cmd
        .try_get_matches_from(args)
        .map_err(|e| Error::invalid_argument(e.to_string()))?;
    Ok(matches_to_config(&matches))
}

/// CliConfig を実行コマンドに解決する
pub fn config_to_command(config: &CliConfig) -> Command {
    if config.help {
        Command::Help
    } else if config.record {
        Command::Record
    } else {
        Command::Query {
            query: config.message_args.join(" "),
        }
    }
}

/// 補完スクリプトを標準出力に出力する
pub fn print_completion(shell: Shell) {
    let mut cmd = build_clap_command();
    clap_complete::generate(shell, &mut cmd, "shai", &mut std::io::stdout());
}
