mod adapter;
mod cli;
mod config;
mod domain;
mod error;
mod ports;
mod usecase;
mod wiring;

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;
use std::process;

use adapter::load_or_create;
use cli::{config_to_command, parse_args, print_completion, CliConfig, ParseOutcome};
use config::DEFAULT_CONFIG_PATH;
use domain::{Command, Query};
use error::Error;
use ports::inbound::UseCaseRunner;
use ports::outbound::{now_iso8601, LogLevel, LogRecord};
use wiring::{wire_app, App};

/// Command をディスパッチする Runner（match は main レイヤーに集約）
struct Runner {
    app: App,
}

impl Runner {
    fn log_lifecycle(&self, message: &str, command_name: &str, exit_code: Option<i32>) {
        let mut fields = BTreeMap::new();
        fields.insert("command".to_string(), serde_json::json!(command_name));
        if let Some(code) = exit_code {
            fields.insert("exit_code".to_string(), serde_json::json!(code));
        }
        let _ = self.app.log.log(&LogRecord {
            ts: now_iso8601(),
            level: LogLevel::Info,
            message: message.to_string(),
            fields: Some(fields),
        });
    }
}

impl UseCaseRunner for Runner {
    fn run(&self, config: CliConfig) -> Result<i32, Error> {
        let cmd = config_to_command(&config);
        let command_name = cmd_name_for_log(&cmd);
        self.log_lifecycle("command started", command_name, None);

        let config_path = config
            .config_path
            .as_deref()
            .unwrap_or(DEFAULT_CONFIG_PATH);

        let result = match cmd {
            Command::Help => {
                print_help();
                Ok(0)
            }
            Command::Record => {
                let settings = load_or_create(config_path, self.app.log.as_ref())?;
                self.app.record_use_case.run(&settings)
            }
            Command::Query { query } => {
                if query.trim().is_empty() {
                    Err(Error::invalid_argument(
                        "No query provided. Pass the question as arguments, e.g. 'shai how do I list files'.",
                    ))
                } else {
                    let settings = load_or_create(config_path, self.app.log.as_ref())?;
                    let output = self
                        .app
                        .query_use_case
                        .run(&settings, &Query::new(query))?;
                    println!("{}", output);
                    Ok(0)
                }
            }
        };

        let code = result.as_ref().copied().unwrap_or(0);
        self.log_lifecycle("command finished", command_name, Some(code));
        if let Err(ref e) = result {
            let _ = self
                .app
                .log
                .log(&LogRecord::new(LogLevel::Error, e.to_string()));
        }
        result
    }
}

fn cmd_name_for_log(cmd: &Command) -> &'static str {
    match cmd {
        Command::Help => "help",
        Command::Record => "record",
        Command::Query { .. } => "query",
    }
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("shai: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

pub fn run() -> Result<i32, Error> {
    let outcome = parse_args()?;
    let config = match outcome {
        ParseOutcome::Config(c) => c,
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(shell);
            return Ok(0);
        }
    };
    let app = wire_app();
    let runner = Runner { app };
    runner.run(config)
}

fn print_usage() {
    eprintln!("Usage: shai [options] [message...]");
}

fn print_help() {
    println!("Usage: shai [options] [message...]");
    println!("Options:");
    println!("  -h, --help              Show this help message");
    println!("  -r, --record            Start a terminal capture session (script). Command output");
    println!("                          recorded this way can be referenced from a query with '^'.");
    println!("  -c, --config <path>     Use an alternative config file (default: {})", DEFAULT_CONFIG_PATH);
    println!("  --generate <shell>      Generate shell completion script (bash, zsh, fish)");
    println!();
    println!("Description:");
    println!("  Send a natural-language question to the configured AI backend and print the");
    println!("  answer with any referenced documents. A '^' in the question is replaced with");
    println!("  the output of the last command from the capture file.");
    println!();
    println!("Examples:");
    println!("  shai how do I list files");
    println!("  shai --record");
    println!("  shai '^' what does this output mean");
}
