use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use folio_core::config::Config;
use folio_core::state::FolioState;
use folio_exec::GithubClient;

mod exec;
mod fetch;
mod logging;
mod rain;
#[cfg(test)]
mod testing;
mod ui;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Mode {
    Interactive,
    Exec(String),
    Help,
    Version,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliArgs {
    mode: Mode,
    config: Option<PathBuf>,
    no_welcome: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = match parse_args(env::args().skip(1).collect()) {
        Ok(args) => args,
        Err(err) => {
            print_help();
            return Err(err);
        }
    };

    match args.mode {
        Mode::Help => {
            print_help();
            Ok(())
        }
        Mode::Version => {
            println!("folio {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Mode::Exec(ref line) => {
            logging::init(logging::LogTarget::Stderr)?;
            let config = Config::load(args.config.as_deref())?;
            let client = GithubClient::new(config.github.api_base.clone(), &config.github.user_agent)?;
            let mut state = FolioState::new(config);
            for text in exec::run_line(&mut state, &client, line) {
                println!("{text}");
            }
            Ok(())
        }
        Mode::Interactive => {
            logging::init(logging::LogTarget::File)?;
            let mut config = Config::load(args.config.as_deref())?;
            if args.no_welcome {
                config.welcome.enabled = false;
            }
            let client = GithubClient::new(config.github.api_base.clone(), &config.github.user_agent)?;
            log::info!(
                "starting session (theme {}, account {})",
                config.ui.theme.label(),
                config.github.account
            );
            ui::run(FolioState::new(config), Arc::new(client))
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliArgs, Box<dyn std::error::Error>> {
    let mut parsed = CliArgs {
        mode: Mode::Interactive,
        config: None,
        no_welcome: false,
    };
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" | "help" => {
                parsed.mode = Mode::Help;
                return Ok(parsed);
            }
            "--version" | "-V" | "version" => {
                parsed.mode = Mode::Version;
                return Ok(parsed);
            }
            "--config" => {
                let Some(value) = args.get(i + 1) else {
                    return Err("--config requires a path".into());
                };
                parsed.config = Some(PathBuf::from(value));
                i += 2;
            }
            "--no-welcome" => {
                parsed.no_welcome = true;
                i += 1;
            }
            "exec" => {
                let line = args[i + 1..].join(" ");
                if line.trim().is_empty() {
                    return Err("exec requires a command line".into());
                }
                parsed.mode = Mode::Exec(line);
                return Ok(parsed);
            }
            other => {
                return Err(format!("unsupported argument: {other}").into());
            }
        }
    }
    Ok(parsed)
}

fn print_help() {
    println!("folio {}", env!("CARGO_PKG_VERSION"));
    println!("Usage:");
    println!("  folio [--config PATH] [--no-welcome]");
    println!("  folio [--config PATH] exec <command line>");
    println!("  folio --help");
    println!("  folio --version");
}
