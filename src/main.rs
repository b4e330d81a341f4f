use anyhow::Result;

use snooker_tournament::cli::Command;
use snooker_tournament::config::AppConfig;
use snooker_tournament::{
    build_config, handle_completions, handle_export, handle_high_break, handle_import,
    handle_matches, handle_reset, handle_score, handle_serve, handle_standings, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let cli = interpret();
    let config = build_config(&cli);
    execute_command(&cli.command, &config)
}

fn execute_command(command: &Command, config: &AppConfig) -> Result<()> {
    match command {
        Command::Standings => handle_standings(config),
        Command::Matches => handle_matches(config),
        Command::Score {
            match_number,
            frame,
            side,
            value,
        } => handle_score(config, *match_number, *frame, *side, *value),
        Command::HighBreak {
            match_number,
            value,
            player,
        } => handle_high_break(config, *match_number, *value, player.clone()),
        Command::Reset { yes } => handle_reset(config, *yes),
        Command::Export { output } => handle_export(config, output.clone()),
        Command::Import { path } => handle_import(config, path),
        Command::Serve { port } => handle_serve(config, *port),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
