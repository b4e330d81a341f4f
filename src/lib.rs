pub mod api;
pub mod cli;
pub mod config;
pub mod database;
pub mod domain;
pub mod errors;
pub mod report;
pub mod services;
pub mod standings;
pub mod transfer;

use anyhow::{Result, anyhow};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use log::info;
use std::io::{self, BufRead, Write};

use crate::cli::Cli;
use crate::config::AppConfig;
use crate::domain::Side;
use crate::services::server::ServerService;
use crate::services::tournament::TournamentService;

pub fn interpret() -> Cli {
    Cli::parse()
}

pub fn build_config(cli: &Cli) -> AppConfig {
    AppConfig::new()
        .with_players(cli.players.clone())
        .with_database_path(cli.database.clone())
}

pub fn open_tournament(config: &AppConfig) -> Result<TournamentService> {
    let pool = database::create_pool(&config.storage.database_path)?;
    TournamentService::open(config, pool)
}

pub fn handle_standings(config: &AppConfig) -> Result<()> {
    let tournament = open_tournament(config)?;
    print!("{}", report::render_standings(&tournament.standings()));
    Ok(())
}

pub fn handle_matches(config: &AppConfig) -> Result<()> {
    let tournament = open_tournament(config)?;
    print!("{}", report::render_matches(tournament.matches()));
    Ok(())
}

pub fn handle_score(
    config: &AppConfig,
    match_number: usize,
    frame: usize,
    side: Side,
    value: Option<u32>,
) -> Result<()> {
    let mut tournament = open_tournament(config)?;
    tournament.apply_score_edit(
        to_index(match_number, "Match")?,
        to_index(frame, "Frame")?,
        side,
        value,
    )?;
    print!("{}", report::render_standings(&tournament.standings()));
    Ok(())
}

pub fn handle_high_break(
    config: &AppConfig,
    match_number: usize,
    value: Option<u32>,
    player: Option<String>,
) -> Result<()> {
    let mut tournament = open_tournament(config)?;
    tournament.apply_high_break_edit(to_index(match_number, "Match")?, value, player)?;
    print!("{}", report::render_standings(&tournament.standings()));
    Ok(())
}

pub fn handle_reset(config: &AppConfig, skip_confirmation: bool) -> Result<()> {
    let confirmed = skip_confirmation
        || confirm("Are you sure you want to reset the tournament? This will clear all scores.")?;
    if !confirmed {
        println!("Reset cancelled");
        return Ok(());
    }

    let mut tournament = open_tournament(config)?;
    tournament.reset()?;
    println!("Tournament reset");
    Ok(())
}

pub fn handle_export(config: &AppConfig, output: Option<String>) -> Result<()> {
    let tournament = open_tournament(config)?;
    let path = output.unwrap_or_else(|| config.storage.export_file_name.to_string());
    tournament.export_file(&path)?;
    println!("Tournament data exported to {}", path);
    Ok(())
}

pub fn handle_import(config: &AppConfig, path: &str) -> Result<()> {
    let mut tournament = open_tournament(config)?;
    let count = tournament.import_file(path)?;
    println!("Tournament data imported successfully! ({} matches)", count);
    Ok(())
}

pub fn handle_serve(config: &AppConfig, port: u16) -> Result<()> {
    let tournament = open_tournament(config)?;
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = ServerService::new(port, tournament, config.storage.export_file_name);
        service.run().await
    })
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut io::stdout());
    Ok(())
}

fn to_index(number: usize, what: &str) -> Result<usize> {
    number
        .checked_sub(1)
        .ok_or_else(|| anyhow!("{} numbers start at 1", what))
}

fn confirm(question: &str) -> Result<bool> {
    print!("{} [y/N] ", question);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    let confirmed = matches!(answer.trim().to_lowercase().as_str(), "y" | "yes");
    info!("Reset confirmation answered: {}", confirmed);
    Ok(confirmed)
}
