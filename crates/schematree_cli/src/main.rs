//! Interactive terminal front-end for the SchemaTree shell.
//!
//! # Responsibility
//! - Resolve configuration from flags and environment.
//! - Bind stdin lines to shell commands and print the resulting snapshot.

mod args;
mod input;
mod render;

use clap::Parser;
use log::info;
use schematree_core::db::{open_db, open_db_in_memory};
use schematree_core::{
    default_log_level, init_logging, Shell, ShellConfig, SqliteKeyValueStore, TitleLabels,
};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use args::{Cli, StorageTarget};
use input::{parse_line, ShellInput, HELP};
use render::render_snapshot;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("schematree: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir)?;
    }

    let conn = match cli.storage_target() {
        StorageTarget::Memory => open_db_in_memory(),
        StorageTarget::File(path) => open_db(path),
    }
    .map_err(|err| format!("cannot open storage: {err}"))?;
    let storage =
        SqliteKeyValueStore::try_new(&conn).map_err(|err| format!("storage not ready: {err}"))?;
    let config = ShellConfig {
        project_key: cli.project_key.clone(),
        theme_key: cli.theme_key.clone(),
        labels: TitleLabels::default(),
    };
    let mut shell = Shell::new(storage, config)?;
    info!(
        "event=cli_start module=cli status=ok in_memory={} version={}",
        cli.in_memory,
        schematree_core::core_version()
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    print_view(&mut stdout, &render_snapshot(&shell.snapshot()))?;

    for line in stdin.lock().lines() {
        let line = line.map_err(|err| format!("failed to read input: {err}"))?;
        match parse_line(&line) {
            Ok(ShellInput::Quit) => break,
            Ok(ShellInput::Help) => print_view(&mut stdout, HELP)?,
            Ok(ShellInput::Show) => print_view(&mut stdout, &render_snapshot(&shell.snapshot()))?,
            Ok(ShellInput::Commands(commands)) => {
                for command in commands {
                    shell.dispatch(command);
                }
                print_view(&mut stdout, &render_snapshot(&shell.snapshot()))?;
            }
            Err(err) => print_view(&mut stdout, &format!("? {err}"))?,
        }
    }

    info!("event=cli_exit module=cli status=ok");
    Ok(())
}

fn print_view(out: &mut impl Write, text: &str) -> Result<(), String> {
    writeln!(out, "{}", text.trim_end())
        .and_then(|()| write!(out, "> "))
        .and_then(|()| out.flush())
        .map_err(|err| format!("failed to write output: {err}"))
}
