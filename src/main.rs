use clap::Parser;
use std::io::{self, Write};
use tecnica_cli::{check, classify, cli, config, error, logging, report, trip};
use cli::{Cli, Commands};
use config::Config;
use error::{Result, TecnicaError};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let Some(command) = cli.command else {
        // サブコマンドなし: 標準入力1行を分類
        let stdin = io::stdin();
        classify::run_classifier(stdin.lock(), io::stdout().lock())?;
        return Ok(());
    };

    match command {
        Commands::Check { values, json } => {
            check::run_check(&values, json, io::stdout().lock())?;
        }

        Commands::Techniques => {
            classify::list_techniques(io::stdout().lock())?;
        }

        Commands::Trip { legs, file, presets, mode, interactive, json } => {
            let config = Config::load()?;

            let mut trip = trip::build_trip(&config, file.as_deref(), &legs, &presets, mode)?;
            if interactive {
                println!("🌱 tecnica - calculadora de CO₂\n");
                trip::run_interactive(&mut trip)?;
            }

            if trip.is_empty() {
                return Err(TecnicaError::EmptyTrip);
            }
            tracing::info!(legs = trip.legs().len(), "trip built");

            let stdout = io::stdout().lock();
            if json {
                report::write_json_report(stdout, &trip, &config.carbon_credit)?;
            } else {
                report::write_report(stdout, &trip, &config.carbon_credit)?;
            }
        }

        Commands::Config { show, set_kg_per_credit, set_price_range } => {
            let mut config = Config::load()?;
            let changed = config.apply_updates(set_kg_per_credit, set_price_range.as_deref())?;

            if changed {
                config.save()?;
                println!("✔ Configuração salva: {}", Config::config_path()?.display());
            }

            if show || !changed {
                let mut out = io::stdout().lock();
                writeln!(out, "Configuração:")?;
                writeln!(out, "  Arquivo: {}", Config::config_path()?.display())?;
                writeln!(out, "{}", serde_json::to_string_pretty(&config)?)?;
            }
        }
    }

    Ok(())
}
