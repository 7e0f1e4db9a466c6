//! Relatório de tarefas no console: uma linha por tarefa com o nome do responsável.

use dotenv::dotenv;
use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;

use todoist_aggregator::{
    config::Config,
    services::{Aggregate, Aggregator, TodoistClient},
    utils::AppError,
};

/// Escreve o relatório só quando as três buscas deram certo; em erro nada vai para `out`
fn write_report(out: &mut impl Write, result: Result<Aggregate, AppError>) -> Result<(), String> {
    let aggregate = result.map_err(|e| e.to_string())?;
    for line in aggregate.report_lines() {
        writeln!(out, "{}", line).map_err(|e| format!("Failed to write report: {}", e))?;
    }
    out.flush().map_err(|e| format!("Failed to write report: {}", e))
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("warn"));

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e);
            return ExitCode::FAILURE;
        }
    };

    let client = match TodoistClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("❌ {}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = Aggregator::new(Arc::new(client), &config).aggregate().await;
    match write_report(&mut io::stdout().lock(), result) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}
