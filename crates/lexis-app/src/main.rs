use std::process::ExitCode;

use clap::Parser;
use lexis_app::bootstrap;
use lexis_app::cli::{self, Cli, Outcome};
use tracing_subscriber::EnvFilter;

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    let config = bootstrap::load_config(cli.config.as_deref())?;
    let registry = bootstrap::default_registry(&config)?;

    match cli::run(&cli, &registry).await? {
        Outcome::Sources(sources) => {
            for source in sources {
                println!("{source}");
            }
        }
        Outcome::Found(word) => {
            println!("{}", cli::render(&word, cli.pretty)?);
        }
        Outcome::NotFound { word, source } => {
            eprintln!("`{word}` was not found in {source}");
            return Ok(ExitCode::FAILURE);
        }
    }

    Ok(ExitCode::SUCCESS)
}
