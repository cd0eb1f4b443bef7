use clap::Parser;
use tokio::io::BufReader;

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod probe;

use config::{app_config::load_config, model::ProbeRequest};
use probe::{engine::run_probes, report};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenvy::dotenv().ok();

    let args = cli::Args::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if args.verbose { "info" } else { "warn" }),
    )
    .init();

    let app_config = match load_config() {
        Ok(app_config) => app_config,
        Err(e) => {
            eprintln!("{}", report(&e));
            return;
        }
    };

    let mut stdin = BufReader::new(tokio::io::stdin());
    let input = match cli::collect_input(args, &app_config.defaults, &mut stdin).await {
        Ok(input) => input,
        Err(e) => {
            eprintln!("Failed to read input: {e}");
            return;
        }
    };

    let request = match ProbeRequest::from_input(&input) {
        Ok(request) => request,
        Err(e) => {
            log::debug!("Aborting run: {e:?}");
            println!("{e}");
            return;
        }
    };

    log::info!(
        "Sending {} probes to {}:{} (config {})",
        request.count,
        request.target.host,
        request.port,
        app_config.config_file
    );

    let results = run_probes(&request).await;
    output::print_report(&results);
}
