use clap::Parser;
use greet_calc::utils::{logger, validation::Validate};
use greet_calc::{CliConfig, Runner};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting greet-calc");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let run_config = match config.resolve() {
        Ok(run_config) => run_config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let runner = Runner::new(run_config);
    let stdout = std::io::stdout();
    let sum = match runner.run(&mut stdout.lock()) {
        Ok(sum) => sum,
        Err(e) => {
            tracing::error!("Failed to write output: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Finished, sum = {}", sum);
    Ok(())
}
