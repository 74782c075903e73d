use anyhow::Result;
use clap::Parser;
use decoy_gen::core::cli::Cli;
use decoy_gen::core::config::AppConfig;
use decoy_gen::core::rng::{RandomSource, SeededRandomSource, ThreadRandomSource};
use decoy_gen::core::time::{SystemTimeProvider, TimeProvider};
use decoy_gen::infrastructure::logging::init_logging;
use decoy_gen::services::identity::IdentityGenerator;
use decoy_gen::services::names::get_name_source;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging("decoy-gen", cli.log_file)?;

    let config = AppConfig::from_cli(&cli)?;
    info!("Starting decoy-gen");

    let source = get_name_source(&config);
    let (first_names, last_names) = source.load().await?;

    let mut rng: Box<dyn RandomSource> = match config.seed {
        Some(seed) => Box::new(SeededRandomSource::new(seed)),
        None => Box::new(ThreadRandomSource),
    };
    let clock = SystemTimeProvider;

    for i in 0..config.count {
        let record = IdentityGenerator::generate(
            &first_names,
            &last_names,
            clock.today(),
            rng.as_mut(),
        )?;

        match config.format.as_str() {
            "json" => println!("{}", serde_json::to_string(&record)?),
            _ => {
                if i > 0 {
                    println!();
                }
                println!("{}", record.to_text());
            }
        }
    }

    info!("Generated {} identity record(s)", config.count);
    Ok(())
}
