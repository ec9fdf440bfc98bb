mod cli;

use anyhow::{Context, Result};
use cli::CommandLine;
use menagerie::{
    create_animal, run_routine, save_animals_to_file, Animal, BackgroundScheduler, Dog, Kennel,
    ShutdownOutcome, Species, StatusReport, ZooConfig,
};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const BACKGROUND_MESSAGE: &str = "[BG] did something probably important";

#[tokio::main]
async fn main() -> Result<()> {
    let cli = CommandLine::parse_args();
    init_logging(&cli.log_level);

    let config = ZooConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    let config = cli.apply(config);
    debug!(?config, "configuration loaded");

    let animals: Vec<Box<dyn Animal>> = vec![
        create_animal(Species::Dog, "Loki"),
        create_animal(Species::Cat, "Ziggy"),
        create_animal(Species::Rabbit, "Sooty"),
    ];

    println!("Start:");

    // Background task: fire once, drained at the end
    let scheduler = BackgroundScheduler::new();
    scheduler
        .schedule_once(config.background_delay(), || {
            println!("{}", BACKGROUND_MESSAGE);
        })
        .context("Failed to schedule background task")?;

    for animal in &animals {
        for line in run_routine(animal.as_ref()) {
            println!("{}", line);
        }
        println!();
    }

    let bill = config.country().calculate_tax(config.gross);
    println!("Tax rough calc: {}", bill);

    // Failure is reported inside and does not stop the run
    save_animals_to_file(&config.output_path, &animals);

    print!("{}", StatusReport::new(config.report_lines.iter().cloned()).render());

    let mut kennel = Kennel::new(config.kennel_address.clone());
    kennel.add_dog(Dog::new("Buddy"));
    println!("Kennel has {} dog(s).", kennel.dog_count());

    match scheduler.shutdown(config.drain_timeout()).await {
        ShutdownOutcome::Drained => info!("all background work finished"),
        ShutdownOutcome::Forced { unfinished } => {
            info!(unfinished, "background work cut short")
        }
    }

    Ok(())
}

/// Logs go to stderr so stdout stays the demo transcript
fn init_logging(default_level: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
