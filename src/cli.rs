use clap::Parser;
use menagerie::ZooConfig;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "menagerie")]
#[command(about = "A small zoo: animals, a tax line, an export and a background task.")]
#[command(version = menagerie::VERSION)]
pub struct CommandLine {
    /// JSON config file; flags below override it
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Where to write the animal export
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Country code for the tax line (UK, FR, anything else = OTHER)
    #[arg(long)]
    pub country: Option<String>,

    /// Gross amount to compute tax on
    #[arg(long)]
    pub gross: Option<f64>,

    /// Delay before the background task runs
    #[arg(long)]
    pub bg_delay_ms: Option<u64>,

    /// How long shutdown waits for the background task
    #[arg(long)]
    pub drain_timeout_ms: Option<u64>,

    /// Log filter when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Layer flags over the loaded config
    pub fn apply(&self, mut config: ZooConfig) -> ZooConfig {
        if let Some(output) = &self.output {
            config.output_path = output.clone();
        }
        if let Some(country) = &self.country {
            config.country_code = Some(country.clone());
        }
        if let Some(gross) = self.gross {
            config.gross = gross;
        }
        if let Some(ms) = self.bg_delay_ms {
            config.background_delay_ms = ms;
        }
        if let Some(ms) = self.drain_timeout_ms {
            config.drain_timeout_ms = ms;
        }
        config
    }
}
