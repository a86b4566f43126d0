use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use carquote_core::{Coverage, ImagePayload, PremiumTable};
use carquote_vision::{QuoteSession, Selection, VisionClient, VisionConfig};
use clap::{Parser, Subcommand, ValueEnum};

mod display;

#[derive(Parser, Debug)]
#[command(name = "carquote", version, about = "Vehicle insurance quotes from a photo")]
struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    json: bool,
    #[arg(
        long,
        global = true,
        env = "CV_PREDICTION_URL",
        help = "Custom Vision prediction endpoint"
    )]
    prediction_url: Option<String>,
    #[arg(
        long,
        global = true,
        env = "CV_PREDICTION_KEY",
        hide_env_values = true,
        help = "Custom Vision prediction key"
    )]
    prediction_key: Option<String>,
    #[arg(long, global = true, env = "CV_PROJECT_ID")]
    project_id: Option<String>,
    #[arg(long, global = true, env = "CV_PUBLISHED_NAME")]
    published_name: Option<String>,
    #[arg(
        long,
        global = true,
        env = "CV_TIMEOUT_SECS",
        help = "Abort a prediction request after this many seconds"
    )]
    timeout_secs: Option<u64>,
    #[arg(long, global = true, value_enum, default_value_t = SelectionArg::First)]
    selection: SelectionArg,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Guess the vehicle type in an image.
    Classify { image: PathBuf },
    /// Classify an image and estimate its premium.
    Quote {
        image: PathBuf,
        #[arg(long, default_value = "comprehensive")]
        coverage: Coverage,
    },
    /// Estimate a premium for a vehicle type without classifying.
    Estimate { label: Option<String> },
    /// List coverage options.
    Coverages,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SelectionArg {
    First,
    Highest,
}

impl Cli {
    fn vision_config(&self) -> VisionConfig {
        VisionConfig {
            prediction_url: self.prediction_url.clone(),
            project_id: self.project_id.clone(),
            published_name: self.published_name.clone(),
            prediction_key: self.prediction_key.clone(),
            timeout: self.timeout_secs.map(Duration::from_secs),
            selection: match self.selection {
                SelectionArg::First => Selection::First,
                SelectionArg::Highest => Selection::HighestProbability,
            },
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    let cli = Cli::parse();
    tracing::debug!("carquote v{}", env!("CARGO_PKG_VERSION"));

    match &cli.command {
        Commands::Classify { image } => {
            let payload = load_image(image)?;
            let client = VisionClient::new(cli.vision_config());
            let result = client.classify(&payload).await?;
            display::print_classification(&result, cli.json)?;
        }
        Commands::Quote { image, coverage } => {
            let payload = load_image(image)?;
            let mut session = QuoteSession::new(VisionClient::new(cli.vision_config()));
            session.set_coverage(*coverage);
            session.select_image(payload);
            session.classify().await?;
            if let Some(quote) = session.quote() {
                display::print_quote(&quote, cli.json)?;
            }
        }
        Commands::Estimate { label } => {
            let amount = PremiumTable::STANDARD.estimate(label.as_deref());
            display::print_estimate(label.as_deref(), amount, cli.json)?;
        }
        Commands::Coverages => display::print_coverages(cli.json)?,
    }

    Ok(())
}

fn load_image(path: &std::path::Path) -> anyhow::Result<ImagePayload> {
    ImagePayload::from_path(path).with_context(|| format!("loading {}", path.display()))
}
