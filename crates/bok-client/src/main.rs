use anyhow::bail;
use clap::Parser;

use bok_client::client::BokClient;
use bok_client::form::{FormController, SubmitOutcome};
use bok_client::notify::ConsoleNotifier;

/// Create a Body of Knowledge record.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Base URL of the BoK server
    #[arg(long, env = "BOK_SERVER", default_value = "http://localhost:3000")]
    server: String,

    #[arg(short, long, default_value = "")]
    title: String,

    #[arg(short, long, default_value = "")]
    description: String,

    /// Optional http:// or https:// link
    #[arg(short = 'u', long, default_value = "")]
    source_url: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bok=info,bok_client=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut form = FormController::new();
    form.set_title(cli.title);
    form.set_description(cli.description);
    form.set_source_url(cli.source_url);
    form.on_url_blur();

    if !form.url_error().is_empty() {
        bail!("{}", form.url_error());
    }

    let client = BokClient::new(&cli.server);
    match form.submit(&client, &ConsoleNotifier).await {
        SubmitOutcome::Succeeded(bok) => {
            println!("{}", serde_json::to_string_pretty(&bok)?);
            Ok(())
        }
        SubmitOutcome::Rejected(e) => bail!("{}", e),
        SubmitOutcome::Failed(e) => bail!("{}", e),
        SubmitOutcome::Blocked => bail!("submission blocked"),
    }
}
