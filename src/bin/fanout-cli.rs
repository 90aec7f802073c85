use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "fanout-cli")]
#[command(about = "Call the fan-out demo services", long_about = None)]
struct Cli {
    /// Base URL of the target service.
    #[arg(short, long)]
    url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a greeting from the greeting service
    Greet,
    /// Fetch a name from the name service
    Name,
    /// Fetch the combined message from the aggregator
    Message,
    /// Call the aggregator's static endpoint
    Other,
    /// Call the aggregator's failing endpoint
    Fail,
}

impl Commands {
    fn default_url(&self) -> &'static str {
        match self {
            Commands::Greet => "http://localhost:5001",
            Commands::Name => "http://localhost:5002",
            Commands::Message | Commands::Other | Commands::Fail => "http://localhost:6000",
        }
    }

    fn path(&self) -> &'static str {
        match self {
            Commands::Greet => "/greet",
            Commands::Name => "/name",
            Commands::Message => "/",
            Commands::Other => "/other",
            Commands::Fail => "/fail",
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let base = cli
        .url
        .as_deref()
        .unwrap_or_else(|| cli.command.default_url())
        .trim_end_matches('/');

    let res = client
        .get(format!("{}{}", base, cli.command.path()))
        .send()
        .await?;
    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;

    if !status.is_success() {
        eprintln!("Error: service returned status {}", status);
        eprintln!("{}", text);
        return Ok(());
    }

    match serde_json::from_str::<serde_json::Value>(&text) {
        Ok(json) => println!("{}", serde_json::to_string_pretty(&json)?),
        Err(_) => println!("{}", text),
    }
    Ok(())
}
