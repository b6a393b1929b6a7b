use clap::{Parser, Subcommand};
use reqwest::Url;
use serde_json::Value;

#[derive(Parser)]
#[command(name = "vendor-cli")]
#[command(about = "Command-line client for the Vendor Service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:5005")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check service identity and status
    Health,
    /// List all vendors
    Vendors,
    /// Show one vendor
    Vendor { id: i64 },
    /// List materials, optionally for a single vendor
    Materials {
        #[arg(long)]
        vendor: Option<i64>,
    },
    /// Compare prices for a material across vendors, cheapest first
    Compare { material: String },
}

impl Commands {
    /// Path segments of the endpoint. Each segment is percent-encoded when
    /// appended, so a material name cannot alter the route.
    fn segments(&self) -> Vec<String> {
        match self {
            Commands::Health => Vec::new(),
            Commands::Vendors => vec!["vendors".into()],
            Commands::Vendor { id } => vec!["vendors".into(), id.to_string()],
            Commands::Materials { vendor: None } => vec!["vendor-materials".into()],
            Commands::Materials { vendor: Some(id) } => {
                vec!["vendors".into(), id.to_string(), "materials".into()]
            }
            Commands::Compare { material } => vec![
                "materials".into(),
                "price-comparison".into(),
                material.clone(),
            ],
        }
    }

    fn url(&self, base: &str) -> Result<Url, Box<dyn std::error::Error>> {
        let mut url = Url::parse(base)?;
        url.path_segments_mut()
            .map_err(|_| format!("'{base}' cannot be used as a base URL"))?
            .pop_if_empty()
            .extend(self.segments());
        Ok(url)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let url = cli.command.url(&cli.url)?;
    let res = client.get(url).send().await?;
    print_response(res).await?;

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: Vendor Service returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    if json.get("success") == Some(&Value::Bool(false)) {
        eprintln!(
            "Request failed: {}",
            json.get("message").and_then(Value::as_str).unwrap_or("unknown error")
        );
    }
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
