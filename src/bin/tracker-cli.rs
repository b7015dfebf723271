use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "tracker-cli")]
#[command(about = "CLI client for the Blockchain Project Tracker", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check service status and store counts
    Status,
    /// List projects, optionally filtered by status
    Projects {
        #[arg(short, long)]
        status: Option<String>,
    },
    /// Show a single project by id
    Project { id: String },
    /// Create a new project
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        chain: String,
        #[arg(long)]
        status: Option<String>,
    },
    /// List wallet balances, optionally filtered
    Wallets {
        #[arg(short, long)]
        address: Option<String>,
        #[arg(short, long)]
        chain_id: Option<String>,
    },
    /// List transactions involving a wallet address
    Transactions { address: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Status => {
            let res = client.get(format!("{}/api/status", cli.url)).send().await?;
            print_response(res).await?;
        }
        Commands::Projects { status } => {
            let mut req = client.get(format!("{}/api/projects", cli.url));
            if let Some(status) = status {
                req = req.query(&[("status", status)]);
            }
            print_response(req.send().await?).await?;
        }
        Commands::Project { id } => {
            let res = client
                .get(format!("{}/api/projects/{}", cli.url, id))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Create {
            name,
            chain,
            status,
        } => {
            let body = serde_json::json!({
                "name": name,
                "chain": chain,
                "status": status,
            });
            let res = client
                .post(format!("{}/api/projects", cli.url))
                .json(&body)
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Wallets { address, chain_id } => {
            let mut req = client.get(format!("{}/api/wallets", cli.url));
            if let Some(address) = address {
                req = req.query(&[("address", address)]);
            }
            if let Some(chain_id) = chain_id {
                req = req.query(&[("chainId", chain_id)]);
            }
            print_response(req.send().await?).await?;
        }
        Commands::Transactions { address } => {
            let res = client
                .get(format!("{}/api/wallets/{}/transactions", cli.url, address))
                .send()
                .await?;
            print_response(res).await?;
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;

    if !status.is_success() {
        eprintln!("Error: tracker API returned status {}", status);
        if !text.is_empty() {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = serde_json::from_str(&text)?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
