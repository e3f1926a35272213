//! dashctl - command line client for the dashboard server

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dashboard_client::{Client, DEFAULT_BASE_URL};
use dashboard_types::{CreateDashboard, UpdateDashboard};
use serde::Serialize;
use tracing::{debug, error};

#[derive(Parser)]
#[command(name = "dashctl")]
#[command(author, version, about = "Manage dashboards on a dashboard server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Dashboard server base URL
    #[arg(short, long, global = true, env = "DASHBOARD_URL", default_value = DEFAULT_BASE_URL)]
    server: String,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a dashboard
    Create {
        #[arg(short, long)]
        name: String,

        /// Owning project
        #[arg(short, long)]
        project: String,

        #[arg(short, long)]
        description: Option<String>,
    },

    /// Show a dashboard
    Get { id: String },

    /// Change a dashboard's name and/or description
    Update {
        id: String,

        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        description: Option<String>,
    },

    /// Delete a dashboard
    Delete { id: String },

    /// List dashboards one page at a time
    List {
        /// Cursor returned by the previous page
        #[arg(long)]
        next: Option<usize>,

        /// Follow cursors and print every dashboard
        #[arg(short, long, conflicts_with = "next")]
        all: bool,
    },

    /// Check server health
    Health,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(if cli.verbose {
            "dashctl=debug,dashboard_client=debug"
        } else {
            "dashctl=warn,dashboard_client=warn"
        })
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    if let Err(e) = run(cli).await {
        error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let client = Client::new(&cli.server).context("Failed to build HTTP client")?;
    debug!("Using server {}", client.base_url());

    match cli.command {
        Commands::Create {
            name,
            project,
            description,
        } => {
            let mut body = CreateDashboard::new(name, project);
            body.description = description;
            let created = client
                .create_dashboard(&body)
                .await
                .context("Failed to create dashboard")?;
            print_json(&created)
        }
        Commands::Get { id } => {
            let dashboard = client.get_dashboard(&id).await?;
            print_json(&dashboard)
        }
        Commands::Update {
            id,
            name,
            description,
        } => {
            if name.is_none() && description.is_none() {
                anyhow::bail!("Nothing to update: pass --name and/or --description");
            }
            let updated = client
                .update_dashboard(&id, &UpdateDashboard { name, description })
                .await?;
            print_json(&updated)
        }
        Commands::Delete { id } => {
            client.delete_dashboard(&id).await?;
            println!("Deleted {}", id);
            Ok(())
        }
        Commands::List { next, all } => {
            if all {
                let dashboards = client.list_all_dashboards().await?;
                print_json(&dashboards)
            } else {
                let cursor = next.map(|n| n.to_string());
                let page = client.list_dashboards(cursor.as_deref()).await?;
                print_json(&page)
            }
        }
        Commands::Health => {
            client
                .healthz()
                .await
                .with_context(|| format!("Server at {} is not healthy", client.base_url()))?;
            println!("ok");
            Ok(())
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
