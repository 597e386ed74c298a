//! Respmodel CLI - Command-line client for the response-model server

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::json;
use tabled::{Table, Tabled};

const DEFAULT_URL: &str = "http://127.0.0.1:8000";

#[derive(Parser)]
#[command(name = "respmodel")]
#[command(about = "Response model demo CLI", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Server base URL
    #[arg(long, env = "RESPMODEL_URL", default_value = DEFAULT_URL)]
    url: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a user
    Create {
        #[arg(short, long)]
        username: String,

        #[arg(short, long)]
        email: String,

        /// Optional display name
        #[arg(short, long)]
        full_name: Option<String>,

        #[arg(short, long)]
        password: String,
    },

    /// Show the first stored record next to what the API returns for it
    Debug,

    /// Check the server is up
    Ping,
}

/// POST /users/ success body
#[derive(Deserialize, Tabled)]
struct UserRow {
    username: String,
    email: String,
    #[tabled(display_with = "display_optional")]
    full_name: Option<String>,
    join_date: String,
}

fn display_optional(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "-".to_string())
}

#[derive(Deserialize)]
struct ValidationBody {
    detail: Vec<FieldErrorRow>,
}

#[derive(Deserialize)]
struct FieldErrorRow {
    loc: Vec<String>,
    msg: String,
    #[serde(rename = "type")]
    kind: String,
}

fn endpoint(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

/// Print each field error and turn a 422 into an error exit
async fn check_response(response: reqwest::Response) -> Result<reqwest::Response> {
    match response.status() {
        StatusCode::UNPROCESSABLE_ENTITY => {
            let body: ValidationBody = response
                .json()
                .await
                .context("Failed to parse validation errors")?;

            println!("{}", "✗ Validation failed".red().bold());
            for error in &body.detail {
                println!(
                    "  {} {} ({})",
                    format!("{}:", error.loc.join(".")).bold(),
                    error.msg,
                    error.kind.dimmed()
                );
            }
            anyhow::bail!("{} invalid field(s)", body.detail.len());
        }
        status if !status.is_success() => {
            let text = response.text().await.unwrap_or_default();
            anyhow::bail!("Server returned {}: {}", status, text);
        }
        _ => Ok(response),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Create {
            username,
            email,
            full_name,
            password,
        } => {
            let body = json!({
                "username": username,
                "email": email,
                "full_name": full_name,
                "password": password,
            });

            let response = client
                .post(endpoint(&cli.url, "/users/"))
                .json(&body)
                .send()
                .await
                .context("Failed to connect to server")?;

            let user: UserRow = check_response(response)
                .await?
                .json()
                .await
                .context("Failed to parse response")?;

            println!("{}", "✓ User created".green().bold());
            println!();
            println!("{}", Table::new(vec![user]));
        }

        Commands::Debug => {
            let response = client
                .get(endpoint(&cli.url, "/debug/users/"))
                .send()
                .await
                .context("Failed to connect to server")?;

            let snapshot: serde_json::Value = check_response(response)
                .await?
                .json()
                .await
                .context("Failed to parse response")?;

            if let Some(message) = snapshot.get("message").and_then(|v| v.as_str()) {
                println!("{}", message.yellow());
                return Ok(());
            }

            println!("{}", "Internal record".cyan().bold());
            println!("{}", serde_json::to_string_pretty(&snapshot["internal_data"])?);
            println!();
            println!("{}", "Returned by the API".cyan().bold());
            println!(
                "{}",
                serde_json::to_string_pretty(&snapshot["what_response_model_returns"])?
            );
            println!();

            let dropped: Vec<&str> = snapshot["filtered_out_fields"]
                .as_array()
                .map(|fields| fields.iter().filter_map(|f| f.as_str()).collect())
                .unwrap_or_default();
            println!("  {} {}", "Filtered out:".bold(), dropped.join(", ").red());
        }

        Commands::Ping => {
            let response = client
                .get(endpoint(&cli.url, "/"))
                .send()
                .await
                .context("Failed to connect to server")?;

            let greeting: serde_json::Value = check_response(response)
                .await?
                .json()
                .await
                .context("Failed to parse response")?;

            println!("  {} {}", "URL:".bold(), cli.url);
            println!("  {} {}", "Status:".bold(), "ONLINE".green());
            if let Some(message) = greeting["message"].as_str() {
                println!("  {} {}", "Message:".bold(), message);
            }
        }
    }

    Ok(())
}
