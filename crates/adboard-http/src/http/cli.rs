//! CLI interface for the advertisement API client

use super::client::AdboardClient;
use super::common::{ApiVersion, HealthCheckResponse, print_advertisement};
use super::error::{handle_client_error, handle_error_response};
use adboard::{AdvertisementPayload, SellerId, Statistics};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "adboard-client")]
#[command(about = "Advertisement API Client")]
#[command(version)]
pub struct Cli {
    /// Service base URL; falls back to ADBOARD_BASE_URL, then the public service
    #[arg(long)]
    pub base_url: Option<String>,

    /// Request timeout in seconds; no timeout when omitted
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Health,
    Create {
        #[arg(long)]
        seller_id: i64,
        #[arg(long)]
        name: String,
        #[arg(long)]
        price: u64,
        #[arg(long, default_value_t = 0)]
        likes: u64,
        #[arg(long, default_value_t = 0)]
        view_count: u64,
        #[arg(long, default_value_t = 0)]
        contacts: u64,
    },
    Get {
        id: String,
    },
    Seller {
        seller_id: i64,
    },
    Stats {
        id: String,
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=2))]
        api_version: u8,
    },
    Delete {
        id: String,
    },
}

// =============================================================================
// COMMAND DISPATCHER
// =============================================================================

pub async fn handle_cli_command(client: &AdboardClient, command: Commands) {
    match command {
        Commands::Health => handle_health_command(client).await,
        Commands::Create {
            seller_id,
            name,
            price,
            likes,
            view_count,
            contacts,
        } => {
            let statistics = Statistics::new(likes, view_count, contacts);
            handle_create_command(client, seller_id, &name, price, statistics).await;
        }
        Commands::Get { id } => handle_get_command(client, &id).await,
        Commands::Seller { seller_id } => handle_seller_command(client, seller_id).await,
        Commands::Stats { id, api_version } => match ApiVersion::try_from(api_version) {
            Ok(version) => handle_stats_command(client, version, &id).await,
            Err(e) => println!("{e}"),
        },
        Commands::Delete { id } => handle_delete_command(client, &id).await,
    }
}

// =============================================================================
// COMMAND HANDLERS
// =============================================================================

pub async fn handle_health_command(client: &AdboardClient) {
    match client.health().await {
        Ok(response) => {
            if response.status().is_success() {
                match response.json::<HealthCheckResponse>().await {
                    Ok(health_response) => {
                        println!("Service Status: {}", health_response.status);
                        println!("Service: {}", health_response.service);
                        println!("Timestamp: {}", health_response.timestamp);
                    }
                    Err(_) => println!("Service is healthy (response parsing failed)"),
                }
            } else {
                handle_error_response(response, "check service health").await;
            }
        }
        Err(e) => println!("Failed to connect to service: {e}"),
    }
}

pub async fn handle_create_command(
    client: &AdboardClient,
    seller_id: i64,
    name: &str,
    price: u64,
    statistics: Statistics,
) {
    let seller_id = match SellerId::new(seller_id) {
        Ok(seller_id) => seller_id,
        Err(e) => {
            println!("{e}");
            return;
        }
    };
    let payload = AdvertisementPayload::new(seller_id, name, price, statistics);
    match client.create_advertisement(&payload).await {
        Ok(advertisement) => {
            println!("Created advertisement {}", advertisement.id);
            print_advertisement(&advertisement);
        }
        Err(e) => handle_client_error(&e, "create advertisement"),
    }
}

pub async fn handle_get_command(client: &AdboardClient, id: &str) {
    match client.fetch_advertisement(id).await {
        Ok(advertisements) => {
            for advertisement in &advertisements {
                print_advertisement(advertisement);
            }
        }
        Err(e) => handle_client_error(&e, &format!("get advertisement '{id}'")),
    }
}

pub async fn handle_seller_command(client: &AdboardClient, seller_id: i64) {
    match client.fetch_seller_advertisements(seller_id).await {
        Ok(advertisements) => {
            println!(
                "Got {} advertisements for seller {}",
                advertisements.len(),
                seller_id
            );
            for advertisement in &advertisements {
                print_advertisement(advertisement);
            }
        }
        Err(e) => handle_client_error(&e, &format!("list advertisements of seller {seller_id}")),
    }
}

pub async fn handle_stats_command(client: &AdboardClient, version: ApiVersion, id: &str) {
    match client.fetch_statistics(version, id).await {
        Ok(statistics) => {
            for entry in &statistics {
                println!(
                    "[{}] likes: {}, views: {}, contacts: {}",
                    version, entry.likes, entry.view_count, entry.contacts
                );
            }
        }
        Err(e) => handle_client_error(&e, &format!("get statistics for '{id}'")),
    }
}

pub async fn handle_delete_command(client: &AdboardClient, id: &str) {
    match client.remove_advertisement(id).await {
        Ok(()) => println!("Deleted advertisement {id}"),
        Err(e) => handle_client_error(&e, &format!("delete advertisement '{id}'")),
    }
}
