//! CLI interface and command handlers for the Users API harness client

use crate::User;
use crate::config;
use crate::http::client::{ApiResponse, UserApiClient};
use crate::http::{ErrorResponse, HealthCheckResponse, print_user};
use clap::{Parser, Subcommand};
use reqwest::Method;
use serde_json::json;

// =============================================================================
// CLI CONFIGURATION STRUCTS
// =============================================================================

#[derive(Parser)]
#[command(name = "client")]
#[command(about = "Users API Harness Client")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, default_value = config::DEFAULT_SETTINGS_PATH)]
    pub settings: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Health,
    List,
    Create {
        name: String,
        email: String,
    },
    Get {
        id: u64,
    },
    Update {
        id: u64,
        name: String,
        email: String,
    },
    Delete {
        id: u64,
    },
    Raw {
        method: String,
        path: String,
        #[arg(short, long)]
        body: Option<String>,
    },
}

// =============================================================================
// COMMAND DISPATCHER
// =============================================================================

pub async fn handle_cli_command(client: &UserApiClient, command: Commands) {
    match command {
        Commands::Health => {
            handle_health_command(client).await;
        }
        Commands::List => {
            list_users_command(client).await;
        }
        Commands::Create { name, email } => {
            create_user_command(client, &name, &email).await;
        }
        Commands::Get { id } => {
            fetch_user_command(client, id).await;
        }
        Commands::Update { id, name, email } => {
            update_user_command(client, id, &name, &email).await;
        }
        Commands::Delete { id } => {
            delete_user_command(client, id).await;
        }
        Commands::Raw { method, path, body } => {
            raw_request_command(client, &method, &path, body.as_deref()).await;
        }
    }
}

// =============================================================================
// COMMAND HANDLERS
// =============================================================================

pub async fn handle_health_command(client: &UserApiClient) {
    match client.request(Method::GET, "/health", None).await {
        Ok(response) => {
            if response.is_success() {
                match response.json_as::<HealthCheckResponse>() {
                    Ok(health_response) => {
                        println!("Server Status: {}", health_response.status);
                        println!("Service: {}", health_response.service);
                        println!("Timestamp: {}", health_response.timestamp);
                    }
                    Err(_) => println!("Server is healthy (response parsing failed)"),
                }
            } else {
                print_error_response(&response, "check server health");
            }
        }
        Err(e) => println!("Failed to connect to server: {e}"),
    }
}

pub async fn create_user_command(client: &UserApiClient, name: &str, email: &str) {
    let body = json!({ "name": name, "email": email });
    match client.create_user(&body).await {
        Ok(response) => {
            if response.is_success() {
                match response.json_as::<User>() {
                    Ok(user) => {
                        println!("Created user [{}] {} <{}>", user.id, user.name, user.email);
                    }
                    Err(e) => println!("Failed to parse response: {e}"),
                }
            } else {
                print_error_response(&response, "create user");
            }
        }
        Err(e) => println!("Failed to connect to server: {e}"),
    }
}

pub async fn fetch_user_command(client: &UserApiClient, id: u64) {
    match client.fetch_user(id).await {
        Ok(response) => {
            if response.is_success() {
                match response.json_as::<User>() {
                    Ok(user) => print_user(&user),
                    Err(e) => println!("Failed to parse response: {e}"),
                }
            } else {
                print_error_response(&response, &format!("fetch user {id}"));
            }
        }
        Err(e) => println!("Failed to connect to server: {e}"),
    }
}

pub async fn update_user_command(client: &UserApiClient, id: u64, name: &str, email: &str) {
    let body = json!({ "name": name, "email": email });
    match client.update_user(id, &body).await {
        Ok(response) => {
            if response.is_success() {
                match response.json_as::<User>() {
                    Ok(user) => {
                        println!("Updated user [{}] {} <{}>", user.id, user.name, user.email);
                    }
                    Err(e) => println!("Failed to parse response: {e}"),
                }
            } else {
                print_error_response(&response, &format!("update user {id}"));
            }
        }
        Err(e) => println!("Failed to connect to server: {e}"),
    }
}

pub async fn delete_user_command(client: &UserApiClient, id: u64) {
    match client.delete_user(id).await {
        Ok(response) => {
            if response.is_success() {
                println!("Deleted user {id}");
            } else {
                print_error_response(&response, &format!("delete user {id}"));
            }
        }
        Err(e) => println!("Failed to connect to server: {e}"),
    }
}

pub async fn list_users_command(client: &UserApiClient) {
    match client.list_users().await {
        Ok(response) => {
            if response.is_success() {
                match response.json_as::<Vec<User>>() {
                    Ok(users) => {
                        println!("Found {} users", users.len());
                        for user in &users {
                            print_user(user);
                        }
                    }
                    Err(e) => println!("Failed to parse response: {e}"),
                }
            } else {
                print_error_response(&response, "list users");
            }
        }
        Err(e) => println!("Failed to connect to server: {e}"),
    }
}

pub async fn raw_request_command(
    client: &UserApiClient,
    method: &str,
    path: &str,
    body: Option<&str>,
) {
    let method = match method.to_uppercase().parse::<Method>() {
        Ok(method) => method,
        Err(_) => {
            println!("Error: '{method}' is not a valid HTTP method");
            std::process::exit(1);
        }
    };
    let body = match body.map(serde_json::from_str::<serde_json::Value>).transpose() {
        Ok(body) => body,
        Err(e) => {
            println!("Error: request body is not valid JSON: {e}");
            std::process::exit(1);
        }
    };
    match client.request(method, path, body.as_ref()).await {
        Ok(response) => {
            println!("Status: {}", response.status());
            if !response.text().is_empty() {
                println!("{}", response.text());
            }
        }
        Err(e) => println!("Failed to connect to server: {e}"),
    }
}

// =============================================================================
// UTILITY FUNCTIONS
// =============================================================================

fn print_error_response(response: &ApiResponse, operation: &str) {
    match response.json_as::<ErrorResponse>() {
        Ok(error_response) => {
            println!("Failed to {}: {}", operation, error_response.error);
        }
        Err(parse_error) => {
            println!(
                "Server error: {} (failed to parse error response: {parse_error})",
                response.status()
            );
            if !response.text().is_empty() {
                println!("   Raw response: {}", response.text().trim());
            }
        }
    }
}
