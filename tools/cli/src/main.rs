use clap::Parser;
use std::process;

mod commands;
mod config;
mod utils;

use commands::*;
use config::*;
use payment_factory_cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Set up logging
    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    // Load configuration
    let config = match load_config(&cli.config).await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            process::exit(1);
        }
    };

    let network = match resolve_network(&config, cli.network.as_deref()) {
        Ok(network) => network,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let ctx = Context {
        config,
        network,
        contract_id: cli.contract_id,
        dry_run: cli.dry_run,
    };

    // Execute command
    let result = match cli.command {
        Commands::Deploy {
            owner,
            template,
            wasm,
        } => deploy_command(&ctx, owner, template, wasm).await,
        Commands::CreatePayment {
            store_name,
            store_wallet,
            payment_token,
        } => create_payment_command(&ctx, store_name, store_wallet, payment_token).await,
        Commands::UpdateTemplate { template } => update_template_command(&ctx, template).await,
        Commands::Template => template_command(&ctx).await,
        Commands::Pause => pause_command(&ctx, true).await,
        Commands::Unpause => pause_command(&ctx, false).await,
        Commands::TransferOwnership { new_owner } => {
            transfer_ownership_command(&ctx, new_owner).await
        }
        Commands::AcceptOwnership => accept_ownership_command(&ctx).await,
        Commands::Status => status_command(&ctx).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
