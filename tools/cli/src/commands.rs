use anyhow::Result;
use log::{debug, error, info};
use payment_factory_cli::{
    deploy_invocation, invoke_invocation, Config, Invocation, NetworkConfig,
};
use std::path::PathBuf;

use crate::config::{get_contract_id, get_source, SOURCE_ENV_VAR};
use crate::utils::{
    truncate_address, validate_account_address, validate_address, validate_contract_address,
    validate_symbol, validate_wasm_hash,
};

/// Everything a command needs besides its own arguments.
pub struct Context {
    pub config: Config,
    pub network: NetworkConfig,
    pub contract_id: Option<String>,
    pub dry_run: bool,
}

impl Context {
    fn contract_id(&self) -> Result<String> {
        let id = get_contract_id(&self.config, self.contract_id.clone())?;
        validate_contract_address(&id)?;
        Ok(id)
    }
}

/// Prints the invocation under `--dry-run`, otherwise runs it and returns
/// its trimmed stdout.
async fn execute(ctx: &Context, invocation: &Invocation) -> Result<Option<String>> {
    if ctx.dry_run {
        println!("{}", invocation.render());
        return Ok(None);
    }

    debug!("Running: {}", invocation.render());
    let output = tokio::process::Command::new(&invocation.program)
        .args(&invocation.args)
        .output()
        .await
        .map_err(|e| {
            error!("Could not run {}: {}", invocation.program, e);
            anyhow::anyhow!(
                "Stellar CLI not found. Install it with: cargo install --locked stellar-cli"
            )
        })?;

    if !output.status.success() {
        error!("stderr: {}", String::from_utf8_lossy(&output.stderr));
        return Err(anyhow::anyhow!("Contract call failed"));
    }

    Ok(Some(String::from_utf8(output.stdout)?.trim().to_string()))
}

async fn invoke(ctx: &Context, function: &str, fn_args: &[(&str, &str)]) -> Result<Option<String>> {
    let contract_id = ctx.contract_id()?;
    let source = get_source(&ctx.config)?;
    info!("Invoking {} on {}", function, truncate_address(&contract_id, 6));

    let invocation = invoke_invocation(&ctx.network, &source, &contract_id, function, fn_args);
    execute(ctx, &invocation).await
}

pub async fn deploy_command(
    ctx: &Context,
    owner: String,
    template: String,
    wasm: Option<PathBuf>,
) -> Result<()> {
    validate_account_address(&owner)?;
    validate_wasm_hash(&template)?;
    let source = get_source(&ctx.config)?;

    let wasm_path = wasm.unwrap_or_else(|| PathBuf::from(&ctx.config.contract.wasm_path));
    if !ctx.dry_run && !wasm_path.exists() {
        error!("WASM file not found: {:?}", wasm_path);
        return Err(anyhow::anyhow!(
            "WASM file not found. Please build the contract first."
        ));
    }

    info!("Deploying factory owned by {}", truncate_address(&owner, 6));
    let invocation = deploy_invocation(&ctx.network, &source, &wasm_path, &owner, &template);

    if let Some(contract_id) = execute(ctx, &invocation).await? {
        info!("Factory deployed successfully: {}", contract_id);
        println!("✅ Factory deployed successfully!");
        println!("Contract ID: {}", contract_id);
    }
    Ok(())
}

pub async fn create_payment_command(
    ctx: &Context,
    store_name: String,
    store_wallet: String,
    payment_token: String,
) -> Result<()> {
    validate_symbol(&store_name)?;
    validate_address(&store_wallet)?;
    validate_contract_address(&payment_token)?;
    let source = get_source(&ctx.config)?;

    let result = invoke(
        ctx,
        "create_payment",
        &[
            ("caller", source.as_str()),
            ("store_name", store_name.as_str()),
            ("store_wallet", store_wallet.as_str()),
            ("payment_token", payment_token.as_str()),
        ],
    )
    .await?;

    if let Some(payment) = result {
        println!("✅ Payment instance created: {}", payment);
    }
    Ok(())
}

pub async fn update_template_command(ctx: &Context, template: String) -> Result<()> {
    validate_wasm_hash(&template)?;
    let source = get_source(&ctx.config)?;

    if invoke(
        ctx,
        "update_template_version",
        &[("caller", source.as_str()), ("new_version", template.as_str())],
    )
    .await?
    .is_some()
    {
        println!("✅ Template updated to {}", template);
    }
    Ok(())
}

pub async fn template_command(ctx: &Context) -> Result<()> {
    if let Some(version) = invoke(ctx, "get_template_version", &[]).await? {
        println!("Template version: {}", version);
    }
    Ok(())
}

pub async fn pause_command(ctx: &Context, pause: bool) -> Result<()> {
    let source = get_source(&ctx.config)?;
    let function = if pause { "pause" } else { "unpause" };

    if invoke(ctx, function, &[("caller", source.as_str())]).await?.is_some() {
        println!("✅ Factory {}d", function);
    }
    Ok(())
}

pub async fn transfer_ownership_command(ctx: &Context, new_owner: String) -> Result<()> {
    validate_account_address(&new_owner)?;
    let source = get_source(&ctx.config)?;

    if invoke(
        ctx,
        "transfer_ownership",
        &[("caller", source.as_str()), ("new_owner", new_owner.as_str())],
    )
    .await?
    .is_some()
    {
        println!("✅ Nominated {} as owner", new_owner);
    }
    Ok(())
}

pub async fn accept_ownership_command(ctx: &Context) -> Result<()> {
    let source = get_source(&ctx.config)?;

    if invoke(ctx, "accept_ownership", &[("caller", source.as_str())])
        .await?
        .is_some()
    {
        println!("✅ Ownership accepted");
    }
    Ok(())
}

pub async fn status_command(ctx: &Context) -> Result<()> {
    println!("PaymentFactory CLI Status");
    println!("=========================");
    println!();

    println!("Configuration:");
    println!("  Network RPC: {}", ctx.network.rpc_url);
    println!("  Network Passphrase: {}", ctx.network.network_passphrase);
    println!(
        "  Factory ID: {}",
        ctx.config.contract.factory_id.as_deref().unwrap_or("Not set")
    );
    let source = match std::env::var(SOURCE_ENV_VAR) {
        Ok(_) => format!("from {}", SOURCE_ENV_VAR),
        Err(_) => ctx
            .config
            .auth
            .source
            .clone()
            .unwrap_or_else(|| "Not set".to_string()),
    };
    println!("  Source account: {}", source);
    println!();

    print!("Stellar CLI: ");
    match tokio::process::Command::new("stellar")
        .arg("--version")
        .output()
        .await
    {
        Ok(output) if output.status.success() => {
            let version = String::from_utf8_lossy(&output.stdout);
            println!("✅ Available ({})", version.lines().next().unwrap_or("").trim());
        }
        Ok(_) => println!("❌ Not working properly"),
        Err(_) => {
            println!("❌ Not found");
            println!("   Install with: cargo install --locked stellar-cli");
        }
    }

    print!("Factory WASM: ");
    if PathBuf::from(&ctx.config.contract.wasm_path).exists() {
        println!("✅ Built");
    } else {
        println!("❌ Not found");
        println!("   Build with: stellar contract build");
    }

    Ok(())
}
