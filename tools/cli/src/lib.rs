use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "payment-factory-cli")]
#[command(about = "CLI tool for PaymentFactory contract management")]
#[command(version = "0.1.0")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    #[arg(
        short,
        long,
        global = true,
        default_value = "~/.payment-factory/config.toml"
    )]
    pub config: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Network to talk to (testnet, futurenet, mainnet); defaults to the config file
    #[arg(long, global = true)]
    pub network: Option<String>,

    /// Factory contract ID; defaults to the config file
    #[arg(long, global = true)]
    pub contract_id: Option<String>,

    /// Print the stellar command instead of running it
    #[arg(long, global = true)]
    pub dry_run: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Deploy a new factory
    Deploy {
        /// Owner address
        #[arg(long)]
        owner: String,

        /// Initial payment template WASM hash (hex)
        #[arg(long)]
        template: String,

        /// Factory WASM file path
        #[arg(long)]
        wasm: Option<PathBuf>,
    },

    /// Create a payment instance
    CreatePayment {
        /// Store name (Soroban symbol)
        #[arg(long)]
        store_name: String,

        /// Wallet receiving the store's payments
        #[arg(long)]
        store_wallet: String,

        /// Token contract the instance settles in
        #[arg(long)]
        payment_token: String,
    },

    /// Switch the template used for new instances (owner only)
    UpdateTemplate {
        /// New payment template WASM hash (hex)
        #[arg(long)]
        template: String,
    },

    /// Show the current template version
    Template,

    /// Halt instance creation (owner only)
    Pause,

    /// Resume instance creation (owner only)
    Unpause,

    /// Nominate a new owner (owner only)
    TransferOwnership {
        #[arg(long)]
        new_owner: String,
    },

    /// Accept a pending ownership nomination
    AcceptOwnership,

    /// Show CLI status
    Status,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub network: NetworkConfig,
    pub contract: ContractConfig,
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NetworkConfig {
    pub rpc_url: String,
    pub network_passphrase: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContractConfig {
    pub factory_id: Option<String>,
    pub wasm_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthConfig {
    /// Identity name or secret passed to `--source-account`
    pub source: Option<String>,
}

pub const DEFAULT_WASM_PATH: &str = "target/wasm32v1-none/release/payment_factory.wasm";

impl Default for Config {
    fn default() -> Self {
        Self {
            network: NetworkConfig::for_network("testnet").unwrap_or(NetworkConfig {
                rpc_url: "https://soroban-testnet.stellar.org:443".to_string(),
                network_passphrase: "Test SDF Network ; September 2015".to_string(),
            }),
            contract: ContractConfig {
                factory_id: None,
                wasm_path: DEFAULT_WASM_PATH.to_string(),
            },
            auth: AuthConfig { source: None },
        }
    }
}

impl NetworkConfig {
    /// Well-known endpoints for the public networks.
    pub fn for_network(network: &str) -> Option<Self> {
        let (rpc_url, network_passphrase) = match network {
            "testnet" => (
                "https://soroban-testnet.stellar.org:443",
                "Test SDF Network ; September 2015",
            ),
            "futurenet" => (
                "https://rpc-futurenet.stellar.org:443",
                "Test SDF Future Network ; October 2022",
            ),
            "mainnet" => (
                "https://soroban-mainnet.stellar.org:443",
                "Public Global Stellar Network ; September 2015",
            ),
            _ => return None,
        };
        Some(Self {
            rpc_url: rpc_url.to_string(),
            network_passphrase: network_passphrase.to_string(),
        })
    }
}

/// A fully composed `stellar` command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    fn stellar(args: Vec<String>) -> Self {
        Self {
            program: "stellar".to_string(),
            args,
        }
    }

    /// Shell-like rendering, quoting arguments that contain spaces.
    pub fn render(&self) -> String {
        let mut out = self.program.clone();
        for arg in &self.args {
            out.push(' ');
            if arg.contains(' ') {
                out.push('"');
                out.push_str(arg);
                out.push('"');
            } else {
                out.push_str(arg);
            }
        }
        out
    }
}

fn network_args(network: &NetworkConfig, source: &str) -> Vec<String> {
    vec![
        "--source-account".to_string(),
        source.to_string(),
        "--rpc-url".to_string(),
        network.rpc_url.clone(),
        "--network-passphrase".to_string(),
        network.network_passphrase.clone(),
    ]
}

/// `stellar contract deploy` with the factory constructor arguments.
pub fn deploy_invocation(
    network: &NetworkConfig,
    source: &str,
    wasm: &Path,
    owner: &str,
    template: &str,
) -> Invocation {
    let mut args = vec![
        "contract".to_string(),
        "deploy".to_string(),
        "--wasm".to_string(),
        wasm.display().to_string(),
    ];
    args.extend(network_args(network, source));
    args.extend([
        "--".to_string(),
        "--owner".to_string(),
        owner.to_string(),
        "--template_version".to_string(),
        template.to_string(),
    ]);
    Invocation::stellar(args)
}

/// `stellar contract invoke` of `function` on the factory.
///
/// `fn_args` are (name, value) pairs rendered as `--name value`.
pub fn invoke_invocation(
    network: &NetworkConfig,
    source: &str,
    contract_id: &str,
    function: &str,
    fn_args: &[(&str, &str)],
) -> Invocation {
    let mut args = vec![
        "contract".to_string(),
        "invoke".to_string(),
        "--id".to_string(),
        contract_id.to_string(),
    ];
    args.extend(network_args(network, source));
    args.push("--".to_string());
    args.push(function.to_string());
    for (name, value) in fn_args {
        args.push(format!("--{}", name));
        args.push(value.to_string());
    }
    Invocation::stellar(args)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn testnet() -> NetworkConfig {
        NetworkConfig::for_network("testnet").unwrap()
    }

    #[test]
    fn test_known_networks() {
        assert!(NetworkConfig::for_network("testnet").is_some());
        assert!(NetworkConfig::for_network("futurenet").is_some());
        assert_eq!(
            NetworkConfig::for_network("mainnet").unwrap().network_passphrase,
            "Public Global Stellar Network ; September 2015"
        );
        assert!(NetworkConfig::for_network("localnet").is_none());
    }

    #[test]
    fn test_deploy_invocation_passes_constructor_args() {
        let inv = deploy_invocation(
            &testnet(),
            "alice",
            Path::new("factory.wasm"),
            "GOWNER",
            "ab12",
        );

        assert_eq!(inv.program, "stellar");
        assert_eq!(&inv.args[..4], &["contract", "deploy", "--wasm", "factory.wasm"]);
        let tail = &inv.args[inv.args.len() - 5..];
        assert_eq!(tail, &["--", "--owner", "GOWNER", "--template_version", "ab12"]);
    }

    #[test]
    fn test_invoke_invocation_orders_function_args() {
        let inv = invoke_invocation(
            &testnet(),
            "alice",
            "CFACTORY",
            "create_payment",
            &[("caller", "alice"), ("store_name", "Store")],
        );

        let sep = inv.args.iter().position(|a| a == "--").unwrap();
        assert_eq!(
            &inv.args[sep..],
            &["--", "create_payment", "--caller", "alice", "--store_name", "Store"]
        );
        assert!(inv.args.contains(&"--id".to_string()));
        assert!(inv.args.contains(&"CFACTORY".to_string()));
    }

    #[test]
    fn test_render_quotes_passphrase() {
        let inv = invoke_invocation(&testnet(), "alice", "CFACTORY", "pause", &[]);
        assert!(inv
            .render()
            .contains("--network-passphrase \"Test SDF Network ; September 2015\""));
        assert!(inv.render().starts_with("stellar contract invoke"));
    }

    #[test]
    fn test_global_flags_follow_subcommand() {
        let cli = Cli::try_parse_from([
            "payment-factory-cli",
            "status",
            "-v",
            "--config",
            "/tmp/factory.toml",
            "--dry-run",
        ])
        .unwrap();

        assert!(cli.verbose);
        assert!(cli.dry_run);
        assert_eq!(cli.config, PathBuf::from("/tmp/factory.toml"));
        assert!(matches!(cli.command, Commands::Status));
    }

    #[test]
    fn test_default_config_round_trips_through_toml() {
        let config = Config::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
