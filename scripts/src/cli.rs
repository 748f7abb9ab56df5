//! Definitions of CLI arguments and commands for deploy scripts

use std::path::{Path, PathBuf};

use alloy::providers::{Provider, WalletProvider};
use clap::{Args, Parser, Subcommand};

use crate::{
    commands::{accounts, deploy},
    constants::{
        DEFAULT_ARTIFACTS_DIR, DEFAULT_DEPLOYMENTS_PATH, EXPLORER_API_KEY_ENV_VAR,
        PRIV_KEY_ENV_VAR,
    },
    errors::ScriptError,
    networks::Network,
};

/// Scripts for deploying the Memeverse smart contracts
#[derive(Parser)]
pub struct Cli {
    /// Private key of the deployer
    // TODO: Better key management
    #[arg(short, long, env = PRIV_KEY_ENV_VAR, hide_env_values = true)]
    pub priv_key: String,

    /// The network to deploy to
    #[arg(short, long, value_enum, default_value_t = Network::Localhost)]
    pub network: Network,

    /// Overrides the network's RPC URL; required when `--network custom`
    #[arg(short, long)]
    pub rpc_url: Option<String>,

    /// Directory containing the compiled contract artifacts
    #[arg(short, long, default_value = DEFAULT_ARTIFACTS_DIR)]
    pub artifacts_dir: PathBuf,

    /// Path to the `deployments.json` file in which deployed addresses
    /// are recorded
    #[arg(short, long, default_value = DEFAULT_DEPLOYMENTS_PATH)]
    pub deployments_path: String,

    /// API key for the network's block explorer
    #[arg(short, long, env = EXPLORER_API_KEY_ENV_VAR, hide_env_values = true)]
    pub explorer_api_key: Option<String>,

    /// The command to run
    #[command(subcommand)]
    pub command: Command,
}

/// The subcommands of the deploy scripts
#[derive(Subcommand)]
pub enum Command {
    /// Deploy a contract
    Deploy(DeployArgs),
    /// Print the deployer account
    Accounts,
}

/// Deploy a contract by name against the configured network
#[derive(Args)]
pub struct DeployArgs {
    /// Name of the contract to deploy, resolved against the
    /// artifacts directory
    pub contract: String,

    /// Constructor arguments, in declaration order
    pub args: Vec<String>,
}

impl Command {
    /// Dispatches the parsed command to its implementation
    pub async fn run(
        self,
        client: impl Provider + WalletProvider,
        network: Network,
        artifacts_dir: &Path,
        deployments_path: &str,
        explorer_api_key: Option<&str>,
    ) -> Result<(), ScriptError> {
        match self {
            Command::Deploy(args) => {
                deploy(
                    args,
                    client,
                    network,
                    artifacts_dir,
                    deployments_path,
                    explorer_api_key,
                )
                .await
            }
            Command::Accounts => accounts(client).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use crate::networks::Network;

    use super::{Cli, Command};

    /// The deployer key used across the tests
    const PRIV_KEY: &str = "a18044758c0f8c1a40ca3060ba321c013cd89e8c4cb86af852626fe24e57a7b0";

    #[test]
    fn test_parse_deploy() {
        let cli = Cli::try_parse_from([
            "scripts",
            "--priv-key",
            PRIV_KEY,
            "--network",
            "bsc-testnet",
            "deploy",
            "Memeverse",
            "0xB56CDe5115457715d326eA961E78d3aeD61be592",
            "0x985d37a1410FdE7cD094Ed8560Bdd1c8337A2a7E",
        ])
        .unwrap();

        assert_eq!(cli.network, Network::BscTestnet);
        match cli.command {
            Command::Deploy(args) => {
                assert_eq!(args.contract, "Memeverse");
                assert_eq!(args.args.len(), 2);
            }
            _ => panic!("expected a deploy command"),
        }
    }

    #[test]
    fn test_parse_accounts_defaults() {
        let cli =
            Cli::try_parse_from(["scripts", "--priv-key", PRIV_KEY, "accounts"]).unwrap();

        assert_eq!(cli.network, Network::Localhost);
        assert_eq!(cli.deployments_path, "deployments.json");
        assert!(cli.rpc_url.is_none());
        assert!(matches!(cli.command, Command::Accounts));
    }

    #[test]
    fn test_unknown_network_rejected() {
        let res = Cli::try_parse_from([
            "scripts",
            "--priv-key",
            PRIV_KEY,
            "--network",
            "tron",
            "deploy",
            "Memeverse",
        ]);
        assert!(res.is_err());
    }
}
