//! Implementations of the deploy scripts' commands

use std::path::Path;

use alloy::{
    network::TransactionBuilder,
    primitives::utils::format_ether,
    providers::{Provider, WalletProvider},
    rpc::types::TransactionRequest,
};
use tracing::info;

use crate::{
    cli::DeployArgs,
    constants::NUM_DEPLOY_CONFIRMATIONS,
    errors::ScriptError,
    factory::{load_artifact, ContractFactory},
    networks::Network,
    utils::{contract_key, write_deployed_address},
};

/// Deploys the named contract: resolves its compiled artifact, submits the
/// creation transaction with the supplied constructor arguments, waits for
/// the chain to confirm inclusion, then reports the deployed address and
/// records it in the deployments file
pub async fn deploy(
    args: DeployArgs,
    client: impl Provider,
    network: Network,
    artifacts_dir: &Path,
    deployments_path: &str,
    explorer_api_key: Option<&str>,
) -> Result<(), ScriptError> {
    let artifact = load_artifact(artifacts_dir, &args.contract)?;
    let factory = ContractFactory::new(artifact)?;
    let deploy_code = factory.deploy_code(&args.args)?;

    let mut tx = TransactionRequest::default().with_deploy_code(deploy_code);
    if let Some(gas_price) = network.gas_price() {
        tx = tx.with_gas_price(gas_price);
    }

    info!("deploying `{}` to `{network}`", args.contract);

    let receipt = client
        .send_transaction(tx)
        .await
        .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?
        .with_required_confirmations(NUM_DEPLOY_CONFIRMATIONS)
        .get_receipt()
        .await
        .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;

    if !receipt.status() {
        return Err(ScriptError::ContractDeployment(format!(
            "deployment transaction {} reverted",
            receipt.transaction_hash,
        )));
    }

    let address = receipt
        .contract_address
        .ok_or_else(|| {
            ScriptError::ContractDeployment(
                "deployment receipt carries no contract address".to_string(),
            )
        })?;

    println!("{} deployed to: {address}", args.contract);

    if let Some(url) = network.contract_url(address) {
        info!("view the deployment at {url}");
    }
    if let (Some(api_url), Some(_)) = (network.verification_api_url(), explorer_api_key) {
        info!("source verification can be submitted to {api_url} with the configured API key");
    }

    write_deployed_address(deployments_path, &contract_key(&args.contract), address)
}

/// Prints the deployer account's address, along with its on-chain balance
pub async fn accounts(client: impl Provider + WalletProvider) -> Result<(), ScriptError> {
    let address = client.default_signer_address();
    let balance = client
        .get_balance(address)
        .await
        .map_err(|e| ScriptError::BalanceFetching(e.to_string()))?;

    println!("{address}");
    info!("balance: {}", format_ether(balance));

    Ok(())
}
