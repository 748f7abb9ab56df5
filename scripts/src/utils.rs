//! Utilities for the deploy scripts

use std::{fs, path::PathBuf, str::FromStr};

use alloy::{
    network::EthereumWallet,
    primitives::Address,
    providers::{Provider, ProviderBuilder, WalletProvider},
    signers::local::PrivateKeySigner,
    transports::http::reqwest::Url,
};
use json::JsonValue;

use crate::{
    constants::{CONTRACT_KEY_SUFFIX, DEPLOYMENTS_KEY},
    errors::ScriptError,
    networks::Network,
};

/// Sets up the RPC client with which deployment transactions are signed and
/// submitted, resolving the RPC URL from the network configuration unless
/// overridden on the command line.
///
/// When the network declares a chain ID, it is checked against the one the
/// node reports.
pub async fn setup_client(
    priv_key: &str,
    network: Network,
    rpc_url: Option<&str>,
) -> Result<impl Provider + WalletProvider + Clone, ScriptError> {
    let url = rpc_url.or_else(|| network.rpc_url()).ok_or_else(|| {
        ScriptError::ClientInitialization(format!(
            "network `{network}` has no configured RPC URL; pass one with --rpc-url"
        ))
    })?;
    let url = Url::parse(url).map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;

    let signer = PrivateKeySigner::from_str(priv_key)
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;

    let client = ProviderBuilder::new()
        .wallet(EthereumWallet::from(signer))
        .on_http(url);

    if let Some(declared) = network.chain_id() {
        let reported = client
            .get_chain_id()
            .await
            .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;

        if reported != declared {
            return Err(ScriptError::ClientInitialization(format!(
                "network `{network}` declares chain id {declared}, but the node reports {reported}"
            )));
        }
    }

    Ok(client)
}

/// The key under which a contract's deployed address is recorded in the
/// deployments file
pub fn contract_key(contract: &str) -> String {
    format!("{}{}", contract.to_lowercase(), CONTRACT_KEY_SUFFIX)
}

/// Reads and parses a JSON file
pub fn get_json_from_file(file_path: &str) -> Result<JsonValue, ScriptError> {
    let file_contents =
        fs::read_to_string(file_path).map_err(|e| ScriptError::ReadFile(e.to_string()))?;

    json::parse(&file_contents).map_err(|e| ScriptError::ReadFile(e.to_string()))
}

/// Reads a contract's deployed address back out of the deployments file
pub fn parse_addr_from_deployments_file(
    file_path: &str,
    contract_key: &str,
) -> Result<Address, ScriptError> {
    let parsed_json = get_json_from_file(file_path)?;

    Address::from_str(
        parsed_json[DEPLOYMENTS_KEY][contract_key]
            .as_str()
            .ok_or_else(|| {
                ScriptError::ReadFile(
                    "could not parse contract address from deployments file".to_string(),
                )
            })?,
    )
    .map_err(|e| ScriptError::ReadFile(e.to_string()))
}

/// Records a contract's deployed address in the deployments file
pub fn write_deployed_address(
    file_path: &str,
    contract_key: &str,
    address: Address,
) -> Result<(), ScriptError> {
    // If the file doesn't exist, create it
    if !PathBuf::from(file_path).exists() {
        fs::write(file_path, "{}").map_err(|e| ScriptError::WriteFile(e.to_string()))?;
    }
    let mut parsed_json = get_json_from_file(file_path)?;

    parsed_json[DEPLOYMENTS_KEY][contract_key] = JsonValue::String(format!("{address:#x}"));

    fs::write(file_path, json::stringify_pretty(parsed_json, 4))
        .map_err(|e| ScriptError::WriteFile(e.to_string()))?;

    Ok(())
}
