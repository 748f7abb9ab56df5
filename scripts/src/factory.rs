//! Resolution of compiled contract artifacts into deployable creation code

use std::{fs, path::Path, str::FromStr};

use alloy::{
    dyn_abi::{DynSolType, DynSolValue},
    json_abi::JsonAbi,
    primitives::Bytes,
};
use serde::Deserialize;

use crate::{constants::ARTIFACT_EXTENSION, errors::ScriptError};

/// A compiled contract artifact, as emitted by the contracts build
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractArtifact {
    /// The name of the contract
    pub contract_name: String,
    /// The contract's ABI
    pub abi: JsonAbi,
    /// The contract's creation bytecode, as 0x-prefixed hex
    pub bytecode: String,
}

/// Reads and parses the artifact of the named contract from the artifacts directory
pub fn load_artifact(artifacts_dir: &Path, contract: &str) -> Result<ContractArtifact, ScriptError> {
    let path = artifacts_dir.join(contract).with_extension(ARTIFACT_EXTENSION);

    let contents = fs::read_to_string(&path)
        .map_err(|e| ScriptError::ReadFile(format!("{}: {}", path.display(), e)))?;

    serde_json::from_str(&contents).map_err(|e| ScriptError::ArtifactParsing(e.to_string()))
}

/// A factory for a single contract, pairing its creation bytecode with its
/// ABI so that a deployment transaction's input data can be constructed
/// from textual constructor arguments
pub struct ContractFactory {
    /// The contract's ABI
    abi: JsonAbi,
    /// The contract's creation bytecode
    bytecode: Bytes,
}

impl ContractFactory {
    /// Constructs a factory from a parsed artifact
    pub fn new(artifact: ContractArtifact) -> Result<Self, ScriptError> {
        let bytecode = Bytes::from_str(&artifact.bytecode)
            .map_err(|e| ScriptError::ArtifactParsing(e.to_string()))?;

        Ok(ContractFactory {
            abi: artifact.abi,
            bytecode,
        })
    }

    /// The number of arguments the contract's constructor expects.
    ///
    /// A contract without an explicit constructor admits zero arguments.
    fn constructor_arity(&self) -> usize {
        self.abi
            .constructor
            .as_ref()
            .map(|c| c.inputs.len())
            .unwrap_or(0)
    }

    /// Builds the input data of the contract's deployment transaction: the
    /// creation bytecode followed by the ABI-encoded constructor arguments.
    ///
    /// Each argument is coerced from its textual form to the Solidity type
    /// the constructor declares for it.
    pub fn deploy_code(&self, args: &[String]) -> Result<Bytes, ScriptError> {
        let arity = self.constructor_arity();
        if args.len() != arity {
            return Err(ScriptError::CalldataConstruction(format!(
                "constructor expects {} arguments, got {}",
                arity,
                args.len(),
            )));
        }

        let mut code = self.bytecode.to_vec();

        if let Some(constructor) = self.abi.constructor.as_ref() {
            let mut values = Vec::with_capacity(args.len());
            for (param, arg) in constructor.inputs.iter().zip(args) {
                let ty = DynSolType::parse(&param.selector_type())
                    .map_err(|e| ScriptError::CalldataConstruction(e.to_string()))?;

                let value = ty.coerce_str(arg).map_err(|e| {
                    ScriptError::CalldataConstruction(format!(
                        "argument `{arg}` is not a valid `{}`: {e}",
                        param.ty,
                    ))
                })?;

                values.push(value);
            }

            code.extend(DynSolValue::Tuple(values).abi_encode_params());
        }

        Ok(code.into())
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use crate::errors::ScriptError;

    use super::{load_artifact, ContractArtifact, ContractFactory};

    /// A minimal artifact with a two-address constructor
    const TWO_ADDRESS_ARTIFACT: &str = r#"{
        "contractName": "Memeverse",
        "abi": [
            {
                "type": "constructor",
                "stateMutability": "nonpayable",
                "inputs": [
                    { "internalType": "address", "name": "router_", "type": "address" },
                    { "internalType": "address", "name": "marketingWallet_", "type": "address" }
                ]
            }
        ],
        "bytecode": "0x60806040523480156100115760006000fd5b50610017565b61001d565b00"
    }"#;

    /// A minimal artifact without a constructor
    const NO_CONSTRUCTOR_ARTIFACT: &str = r#"{
        "contractName": "Empty",
        "abi": [],
        "bytecode": "0x6080604052600a600c565b005b00"
    }"#;

    /// The first constructor argument used across the tests
    const ROUTER: &str = "0xB56CDe5115457715d326eA961E78d3aeD61be592";
    /// The second constructor argument used across the tests
    const MARKETING_WALLET: &str = "0x985d37a1410FdE7cD094Ed8560Bdd1c8337A2a7E";

    /// Parses the two-address artifact from JSON
    fn two_address_artifact() -> ContractArtifact {
        serde_json::from_str(TWO_ADDRESS_ARTIFACT).unwrap()
    }

    #[test]
    fn test_parse_artifact() {
        let artifact = two_address_artifact();
        assert_eq!(artifact.contract_name, "Memeverse");
        assert_eq!(artifact.abi.constructor.as_ref().unwrap().inputs.len(), 2);
        assert!(artifact.bytecode.starts_with("0x6080"));
    }

    #[test]
    fn test_deploy_code_appends_encoded_args() {
        let artifact = two_address_artifact();
        let bytecode_len = (artifact.bytecode.len() - 2) / 2;

        let factory = ContractFactory::new(artifact).unwrap();
        let code = factory
            .deploy_code(&[ROUTER.to_string(), MARKETING_WALLET.to_string()])
            .unwrap();

        // Two ABI-encoded address words follow the creation bytecode
        assert_eq!(code.len(), bytecode_len + 64);

        let router_bytes = hex::decode(&ROUTER[2..]).unwrap();
        let marketing_bytes = hex::decode(&MARKETING_WALLET[2..]).unwrap();
        assert_eq!(&code[bytecode_len + 12..bytecode_len + 32], &router_bytes[..]);
        assert_eq!(&code[bytecode_len + 44..bytecode_len + 64], &marketing_bytes[..]);
    }

    #[test]
    fn test_arity_mismatch() {
        let factory = ContractFactory::new(two_address_artifact()).unwrap();
        let res = factory.deploy_code(&[ROUTER.to_string()]);
        assert!(matches!(res, Err(ScriptError::CalldataConstruction(_))));
    }

    #[test]
    fn test_invalid_argument_type() {
        let factory = ContractFactory::new(two_address_artifact()).unwrap();
        let res = factory.deploy_code(&[ROUTER.to_string(), "not-an-address".to_string()]);
        assert!(matches!(res, Err(ScriptError::CalldataConstruction(_))));
    }

    #[test]
    fn test_no_constructor() {
        let artifact: ContractArtifact = serde_json::from_str(NO_CONSTRUCTOR_ARTIFACT).unwrap();
        let bytecode = artifact.bytecode.clone();

        let factory = ContractFactory::new(artifact).unwrap();

        // Arguments to a constructor-less contract are rejected
        let res = factory.deploy_code(&[ROUTER.to_string()]);
        assert!(matches!(res, Err(ScriptError::CalldataConstruction(_))));

        // Without arguments, the deploy code is the bare creation bytecode
        let code = factory.deploy_code(&[]).unwrap();
        assert_eq!(format!("{code}"), bytecode.to_lowercase());
    }

    /// The artifacts shipped with the crate resolve by contract name
    #[test]
    fn test_load_shipped_artifacts() {
        let artifacts_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("artifacts");

        let memeverse = load_artifact(&artifacts_dir, "Memeverse").unwrap();
        assert_eq!(memeverse.contract_name, "Memeverse");
        let factory = ContractFactory::new(memeverse).unwrap();
        factory
            .deploy_code(&[ROUTER.to_string(), MARKETING_WALLET.to_string()])
            .unwrap();

        let doge = load_artifact(&artifacts_dir, "Doge").unwrap();
        assert_eq!(doge.contract_name, "Doge");
        let factory = ContractFactory::new(doge).unwrap();
        factory
            .deploy_code(&[
                ROUTER.to_string(),
                MARKETING_WALLET.to_string(),
                "1000".to_string(),
            ])
            .unwrap();

        // An unknown contract name surfaces as a read error
        let res = load_artifact(&artifacts_dir, "Unknown");
        assert!(matches!(res, Err(ScriptError::ReadFile(_))));
    }
}
