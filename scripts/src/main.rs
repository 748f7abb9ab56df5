use clap::Parser;
use scripts::{cli::Cli, errors::ScriptError, utils::setup_client};

#[tokio::main]
async fn main() -> Result<(), ScriptError> {
    let Cli {
        priv_key,
        network,
        rpc_url,
        artifacts_dir,
        deployments_path,
        explorer_api_key,
        command,
    } = Cli::parse();

    tracing_subscriber::fmt().pretty().init();

    let client = setup_client(&priv_key, network, rpc_url.as_deref()).await?;

    command
        .run(
            client,
            network,
            &artifacts_dir,
            &deployments_path,
            explorer_api_key.as_deref(),
        )
        .await
}
