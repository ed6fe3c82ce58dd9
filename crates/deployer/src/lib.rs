pub mod arguments;

use {
    alloy::primitives::Address,
    anyhow::{Context, Result, ensure},
    contracts::{Artifact, ArtifactFactory, ContractFactory, TxOptions},
    std::io::Write,
};

pub async fn main(args: arguments::Arguments) -> Result<Address> {
    let provider = match &args.private_key {
        Some(key) => {
            let signer = key
                .parse::<ethrpc::PrivateKeySigner>()
                .context("invalid private key")?;
            ethrpc::provider_with_signer(&args.node_url, signer)
        }
        None => ethrpc::provider(&args.node_url),
    };
    let artifact = Artifact::load(&args.artifacts_dir, &args.contract)?;
    let factory = ArtifactFactory::new(provider, artifact);
    run(
        &factory,
        TxOptions {
            gas_limit: args.gas_limit,
        },
        &mut std::io::stdout(),
    )
    .await
}

/// The deployment chain: submit the deployment transaction, wait for the
/// network to confirm it, then report the deployed address. A single
/// attempt, fail-fast; nothing is written to `stdout` until the deployment
/// is confirmed.
pub async fn run(
    factory: &dyn ContractFactory,
    options: TxOptions,
    stdout: &mut dyn Write,
) -> Result<Address> {
    let pending = factory
        .deploy(options)
        .await
        .context("failed to submit deployment transaction")?;
    let address = pending
        .deployed()
        .await
        .context("failed to confirm deployment")?;
    ensure!(
        address != Address::ZERO,
        "deployment produced an empty contract address",
    );
    writeln!(stdout, "Contract deployed to address: {address}")?;
    Ok(address)
}
