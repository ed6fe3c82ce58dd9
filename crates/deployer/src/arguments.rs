use {clap::Parser, std::path::PathBuf, url::Url};

#[derive(Parser)]
pub struct Arguments {
    /// The Ethereum node URL to connect to.
    #[clap(long, env, default_value = "http://localhost:8545")]
    pub node_url: Url,

    /// Name of the compiled contract artifact to deploy.
    #[clap(long, env, default_value = "Rebase")]
    pub contract: String,

    /// Gas limit for the deployment transaction.
    #[clap(long, env, default_value = "1000")]
    pub gas_limit: u64,

    /// Directory containing the compiled contract artifacts.
    #[clap(long, env, default_value_os_t = contracts::paths::default_artifacts_dir())]
    pub artifacts_dir: PathBuf,

    /// Private key used to sign the deployment transaction locally. When
    /// absent, signing is left to the node.
    #[clap(long, env)]
    pub private_key: Option<String>,

    /// Filter for tracing spans and events.
    #[clap(long, env, default_value = "warn,contracts=debug,deployer=debug")]
    pub log_filter: String,
}

impl std::fmt::Display for Arguments {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "node_url: {}", self.node_url)?;
        writeln!(f, "contract: {}", self.contract)?;
        writeln!(f, "gas_limit: {}", self.gas_limit)?;
        writeln!(f, "artifacts_dir: {}", self.artifacts_dir.display())?;
        writeln!(
            f,
            "private_key: {}",
            match self.private_key {
                Some(_) => "SECRET",
                None => "None",
            }
        )?;
        writeln!(f, "log_filter: {}", self.log_filter)?;
        Ok(())
    }
}
