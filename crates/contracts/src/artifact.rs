//! Compiled contract artifacts as emitted by common Solidity toolchains:
//! one JSON file per contract containing the ABI and the creation bytecode.

use {
    alloy::primitives::Bytes,
    anyhow::{Context, Result, ensure},
    serde::Deserialize,
    std::path::Path,
};

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    pub contract_name: String,
    /// Kept opaque. Deployment only needs the creation bytecode; the ABI is
    /// retained so callers can interact with the contract afterwards.
    #[serde(default)]
    pub abi: serde_json::Value,
    pub bytecode: Bytes,
}

impl Artifact {
    /// Resolves the named contract's artifact from the given directory. The
    /// file name is authoritative: `<artifacts_dir>/<name>.json`.
    pub fn load(artifacts_dir: &Path, name: &str) -> Result<Self> {
        let path = artifacts_dir.join(format!("{name}.json"));
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read contract artifact {path:?}"))?;
        let artifact: Self = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse contract artifact {path:?}"))?;
        ensure!(
            !artifact.bytecode.is_empty(),
            "contract artifact {path:?} contains no creation bytecode",
        );
        if artifact.contract_name != name {
            tracing::warn!(
                artifact = %artifact.contract_name,
                requested = %name,
                "artifact file name does not match its embedded contract name",
            );
        }
        Ok(artifact)
    }
}
