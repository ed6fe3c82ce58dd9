//! Module containing traits for abstracting contract deployment so the
//! binary can be tested with mocked versions of these behaviours.

use {
    crate::artifact::Artifact,
    alloy::{
        network::{Ethereum, TransactionBuilder},
        primitives::Address,
        providers::{PendingTransactionBuilder, Provider},
        rpc::types::TransactionRequest,
    },
    anyhow::{Context, Result, ensure},
    ethrpc::AlloyProvider,
    std::sync::{Mutex, PoisonError},
};

/// Transaction options forwarded verbatim to the deployment transaction.
#[derive(Clone, Copy, Debug)]
pub struct TxOptions {
    pub gas_limit: u64,
}

/// A resolved contract factory capable of submitting a deployment
/// transaction for its artifact.
#[cfg_attr(any(test, feature = "test-util"), mockall::automock)]
#[async_trait::async_trait]
pub trait ContractFactory: Send + Sync + 'static {
    async fn deploy(&self, options: TxOptions) -> Result<Box<dyn PendingDeployment>>;
}

/// A deployment transaction that has been submitted to the network.
#[cfg_attr(any(test, feature = "test-util"), mockall::automock)]
#[async_trait::async_trait]
pub trait PendingDeployment: Send + Sync + 'static {
    /// Waits until the network confirms the deployment transaction and
    /// returns the address the contract is live at.
    async fn deployed(&self) -> Result<Address>;
}

/// [`ContractFactory`] backed by an `alloy` provider, deploying the raw
/// creation bytecode of a compiled contract artifact.
pub struct ArtifactFactory {
    provider: AlloyProvider,
    artifact: Artifact,
}

impl ArtifactFactory {
    pub fn new(provider: AlloyProvider, artifact: Artifact) -> Self {
        Self { provider, artifact }
    }
}

#[async_trait::async_trait]
impl ContractFactory for ArtifactFactory {
    async fn deploy(&self, options: TxOptions) -> Result<Box<dyn PendingDeployment>> {
        let request = deployment_request(&self.artifact, options);
        let pending = self.provider.send_transaction(request).await.with_context(|| {
            format!(
                "failed to submit deployment transaction for {}",
                self.artifact.contract_name
            )
        })?;
        tracing::debug!(hash = %pending.tx_hash(), "submitted deployment transaction");
        Ok(Box::new(SubmittedDeployment {
            pending: Mutex::new(Some(pending)),
        }))
    }
}

/// Builds the create transaction for the artifact's creation bytecode with
/// the caller supplied options.
fn deployment_request(artifact: &Artifact, options: TxOptions) -> TransactionRequest {
    TransactionRequest::default()
        .with_deploy_code(artifact.bytecode.clone())
        .with_gas_limit(options.gas_limit)
}

/// A submitted deployment whose confirmation can be awaited exactly once.
struct SubmittedDeployment {
    pending: Mutex<Option<PendingTransactionBuilder<Ethereum>>>,
}

#[async_trait::async_trait]
impl PendingDeployment for SubmittedDeployment {
    async fn deployed(&self) -> Result<Address> {
        let pending = take_once(&self.pending)?;
        let receipt = pending
            .get_receipt()
            .await
            .context("failed to confirm deployment transaction")?;
        ensure!(receipt.status(), "deployment transaction reverted");
        receipt
            .contract_address
            .context("transaction receipt contains no contract address")
    }
}

/// Takes the value out of the slot, tolerating mutex poisoning. The slot
/// only ever holds the pending transaction, so a poisoned lock does not
/// leave corrupt data behind.
fn take_once<T>(slot: &Mutex<Option<T>>) -> Result<T> {
    slot.lock()
        .unwrap_or_else(PoisonError::into_inner)
        .take()
        .context("deployment confirmation already awaited")
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        alloy::primitives::{TxKind, bytes},
    };

    fn artifact() -> Artifact {
        Artifact {
            contract_name: "Rebase".to_string(),
            abi: serde_json::Value::Array(vec![]),
            bytecode: bytes!("6001600101"),
        }
    }

    #[test]
    fn builds_create_transaction_from_artifact() {
        let artifact = artifact();
        let request = deployment_request(&artifact, TxOptions { gas_limit: 1000 });

        assert_eq!(request.to, Some(TxKind::Create));
        assert_eq!(request.input.input(), Some(&artifact.bytecode));
    }

    #[test]
    fn gas_limit_is_forwarded_unchanged() {
        let request = deployment_request(&artifact(), TxOptions { gas_limit: 1000 });
        assert_eq!(request.gas, Some(1000));

        let request = deployment_request(&artifact(), TxOptions { gas_limit: 5_000_000 });
        assert_eq!(request.gas, Some(5_000_000));
    }

    #[test]
    fn pending_transaction_can_only_be_taken_once() {
        let slot = Mutex::new(Some(1));
        assert_eq!(take_once(&slot).unwrap(), 1);
        assert!(take_once(&slot).is_err());
    }

    #[test]
    fn poisoned_slot_still_yields_the_pending_transaction() {
        let slot = std::sync::Arc::new(Mutex::new(Some(1)));
        let poisoner = slot.clone();
        std::thread::spawn(move || {
            let _guard = poisoner.lock().unwrap();
            panic!("poison the lock");
        })
        .join()
        .unwrap_err();

        assert_eq!(take_once(&slot).unwrap(), 1);
    }
}
