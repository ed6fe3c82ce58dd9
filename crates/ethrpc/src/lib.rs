//! Thin construction layer for providers (clients communicating with the
//! blockchain) so the rest of the workspace only deals with type erased
//! `alloy` providers.

pub use alloy::signers::local::PrivateKeySigner;

use {
    alloy::{
        network::EthereumWallet,
        providers::{DynProvider, Provider, ProviderBuilder},
    },
    url::Url,
};

pub type AlloyProvider = DynProvider;

/// Creates an HTTP provider. Transactions sent through it are signed by the
/// node, as with a local development node with unlocked accounts.
pub fn provider(url: &Url) -> AlloyProvider {
    ProviderBuilder::new().connect_http(url.clone()).erased()
}

/// Creates an HTTP provider that signs transactions locally with the given
/// key before submitting them.
pub fn provider_with_signer(url: &Url, signer: PrivateKeySigner) -> AlloyProvider {
    let wallet = EthereumWallet::new(signer);
    ProviderBuilder::new()
        .wallet(wallet)
        .connect_http(url.clone())
        .erased()
}
