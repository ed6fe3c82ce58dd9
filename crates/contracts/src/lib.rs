pub mod artifact;
pub mod deploy;
pub mod paths;

pub use self::{
    artifact::Artifact,
    deploy::{ArtifactFactory, ContractFactory, PendingDeployment, TxOptions},
};
