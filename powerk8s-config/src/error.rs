use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid kube config: expected key current-context")]
    NoCurrentContext,
    #[error("Invalid kube config: context {0:?} not found in contexts")]
    ContextNotFound(String),
    #[error("Invalid kube config: context {0:?} has no cluster")]
    MissingCluster(String),
    #[error("Invalid kube config: context {0:?} has a null namespace")]
    NullNamespace(String),
}
