use std::path::Path;

use tracing::debug;

use crate::direct::KubeConfig;
use crate::{default_location, ConfigError};

/// The `namespace` key of a context.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Namespace {
    #[default]
    Unset,
    Null,
    Named(String),
}

impl From<Option<Option<String>>> for Namespace {
    fn from(value: Option<Option<String>>) -> Self {
        match value {
            None => Namespace::Unset,
            Some(None) => Namespace::Null,
            Some(Some(name)) => Namespace::Named(name),
        }
    }
}

/// The context selected by `current-context`, flattened to the fields a
/// status line cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentContext {
    pub name: String,
    pub cluster: String,
    pub namespace: Namespace,
}

impl CurrentContext {
    /// The default namespace, if the context sets one. A key that is present
    /// but null is an error.
    pub fn namespace(&self) -> Result<Option<&str>, ConfigError> {
        match &self.namespace {
            Namespace::Unset => Ok(None),
            Namespace::Null => Err(ConfigError::NullNamespace(self.name.clone())),
            Namespace::Named(name) => Ok(Some(name)),
        }
    }
}

pub fn read_current_context() -> anyhow::Result<CurrentContext> {
    read_current_context_from(default_location())
}

pub fn read_current_context_from(path: impl AsRef<Path>) -> anyhow::Result<CurrentContext> {
    let path = path.as_ref();
    debug!("reading kube config from {}", path.display());

    let kube_config = KubeConfig::read_from(path)?;
    Ok(kube_config.current_context()?)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn config_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn reads_current_context_from_file() {
        let file = config_file(
            "current-context: ci\ncontexts:\n- name: ci\n  context:\n    cluster: ci-cluster\n",
        );

        let current = read_current_context_from(file.path()).unwrap();
        assert_eq!(
            current,
            CurrentContext {
                name: "ci".into(),
                cluster: "ci-cluster".into(),
                namespace: Namespace::Unset,
            }
        );
    }

    #[test]
    fn missing_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_current_context_from(dir.path().join("config")).unwrap_err();
        assert!(err.to_string().starts_with("Opening kube config"));
    }

    #[test]
    fn lookup_errors_survive_as_config_errors() {
        let file = config_file("current-context: gone\ncontexts: []\n");

        let err = read_current_context_from(file.path()).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ConfigError>(),
            Some(&ConfigError::ContextNotFound("gone".into()))
        );
    }

    #[test]
    fn context_without_cluster_is_fatal_on_read() {
        let file = config_file(
            "current-context: a\ncontexts:\n- name: a\n  context:\n    namespace: kube-system\n",
        );

        let err = read_current_context_from(file.path()).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ConfigError>(),
            Some(&ConfigError::MissingCluster("a".into()))
        );
    }

    #[test]
    fn namespace_accessor() {
        let mut current = CurrentContext {
            name: "a".into(),
            cluster: "c".into(),
            namespace: Namespace::Unset,
        };
        assert_eq!(current.namespace(), Ok(None));

        current.namespace = Namespace::Named("default".into());
        assert_eq!(current.namespace(), Ok(Some("default")));

        current.namespace = Namespace::Null;
        assert_eq!(current.namespace(), Err(ConfigError::NullNamespace("a".into())));
    }
}
