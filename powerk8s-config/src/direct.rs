//! Serde models of the kube config document, as it is laid out on disk.

use std::{fs, path::Path};

use anyhow::Context as _;
use serde::*;

use crate::{current::CurrentContext, ConfigError};

// region: Context
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ContextSpec {
    pub cluster: Option<String>,
    /// `None` when the key is missing, `Some(None)` when it is present but null.
    #[serde(default, deserialize_with = "present")]
    pub namespace: Option<Option<String>>,
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Context {
    pub name: String,
    #[serde(default)]
    pub context: ContextSpec,
}
// endregion

// region: Common
#[derive(Deserialize, Debug)]
#[serde(rename_all = "kebab-case")]
pub struct KubeConfig {
    pub contexts: Option<Vec<Context>>,
    pub current_context: Option<String>,
}

impl KubeConfig {
    pub fn from_yaml_str(text: &str) -> anyhow::Result<KubeConfig> {
        serde_yaml::from_str(text).context("Parsing kube config")
    }

    pub fn read_from(path: impl AsRef<Path>) -> anyhow::Result<KubeConfig> {
        let path = path.as_ref();
        let file = fs::OpenOptions::new()
            .read(true)
            .open(path)
            .with_context(|| format!("Opening kube config {}", path.display()))?;

        serde_yaml::from_reader(file).context("Parsing kube config")
    }

    pub fn contexts(&self) -> impl Iterator<Item = &Context> {
        self.contexts.iter().flatten()
    }

    /// Resolves `current-context` against the listed contexts. The selected
    /// context must name a cluster.
    pub fn current_context(&self) -> Result<CurrentContext, ConfigError> {
        let name = match self.current_context.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => return Err(ConfigError::NoCurrentContext),
        };

        let context = self
            .contexts()
            .find(|ctx| ctx.name == name)
            .ok_or_else(|| ConfigError::ContextNotFound(name.to_owned()))?;

        let cluster = context
            .context
            .cluster
            .clone()
            .ok_or_else(|| ConfigError::MissingCluster(name.to_owned()))?;

        Ok(CurrentContext {
            name: name.to_owned(),
            cluster,
            namespace: context.context.namespace.clone().into(),
        })
    }
}
// endregion
