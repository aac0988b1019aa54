pub mod current;
pub mod direct;
pub mod error;

use std::{env, ffi::OsString, path::PathBuf};

pub use current::*;
pub use error::ConfigError;

/// Environment variable that overrides the default kube config location.
pub const KUBECONFIG_ENV: &str = "KUBECONFIG";

/// Directory holding the default kube config. Subject to tilde expansion.
pub const KUBE_DIR: &str = "~/.kube";

pub fn kube_dir() -> PathBuf {
    expand(KUBE_DIR)
}

/// The kube config file this process reads from: the first entry of
/// `KUBECONFIG`, else `config` under [`kube_dir`].
///
/// Only the first entry of a `KUBECONFIG` path list is honored; configs are
/// never merged.
pub fn default_location() -> PathBuf {
    resolve_location(env::var_os(KUBECONFIG_ENV))
}

fn resolve_location(kubeconfig: Option<OsString>) -> PathBuf {
    let first = kubeconfig
        .as_deref()
        .and_then(|paths| env::split_paths(paths).find(|p| !p.as_os_str().is_empty()));

    match first {
        Some(path) => expand(&path.to_string_lossy()),
        None => kube_dir().join("config"),
    }
}

fn expand(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}
