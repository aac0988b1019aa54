use std::fmt;

use serde_json::{Map, Value};
use tracing::debug;

/// Reserved key of the argument bag that carries the host's logger.
pub const LOGGER_KEY: &str = "pl";

/// Every option the segment accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SegmentArg {
    ShowKubernetesLogo,
    ShowCluster,
    ShowNamespace,
    ShowDefaultNamespace,
}

impl SegmentArg {
    pub const ALL: [SegmentArg; 4] = [
        SegmentArg::ShowKubernetesLogo,
        SegmentArg::ShowCluster,
        SegmentArg::ShowNamespace,
        SegmentArg::ShowDefaultNamespace,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SegmentArg::ShowKubernetesLogo => "show_kube_logo",
            SegmentArg::ShowCluster => "show_cluster",
            SegmentArg::ShowNamespace => "show_namespace",
            SegmentArg::ShowDefaultNamespace => "show_default_namespace",
        }
    }

    pub fn from_key(key: &str) -> Option<SegmentArg> {
        SegmentArg::ALL.into_iter().find(|arg| arg.as_str() == key)
    }
}

impl fmt::Display for SegmentArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SegmentArgs {
    pub show_kube_logo: bool,
    pub show_cluster: bool,
    // Accepted but no segment is built from it yet.
    pub show_namespace: bool,
    pub show_default_namespace: bool,
}

impl SegmentArgs {
    pub fn get(&self, arg: SegmentArg) -> bool {
        match arg {
            SegmentArg::ShowKubernetesLogo => self.show_kube_logo,
            SegmentArg::ShowCluster => self.show_cluster,
            SegmentArg::ShowNamespace => self.show_namespace,
            SegmentArg::ShowDefaultNamespace => self.show_default_namespace,
        }
    }

    pub fn set(&mut self, arg: SegmentArg, value: bool) {
        let slot = match arg {
            SegmentArg::ShowKubernetesLogo => &mut self.show_kube_logo,
            SegmentArg::ShowCluster => &mut self.show_cluster,
            SegmentArg::ShowNamespace => &mut self.show_namespace,
            SegmentArg::ShowDefaultNamespace => &mut self.show_default_namespace,
        };
        *slot = value;
    }

    /// Builds the options from a named-argument bag. Keys other than the
    /// recognized options and the logger key are skipped.
    pub fn from_kwargs(kwargs: &Map<String, Value>) -> SegmentArgs {
        let mut args = SegmentArgs::default();

        for (key, value) in kwargs {
            match SegmentArg::from_key(key) {
                Some(arg) => args.set(arg, is_truthy(value)),
                None if key == LOGGER_KEY => {}
                None => debug!("ignoring unknown segment argument {key:?}"),
            }
        }

        args
    }
}

impl fmt::Display for SegmentArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, arg) in SegmentArg::ALL.into_iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{arg}: {}", self.get(arg))?;
        }
        f.write_str("}")
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
