use serde::Serialize;

use powerk8s_config::{ConfigError, CurrentContext};

use crate::{HighlightGroup, SegmentArgs};

pub const KUBERNETES_LOGO: &str = "\u{2388} ";

/// One segment as the host renderer consumes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SegmentData {
    pub contents: Option<String>,
    pub highlight_groups: Vec<String>,
    pub divider_highlight_group: String,
}

impl SegmentData {
    pub fn new(contents: impl Into<String>, group: HighlightGroup, divider: HighlightGroup) -> Self {
        Self {
            contents: Some(contents.into()),
            highlight_groups: vec![group.to_string()],
            divider_highlight_group: divider.to_string(),
        }
    }
}

pub fn kubernetes_logo(color: HighlightGroup) -> SegmentData {
    SegmentData::new(KUBERNETES_LOGO, color, HighlightGroup::KubernetesDivider)
}

/// Builds segments in display order: logo, cluster, default namespace.
///
/// Fails when `show_default_namespace` is set and the context's namespace
/// key is present but null.
pub fn build_segments(
    args: &SegmentArgs,
    context: &CurrentContext,
) -> Result<Vec<SegmentData>, ConfigError> {
    let mut segments = Vec::new();

    if args.show_kube_logo {
        segments.push(kubernetes_logo(HighlightGroup::KubernetesCluster));
    }

    if args.show_cluster {
        segments.push(SegmentData::new(
            context.cluster.as_str(),
            HighlightGroup::KubernetesCluster,
            HighlightGroup::KubernetesNamespace,
        ));
    }

    // The namespace is drawn with the cluster group, not KubernetesNamespace.
    if args.show_default_namespace {
        if let Some(namespace) = context.namespace()? {
            segments.push(SegmentData::new(
                namespace,
                HighlightGroup::KubernetesCluster,
                HighlightGroup::KubernetesNamespace,
            ));
        }
    }

    Ok(segments)
}
