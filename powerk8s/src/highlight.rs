use std::fmt;

/// Highlight groups understood by the status line theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HighlightGroup {
    KubernetesClusterAlert,
    KubernetesCluster,
    KubernetesDivider,
    KubernetesNamespaceAlert,
    KubernetesNamespace,
}

impl HighlightGroup {
    pub const ALL: [HighlightGroup; 5] = [
        HighlightGroup::KubernetesClusterAlert,
        HighlightGroup::KubernetesCluster,
        HighlightGroup::KubernetesDivider,
        HighlightGroup::KubernetesNamespaceAlert,
        HighlightGroup::KubernetesNamespace,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            HighlightGroup::KubernetesClusterAlert => "kubernetes_cluster:alert",
            HighlightGroup::KubernetesCluster => "kubernetes_cluster",
            HighlightGroup::KubernetesDivider => "kubernetes:divider",
            HighlightGroup::KubernetesNamespaceAlert => "kubernetes_namespace:alert",
            HighlightGroup::KubernetesNamespace => "kubernetes_namespace",
        }
    }
}

impl fmt::Display for HighlightGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
