pub mod args;
pub mod highlight;
pub mod logger;
pub mod segment;

use std::path::Path;

use powerk8s_config::{default_location, read_current_context_from};

pub use args::{SegmentArg, SegmentArgs, LOGGER_KEY};
pub use highlight::HighlightGroup;
pub use logger::{PowerlineLogger, TracingLogger};
pub use segment::{build_segments, kubernetes_logo, SegmentData, KUBERNETES_LOGO};

/// Reads the current context from the default kube config and renders the
/// requested segments.
pub fn powerk8s(
    args: &SegmentArgs,
    logger: Option<&dyn PowerlineLogger>,
) -> anyhow::Result<Vec<SegmentData>> {
    powerk8s_from(default_location(), args, logger)
}

pub fn powerk8s_from(
    path: impl AsRef<Path>,
    args: &SegmentArgs,
    logger: Option<&dyn PowerlineLogger>,
) -> anyhow::Result<Vec<SegmentData>> {
    let context = read_current_context_from(path)?;

    if let Some(logger) = logger {
        logger.debug(&format!("Context: {context:?}"));
        logger.debug(&format!("Segment arguments: {args}"));
    }

    Ok(build_segments(args, &context)?)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::io::Write;

    use powerk8s_config::ConfigError;
    use tempfile::NamedTempFile;

    use super::*;

    #[derive(Default)]
    struct RecordingLogger(RefCell<Vec<String>>);

    impl PowerlineLogger for RecordingLogger {
        fn debug(&self, message: &str) {
            self.0.borrow_mut().push(message.to_owned());
        }
    }

    fn config_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    const CONFIG: &str = "\
current-context: east
contexts:
- name: east
  context:
    cluster: prod-east
    namespace: kube-system
";

    #[test]
    fn logs_context_and_arguments() {
        let file = config_file(CONFIG);
        let logger = RecordingLogger::default();

        powerk8s_from(file.path(), &SegmentArgs::default(), Some(&logger)).unwrap();

        let messages = logger.0.into_inner();
        assert_eq!(messages.len(), 2);
        assert!(messages[0].starts_with("Context: "));
        assert!(messages[0].contains("prod-east"));
        assert!(messages[1].starts_with("Segment arguments: {show_kube_logo: false"));
    }

    #[test]
    fn runs_without_logger() {
        let file = config_file(CONFIG);
        let args = SegmentArgs {
            show_cluster: true,
            ..SegmentArgs::default()
        };

        let segments = powerk8s_from(file.path(), &args, None).unwrap();
        assert_eq!(segments[0].contents.as_deref(), Some("prod-east"));
    }

    #[test]
    fn context_without_cluster_fails_for_namespace_only() {
        let file = config_file(
            "current-context: a\ncontexts:\n- name: a\n  context:\n    namespace: kube-system\n",
        );
        let args = SegmentArgs {
            show_default_namespace: true,
            ..SegmentArgs::default()
        };

        let err = powerk8s_from(file.path(), &args, None).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ConfigError>(),
            Some(&ConfigError::MissingCluster("a".into()))
        );
    }

    #[test]
    fn null_namespace_fails_when_shown() {
        let file = config_file(
            "current-context: a\ncontexts:\n- name: a\n  context:\n    cluster: c\n    namespace:\n",
        );
        let args = SegmentArgs {
            show_default_namespace: true,
            ..SegmentArgs::default()
        };

        let err = powerk8s_from(file.path(), &args, None).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ConfigError>(),
            Some(&ConfigError::NullNamespace("a".into()))
        );
    }

    #[test]
    fn unparsable_config_fails_instead_of_rendering_nothing() {
        let file = config_file("current-context: [unterminated");
        let logger = RecordingLogger::default();

        assert!(powerk8s_from(file.path(), &SegmentArgs::default(), Some(&logger)).is_err());
        assert!(logger.0.borrow().is_empty());
    }
}
