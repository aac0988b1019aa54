/// Logger handle a host may pass in alongside the segment arguments.
pub trait PowerlineLogger {
    fn debug(&self, message: &str);
}

/// Forwards messages to `tracing` at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl PowerlineLogger for TracingLogger {
    fn debug(&self, message: &str) {
        tracing::debug!(target: "powerk8s", "{message}");
    }
}
