use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use serde_json::{Map, Value};
use tracing_subscriber::EnvFilter;

use powerk8s::{powerk8s, powerk8s_from, PowerlineLogger, SegmentArgs, TracingLogger};

/// Print status line segments for the current kubernetes context as JSON.
#[derive(Parser, Debug)]
#[clap(name = "powerk8s", version, about)]
struct Cli {
    /// Show the kubernetes logo
    #[clap(long)]
    show_kube_logo: bool,

    /// Show the cluster of the current context
    #[clap(long)]
    show_cluster: bool,

    /// Accepted for compatibility; currently renders nothing
    #[clap(long)]
    show_namespace: bool,

    /// Show the namespace of the current context, when it sets one
    #[clap(long)]
    show_default_namespace: bool,

    /// Segment arguments as a JSON object, e.g. '{"show_cluster": true}'
    #[clap(long, value_name = "JSON")]
    args: Option<String>,

    /// Read this kube config instead of $KUBECONFIG or ~/.kube/config
    #[clap(long, value_name = "PATH")]
    kubeconfig: Option<PathBuf>,

    /// Log the resolved context and arguments to stderr
    #[clap(long)]
    debug: bool,
}

impl Cli {
    fn segment_args(&self) -> anyhow::Result<SegmentArgs> {
        let mut args = match &self.args {
            Some(raw) => {
                let kwargs: Map<String, Value> =
                    serde_json::from_str(raw).context("Parsing --args as a JSON object")?;
                SegmentArgs::from_kwargs(&kwargs)
            }
            None => SegmentArgs::default(),
        };

        args.show_kube_logo |= self.show_kube_logo;
        args.show_cluster |= self.show_cluster;
        args.show_namespace |= self.show_namespace;
        args.show_default_namespace |= self.show_default_namespace;

        Ok(args)
    }
}

fn init_tracing(debug: bool) -> anyhow::Result<()> {
    let mut filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    if debug {
        filter = filter.add_directive("powerk8s=debug".parse()?);
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug)?;

    let args = cli.segment_args()?;

    let tracing_logger = TracingLogger;
    let logger = cli
        .debug
        .then(|| &tracing_logger as &dyn PowerlineLogger);

    let segments = match &cli.kubeconfig {
        Some(path) => powerk8s_from(path, &args, logger)?,
        None => powerk8s(&args, logger)?,
    };

    let mut stdout = io::stdout().lock();
    serde_json::to_writer(&mut stdout, &segments)?;
    writeln!(stdout)?;

    Ok(())
}
