#![forbid(unsafe_code)]
//! Resume Command Line Interface

use console::Term;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use resume::{run, Config, Context, Options, ResumeRecord};

fn main() -> anyhow::Result<()> {
    let options = Options::from_env();
    init_logging(options.verbose);

    let record = ResumeRecord::builtin()?;
    let config = Config::default();

    let mut ctx = Context::new(&record, &config);
    ctx.clear_screen = Term::stdout().is_term();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(options.view(), &ctx, &mut out)?;

    Ok(())
}

/// Diagnostics go to stderr; stdout carries only the resume
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("resume={}", default_level))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
