pub mod export;

use anyhow::Result;
use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    export: export::ExportArgs,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        // Diagnostics go through tracing when debug mode is on; the
        // subscriber writes to stderr so stdout stays pure CSV
        if crate::libs::messages::macros::is_debug_mode() {
            let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug"));
            tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
        }

        let cli = Self::parse();
        export::cmd(cli.export).await
    }
}
