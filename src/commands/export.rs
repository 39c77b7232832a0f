//! The export command: resolve workspace, fetch the month, aggregate,
//! print CSV.

use crate::{
    api::{Reports, Toggl},
    libs::{config::Config, export::write_csv, month::ReportMonth, summary::Summarize},
    msg_debug,
};
use anyhow::Result;
use clap::Args;
use std::io;

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[arg(value_name = "YEAR", help = "Report year (defaults to the current year)")]
    pub year: Option<i32>,
    #[arg(value_name = "MONTH", help = "Report month, 1-12 (defaults to the current month)")]
    pub month: Option<u32>,
}

pub async fn cmd(args: ExportArgs) -> Result<()> {
    let config = Config::read()?;
    let month = ReportMonth::from_args(args.year, args.month)?;
    msg_debug!(format!("Exporting on-location report for {}-{:02}", month.year(), month.month()));

    let workspace_id = Toggl::new(&config).workspace_id().await?;
    let entries = Reports::new(&config, month).time_entries(workspace_id).await?;
    msg_debug!(format!("Fetched {} tagged entries", entries.len()));

    let days = entries.into_day_summaries()?;
    write_csv(io::stdout(), &days)?;

    Ok(())
}
