//! Data export command for external analysis and bookkeeping.
//!
//! Exports booking or payment listings, honoring the same status and
//! date-range filters as the listing commands. The full (filtered) result
//! set is written, not a single page.

use crate::api::Fieldsy;
use crate::libs::config::Config;
use crate::libs::export::{ExportData, ExportFormat, Exporter};
use crate::libs::filter::{filter_records, selection, BookingFilters, DateRange, PaymentFilters};
use crate::libs::messages::Message;
use crate::{msg_error_anyhow, msg_info};
use chrono::Local;
use clap::Args;
use std::error::Error;
use std::path::PathBuf;

/// Command-line arguments for the export command.
#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Record kind to export
    #[arg(value_enum, default_value = "bookings")]
    data: ExportData,

    /// Output format for the exported data
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Custom output file path; a timestamped name is generated when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(long, short, default_value = "", help = "Search filter applied before exporting")]
    search: String,
    #[arg(long, default_value = "All", help = "Status filter applied before exporting")]
    status: String,
    #[arg(long, default_value = "All", help = "Date bucket: All, Today, This Week, This Month or Last Month")]
    date_range: String,
}

pub async fn cmd(args: ExportArgs) -> Result<(), Box<dyn Error>> {
    let config = Config::read()?;
    let api = config.api()?.clone();
    let mut client = Fieldsy::new(&api);

    let date_range = DateRange::parse(&args.date_range)
        .ok_or_else(|| msg_error_anyhow!(Message::UnknownDateRange(args.date_range.clone())))?;
    let today = Local::now().date_naive();
    let exporter = Exporter::new(args.format, args.output);

    match args.data {
        ExportData::Bookings => {
            let filters = BookingFilters {
                search: args.search.clone(),
                status: selection(&args.status),
                date_range,
            };
            let records = client.all_bookings().await?;
            let filtered = filter_records(&records, &filters, today);
            if filtered.is_empty() {
                msg_info!(Message::NothingToExport("bookings".to_string()));
                return Ok(());
            }
            exporter.export_bookings(&filtered)?;
        }
        ExportData::Payments => {
            let filters = PaymentFilters {
                search: args.search.clone(),
                status: selection(&args.status),
                date_range,
            };
            let records = client.all_payments().await?;
            let filtered = filter_records(&records, &filters, today);
            if filtered.is_empty() {
                msg_info!(Message::NothingToExport("payments".to_string()));
                return Ok(());
            }
            exporter.export_payments(&filtered)?;
        }
    }

    Ok(())
}
