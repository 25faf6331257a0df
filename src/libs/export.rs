//! Data export for external analysis and bookkeeping.
//!
//! Listing data can be written to three formats: CSV for spreadsheets, JSON
//! for programmatic processing, and native Excel workbooks with formatted
//! headers. Export rows are flattened, pre-formatted string records so every
//! format renders identically to the on-screen tables.

use crate::libs::messages::Message;
use crate::libs::records::{Booking, Payment};
use crate::libs::status::display_text;
use crate::msg_success;
use anyhow::Result;
use chrono::Local;
use rust_xlsxwriter::{Format, Workbook};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// Enumeration of supported export output formats.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values for universal compatibility.
    Csv,
    /// Pretty-printed JSON for structured data exchange.
    Json,
    /// Microsoft Excel workbook with formatted headers.
    Excel,
}

/// Enumeration of record kinds available for export.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportData {
    /// Booking listings with slot times, durations and statuses.
    Bookings,
    /// Payment listings with amounts and statuses.
    Payments,
}

/// Flattened booking row ready for serialization.
#[derive(Debug, Clone, Serialize)]
pub struct ExportBooking {
    pub id: String,
    pub date: String,
    pub start: String,
    pub end: String,
    pub duration: String,
    pub dogs: String,
    pub field: String,
    pub customer: String,
    pub price: String,
    pub status: String,
}

impl From<&Booking> for ExportBooking {
    fn from(booking: &Booking) -> Self {
        ExportBooking {
            id: booking.id.clone(),
            date: booking.day().map_or_else(String::new, |d| d.format("%Y-%m-%d").to_string()),
            start: booking.start_time.clone().unwrap_or_default(),
            end: booking.end_time.clone().unwrap_or_default(),
            duration: booking.duration(),
            dogs: booking.number_of_dogs.map_or_else(String::new, |n| n.to_string()),
            field: booking.field.as_ref().and_then(|f| f.name.clone()).unwrap_or_default(),
            customer: booking.user.as_ref().and_then(|u| u.name.clone()).unwrap_or_default(),
            price: booking.total_price.map_or_else(String::new, |p| format!("{:.2}", p)),
            status: display_text(&booking.status),
        }
    }
}

/// Flattened payment row ready for serialization.
#[derive(Debug, Clone, Serialize)]
pub struct ExportPayment {
    pub id: String,
    pub booking: String,
    pub customer: String,
    pub amount: String,
    pub date: String,
    pub status: String,
}

impl From<&Payment> for ExportPayment {
    fn from(payment: &Payment) -> Self {
        ExportPayment {
            id: payment.id.clone(),
            booking: payment.booking_id.clone().unwrap_or_default(),
            customer: payment.user.as_ref().and_then(|u| u.name.clone()).unwrap_or_default(),
            amount: payment.amount.map_or_else(String::new, |a| format!("{:.2}", a)),
            date: payment.day().map_or_else(String::new, |d| d.format("%Y-%m-%d").to_string()),
            status: display_text(&payment.status),
        }
    }
}

const BOOKING_HEADERS: [&str; 10] = ["ID", "Date", "Start", "End", "Duration", "Dogs", "Field", "Customer", "Price", "Status"];
const PAYMENT_HEADERS: [&str; 6] = ["ID", "Booking", "Customer", "Amount", "Date", "Status"];

/// Writes listing data to a file in the configured format.
#[derive(Debug)]
pub struct Exporter {
    /// The desired output format for the export operation
    format: ExportFormat,
    /// The destination path for the exported file
    output_path: PathBuf,
}

impl Exporter {
    /// Creates an exporter, generating a timestamped default filename when no
    /// output path is given (e.g. `fieldsy_export_20250115_143022.csv`).
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let default_name = format!("fieldsy_export_{}", Local::now().format("%Y%m%d_%H%M%S"));

        let extension = match format {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        };

        let output_path = output_path.unwrap_or_else(|| PathBuf::from(format!("{}.{}", default_name, extension)));

        Self { format, output_path }
    }

    pub fn export_bookings(&self, bookings: &[Booking]) -> Result<()> {
        let rows: Vec<ExportBooking> = bookings.iter().map(ExportBooking::from).collect();

        match self.format {
            ExportFormat::Csv => {
                let mut wtr = csv::Writer::from_path(&self.output_path)?;
                wtr.write_record(BOOKING_HEADERS)?;
                for row in &rows {
                    wtr.write_record(&[
                        row.id.clone(),
                        row.date.clone(),
                        row.start.clone(),
                        row.end.clone(),
                        row.duration.clone(),
                        row.dogs.clone(),
                        row.field.clone(),
                        row.customer.clone(),
                        row.price.clone(),
                        row.status.clone(),
                    ])?;
                }
                wtr.flush()?;
            }
            ExportFormat::Json => {
                let json = serde_json::to_string_pretty(&rows)?;
                File::create(&self.output_path)?.write_all(json.as_bytes())?;
            }
            ExportFormat::Excel => {
                let mut workbook = Workbook::new();
                let worksheet = workbook.add_worksheet();
                let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);

                for (col, header) in BOOKING_HEADERS.iter().enumerate() {
                    worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
                }
                for (i, row) in rows.iter().enumerate() {
                    let r = (i + 1) as u32;
                    worksheet.write_string(r, 0, &row.id)?;
                    worksheet.write_string(r, 1, &row.date)?;
                    worksheet.write_string(r, 2, &row.start)?;
                    worksheet.write_string(r, 3, &row.end)?;
                    worksheet.write_string(r, 4, &row.duration)?;
                    worksheet.write_string(r, 5, &row.dogs)?;
                    worksheet.write_string(r, 6, &row.field)?;
                    worksheet.write_string(r, 7, &row.customer)?;
                    worksheet.write_string(r, 8, &row.price)?;
                    worksheet.write_string(r, 9, &row.status)?;
                }
                worksheet.autofit();
                workbook.save(&self.output_path)?;
            }
        }

        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    pub fn export_payments(&self, payments: &[Payment]) -> Result<()> {
        let rows: Vec<ExportPayment> = payments.iter().map(ExportPayment::from).collect();

        match self.format {
            ExportFormat::Csv => {
                let mut wtr = csv::Writer::from_path(&self.output_path)?;
                wtr.write_record(PAYMENT_HEADERS)?;
                for row in &rows {
                    wtr.write_record(&[
                        row.id.clone(),
                        row.booking.clone(),
                        row.customer.clone(),
                        row.amount.clone(),
                        row.date.clone(),
                        row.status.clone(),
                    ])?;
                }
                wtr.flush()?;
            }
            ExportFormat::Json => {
                let json = serde_json::to_string_pretty(&rows)?;
                File::create(&self.output_path)?.write_all(json.as_bytes())?;
            }
            ExportFormat::Excel => {
                let mut workbook = Workbook::new();
                let worksheet = workbook.add_worksheet();
                let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);

                for (col, header) in PAYMENT_HEADERS.iter().enumerate() {
                    worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
                }
                for (i, row) in rows.iter().enumerate() {
                    let r = (i + 1) as u32;
                    worksheet.write_string(r, 0, &row.id)?;
                    worksheet.write_string(r, 1, &row.booking)?;
                    worksheet.write_string(r, 2, &row.customer)?;
                    worksheet.write_string(r, 3, &row.amount)?;
                    worksheet.write_string(r, 4, &row.date)?;
                    worksheet.write_string(r, 5, &row.status)?;
                }
                worksheet.autofit();
                workbook.save(&self.output_path)?;
            }
        }

        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }
}
