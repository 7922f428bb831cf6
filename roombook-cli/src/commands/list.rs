//! List command implementation.
//!
//! This module implements the `list` command, which displays reservations
//! in date order in various formats (table, JSON, CSV, TSV).

use crate::error::CliError;
use crate::utils::{load_configuration, open_service, GlobalOptions};
use clap::Args;
use roombook::config::OutputFormat;
use roombook::ReservationDetails;
use std::io::Write;

/// Column headers for CSV/TSV output.
const COLUMN_HEADERS: [&str; 5] = ["id", "date", "room_id", "room", "holder"];

/// List reservations.
#[derive(Args)]
pub struct ListCommand {
    /// Output format (defaults to the configured format, else table)
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<OutputFormat>,
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut service = open_service(global, &config)?;

        let reservations = service.list_reservations().map_err(CliError::from)?;

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        match self.format.unwrap_or_else(|| config.output_format()) {
            OutputFormat::Table => format_as_table(&mut handle, &reservations)?,
            OutputFormat::Json => format_as_json(&mut handle, &reservations)?,
            OutputFormat::Csv => format_as_delimited(handle, &reservations, b',')?,
            OutputFormat::Tsv => format_as_delimited(handle, &reservations, b'\t')?,
        }

        Ok(())
    }
}

/// One `date - room - holder` line per reservation.
fn format_as_table(out: &mut impl Write, reservations: &[ReservationDetails]) -> Result<(), CliError> {
    if reservations.is_empty() {
        writeln!(out, "No reservations.")?;
    }
    for details in reservations {
        writeln!(out, "{details}")?;
    }
    Ok(())
}

/// Format reservations as a JSON array.
fn format_as_json(out: &mut impl Write, reservations: &[ReservationDetails]) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *out, reservations)
        .map_err(|e| CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))?;
    writeln!(out)?;
    Ok(())
}

/// Convert csv::Error to CliError.
fn csv_error(e: csv::Error) -> CliError {
    CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e))
}

/// Format reservations as delimited output (CSV or TSV).
fn format_as_delimited(
    out: impl Write,
    reservations: &[ReservationDetails],
    delimiter: u8,
) -> Result<(), CliError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(out);

    writer.write_record(COLUMN_HEADERS).map_err(csv_error)?;

    for details in reservations {
        writer
            .write_record(&[
                details.id.value().to_string(),
                details.date.to_string(),
                details.room.id.to_string(),
                details.room.name.clone(),
                details.holder.to_string(),
            ])
            .map_err(csv_error)?;
    }

    writer.flush()?;
    Ok(())
}
