//! Report rendering for the terminal.
//!
//! Reports render as a tab-separated table for people, or as JSON, CSV, or
//! TSV for scripts. JSON field names match the HTTP API.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use std::io::{self, Write};
use tablebook::{Availability, OutputFormat, Outcome, ReservationView};

/// Column headers for CSV/TSV output.
const COLUMN_HEADERS: [&str; 8] = [
    "id",
    "data",
    "hora",
    "mesa",
    "pessoas",
    "responsavel",
    "status",
    "garcom",
];

/// Notice printed in table mode when a report is empty.
pub const EMPTY_NOTICE: &str = "No reservations found";

/// Print reservation rows to stdout.
pub fn print_reservations(views: &[ReservationView], format: OutputFormat) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_reservations(&mut handle, views, format)
}

/// Print a table's occupied slots to stdout.
pub fn print_availability(
    availability: &Availability,
    format: OutputFormat,
) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_availability(&mut handle, availability, format)
}

/// Render reservation rows in `format`.
pub fn write_reservations<W: Write>(
    out: &mut W,
    views: &[ReservationView],
    format: OutputFormat,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Table => write_table(out, views),
        OutputFormat::Json => write_json(out, views),
        OutputFormat::Csv => write_delimited(out, views, b','),
        OutputFormat::Tsv => write_delimited(out, views, b'\t'),
    }
}

/// Render occupied slots in `format`.
pub fn write_availability<W: Write>(
    out: &mut W,
    availability: &Availability,
    format: OutputFormat,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Table => {
            if availability.horarios_ocupados.is_empty() {
                writeln!(
                    out,
                    "Table {} has no occupied slots on {}",
                    availability.mesa, availability.data
                )?;
            } else {
                writeln!(
                    out,
                    "Table {} occupied on {}:",
                    availability.mesa, availability.data
                )?;
                for slot in &availability.horarios_ocupados {
                    writeln!(out, "  {slot}")?;
                }
            }
            Ok(())
        }
        OutputFormat::Json => write_json(out, availability),
        OutputFormat::Csv | OutputFormat::Tsv => {
            let delimiter = if format == OutputFormat::Csv { b',' } else { b'\t' };
            let mut writer = csv::WriterBuilder::new()
                .delimiter(delimiter)
                .from_writer(out);
            writer
                .write_record(["mesa", "data", "horario"])
                .map_err(csv_error)?;
            for slot in &availability.horarios_ocupados {
                writer
                    .write_record([
                        availability.mesa.to_string().as_str(),
                        availability.data.as_str(),
                        slot.as_str(),
                    ])
                    .map_err(csv_error)?;
            }
            writer.flush()?;
            Ok(())
        }
    }
}

fn write_table<W: Write>(out: &mut W, views: &[ReservationView]) -> Result<(), CliError> {
    if views.is_empty() {
        writeln!(out, "{EMPTY_NOTICE}")?;
        return Ok(());
    }

    let header_line = COLUMN_HEADERS
        .iter()
        .map(|s| s.to_uppercase())
        .collect::<Vec<_>>()
        .join("\t");
    writeln!(out, "{header_line}")?;

    for view in views {
        writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            view.id,
            view.data,
            view.hora,
            view.mesa,
            view.pessoas,
            view.responsavel,
            view.status,
            view.garcom.as_deref().unwrap_or("-"),
        )?;
    }

    Ok(())
}

fn write_json<W: Write, T: serde::Serialize + ?Sized>(
    out: &mut W,
    value: &T,
) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *out, value).map_err(|e| CliError::Io(io::Error::other(e)))?;
    writeln!(out)?;
    Ok(())
}

/// Convert csv::Error to CliError.
fn csv_error(e: csv::Error) -> CliError {
    CliError::Io(io::Error::other(e))
}

fn write_delimited<W: Write>(
    out: &mut W,
    views: &[ReservationView],
    delimiter: u8,
) -> Result<(), CliError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(out);

    writer.write_record(COLUMN_HEADERS).map_err(csv_error)?;

    for view in views {
        writer
            .write_record(&[
                view.id.to_string(),
                view.data.clone(),
                view.hora.clone(),
                view.mesa.to_string(),
                view.pessoas.to_string(),
                view.responsavel.clone(),
                view.status.as_str().to_string(),
                view.garcom.clone().unwrap_or_default(),
            ])
            .map_err(csv_error)?;
    }

    writer.flush()?;
    Ok(())
}

/// Report a lifecycle outcome on stderr.
///
/// Dry runs list the planned actions and warnings; real runs print `done`
/// followed by any warnings. Nothing is printed with `--quiet`.
pub fn print_outcome(global: &GlobalOptions, outcome: &Outcome, done: &str) {
    if global.quiet {
        return;
    }

    if outcome.dry_run {
        eprintln!("Dry run - would perform the following actions:");
        for (i, action) in outcome.actions.iter().enumerate() {
            eprintln!("  {}. {action}", i + 1);
        }
        if !outcome.warnings.is_empty() {
            eprintln!("Warnings:");
            for warning in &outcome.warnings {
                eprintln!("  - {warning}");
            }
        }
        return;
    }

    eprintln!("{done}");
    for warning in &outcome.warnings {
        eprintln!("Warning: {warning}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tablebook::Status;

    fn sample() -> Vec<ReservationView> {
        vec![ReservationView {
            id: 7,
            data: "2099-03-14".into(),
            hora: "19:00 - 20:00".into(),
            mesa: 5,
            pessoas: 4,
            responsavel: "Ana, Bia".into(),
            status: Status::Confirmed,
            garcom: Some("Joao".into()),
        }]
    }

    fn render(views: &[ReservationView], format: OutputFormat) -> String {
        let mut out = Vec::new();
        write_reservations(&mut out, views, format).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_table_output() {
        let text = render(&sample(), OutputFormat::Table);
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "ID\tDATA\tHORA\tMESA\tPESSOAS\tRESPONSAVEL\tSTATUS\tGARCOM"
        );
        assert_eq!(
            lines.next().unwrap(),
            "7\t2099-03-14\t19:00 - 20:00\t5\t4\tAna, Bia\tconfirmed\tJoao"
        );
    }

    #[test]
    fn test_empty_table_prints_notice() {
        assert_eq!(render(&[], OutputFormat::Table).trim(), EMPTY_NOTICE);
        // Machine formats stay parseable
        assert_eq!(render(&[], OutputFormat::Json).trim(), "[]");
    }

    #[test]
    fn test_csv_quotes_fields() {
        let text = render(&sample(), OutputFormat::Csv);
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "id,data,hora,mesa,pessoas,responsavel,status,garcom"
        );
        assert_eq!(
            lines.next().unwrap(),
            "7,2099-03-14,19:00 - 20:00,5,4,\"Ana, Bia\",confirmada,Joao"
        );
    }

    #[test]
    fn test_json_output() {
        let text = render(&sample(), OutputFormat::Json);
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed[0]["status"], "confirmada");
        assert_eq!(parsed[0]["garcom"], "Joao");
    }

    #[test]
    fn test_availability_output() {
        let availability = Availability {
            mesa: 5,
            data: "2099-03-14".into(),
            horarios_ocupados: vec!["19:00 - 20:00".into()],
        };
        let mut out = Vec::new();
        write_availability(&mut out, &availability, OutputFormat::Tsv).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "mesa\tdata\thorario\n5\t2099-03-14\t19:00 - 20:00\n");
    }
}
