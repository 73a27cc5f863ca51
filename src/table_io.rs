use crate::symbols::bit_char;
use crate::truth_table::{ResultFilter, Row, TruthTable};
use itertools::Itertools;
use std::io;
use std::io::Write;

const SEPARATOR: &str = " | ";

/// Writes the table in plain text.
///
/// ```text
/// a | b | a^b
/// 0 | 0 | 0
/// 0 | 1 | 1
/// ```
pub fn write_text<W: Write>(
    writer: &mut W,
    table: &TruthTable,
    filter: ResultFilter,
) -> io::Result<()> {
    for variable in table.variables() {
        write!(writer, "{variable}{SEPARATOR}")?;
    }
    writeln!(writer, "{}", table.expression())?;

    for row in table.filtered(filter) {
        writeln!(writer, "{}", text_row(row))?;
    }

    Ok(())
}

fn text_row(row: &Row) -> String {
    row.assignment
        .bits()
        .iter()
        .chain(std::iter::once(&row.result))
        .map(|&b| bit_char(b))
        .join(SEPARATOR)
}

/// Writes the table as CSV, with the variables and the expression as header record.
pub fn write_csv<W: Write>(
    writer: &mut W,
    table: &TruthTable,
    filter: ResultFilter,
) -> io::Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    let header = table
        .variables()
        .iter()
        .map(ToString::to_string)
        .chain(std::iter::once(table.expression().to_string()));
    csv_writer.write_record(header)?;

    for row in table.filtered(filter) {
        let record = row
            .assignment
            .bits()
            .iter()
            .chain(std::iter::once(&row.result))
            .map(|&b| if b { "1" } else { "0" });
        csv_writer.write_record(record)?;
    }

    csv_writer.flush()
}
