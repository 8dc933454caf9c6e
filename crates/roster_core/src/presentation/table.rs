//! Plain-text table surface.

use super::PresentationSurface;
use crate::model::employee::Employee;
use log::warn;
use std::io::{self, Write};

const HEADERS: [&str; 7] = ["ID", "Name", "Age", "Type", "Pay Rate", "Hours", "Salary"];

/// Writes the roster as an aligned text table.
///
/// Validation messages go to a separate writer as `error: <message>`.
pub struct TextTableSurface<W: Write, E: Write> {
    out: W,
    err: E,
}

impl TextTableSurface<io::Stdout, io::Stderr> {
    /// Table on stdout, rejections on stderr.
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<W: Write, E: Write> TextTableSurface<W, E> {
    pub fn new(out: W, err: E) -> Self {
        Self { out, err }
    }

    /// Returns the writers, e.g. to inspect buffered output.
    pub fn into_inner(self) -> (W, E) {
        (self.out, self.err)
    }

    fn write_table(&mut self, employees: &[Employee]) -> io::Result<()> {
        let rows = employees.iter().map(table_row).collect::<Vec<_>>();
        let mut widths = HEADERS.map(str::len);
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row.iter()) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let header = HEADERS.map(str::to_string);
        write_row(&mut self.out, &header, &widths)?;
        let rule = widths.map(|width| "-".repeat(width));
        write_row(&mut self.out, &rule, &widths)?;
        for row in &rows {
            write_row(&mut self.out, row, &widths)?;
        }
        self.out.flush()
    }
}

impl<W: Write, E: Write> PresentationSurface for TextTableSurface<W, E> {
    fn render(&mut self, employees: &[Employee]) {
        if let Err(err) = self.write_table(employees) {
            warn!("event=render module=presentation status=error error={err}");
        }
    }

    fn show_validation_error(&mut self, message: &str) {
        if let Err(err) = writeln!(self.err, "error: {message}") {
            warn!("event=show_validation_error module=presentation status=error error={err}");
        }
    }
}

fn table_row(employee: &Employee) -> [String; 7] {
    [
        employee.id().to_string(),
        employee.name().to_string(),
        employee.age().to_string(),
        employee.kind().label().to_string(),
        format!("{:.2}", employee.pay_rate()),
        employee.hours().to_string(),
        format!("{:.2}", employee.salary()),
    ]
}

fn write_row(out: &mut impl Write, cells: &[String; 7], widths: &[usize; 7]) -> io::Result<()> {
    let line = cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    writeln!(out, "{}", line.trim_end())
}

#[cfg(test)]
mod tests {
    use super::TextTableSurface;
    use crate::model::employee::Employee;
    use crate::presentation::PresentationSurface;

    #[test]
    fn render_writes_header_and_money_with_two_decimals() {
        let mut john = Employee::part_time("John", 30, 40, 25.0);
        john.assign_id(1);
        let mut surface = TextTableSurface::new(Vec::new(), Vec::new());

        surface.render(&[john]);

        let (out, err) = surface.into_inner();
        let text = String::from_utf8(out).unwrap();
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("ID"));
        assert!(lines[2].contains("Part-time"));
        assert!(lines[2].contains("25.00"));
        assert!(lines[2].ends_with("52000.00"));
        assert!(err.is_empty());
    }

    #[test]
    fn validation_error_goes_to_error_writer() {
        let mut surface = TextTableSurface::new(Vec::new(), Vec::new());
        surface.show_validation_error("bad input");

        let (out, err) = surface.into_inner();
        assert!(out.is_empty());
        assert_eq!(String::from_utf8(err).unwrap(), "error: bad input\n");
    }
}
