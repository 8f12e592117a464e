use crate::core::models::atom_type::AtomType;
use crate::core::models::row::OutputRow;
use std::io::{self, Write};

/// Literal marker that opens every unresolved-pair diagnostic line.
pub const NOT_FOUND_MARKER: &str = "_not_found_";

/// Controls how floating-point fields are rendered.
///
/// With no precision, a float is printed in its shortest round-trip form and integral
/// values keep one decimal (`10.0`, `0.8`, `-1.6`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowFormat {
    pub precision: Option<usize>,
}

impl RowFormat {
    pub fn new(precision: Option<usize>) -> Self {
        Self { precision }
    }

    pub fn float(&self, value: f64) -> String {
        match self.precision {
            Some(p) => format!("{:.*}", p, value),
            None if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 => {
                format!("{:.1}", value)
            }
            None => value.to_string(),
        }
    }

    /// Renders `chargeCount coeff1 index1 ... constraintValue weight`.
    pub fn row(&self, row: &OutputRow) -> String {
        let mut fields = Vec::with_capacity(2 * row.charge_count() + 3);
        fields.push(row.charge_count().to_string());
        for (coefficient, index) in row.terms() {
            fields.push(self.float(coefficient));
            fields.push(index.to_string());
        }
        fields.push(self.float(row.constraint_value));
        fields.push(self.float(row.weight));
        fields.join(" ")
    }
}

pub fn not_found_line(a: &AtomType, b: &AtomType) -> String {
    format!("{} {} {}", NOT_FOUND_MARKER, a, b)
}

/// Writes rows one line at a time to the result stream.
pub struct RowWriter<W: Write> {
    inner: W,
    format: RowFormat,
}

impl<W: Write> RowWriter<W> {
    pub fn new(inner: W, format: RowFormat) -> Self {
        Self { inner, format }
    }

    pub fn write_row(&mut self, row: &OutputRow) -> io::Result<()> {
        writeln!(self.inner, "{}", self.format.row(row))
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> OutputRow {
        OutputRow {
            coefficients: vec![1.0, -0.5],
            indices: vec![1, 3],
            constraint_value: 0.4 * 2.0,
            weight: 10.0,
        }
    }

    #[test]
    fn shortest_format_keeps_a_decimal_on_integral_values() {
        let format = RowFormat::default();
        assert_eq!(format.float(10.0), "10.0");
        assert_eq!(format.float(0.8), "0.8");
        assert_eq!(format.float(-0.8 * 2.0), "-1.6");
        assert_eq!(format.float(0.0), "0.0");
        assert_eq!(format.float(0.125), "0.125");
    }

    #[test]
    fn fixed_precision_format() {
        let format = RowFormat::new(Some(3));
        assert_eq!(format.float(10.0), "10.000");
        assert_eq!(format.float(-1.23456), "-1.235");
    }

    #[test]
    fn row_layout_interleaves_coefficients_and_indices() {
        let format = RowFormat::default();
        assert_eq!(format.row(&sample_row()), "2 1.0 1 -0.5 3 0.8 10.0");
    }

    #[test]
    fn empty_row_has_zero_count_and_trailing_values() {
        let row = OutputRow {
            coefficients: vec![],
            indices: vec![],
            constraint_value: 0.0,
            weight: 1.5,
        };
        assert_eq!(RowFormat::default().row(&row), "0 0.0 1.5");
    }

    #[test]
    fn row_writer_emits_one_line_per_row() {
        let mut writer = RowWriter::new(Vec::new(), RowFormat::default());
        writer.write_row(&sample_row()).unwrap();
        writer.write_row(&sample_row()).unwrap();
        let text = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn not_found_line_names_both_atom_types() {
        assert_eq!(
            not_found_line(&"H".into(), &"Hw".into()),
            "_not_found_ H Hw"
        );
    }
}
