use super::error::{FormatError, ParseErrorKind};
use super::text;
use crate::core::models::atom_type::AtomType;
use std::io::BufRead;
use tracing::trace;

pub fn parse_pair_line(line: &str) -> Result<(AtomType, AtomType), ParseErrorKind> {
    match text::fields(line).as_slice() {
        [a, b] => Ok((AtomType::from(*a), AtomType::from(*b))),
        other => Err(ParseErrorKind::PairArity { found: other.len() }),
    }
}

/// Reads the declared COU pairs in file order, duplicates included.
pub fn read_pairs(reader: &mut impl BufRead) -> Result<Vec<(AtomType, AtomType)>, FormatError> {
    let mut pairs = Vec::new();
    for (line_num, line_res) in reader.lines().enumerate() {
        let line = line_res?;
        if text::is_ignorable(&line) {
            continue;
        }
        let pair = parse_pair_line(&line).map_err(|kind| FormatError::parse(line_num + 1, kind))?;
        trace!("COU term on line {}: {} {}", line_num + 1, pair.0, pair.1);
        pairs.push(pair);
    }
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn pair(a: &str, b: &str) -> (AtomType, AtomType) {
        (AtomType::from(a), AtomType::from(b))
    }

    #[test]
    fn reads_pairs_in_file_order_skipping_comments() {
        let input = "# COU terms\nC H\n\n  O   H  \n# trailing\nN C\n";
        let pairs = read_pairs(&mut Cursor::new(input)).unwrap();
        assert_eq!(
            pairs,
            vec![pair("C", "H"), pair("O", "H"), pair("N", "C")]
        );
    }

    #[test]
    fn rejects_lines_without_exactly_two_fields() {
        let err = read_pairs(&mut Cursor::new("C H\nC H O\n")).unwrap_err();
        match err {
            FormatError::Parse { line, kind } => {
                assert_eq!(line, 2);
                assert_eq!(kind, ParseErrorKind::PairArity { found: 3 });
            }
            other => panic!("unexpected error: {other}"),
        }

        let err = read_pairs(&mut Cursor::new("C\n")).unwrap_err();
        assert_eq!(err.kind(), Some(&ParseErrorKind::PairArity { found: 1 }));
    }
}
