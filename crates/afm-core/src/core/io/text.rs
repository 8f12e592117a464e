use super::error::ParseErrorKind;

/// Returns `true` for lines that carry no data: blank or `#`-prefixed.
pub fn is_ignorable(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.is_empty() || trimmed.starts_with('#')
}

pub fn fields(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

pub fn parse_float(field: &'static str, value: &str) -> Result<f64, ParseErrorKind> {
    value.parse().map_err(|_| ParseErrorKind::InvalidFloat {
        field,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comments_and_blank_lines_are_ignorable() {
        assert!(is_ignorable(""));
        assert!(is_ignorable("   \t"));
        assert!(is_ignorable("# header"));
        assert!(is_ignorable("   # indented comment"));
        assert!(!is_ignorable("C H"));
        assert!(!is_ignorable("C# H"));
    }

    #[test]
    fn parse_float_names_the_offending_token() {
        assert_eq!(parse_float("charge", "-0.8"), Ok(-0.8));
        assert_eq!(
            parse_float("charge", "abc"),
            Err(ParseErrorKind::InvalidFloat {
                field: "charge",
                value: "abc".to_string()
            })
        );
    }
}
