use super::error::{FormatError, ParseErrorKind};
use super::text;
use crate::core::models::atom_type::AtomType;
use crate::core::models::equation::{ConstraintEquation, ConstraintTerm, TargetAtom};
use std::io::BufRead;
use tracing::{debug, trace};

/// Fewest terms an equation line may carry; a lone `coeff atom factor` line is rejected.
pub const MIN_EQUATION_TERMS: usize = 2;

/// Parses `coeff1 atom1 ... coeffN atomN factor` into ordered terms and the scaling factor.
pub fn parse_equation(line: &str) -> Result<(Vec<ConstraintTerm>, f64), ParseErrorKind> {
    let fields = text::fields(line);

    if let Some(token) = fields
        .iter()
        .find(|f| matches!(**f, "+" | "-") || f.contains('='))
    {
        return Err(ParseErrorKind::AlgebraicForm {
            token: token.to_string(),
        });
    }

    let Some((factor_field, term_fields)) = fields.split_last() else {
        return Err(ParseErrorKind::EmptyEquation);
    };
    if term_fields.is_empty() {
        return Err(ParseErrorKind::EmptyEquation);
    }
    if term_fields.len() % 2 != 0 {
        return Err(ParseErrorKind::EquationArity {
            found: fields.len(),
        });
    }
    if term_fields.len() / 2 < MIN_EQUATION_TERMS {
        return Err(ParseErrorKind::TooFewTerms {
            found: term_fields.len() / 2,
            min: MIN_EQUATION_TERMS,
        });
    }

    let terms = term_fields
        .chunks_exact(2)
        .map(|pair| {
            Ok(ConstraintTerm {
                coefficient: text::parse_float("coefficient", pair[0])?,
                atom_type: AtomType::from(pair[1]),
            })
        })
        .collect::<Result<Vec<_>, ParseErrorKind>>()?;
    let scaling_factor = text::parse_float("scaling factor", factor_field)?;

    Ok((terms, scaling_factor))
}

pub fn parse_weight(line: &str) -> Result<f64, ParseErrorKind> {
    match text::fields(line).as_slice() {
        [weight] => text::parse_float("weight", weight),
        other => Err(ParseErrorKind::WeightArity { found: other.len() }),
    }
}

/// Parses `atomType [charge]`. Comment and blank lines yield `None`.
pub fn parse_target_atom(line: &str) -> Result<Option<TargetAtom>, ParseErrorKind> {
    if text::is_ignorable(line) {
        return Ok(None);
    }
    match text::fields(line).as_slice() {
        [atom] => Ok(Some(TargetAtom::new(AtomType::from(*atom), None))),
        [atom, charge] => {
            let charge = text::parse_float("charge", charge)?;
            Ok(Some(TargetAtom::new(AtomType::from(*atom), Some(charge))))
        }
        other => Err(ParseErrorKind::TargetArity { found: other.len() }),
    }
}

/// A fully parsed constraint-equation file: header equation, weight and target atoms.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstraintFile {
    pub equation: ConstraintEquation,
    pub targets: Vec<TargetAtom>,
}

impl ConstraintFile {
    pub fn read_from(reader: &mut impl BufRead) -> Result<Self, FormatError> {
        let mut header: Option<(Vec<ConstraintTerm>, f64)> = None;
        let mut equation: Option<ConstraintEquation> = None;
        let mut targets = Vec::new();
        let mut last_line = 0;

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line_num = line_num + 1;
            last_line = line_num;
            if text::is_ignorable(&line) {
                continue;
            }
            let at = |kind| FormatError::parse(line_num, kind);

            if equation.is_some() {
                if let Some(target) = parse_target_atom(&line).map_err(at)? {
                    trace!("Target atom on line {}: {:?}", line_num, target);
                    targets.push(target);
                }
            } else if let Some((terms, scaling_factor)) = header.take() {
                let weight = parse_weight(&line).map_err(at)?;
                equation = Some(ConstraintEquation {
                    terms,
                    scaling_factor,
                    weight,
                });
            } else {
                header = Some(parse_equation(&line).map_err(at)?);
            }
        }

        let equation = match (equation, header) {
            (Some(equation), _) => equation,
            (None, Some(_)) => {
                return Err(FormatError::parse(
                    last_line + 1,
                    ParseErrorKind::MissingLine("weight"),
                ));
            }
            (None, None) => {
                return Err(FormatError::parse(
                    last_line + 1,
                    ParseErrorKind::MissingLine("equation"),
                ));
            }
        };
        debug!(
            "Parsed constraint equation with {} terms (factor {}, weight {}) and {} target atoms.",
            equation.terms.len(),
            equation.scaling_factor,
            equation.weight,
            targets.len()
        );

        Ok(Self { equation, targets })
    }
}
