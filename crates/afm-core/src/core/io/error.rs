use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse { line: usize, kind: ParseErrorKind },
}

impl FormatError {
    pub fn parse(line: usize, kind: ParseErrorKind) -> Self {
        Self::Parse { line, kind }
    }

    pub fn kind(&self) -> Option<&ParseErrorKind> {
        match self {
            Self::Parse { kind, .. } => Some(kind),
            Self::Io(_) => None,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseErrorKind {
    #[error("COU term line must hold exactly two atom types (found {found} fields)")]
    PairArity { found: usize },

    #[error("Invalid {field} value '{value}'")]
    InvalidFloat { field: &'static str, value: String },

    #[error(
        "Equation must be coefficient/atom-type pairs followed by one scaling factor ({found} fields leave an unpaired token)"
    )]
    EquationArity { found: usize },

    #[error("Equation has {found} coefficient/atom-type term(s); at least {min} are required")]
    TooFewTerms { found: usize, min: usize },

    #[error("Equation has no coefficient/atom-type terms, only a scaling factor")]
    EmptyEquation,

    #[error(
        "Algebraic equation form is not supported (found '{token}'); write 'coeff atom ... coeff atom factor'"
    )]
    AlgebraicForm { token: String },

    #[error("Weight line must hold exactly one number (found {found} fields)")]
    WeightArity { found: usize },

    #[error("Target atom line must hold an atom type and an optional charge (found {found} fields)")]
    TargetArity { found: usize },

    #[error("Missing {0} line")]
    MissingLine(&'static str),
}
