use std::fmt;

/// An opaque, case-sensitive atom-type identifier such as `C`, `HW` or `Omm`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AtomType(String);

impl AtomType {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AtomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AtomType {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for AtomType {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// An unordered pair of atom types.
///
/// The two members are stored in sorted order, so `PairKey::new(a, b)` and
/// `PairKey::new(b, a)` compare and hash identically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PairKey {
    first: AtomType,
    second: AtomType,
}

impl PairKey {
    pub fn new(a: AtomType, b: AtomType) -> Self {
        if a <= b {
            Self {
                first: a,
                second: b,
            }
        } else {
            Self {
                first: b,
                second: a,
            }
        }
    }

    pub fn first(&self) -> &AtomType {
        &self.first
    }

    pub fn second(&self) -> &AtomType {
        &self.second
    }
}

impl fmt::Display for PairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first, self.second)
    }
}
