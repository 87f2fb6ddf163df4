use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeBackendKind {
    Serial,
    Rayon,
}

impl EscapeBackendKind {
    pub const ALL: &'static [Self] = &[Self::Rayon, Self::Serial];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Rayon => "rayon",
            Self::Serial => "serial",
        }
    }
}

impl Default for EscapeBackendKind {
    fn default() -> Self {
        Self::Rayon
    }
}

impl fmt::Display for EscapeBackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownBackendError(pub String);

impl fmt::Display for UnknownBackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown escape backend: {}", self.0)
    }
}

impl std::error::Error for UnknownBackendError {}

impl FromStr for EscapeBackendKind {
    type Err = UnknownBackendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.display_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownBackendError(s.to_string()))
    }
}
