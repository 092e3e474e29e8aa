use anyhow::{anyhow, Result};
use strum_macros::{AsRefStr, EnumIter};

/// The semantics handled by the frameworks.
///
/// The string representation of a semantics (given by [`AsRef<str>`]) is its name,
/// which is also the canonical string accepted by [`Semantics::try_from`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter)]
pub enum Semantics {
    /// The admissible sets
    #[strum(serialize = "admissible")]
    Admissible,
    /// The complete semantics
    #[strum(serialize = "complete")]
    Complete,
    /// The eager semantics
    #[strum(serialize = "eager")]
    Eager,
    /// The grounded semantics
    #[strum(serialize = "grounded")]
    Grounded,
    /// The ideal semantics
    #[strum(serialize = "ideal")]
    Ideal,
    /// The (credulous) preferred semantics
    #[strum(serialize = "preferred")]
    Preferred,
    /// The sceptical preferred semantics
    #[strum(serialize = "preferredSceptical")]
    PreferredSceptical,
    /// The semi-stable semantics
    #[strum(serialize = "semiStable")]
    SemiStable,
    /// The stable semantics
    #[strum(serialize = "stable")]
    Stable,
}

impl Semantics {
    /// Returns `true` iff this semantics always prescribes exactly one extension.
    pub fn is_unique_extension(&self) -> bool {
        matches!(
            self,
            Semantics::Eager | Semantics::Grounded | Semantics::Ideal | Semantics::PreferredSceptical
        )
    }

    /// Returns the short code of this semantics, following the usage of ICCMA competitions when one exists.
    pub fn to_short_str(&self) -> &str {
        match self {
            Semantics::Admissible => "AD",
            Semantics::Complete => "CO",
            Semantics::Eager => "EG",
            Semantics::Grounded => "GR",
            Semantics::Ideal => "ID",
            Semantics::Preferred => "PR",
            Semantics::PreferredSceptical => "PS",
            Semantics::SemiStable => "SST",
            Semantics::Stable => "ST",
        }
    }
}

impl TryFrom<&str> for Semantics {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_ascii_lowercase().as_str() {
            "admissible" | "ad" => Ok(Semantics::Admissible),
            "complete" | "co" => Ok(Semantics::Complete),
            "eager" | "eg" => Ok(Semantics::Eager),
            "grounded" | "gr" => Ok(Semantics::Grounded),
            "ideal" | "id" => Ok(Semantics::Ideal),
            "preferred" | "pr" => Ok(Semantics::Preferred),
            "preferredsceptical" | "ps" => Ok(Semantics::PreferredSceptical),
            "semistable" | "sst" => Ok(Semantics::SemiStable),
            "stable" | "st" => Ok(Semantics::Stable),
            _ => Err(anyhow!(r#"undefined semantics "{}""#, value)),
        }
    }
}
