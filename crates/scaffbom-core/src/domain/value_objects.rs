//! Domain value objects: RefCode, ComponentFamily, StabilizationMode, WidthClass.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! They hold NO quantity logic. All formulas live in `rules.rs`. This file's
//! only job is to define the types, their string representations, and their
//! `FromStr` parsers.
//!
//! # Adding a Reference Code
//!
//! 1. Add the enum variant here, in catalog order
//! 2. Add it to [`RefCode::ALL`] and the `as_str` arm
//! 3. Add a `RuleDef` entry in `rules.rs`
//! 4. The registry integrity test checks the rest

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── RefCode ──────────────────────────────────────────────────────────────────

/// A catalog reference code for one physical scaffold component.
///
/// The universe is closed: every quantity rule produces exactly one of these,
/// and the variants are declared in BOM order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RefCode {
    // posts
    Altasv5,
    Altkemb12,
    Altkpt2,
    Altkpt4,
    // rails
    Altklc1,
    Altklc2,
    Altklc5,
    // floors
    Altkmc5,
    Altkpe5,
    // braces
    Altkdv5,
    // guardrails
    Altkgh5,
    Altkgh1,
    Altkgh2,
    // toe boards
    Altkpi5,
    // stabilizers
    Alt000675,
    Altamx1,
    Altacpi,
    // anchorage
    Altaa11,
    Altapa2,
    Altl99p,
    // crane lift
    Altrlev,
    Altkb12,
    Altkb13,
    Altkfsv,
}

impl RefCode {
    /// Every reference code, in declared BOM order.
    pub const ALL: [RefCode; 24] = [
        Self::Altasv5,
        Self::Altkemb12,
        Self::Altkpt2,
        Self::Altkpt4,
        Self::Altklc1,
        Self::Altklc2,
        Self::Altklc5,
        Self::Altkmc5,
        Self::Altkpe5,
        Self::Altkdv5,
        Self::Altkgh5,
        Self::Altkgh1,
        Self::Altkgh2,
        Self::Altkpi5,
        Self::Alt000675,
        Self::Altamx1,
        Self::Altacpi,
        Self::Altaa11,
        Self::Altapa2,
        Self::Altl99p,
        Self::Altrlev,
        Self::Altkb12,
        Self::Altkb13,
        Self::Altkfsv,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Altasv5 => "ALTASV5",
            Self::Altkemb12 => "ALTKEMB12",
            Self::Altkpt2 => "ALTKPT2",
            Self::Altkpt4 => "ALTKPT4",
            Self::Altklc1 => "ALTKLC1",
            Self::Altklc2 => "ALTKLC2",
            Self::Altklc5 => "ALTKLC5",
            Self::Altkmc5 => "ALTKMC5",
            Self::Altkpe5 => "ALTKPE5",
            Self::Altkdv5 => "ALTKDV5",
            Self::Altkgh5 => "ALTKGH5",
            Self::Altkgh1 => "ALTKGH1",
            Self::Altkgh2 => "ALTKGH2",
            Self::Altkpi5 => "ALTKPI5",
            Self::Alt000675 => "ALT000675",
            Self::Altamx1 => "ALTAMX1",
            Self::Altacpi => "ALTACPI",
            Self::Altaa11 => "ALTAA11",
            Self::Altapa2 => "ALTAPA2",
            Self::Altl99p => "ALTL99P",
            Self::Altrlev => "ALTRLEV",
            Self::Altkb12 => "ALTKB12",
            Self::Altkb13 => "ALTKB13",
            Self::Altkfsv => "ALTKFSV",
        }
    }

    /// Position of this code in the declared BOM order.
    pub fn ordinal(self) -> usize {
        Self::ALL
            .iter()
            .position(|c| *c == self)
            .unwrap_or(Self::ALL.len())
    }
}

impl fmt::Display for RefCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for RefCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|code| code.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DomainError::UnknownRefCode(wanted.to_string()))
    }
}

// ── ComponentFamily ──────────────────────────────────────────────────────────

/// The kind of physical component a reference code belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentFamily {
    Posts,
    Rails,
    Floors,
    Braces,
    Guardrails,
    ToeBoards,
    Stabilization,
    Anchorage,
    CraneLift,
}

impl ComponentFamily {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Posts => "posts",
            Self::Rails => "rails",
            Self::Floors => "floors",
            Self::Braces => "braces",
            Self::Guardrails => "guardrails",
            Self::ToeBoards => "toe-boards",
            Self::Stabilization => "stabilization",
            Self::Anchorage => "anchorage",
            Self::CraneLift => "crane-lift",
        }
    }
}

impl fmt::Display for ComponentFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

// ── StabilizationMode ────────────────────────────────────────────────────────

/// How the scaffold is secured against tipping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StabilizationMode {
    /// Free-standing (or secured by means outside the catalog).
    #[default]
    None,
    /// Mechanical outriggers at the base.
    Stabilizers,
    /// Wall ties, one per anchor point.
    Anchorage,
}

impl StabilizationMode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Stabilizers => "stabilizers",
            Self::Anchorage => "anchorage",
        }
    }
}

impl fmt::Display for StabilizationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for StabilizationMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "stabilisateurs" | "stabilisateur" | "stabilizers" | "stabilizer" => {
                Ok(Self::Stabilizers)
            }
            "amarrage" | "anchorage" => Ok(Self::Anchorage),
            "" | "aucun" | "aucune" | "none" | "non" | "no" => Ok(Self::None),
            _ => Err(DomainError::UnrecognizedStabilizationMode {
                token: s.to_string(),
            }),
        }
    }
}

// ── WidthClass ───────────────────────────────────────────────────────────────

/// Tolerance used when matching a width against the standard widths.
pub const WIDTH_EPSILON: f64 = 1e-6;

/// Which standard deck width a project uses.
///
/// Any width outside the two standards is accepted but classified as
/// [`WidthClass::NonStandard`], which zeroes every width-specific rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WidthClass {
    /// 0.70 m deck.
    Narrow,
    /// 1.00 m deck.
    Wide,
    NonStandard,
}

impl WidthClass {
    pub const NARROW_METERS: f64 = 0.70;
    pub const WIDE_METERS: f64 = 1.00;

    pub fn classify(width: f64) -> Self {
        if (width - Self::NARROW_METERS).abs() < WIDTH_EPSILON {
            Self::Narrow
        } else if (width - Self::WIDE_METERS).abs() < WIDTH_EPSILON {
            Self::Wide
        } else {
            Self::NonStandard
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Narrow => "0.70",
            Self::Wide => "1.00",
            Self::NonStandard => "non-standard",
        }
    }
}

impl fmt::Display for WidthClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

// ── Flag tokens ──────────────────────────────────────────────────────────────

/// The affirmative token for yes/no site conditions.
pub const AFFIRMATIVE_TOKEN: &str = "OUI";

/// Exact, case-insensitive match against [`AFFIRMATIVE_TOKEN`].
///
/// Anything else, including surrounding whitespace, is the negative case.
pub fn parse_flag(token: &str) -> bool {
    token.eq_ignore_ascii_case(AFFIRMATIVE_TOKEN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ref_code_round_trips_through_display() {
        for code in RefCode::ALL {
            assert_eq!(code.to_string().parse::<RefCode>().unwrap(), code);
        }
    }

    #[test]
    fn ref_code_parse_is_case_insensitive() {
        assert_eq!("altkgh5".parse::<RefCode>().unwrap(), RefCode::Altkgh5);
        assert!(matches!(
            "ALTXXX".parse::<RefCode>(),
            Err(DomainError::UnknownRefCode(_))
        ));
    }

    #[test]
    fn ref_code_serializes_as_catalog_code() {
        assert_eq!(
            serde_json::to_string(&RefCode::Alt000675).unwrap(),
            "\"ALT000675\""
        );
        assert_eq!(
            serde_json::to_string(&RefCode::Altkemb12).unwrap(),
            "\"ALTKEMB12\""
        );
    }

    #[test]
    fn ordinal_follows_declared_order() {
        assert_eq!(RefCode::Altasv5.ordinal(), 0);
        assert_eq!(RefCode::Altkfsv.ordinal(), 23);
    }

    #[test]
    fn stabilization_accepts_french_and_english_tokens() {
        assert_eq!(
            "Stabilisateurs".parse::<StabilizationMode>().unwrap(),
            StabilizationMode::Stabilizers
        );
        assert_eq!(
            "AMARRAGE".parse::<StabilizationMode>().unwrap(),
            StabilizationMode::Anchorage
        );
        assert_eq!(
            "anchorage".parse::<StabilizationMode>().unwrap(),
            StabilizationMode::Anchorage
        );
        assert_eq!(
            "aucun".parse::<StabilizationMode>().unwrap(),
            StabilizationMode::None
        );
    }

    #[test]
    fn stabilization_rejects_unknown_token() {
        let err = "haubans".parse::<StabilizationMode>().unwrap_err();
        assert_eq!(
            err,
            DomainError::UnrecognizedStabilizationMode {
                token: "haubans".into()
            }
        );
    }

    #[test]
    fn width_classification_uses_tolerance() {
        assert_eq!(WidthClass::classify(0.70), WidthClass::Narrow);
        assert_eq!(WidthClass::classify(0.7000001), WidthClass::Narrow);
        assert_eq!(WidthClass::classify(1.0), WidthClass::Wide);
        assert_eq!(WidthClass::classify(0.8), WidthClass::NonStandard);
        assert_eq!(WidthClass::classify(0.701), WidthClass::NonStandard);
    }

    #[test]
    fn flag_matches_affirmative_token_only() {
        assert!(parse_flag("OUI"));
        assert!(parse_flag("oui"));
        assert!(!parse_flag("NON"));
        assert!(!parse_flag(" oui"));
        assert!(!parse_flag(""));
    }
}
