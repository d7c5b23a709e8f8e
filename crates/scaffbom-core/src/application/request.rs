//! Transport-level request and its conversion into a [`ProjectSpec`].
//!
//! A [`BomRequest`] is what arrives from outside: raw numbers and free-form
//! tokens. Field names follow the English vocabulary, and the historical
//! French wire names (`L`, `H`, `largeur`, `F`, `protection_mur`, `grutage`,
//! `stabilisation`, `cales_plastiques`) are accepted as aliases.

use serde::{Deserialize, Deserializer, Serialize, de};
use tracing::warn;

use crate::domain::{DomainError, ProjectSpec, StabilizationMode, parse_flag};

/// A yes/no site condition as sent by a client.
///
/// JSON booleans are taken at face value. Strings go through
/// [`parse_flag`]: only the affirmative token turns the flag on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Toggle {
    Bool(bool),
    Token(String),
}

impl Toggle {
    pub fn is_on(&self) -> bool {
        match self {
            Self::Bool(on) => *on,
            Self::Token(token) => parse_flag(token),
        }
    }
}

impl Default for Toggle {
    fn default() -> Self {
        Self::Bool(false)
    }
}

impl From<bool> for Toggle {
    fn from(on: bool) -> Self {
        Self::Bool(on)
    }
}

impl From<&str> for Toggle {
    fn from(token: &str) -> Self {
        Self::Token(token.to_string())
    }
}

/// What to do with a stabilization token that names no known mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenPolicy {
    /// Reject with [`DomainError::UnrecognizedStabilizationMode`].
    #[default]
    Strict,
    /// Treat as [`StabilizationMode::None`] and log a warning.
    Lenient,
}

impl TokenPolicy {
    pub fn parse_stabilization(self, token: &str) -> Result<StabilizationMode, DomainError> {
        match (token.parse::<StabilizationMode>(), self) {
            (Ok(mode), _) => Ok(mode),
            (Err(_), Self::Lenient) => {
                warn!(token, "Unrecognized stabilization mode, using none");
                Ok(StabilizationMode::None)
            }
            (Err(e), Self::Strict) => Err(e),
        }
    }
}

/// A BOM computation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BomRequest {
    #[serde(alias = "L")]
    pub length: f64,

    #[serde(alias = "H")]
    pub height: f64,

    #[serde(alias = "largeur")]
    pub width: f64,

    /// Whole numbers written as floats (`2.0`) are accepted.
    #[serde(
        default,
        alias = "F",
        alias = "trapdoorCount",
        deserialize_with = "whole_number"
    )]
    pub trapdoor_count: i64,

    #[serde(default, alias = "protection_mur", alias = "wallProtection")]
    pub wall_protection: Toggle,

    #[serde(default, alias = "grutage", alias = "craneLift")]
    pub crane_lift: Toggle,

    #[serde(default, alias = "stabilisation", alias = "stabilizationMode")]
    pub stabilization: String,

    #[serde(default, alias = "cales_plastiques", alias = "plasticWedges")]
    pub plastic_wedges: Toggle,
}

impl BomRequest {
    /// Request with the given geometry, no trapdoors, every flag off.
    pub fn new(length: f64, height: f64, width: f64) -> Self {
        Self {
            length,
            height,
            width,
            trapdoor_count: 0,
            wall_protection: Toggle::default(),
            crane_lift: Toggle::default(),
            stabilization: String::new(),
            plastic_wedges: Toggle::default(),
        }
    }

    /// Validate and normalize the tokens into a [`ProjectSpec`].
    ///
    /// Fails before any computation when a dimension is not strictly
    /// positive, the trapdoor count is negative, or (with
    /// [`TokenPolicy::Strict`]) the stabilization token is unknown.
    pub fn to_spec(&self, policy: TokenPolicy) -> Result<ProjectSpec, DomainError> {
        ProjectSpec::builder()
            .length(self.length)
            .height(self.height)
            .width(self.width)
            .try_trapdoors(self.trapdoor_count)?
            .wall_protection(self.wall_protection.is_on())
            .crane_lift(self.crane_lift.is_on())
            .plastic_wedges(self.plastic_wedges.is_on())
            .stabilization(policy.parse_stabilization(&self.stabilization)?)
            .build()
    }
}

/// A count that clients may send as `2` or `2.0`.
#[derive(Deserialize)]
#[serde(untagged)]
enum WireCount {
    Int(i64),
    Float(f64),
}

fn whole_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match WireCount::deserialize(deserializer)? {
        WireCount::Int(n) => Ok(n),
        WireCount::Float(x) if x.fract() == 0.0 && x.abs() <= i64::MAX as f64 => Ok(x as i64),
        WireCount::Float(x) => Err(de::Error::invalid_value(
            de::Unexpected::Float(x),
            &"a whole number",
        )),
    }
}
