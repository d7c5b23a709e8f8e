//! The validated description of one scaffolding project.

use std::fmt;

use serde::Serialize;

use crate::domain::{
    error::DomainError,
    value_objects::{StabilizationMode, WidthClass},
};

/// Geometry and site conditions of a scaffold to erect.
///
/// Invariant: length and height are finite and strictly positive, width is
/// finite and strictly positive. Enforced by [`ProjectSpecBuilder::build`],
/// which is the only way to obtain one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectSpec {
    length: f64,
    height: f64,
    width: f64,
    trapdoors: u32,
    wall_protection: bool,
    crane_lift: bool,
    plastic_wedges: bool,
    stabilization: StabilizationMode,
}

impl ProjectSpec {
    pub fn builder() -> ProjectSpecBuilder {
        ProjectSpecBuilder::default()
    }

    /// Span length in meters.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Height in meters.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Deck width in meters.
    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn width_class(&self) -> WidthClass {
        WidthClass::classify(self.width)
    }

    /// Number of access trapdoors per level and group.
    pub fn trapdoors(&self) -> u32 {
        self.trapdoors
    }

    pub fn wall_protection(&self) -> bool {
        self.wall_protection
    }

    pub fn crane_lift(&self) -> bool {
        self.crane_lift
    }

    pub fn plastic_wedges(&self) -> bool {
        self.plastic_wedges
    }

    pub fn stabilization(&self) -> StabilizationMode {
        self.stabilization
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        require_positive("length", self.length)?;
        require_positive("height", self.height)?;
        require_positive("width", self.width)?;
        Ok(())
    }
}

impl fmt::Display for ProjectSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}m x {}m (width {}m, {} trapdoor(s), {})",
            self.length, self.height, self.width, self.trapdoors, self.stabilization
        )
    }
}

fn require_positive(field: &'static str, value: f64) -> Result<(), DomainError> {
    if !value.is_finite() {
        return Err(DomainError::InvalidInput {
            field,
            reason: format!("{value} is not a finite number"),
        });
    }
    if value <= 0.0 {
        return Err(DomainError::InvalidInput {
            field,
            reason: format!("must be greater than zero, got {value}"),
        });
    }
    Ok(())
}

/// Builder for [`ProjectSpec`].
///
/// Length, height and width are required. Trapdoors default to zero, every
/// flag defaults to off, and the stabilization mode defaults to none.
#[derive(Debug, Clone, Default)]
pub struct ProjectSpecBuilder {
    length: Option<f64>,
    height: Option<f64>,
    width: Option<f64>,
    trapdoors: u32,
    wall_protection: bool,
    crane_lift: bool,
    plastic_wedges: bool,
    stabilization: StabilizationMode,
}

impl ProjectSpecBuilder {
    pub fn length(mut self, meters: f64) -> Self {
        self.length = Some(meters);
        self
    }

    pub fn height(mut self, meters: f64) -> Self {
        self.height = Some(meters);
        self
    }

    pub fn width(mut self, meters: f64) -> Self {
        self.width = Some(meters);
        self
    }

    pub fn trapdoors(mut self, count: u32) -> Self {
        self.trapdoors = count;
        self
    }

    /// Trapdoor count from an untrusted signed integer.
    pub fn try_trapdoors(self, count: i64) -> Result<Self, DomainError> {
        let count = u32::try_from(count).map_err(|_| DomainError::InvalidInput {
            field: "trapdoor_count",
            reason: if count < 0 {
                format!("must not be negative, got {count}")
            } else {
                format!("{count} is out of range")
            },
        })?;
        Ok(self.trapdoors(count))
    }

    pub fn wall_protection(mut self, on: bool) -> Self {
        self.wall_protection = on;
        self
    }

    pub fn crane_lift(mut self, on: bool) -> Self {
        self.crane_lift = on;
        self
    }

    pub fn plastic_wedges(mut self, on: bool) -> Self {
        self.plastic_wedges = on;
        self
    }

    pub fn stabilization(mut self, mode: StabilizationMode) -> Self {
        self.stabilization = mode;
        self
    }

    pub fn build(self) -> Result<ProjectSpec, DomainError> {
        let spec = ProjectSpec {
            length: self
                .length
                .ok_or(DomainError::MissingRequiredField { field: "length" })?,
            height: self
                .height
                .ok_or(DomainError::MissingRequiredField { field: "height" })?,
            width: self
                .width
                .ok_or(DomainError::MissingRequiredField { field: "width" })?,
            trapdoors: self.trapdoors,
            wall_protection: self.wall_protection,
            crane_lift: self.crane_lift,
            plastic_wedges: self.plastic_wedges,
            stabilization: self.stabilization,
        };
        spec.validate()?;
        Ok(spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> ProjectSpecBuilder {
        ProjectSpec::builder().length(5.0).height(4.0).width(0.70)
    }

    #[test]
    fn builder_applies_defaults() {
        let spec = base().build().unwrap();

        assert_eq!(spec.trapdoors(), 0);
        assert!(!spec.wall_protection());
        assert!(!spec.crane_lift());
        assert!(!spec.plastic_wedges());
        assert_eq!(spec.stabilization(), StabilizationMode::None);
        assert_eq!(spec.width_class(), WidthClass::Narrow);
    }

    #[test]
    fn builder_requires_dimensions() {
        let err = ProjectSpec::builder().height(4.0).width(1.0).build();
        assert_eq!(
            err,
            Err(DomainError::MissingRequiredField { field: "length" })
        );
    }

    #[test]
    fn rejects_non_positive_length() {
        for bad in [0.0, -2.5] {
            let err = base().length(bad).build().unwrap_err();
            assert!(matches!(
                err,
                DomainError::InvalidInput {
                    field: "length",
                    ..
                }
            ));
        }
    }

    #[test]
    fn rejects_non_finite_height() {
        let err = base().height(f64::NAN).build().unwrap_err();
        assert!(matches!(
            err,
            DomainError::InvalidInput {
                field: "height",
                ..
            }
        ));

        assert!(base().height(f64::INFINITY).build().is_err());
    }

    #[test]
    fn non_standard_width_is_valid() {
        let spec = base().width(0.85).build().unwrap();
        assert_eq!(spec.width_class(), WidthClass::NonStandard);
    }

    #[test]
    fn negative_trapdoors_rejected() {
        let err = base().try_trapdoors(-1).unwrap_err();
        assert!(matches!(
            err,
            DomainError::InvalidInput {
                field: "trapdoor_count",
                ..
            }
        ));

        let spec = base().try_trapdoors(3).unwrap().build().unwrap();
        assert_eq!(spec.trapdoors(), 3);
    }
}
