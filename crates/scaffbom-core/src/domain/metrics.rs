//! Parameter normalization: from project geometry to integer metrics.

use serde::Serialize;
use tracing::debug;

use crate::domain::{
    entities::ProjectSpec,
    value_objects::{StabilizationMode, WidthClass},
};

/// Horizontal length of one bay, in meters.
pub const BAY_LENGTH: f64 = 2.5;
/// Vertical height of one level, in meters.
pub const LEVEL_HEIGHT: f64 = 2.0;
/// Span covered by one trapdoor group, in meters.
pub const TRAPDOOR_GROUP_SPAN: f64 = 20.0;
/// Façade area served by one anchor point, in square meters.
pub const ANCHOR_AREA: f64 = 12.0;
/// Highest scaffold, in meters, that may rely on base stabilizers.
pub const MAX_STABILIZED_HEIGHT: f64 = 6.0;

/// Structural metrics derived from a [`ProjectSpec`].
///
/// Everything the quantity rules read lives here; rules never look at the
/// spec directly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Metrics {
    pub length: f64,
    pub height: f64,
    /// `T`: ceil(length / 2.5).
    pub bays: u64,
    /// `N`: ceil(height / 2.0).
    pub levels: u64,
    /// ceil(length / 20).
    pub trapdoor_groups: u64,
    /// `F`.
    pub trapdoors: u64,
    pub width: WidthClass,
    pub wall_protection: bool,
    pub crane_lift: bool,
    pub plastic_wedges: bool,
    pub stabilization: StabilizationMode,
}

impl Metrics {
    /// Base posts: 2T + 2.
    pub fn posts(&self) -> u64 {
        self.bays.saturating_mul(2).saturating_add(2)
    }

    /// T × N, the number of bay-level cells.
    pub fn cells(&self) -> u64 {
        self.bays.saturating_mul(self.levels)
    }

    /// Base stabilizers are only used for low scaffolds.
    pub fn stabilizers_active(&self) -> bool {
        self.stabilization == StabilizationMode::Stabilizers && self.height <= MAX_STABILIZED_HEIGHT
    }

    pub fn anchorage_active(&self) -> bool {
        self.stabilization == StabilizationMode::Anchorage
    }

    /// POINTS: ceil(L × H / 12) when anchored, zero otherwise.
    pub fn anchor_points(&self) -> u64 {
        if self.anchorage_active() {
            ceil_count(self.length * self.height / ANCHOR_AREA)
        } else {
            0
        }
    }

    pub fn is_narrow(&self) -> bool {
        self.width == WidthClass::Narrow
    }

    pub fn is_wide(&self) -> bool {
        self.width == WidthClass::Wide
    }
}

/// Turns a [`ProjectSpec`] into [`Metrics`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ParameterNormalizer;

impl ParameterNormalizer {
    pub fn new() -> Self {
        Self
    }

    pub fn normalize(&self, spec: &ProjectSpec) -> Metrics {
        let metrics = Metrics {
            length: spec.length(),
            height: spec.height(),
            bays: ceil_count(spec.length() / BAY_LENGTH),
            levels: ceil_count(spec.height() / LEVEL_HEIGHT),
            trapdoor_groups: ceil_count(spec.length() / TRAPDOOR_GROUP_SPAN),
            trapdoors: u64::from(spec.trapdoors()),
            width: spec.width_class(),
            wall_protection: spec.wall_protection(),
            crane_lift: spec.crane_lift(),
            plastic_wedges: spec.plastic_wedges(),
            stabilization: spec.stabilization(),
        };

        if metrics.width == WidthClass::NonStandard {
            debug!(
                width = spec.width(),
                "Non-standard width, width-specific components will be omitted"
            );
        }
        debug!(
            bays = metrics.bays,
            levels = metrics.levels,
            trapdoor_groups = metrics.trapdoor_groups,
            "Metrics derived"
        );

        metrics
    }
}

/// Ceiling of a non-negative ratio as a count. Negative and NaN inputs give 0.
fn ceil_count(ratio: f64) -> u64 {
    // `as` saturates on overflow and maps NaN to 0.
    ratio.ceil().max(0.0) as u64
}
