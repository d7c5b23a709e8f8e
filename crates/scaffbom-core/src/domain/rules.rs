//! Quantity rule registry.
//!
//! Every reference code is described exactly once by a [`RuleDef`] in
//! [`RULE_REGISTRY`]. The registry order is the BOM order: the engine
//! evaluates it top to bottom and the assembler never re-sorts.
//!
//! Rules are plain functions of [`Metrics`]. A rule that mirrors another
//! code (ALTKB12 = ALTKPT4, ...) recomputes the value from the metrics rather
//! than reading the other rule's output, so every entry is independent and
//! can be evaluated, listed, or tested on its own.
//!
//! # Adding a Rule
//!
//! 1. Add the variant to `RefCode` in `value_objects.rs`
//! 2. Add one [`RuleDef`] entry to [`RULE_REGISTRY`] at its BOM position
//! 3. `registry_matches_code_universe` keeps the two in sync

use serde::Serialize;
use tracing::{debug, instrument};

use crate::domain::{
    entities::QuantityMap,
    metrics::Metrics,
    value_objects::{ComponentFamily, RefCode},
};

/// Fixed number of lifting hooks supplied when the scaffold is craned.
pub const CRANE_LIFT_HOOKS: u64 = 4;

/// Floor panels removed where wall protection takes their place.
pub const WALL_PROTECTION_FLOOR_OFFSET: u64 = 2;

/// Describes how the quantity of one reference code is derived.
#[derive(Debug, Clone, Copy)]
pub struct RuleDef {
    /// The code this rule produces.
    pub code: RefCode,

    /// Component family, for grouping in listings.
    pub family: ComponentFamily,

    /// Human-readable formula, shown by `scaffbom rules`.
    pub formula: &'static str,

    /// The derivation itself.
    pub quantity: fn(&Metrics) -> u64,
}

impl Serialize for RuleDef {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("RuleDef", 3)?;
        state.serialize_field("reference", &self.code)?;
        state.serialize_field("family", &self.family)?;
        state.serialize_field("formula", self.formula)?;
        state.end()
    }
}

/// Single source of truth for quantity derivation, in BOM order.
pub static RULE_REGISTRY: &[RuleDef] = &[
    // ── Posts ────────────────────────────────────────────────────────────────
    RuleDef {
        code: RefCode::Altasv5,
        family: ComponentFamily::Posts,
        formula: "2T + 2",
        quantity: posts,
    },
    RuleDef {
        code: RefCode::Altkemb12,
        family: ComponentFamily::Posts,
        formula: "ALTASV5",
        quantity: posts,
    },
    RuleDef {
        code: RefCode::Altkpt2,
        family: ComponentFamily::Posts,
        formula: "ALTASV5",
        quantity: posts,
    },
    RuleDef {
        code: RefCode::Altkpt4,
        family: ComponentFamily::Posts,
        formula: "ALTASV5 x N",
        quantity: posts_per_level,
    },
    // ── Rails ────────────────────────────────────────────────────────────────
    RuleDef {
        code: RefCode::Altklc1,
        family: ComponentFamily::Rails,
        formula: "2TN if width = 0.70",
        quantity: narrow_rails,
    },
    RuleDef {
        code: RefCode::Altklc2,
        family: ComponentFamily::Rails,
        formula: "2TN if width = 1.00",
        quantity: wide_rails,
    },
    RuleDef {
        code: RefCode::Altklc5,
        family: ComponentFamily::Rails,
        formula: "2T + 2N with wall protection, else 2T + N",
        quantity: end_rails,
    },
    // ── Floors ───────────────────────────────────────────────────────────────
    RuleDef {
        code: RefCode::Altkmc5,
        family: ComponentFamily::Floors,
        formula: "2TN (+ N if width = 1.00) (- 2 with wall protection)",
        quantity: floors,
    },
    RuleDef {
        code: RefCode::Altkpe5,
        family: ComponentFamily::Floors,
        formula: "F x N x ceil(L / 20)",
        quantity: trapdoor_floors,
    },
    // ── Braces ───────────────────────────────────────────────────────────────
    RuleDef {
        code: RefCode::Altkdv5,
        family: ComponentFamily::Braces,
        formula: "2F with wall protection, else F",
        quantity: diagonals,
    },
    // ── Guardrails ───────────────────────────────────────────────────────────
    RuleDef {
        code: RefCode::Altkgh5,
        family: ComponentFamily::Guardrails,
        formula: "2TN with wall protection, else TN",
        quantity: guardrails,
    },
    RuleDef {
        code: RefCode::Altkgh1,
        family: ComponentFamily::Guardrails,
        formula: "2N if width = 0.70",
        quantity: narrow_end_guardrails,
    },
    RuleDef {
        code: RefCode::Altkgh2,
        family: ComponentFamily::Guardrails,
        formula: "2N if width = 1.00",
        quantity: wide_end_guardrails,
    },
    // ── Toe boards ───────────────────────────────────────────────────────────
    RuleDef {
        code: RefCode::Altkpi5,
        family: ComponentFamily::ToeBoards,
        formula: "2TN",
        quantity: toe_boards,
    },
    // ── Stabilization (stabilizers, H <= 6) ──────────────────────────────────
    RuleDef {
        code: RefCode::Alt000675,
        family: ComponentFamily::Stabilization,
        formula: "T + 1 with stabilizers and H <= 6",
        quantity: stabilizers,
    },
    RuleDef {
        code: RefCode::Altamx1,
        family: ComponentFamily::Stabilization,
        formula: "ALTASV5 + ALT000675 with stabilizers and H <= 6",
        quantity: stabilizer_fittings,
    },
    RuleDef {
        code: RefCode::Altacpi,
        family: ComponentFamily::Stabilization,
        formula: "ALTASV5 + ALT000675 with stabilizers, H <= 6 and plastic wedges",
        quantity: plastic_wedges,
    },
    // ── Anchorage ────────────────────────────────────────────────────────────
    RuleDef {
        code: RefCode::Altaa11,
        family: ComponentFamily::Anchorage,
        formula: "ceil(L x H / 12) with anchorage",
        quantity: anchor_points,
    },
    RuleDef {
        code: RefCode::Altapa2,
        family: ComponentFamily::Anchorage,
        formula: "ceil(L x H / 12) with anchorage",
        quantity: anchor_points,
    },
    RuleDef {
        code: RefCode::Altl99p,
        family: ComponentFamily::Anchorage,
        formula: "ceil(L x H / 12) with anchorage",
        quantity: anchor_points,
    },
    // ── Crane lift ───────────────────────────────────────────────────────────
    RuleDef {
        code: RefCode::Altrlev,
        family: ComponentFamily::CraneLift,
        formula: "4 with crane lift",
        quantity: lifting_hooks,
    },
    RuleDef {
        code: RefCode::Altkb12,
        family: ComponentFamily::CraneLift,
        formula: "ALTKPT4 with crane lift",
        quantity: crane_posts_per_level,
    },
    RuleDef {
        code: RefCode::Altkb13,
        family: ComponentFamily::CraneLift,
        formula: "ALTKEMB12 with crane lift",
        quantity: crane_posts,
    },
    RuleDef {
        code: RefCode::Altkfsv,
        family: ComponentFamily::CraneLift,
        formula: "ALTASV5 with crane lift",
        quantity: crane_posts,
    },
];

/// Look up the rule for a code.
pub fn find_rule(code: RefCode) -> Option<&'static RuleDef> {
    RULE_REGISTRY.iter().find(|r| r.code == code)
}

// ── Formulas ─────────────────────────────────────────────────────────────────

fn when(on: bool, value: u64) -> u64 {
    if on { value } else { 0 }
}

fn posts(m: &Metrics) -> u64 {
    m.posts()
}

fn posts_per_level(m: &Metrics) -> u64 {
    m.posts().saturating_mul(m.levels)
}

fn narrow_rails(m: &Metrics) -> u64 {
    when(m.is_narrow(), m.cells().saturating_mul(2))
}

fn wide_rails(m: &Metrics) -> u64 {
    when(m.is_wide(), m.cells().saturating_mul(2))
}

fn end_rails(m: &Metrics) -> u64 {
    let per_side = if m.wall_protection {
        m.levels.saturating_mul(2)
    } else {
        m.levels
    };
    m.bays.saturating_mul(2).saturating_add(per_side)
}

fn floors(m: &Metrics) -> u64 {
    m.cells()
        .saturating_mul(2)
        .saturating_add(when(m.is_wide(), m.levels))
        .saturating_sub(when(m.wall_protection, WALL_PROTECTION_FLOOR_OFFSET))
}

fn trapdoor_floors(m: &Metrics) -> u64 {
    m.trapdoors
        .saturating_mul(m.levels)
        .saturating_mul(m.trapdoor_groups)
}

fn diagonals(m: &Metrics) -> u64 {
    if m.wall_protection {
        m.trapdoors.saturating_mul(2)
    } else {
        m.trapdoors
    }
}

fn guardrails(m: &Metrics) -> u64 {
    if m.wall_protection {
        m.cells().saturating_mul(2)
    } else {
        m.cells()
    }
}

fn narrow_end_guardrails(m: &Metrics) -> u64 {
    when(m.is_narrow(), m.levels.saturating_mul(2))
}

fn wide_end_guardrails(m: &Metrics) -> u64 {
    when(m.is_wide(), m.levels.saturating_mul(2))
}

fn toe_boards(m: &Metrics) -> u64 {
    m.cells().saturating_mul(2)
}

fn stabilizers(m: &Metrics) -> u64 {
    when(m.stabilizers_active(), m.bays.saturating_add(1))
}

fn stabilizer_fittings(m: &Metrics) -> u64 {
    when(m.stabilizers_active(), m.posts().saturating_add(stabilizers(m)))
}

fn plastic_wedges(m: &Metrics) -> u64 {
    when(m.plastic_wedges, stabilizer_fittings(m))
}

fn anchor_points(m: &Metrics) -> u64 {
    m.anchor_points()
}

fn lifting_hooks(m: &Metrics) -> u64 {
    when(m.crane_lift, CRANE_LIFT_HOOKS)
}

fn crane_posts_per_level(m: &Metrics) -> u64 {
    when(m.crane_lift, posts_per_level(m))
}

fn crane_posts(m: &Metrics) -> u64 {
    when(m.crane_lift, posts(m))
}

// ── Engine ───────────────────────────────────────────────────────────────────

/// Applies a rule registry to [`Metrics`].
#[derive(Debug, Clone, Copy)]
pub struct QuantityRuleEngine {
    rules: &'static [RuleDef],
}

impl Default for QuantityRuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl QuantityRuleEngine {
    pub fn new() -> Self {
        Self {
            rules: RULE_REGISTRY,
        }
    }

    pub fn rules(&self) -> &'static [RuleDef] {
        self.rules
    }

    /// Evaluate every rule, in registry order. Zero quantities are kept.
    #[instrument(level = "debug", skip_all, fields(bays = metrics.bays, levels = metrics.levels))]
    pub fn evaluate(&self, metrics: &Metrics) -> QuantityMap {
        let map: QuantityMap = self
            .rules
            .iter()
            .map(|rule| (rule.code, (rule.quantity)(metrics)))
            .collect();

        debug!(
            evaluated = map.len(),
            positive = map.positive().count(),
            "Rules evaluated"
        );
        map
    }
}
