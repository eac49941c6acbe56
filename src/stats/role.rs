// src/stats/role.rs
//
// Role classification as an ordered rule list. Rules are checked top to
// bottom and the first match wins; reordering them changes results.

use std::fmt;

use super::numeric::ratio_or_zero;
use super::types::{PlayerRecord, Position};
use crate::config::consts::{
    ELITE_BLOCK_PER_SET, HIGH_EFF_ATTACK_PER_SET, HIGH_EFF_SUCCESS_PCT,
    LIBERO_RECEPTION_PCT, SERVING_THREAT_ACES_PER_SET,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RoleLabel {
    NoData,
    HighEfficiencyScorer,
    ServingThreat,
    EliteBlocker,
    BackRowCommander,
    ReliableRotationPlayer,
}

impl RoleLabel {
    pub fn title(&self) -> &'static str {
        match self {
            RoleLabel::NoData                 => "No data",
            RoleLabel::HighEfficiencyScorer   => "High-efficiency scorer",
            RoleLabel::ServingThreat          => "Serving threat",
            RoleLabel::EliteBlocker           => "Elite blocking anchor",
            RoleLabel::BackRowCommander       => "Back-row commander",
            RoleLabel::ReliableRotationPlayer => "Reliable rotation player",
        }
    }

    /// One-line description shown under the player's metrics.
    pub fn narrative(&self) -> &'static str {
        match self {
            RoleLabel::NoData =>
                "No recorded sets for this player this season.",
            RoleLabel::HighEfficiencyScorer =>
                "Primary attacking option: heavy scoring volume at a high success rate.",
            RoleLabel::ServingThreat =>
                "Wins points straight from the service line at a steady rate.",
            RoleLabel::EliteBlocker =>
                "Most of the contribution comes at the net; the anchor of the team's block.",
            RoleLabel::BackRowCommander =>
                "Keeps first contact stable so the offence can run.",
            RoleLabel::ReliableRotationPlayer =>
                "Dependable rotation or situational player.",
        }
    }
}

impl fmt::Display for RoleLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// A single branch of the decision list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RoleRule {
    /// attack points per set strictly above `min_attack_per_set`
    /// and success rate at least `min_success_pct`.
    HighEfficiencyScorer { min_attack_per_set: f64, min_success_pct: f64 },
    /// service points per set at least `min_aces_per_set`.
    ServingThreat { min_aces_per_set: f64 },
    /// block points per set at least `min_blocks_per_set`, middle blockers only.
    EliteBlocker { min_blocks_per_set: f64 },
    /// liberos with reception success at least `min_reception_pct`.
    BackRowCommander { min_reception_pct: f64 },
}

impl RoleRule {
    pub fn label(&self) -> RoleLabel {
        match self {
            RoleRule::HighEfficiencyScorer { .. } => RoleLabel::HighEfficiencyScorer,
            RoleRule::ServingThreat { .. }        => RoleLabel::ServingThreat,
            RoleRule::EliteBlocker { .. }         => RoleLabel::EliteBlocker,
            RoleRule::BackRowCommander { .. }     => RoleLabel::BackRowCommander,
        }
    }

    /// `sets_played` must be non-zero; the caller checks it first.
    fn matches(&self, rec: &PlayerRecord, per_set: &PerSet) -> bool {
        match *self {
            RoleRule::HighEfficiencyScorer { min_attack_per_set, min_success_pct } => {
                per_set.attack > min_attack_per_set && rec.attack_success_rate_pct >= min_success_pct
            }
            RoleRule::ServingThreat { min_aces_per_set } => per_set.aces >= min_aces_per_set,
            RoleRule::EliteBlocker { min_blocks_per_set } => {
                per_set.block >= min_blocks_per_set && rec.position() == Position::MiddleBlocker
            }
            RoleRule::BackRowCommander { min_reception_pct } => {
                rec.position() == Position::Libero
                    && rec.reception_success_pct().unwrap_or(0.0) >= min_reception_pct
            }
        }
    }
}

struct PerSet {
    attack: f64,
    block: f64,
    aces: f64,
}

impl PerSet {
    fn of(rec: &PlayerRecord) -> Self {
        let s = rec.stats();
        let sets = s.sets_played as f64;
        Self {
            attack: ratio_or_zero(s.attack_points as f64, sets),
            block: ratio_or_zero(s.block_points as f64, sets),
            aces: ratio_or_zero(s.service_points as f64, sets),
        }
    }
}

/// Ordered rule list. `NoData` (no sets) is always checked first and
/// `ReliableRotationPlayer` is the fallback; neither is a listed rule.
#[derive(Clone, Debug, PartialEq)]
pub struct RoleRules {
    rules: Vec<RoleRule>,
}

impl Default for RoleRules {
    fn default() -> Self { Self::canonical() }
}

impl RoleRules {
    /// Scorer → blocker → back-row commander.
    pub fn canonical() -> Self {
        Self {
            rules: vec![
                RoleRule::HighEfficiencyScorer {
                    min_attack_per_set: HIGH_EFF_ATTACK_PER_SET,
                    min_success_pct: HIGH_EFF_SUCCESS_PCT,
                },
                RoleRule::EliteBlocker { min_blocks_per_set: ELITE_BLOCK_PER_SET },
                RoleRule::BackRowCommander { min_reception_pct: LIBERO_RECEPTION_PCT },
            ],
        }
    }

    /// Canonical list with the serving-threat branch right after the scorer rule.
    pub fn with_serving_threat() -> Self {
        let mut rr = Self::canonical();
        rr.rules.insert(1, RoleRule::ServingThreat { min_aces_per_set: SERVING_THREAT_ACES_PER_SET });
        rr
    }

    pub fn for_options(serving_threat: bool) -> Self {
        if serving_threat { Self::with_serving_threat() } else { Self::canonical() }
    }

    /// Custom order; used to experiment with thresholds.
    pub fn from_rules(rules: Vec<RoleRule>) -> Self { Self { rules } }

    pub fn rules(&self) -> &[RoleRule] { &self.rules }

    pub fn classify(&self, rec: &PlayerRecord) -> RoleLabel {
        if rec.sets_played() == 0 {
            return RoleLabel::NoData;
        }
        let per_set = PerSet::of(rec);
        self.rules
            .iter()
            .find(|r| r.matches(rec, &per_set))
            .map(|r| r.label())
            .unwrap_or(RoleLabel::ReliableRotationPlayer)
    }
}

/// Classify with the canonical rule list.
pub fn classify_role(rec: &PlayerRecord) -> RoleLabel {
    RoleRules::canonical().classify(rec)
}
