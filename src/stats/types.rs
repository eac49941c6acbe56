// src/stats/types.rs
//
// Typed rows for one season: what the sources produce (RosterEntry, StatEntry),
// what the merger produces (MergedRow) and what the calculator produces
// (PlayerRecord). Optional attributes stay `Option`; counters default to 0.

use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Position {
    OutsideHitter,
    Opposite,
    MiddleBlocker,
    Setter,
    Libero,
    #[default]
    Unspecified,
}

impl Position {
    pub const ALL: [Position; 6] = [
        Position::OutsideHitter,
        Position::Opposite,
        Position::MiddleBlocker,
        Position::Setter,
        Position::Libero,
        Position::Unspecified,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Position::OutsideHitter => "Outside Hitter",
            Position::Opposite      => "Opposite",
            Position::MiddleBlocker => "Middle Blocker",
            Position::Setter        => "Setter",
            Position::Libero        => "Libero",
            Position::Unspecified   => "",
        }
    }

    /// Lenient parse of a roster cell. Accepts the display label, compact
    /// spellings ("middleblocker", "MB") and the league site's own terms.
    /// Anything else is `Unspecified`.
    pub fn parse(cell: &str) -> Position {
        let t = cell.trim();
        match t {
            "主攻" => return Position::OutsideHitter,
            "接應" | "接应" => return Position::Opposite,
            "副攻" => return Position::MiddleBlocker,
            "舉球" | "二傳" | "二传" => return Position::Setter,
            "自由球員" | "自由球员" => return Position::Libero,
            _ => {}
        }
        let key: String = t
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match key.as_str() {
            "outsidehitter" | "outside" | "oh" => Position::OutsideHitter,
            "opposite" | "oppositehitter" | "op" => Position::Opposite,
            "middleblocker" | "middle" | "mb" => Position::MiddleBlocker,
            "setter" | "s" => Position::Setter,
            "libero" | "l" => Position::Libero,
            _ => Position::Unspecified,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Identity and physical attributes of a player within one season.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RosterEntry {
    pub name: String,
    pub team: String,
    pub position: Position,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    /// Mostly filled for liberos and outside hitters.
    pub reception_success_pct: Option<f64>,
}

/// Season counting statistics of a player.
/// `attack_errors <= attack_attempts` is not enforced.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatEntry {
    pub name: String,
    pub sets_played: u32,
    pub attack_points: u32,
    pub attack_errors: u32,
    pub attack_attempts: u32,
    pub block_points: u32,
    pub service_points: u32,
    pub service_errors: u32,
}

/// Output of the merger: one roster entry joined with its stat entry.
#[derive(Clone, Debug, PartialEq)]
pub struct MergedRow {
    pub roster: RosterEntry,
    pub stats: StatEntry,
}

impl MergedRow {
    pub fn name(&self) -> &str {
        &self.roster.name
    }
}

/// A merged row enriched with the derived efficiency fields.
/// Built by `efficiency::compute_efficiency`; never patched afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct PlayerRecord {
    base: MergedRow,
    pub attack_success_rate_pct: f64,
    pub total_points: u64,
    pub total_errors: u64,
    pub net_points: i64,
    pub net_points_per_set: f64,
}

impl PlayerRecord {
    pub(crate) fn new(
        base: MergedRow,
        attack_success_rate_pct: f64,
        total_points: u64,
        total_errors: u64,
        net_points: i64,
        net_points_per_set: f64,
    ) -> Self {
        Self { base, attack_success_rate_pct, total_points, total_errors, net_points, net_points_per_set }
    }

    /// The merged inputs this record was computed from.
    pub fn base(&self) -> &MergedRow { &self.base }

    #[inline] pub fn name(&self) -> &str { &self.base.roster.name }
    #[inline] pub fn team(&self) -> &str { &self.base.roster.team }
    #[inline] pub fn position(&self) -> Position { self.base.roster.position }
    #[inline] pub fn height_cm(&self) -> Option<f64> { self.base.roster.height_cm }
    #[inline] pub fn weight_kg(&self) -> Option<f64> { self.base.roster.weight_kg }
    #[inline] pub fn reception_success_pct(&self) -> Option<f64> { self.base.roster.reception_success_pct }
    #[inline] pub fn stats(&self) -> &StatEntry { &self.base.stats }
    #[inline] pub fn sets_played(&self) -> u32 { self.base.stats.sets_played }
}
