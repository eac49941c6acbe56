// src/table.rs
//! Column contract and the string table handed to the GUI, CLI and export.
//!
//! - `Column` names every field a front end can show, sort by or export.
//!   `field()` is the stable snake_case name; `header()` is the display label;
//!   `matches_header()` also accepts the league's own column titles so
//!   spreadsheets exported from the site load unchanged.
//! - `TableData` is a rendered view (headers + string rows) over a slice of
//!   `PlayerRecord`s, in display order, with a row→record index map so the
//!   GUI can go from a clicked row back to the player.

use std::cmp::Ordering;

use crate::stats::{ PlayerRecord, RoleLabel, RoleRules };

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Column {
    Name,
    Team,
    Position,
    HeightCm,
    WeightKg,
    SetsPlayed,
    AttackPoints,
    AttackErrors,
    AttackAttempts,
    BlockPoints,
    ServicePoints,
    ServiceErrors,
    ReceptionSuccessPct,
    AttackSuccessRatePct,
    TotalPoints,
    TotalErrors,
    NetPoints,
    NetPointsPerSet,
    Role,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn flip(self) -> Self {
        match self { SortOrder::Ascending => SortOrder::Descending, SortOrder::Descending => SortOrder::Ascending }
    }
    pub fn arrow(self) -> &'static str {
        match self { SortOrder::Ascending => "⏶", SortOrder::Descending => "⏷" }
    }
}

/// Columns of the ranking table on screen.
pub const DISPLAY_COLUMNS: [Column; 10] = [
    Column::Name, Column::Team, Column::Position, Column::HeightCm, Column::WeightKg,
    Column::TotalPoints, Column::NetPoints, Column::NetPointsPerSet,
    Column::AttackSuccessRatePct, Column::ReceptionSuccessPct,
];

/// Everything, for export.
pub const ALL_COLUMNS: [Column; 19] = [
    Column::Name, Column::Team, Column::Position, Column::HeightCm, Column::WeightKg,
    Column::SetsPlayed, Column::AttackPoints, Column::AttackErrors, Column::AttackAttempts,
    Column::BlockPoints, Column::ServicePoints, Column::ServiceErrors, Column::ReceptionSuccessPct,
    Column::AttackSuccessRatePct, Column::TotalPoints, Column::TotalErrors,
    Column::NetPoints, Column::NetPointsPerSet, Column::Role,
];

impl Column {
    pub fn field(&self) -> &'static str {
        match self {
            Column::Name                 => "name",
            Column::Team                 => "team",
            Column::Position             => "position",
            Column::HeightCm             => "height_cm",
            Column::WeightKg             => "weight_kg",
            Column::SetsPlayed           => "sets_played",
            Column::AttackPoints         => "attack_points",
            Column::AttackErrors         => "attack_errors",
            Column::AttackAttempts       => "attack_attempts",
            Column::BlockPoints          => "block_points",
            Column::ServicePoints        => "service_points",
            Column::ServiceErrors        => "service_errors",
            Column::ReceptionSuccessPct  => "reception_success_pct",
            Column::AttackSuccessRatePct => "attack_success_rate_pct",
            Column::TotalPoints          => "total_points",
            Column::TotalErrors          => "total_errors",
            Column::NetPoints            => "net_points",
            Column::NetPointsPerSet      => "net_points_per_set",
            Column::Role                 => "role",
        }
    }

    pub fn header(&self) -> &'static str {
        match self {
            Column::Name                 => "Name",
            Column::Team                 => "Team",
            Column::Position             => "Position",
            Column::HeightCm             => "Height (cm)",
            Column::WeightKg             => "Weight (kg)",
            Column::SetsPlayed           => "Sets",
            Column::AttackPoints         => "Attack pts",
            Column::AttackErrors         => "Attack err",
            Column::AttackAttempts       => "Attack att",
            Column::BlockPoints          => "Block pts",
            Column::ServicePoints        => "Aces",
            Column::ServiceErrors        => "Serve err",
            Column::ReceptionSuccessPct  => "Reception %",
            Column::AttackSuccessRatePct => "Attack success %",
            Column::TotalPoints          => "Total pts",
            Column::TotalErrors          => "Total err",
            Column::NetPoints            => "Net pts",
            Column::NetPointsPerSet      => "Net pts / set",
            Column::Role                 => "Role",
        }
    }

    /// Column titles used by the league's own tables.
    fn site_aliases(&self) -> &'static [&'static str] {
        match self {
            Column::Name                 => &["姓名", "player"],
            Column::Team                 => &["隊伍", "队伍"],
            Column::Position             => &["位置", "pos"],
            Column::HeightCm             => &["身高(cm)", "身高", "height"],
            Column::WeightKg             => &["體重(kg)", "體重", "weight"],
            Column::SetsPlayed           => &["上場局數", "sets"],
            Column::AttackPoints         => &["攻擊得分"],
            Column::AttackErrors         => &["攻擊失誤"],
            Column::AttackAttempts       => &["攻擊次數"],
            Column::BlockPoints          => &["攔網得分", "blocks"],
            Column::ServicePoints        => &["發球得分", "aces"],
            Column::ServiceErrors        => &["發球失誤"],
            Column::ReceptionSuccessPct  => &["接發成功率", "reception"],
            Column::AttackSuccessRatePct => &["攻擊成功率(%)", "攻擊成功率"],
            Column::TotalPoints          => &["總得分"],
            Column::TotalErrors          => &["總失誤"],
            Column::NetPoints            => &["淨得分"],
            Column::NetPointsPerSet      => &["場均淨得分"],
            Column::Role                 => &[],
        }
    }

    /// Does a table header cell name this column?
    pub fn matches_header(&self, cell: &str) -> bool {
        let key = header_key(cell);
        if key.is_empty() { return false; }
        key == header_key(self.field())
            || key == header_key(self.header())
            || self.site_aliases().iter().any(|a| key == header_key(a))
    }

    /// Position of this column in `headers`, if present.
    pub fn find_in(&self, headers: &[String]) -> Option<usize> {
        headers.iter().position(|h| self.matches_header(h))
    }

    /// Parse a CLI/user name: field name, header label or alias.
    pub fn parse(s: &str) -> Option<Column> {
        ALL_COLUMNS.iter().copied().find(|c| c.matches_header(s))
    }

    /// Right-aligned / centred in tables.
    pub fn is_numeric(&self) -> bool {
        !matches!(self, Column::Name | Column::Team | Column::Position | Column::Role)
    }

    pub fn cell(&self, rec: &PlayerRecord, role: RoleLabel) -> String {
        let s = rec.stats();
        match self {
            Column::Name                 => s!(rec.name()),
            Column::Team                 => s!(rec.team()),
            Column::Position             => s!(rec.position().label()),
            Column::HeightCm             => fmt_opt_whole(rec.height_cm()),
            Column::WeightKg             => fmt_opt_whole(rec.weight_kg()),
            Column::SetsPlayed           => s.sets_played.to_string(),
            Column::AttackPoints         => s.attack_points.to_string(),
            Column::AttackErrors         => s.attack_errors.to_string(),
            Column::AttackAttempts       => s.attack_attempts.to_string(),
            Column::BlockPoints          => s.block_points.to_string(),
            Column::ServicePoints        => s.service_points.to_string(),
            Column::ServiceErrors        => s.service_errors.to_string(),
            Column::ReceptionSuccessPct  => fmt_opt_whole(rec.reception_success_pct()),
            Column::AttackSuccessRatePct => format!("{:.2}", rec.attack_success_rate_pct),
            Column::TotalPoints          => rec.total_points.to_string(),
            Column::TotalErrors          => rec.total_errors.to_string(),
            Column::NetPoints            => rec.net_points.to_string(),
            Column::NetPointsPerSet      => format!("{:.2}", rec.net_points_per_set),
            Column::Role                 => s!(role.title()),
        }
    }

    fn sort_key(&self, rec: &PlayerRecord, role: RoleLabel) -> SortKey {
        let s = rec.stats();
        let num = |v: f64| SortKey::Num(v);
        match self {
            Column::Name | Column::Team | Column::Position | Column::Role => SortKey::Text(self.cell(rec, role)),
            Column::HeightCm             => SortKey::OptNum(rec.height_cm()),
            Column::WeightKg             => SortKey::OptNum(rec.weight_kg()),
            Column::ReceptionSuccessPct  => SortKey::OptNum(rec.reception_success_pct()),
            Column::SetsPlayed           => num(s.sets_played as f64),
            Column::AttackPoints         => num(s.attack_points as f64),
            Column::AttackErrors         => num(s.attack_errors as f64),
            Column::AttackAttempts       => num(s.attack_attempts as f64),
            Column::BlockPoints          => num(s.block_points as f64),
            Column::ServicePoints        => num(s.service_points as f64),
            Column::ServiceErrors        => num(s.service_errors as f64),
            Column::AttackSuccessRatePct => num(rec.attack_success_rate_pct),
            Column::TotalPoints          => num(rec.total_points as f64),
            Column::TotalErrors          => num(rec.total_errors as f64),
            Column::NetPoints            => num(rec.net_points as f64),
            Column::NetPointsPerSet      => num(rec.net_points_per_set),
        }
    }
}

fn header_key(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(|c| c.to_lowercase())
        .collect()
}

/// Terminal columns taken by `s`. East Asian wide and fullwidth characters
/// count as two, everything else as one.
pub(crate) fn display_width(s: &str) -> usize {
    s.chars().map(|c| if is_wide(c) { 2 } else { 1 }).sum()
}

fn is_wide(c: char) -> bool {
    matches!(c as u32,
        0x1100..=0x115F       // Hangul Jamo
        | 0x2E80..=0x303E     // CJK radicals, punctuation
        | 0x3041..=0x33FF     // kana, CJK symbols
        | 0x3400..=0x4DBF     // CJK ext A
        | 0x4E00..=0x9FFF     // CJK unified
        | 0xA000..=0xA4CF     // Yi
        | 0xAC00..=0xD7A3     // Hangul syllables
        | 0xF900..=0xFAFF     // CJK compatibility
        | 0xFE30..=0xFE4F     // CJK compatibility forms
        | 0xFF00..=0xFF60     // fullwidth forms
        | 0xFFE0..=0xFFE6
        | 0x20000..=0x2FFFD
        | 0x30000..=0x3FFFD)
}

fn fmt_opt_whole(v: Option<f64>) -> String {
    match v {
        Some(x) if x.fract() == 0.0 => format!("{x:.0}"),
        Some(x) => format!("{x:.1}"),
        None => s!(),
    }
}

#[derive(Debug)]
enum SortKey {
    Text(String),
    Num(f64),
    /// Absent values sort below every present one.
    OptNum(Option<f64>),
}

impl SortKey {
    fn cmp(&self, other: &SortKey) -> Ordering {
        match (self, other) {
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            (SortKey::Num(a), SortKey::Num(b)) => a.total_cmp(b),
            (SortKey::OptNum(a), SortKey::OptNum(b)) => match (a, b) {
                (Some(x), Some(y)) => x.total_cmp(y),
                (None, Some(_)) => Ordering::Less,
                (Some(_), None) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
            _ => Ordering::Equal,
        }
    }
}

/// Record indices in display order. Stable: ties keep input order.
pub fn sorted_indices(
    records: &[PlayerRecord],
    rules: &RoleRules,
    by: Column,
    order: SortOrder,
) -> Vec<usize> {
    let keys: Vec<SortKey> = records.iter().map(|r| by.sort_key(r, rules.classify(r))).collect();
    let mut ix: Vec<usize> = (0..records.len()).collect();
    ix.sort_by(|&a, &b| {
        let o = keys[a].cmp(&keys[b]);
        match order { SortOrder::Ascending => o, SortOrder::Descending => o.reverse() }
    });
    ix
}

/// Rendered table for display/export.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TableData {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
    /// `record_ix[i]` is the index in the source slice of rendered row `i`.
    pub record_ix: Vec<usize>,
}

impl TableData {
    pub fn build(
        records: &[PlayerRecord],
        rules: &RoleRules,
        columns: &[Column],
        by: Column,
        order: SortOrder,
    ) -> Self {
        let record_ix = sorted_indices(records, rules, by, order);
        let rows = record_ix
            .iter()
            .map(|&i| {
                let rec = &records[i];
                let role = rules.classify(rec);
                columns.iter().map(|c| c.cell(rec, role)).collect()
            })
            .collect();
        Self { columns: columns.to_vec(), rows, record_ix }
    }

    pub fn headers(&self) -> Vec<String> {
        self.columns.iter().map(|c| s!(c.header())).collect()
    }

    /// Headers as field names, the stable machine-readable form.
    pub fn field_names(&self) -> Vec<String> {
        self.columns.iter().map(|c| s!(c.field())).collect()
    }

    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
    pub fn nrows(&self) -> usize { self.rows.len() }
    pub fn ncols(&self) -> usize { self.columns.len() }

    /// Monospace rendering for terminals; numeric columns right-aligned.
    /// Widths are terminal columns, so CJK names line up.
    pub fn to_aligned_text(&self) -> String {
        let headers = self.headers();
        let mut widths: Vec<usize> = headers.iter().map(|h| display_width(h)).collect();
        for r in &self.rows {
            for (w, cell) in widths.iter_mut().zip(r) {
                *w = (*w).max(display_width(cell));
            }
        }

        let mut out = s!();
        let mut push_line = |cells: &[String]| {
            let mut line = s!();
            for (ci, cell) in cells.iter().enumerate() {
                if ci > 0 { line.push_str("  "); }
                let pad = widths[ci].saturating_sub(display_width(cell));
                if self.columns[ci].is_numeric() {
                    line.push_str(&" ".repeat(pad));
                    line.push_str(cell);
                } else {
                    line.push_str(cell);
                    line.push_str(&" ".repeat(pad));
                }
            }
            out.push_str(line.trim_end());
            out.push('\n');
        };
        push_line(&headers);
        for r in &self.rows {
            push_line(r);
        }
        out
    }
}
