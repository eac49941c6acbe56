// src/source/sample.rs
//
// Fixed placeholder rows, used until a season has real tables on disk.
// Every season returns the same three players.

use std::error::Error;

use crate::season::Season;
use crate::stats::{ Position, RosterEntry, StatEntry };
use super::SeasonSource;

/// Bumped whenever the rows below change.
const SAMPLE_VERSION: u64 = 1;

#[derive(Clone, Copy, Debug, Default)]
pub struct SampleSource;

impl SeasonSource for SampleSource {
    fn describe(&self) -> String { s!("sample data") }

    fn roster(&self, season: &Season) -> Result<Vec<RosterEntry>, Box<dyn Error>> {
        logd!("Sample: roster for season {}", season.id);
        let rows = [
            ("李X志", "台電", Position::OutsideHitter, 185.0, 75.0, 60.0),
            ("陳X杰", "長力", Position::Opposite, 190.0, 80.0, 55.0),
            ("高X林", "雲林美津濃", Position::MiddleBlocker, 198.0, 90.0, 10.0),
        ];
        Ok(rows
            .into_iter()
            .map(|(name, team, position, h, w, rec)| RosterEntry {
                name: s!(name),
                team: s!(team),
                position,
                height_cm: Some(h),
                weight_kg: Some(w),
                reception_success_pct: Some(rec),
            })
            .collect())
    }

    fn stats(&self, season: &Season) -> Result<Vec<StatEntry>, Box<dyn Error>> {
        logd!("Sample: stats for season {}", season.id);
        let rows: [(&str, [u32; 7]); 3] = [
            ("李X志", [35, 150, 10, 400, 15, 5, 8]),
            ("陳X杰", [40, 220, 20, 550, 10, 8, 12]),
            ("高X林", [38, 90, 5, 180, 45, 2, 4]),
        ];
        Ok(rows
            .into_iter()
            .map(|(name, [sets, ap, ae, att, bp, sp, se])| StatEntry {
                name: s!(name),
                sets_played: sets,
                attack_points: ap,
                attack_errors: ae,
                attack_attempts: att,
                block_points: bp,
                service_points: sp,
                service_errors: se,
            })
            .collect())
    }

    fn version(&self, _season: &Season) -> u64 { SAMPLE_VERSION }
}
