// src/season.rs
use std::fmt;

use crate::config::consts::{ DEFAULT_SEASON_INDEX, SEASONS };

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Division {
    #[default]
    Men,
}

impl Division {
    pub fn label(&self) -> &'static str {
        match self { Division::Men => "Men" }
    }
}

/// One league season. `id` is the short key used for directories, cache keys
/// and the CLI (`"17"`); `label` is what people read.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Season {
    pub id: String,
    pub label: String,
    pub division: Division,
}

impl Season {
    pub fn new(id: &str, label: &str) -> Self {
        Self { id: s!(id), label: s!(label), division: Division::Men }
    }

    /// Known seasons, newest first.
    pub fn catalogue() -> Vec<Season> {
        SEASONS.iter().map(|(id, label)| Season::new(id, label)).collect()
    }

    /// Look up by id (`"17"`) or, failing that, by exact label.
    pub fn find(key: &str) -> Option<Season> {
        let key = key.trim();
        Self::catalogue()
            .into_iter()
            .find(|s| s.id == key || s.label == key)
    }
}

impl Default for Season {
    fn default() -> Self {
        let (id, label) = SEASONS[DEFAULT_SEASON_INDEX];
        Season::new(id, label)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label, self.division.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_year_17() {
        assert_eq!(Season::default().id, "17");
        assert_eq!(Season::catalogue().len(), 4);
        assert_eq!(Season::find("19").map(|s| s.id), Some(s!("19")));
        assert!(Season::find("3").is_none());
    }

    #[test]
    fn every_season_is_mens_division() {
        for s in Season::catalogue() {
            assert_eq!(s.division, Division::Men);
            assert!(s.to_string().ends_with("(Men)"));
        }
    }
}
