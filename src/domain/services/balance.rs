use std::collections::{BTreeMap, HashMap};
use serde::Serialize;
use crate::domain::models::shift::Shift;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingEntry {
    pub name: String,
    pub hours: f64,
}

/// Net worked hours per user id.
pub fn total_hours_by_user(shifts: &[Shift]) -> BTreeMap<i64, f64> {
    let mut totals = BTreeMap::new();
    for shift in shifts {
        *totals.entry(shift.user_id).or_insert(0.0) += shift.worked_hours();
    }
    totals
}

/// Orders totals by hours, highest first. The sort is stable, so users with
/// equal hours keep ascending id order. Ids without a known name are dropped.
pub fn rank_by_hours(totals: BTreeMap<i64, f64>, names: &HashMap<i64, String>) -> Vec<RankingEntry> {
    let mut ranking: Vec<RankingEntry> = totals
        .into_iter()
        .filter_map(|(user_id, hours)| {
            names.get(&user_id).map(|name| RankingEntry { name: name.clone(), hours })
        })
        .collect();

    ranking.sort_by(|a, b| b.hours.total_cmp(&a.hours));
    ranking
}
