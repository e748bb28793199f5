use crate::model::entry::Entry;
use crate::model::group::{CategoryGroup, CHATS_STATS, CLN_STATS, VV_STATS};
use crate::model::stats::{GroupStats, MonthlyStats};

/// Signed item count and check time for one group.
///
/// Unlike bonuses, entries whose quantity or time does not parse are left
/// out of the respective sum.
pub fn stats_for(entries: &[Entry], group: &CategoryGroup) -> GroupStats {
    let matching: Vec<&Entry> = entries
        .iter()
        .filter(|e| group.contains(e.sub_department.as_deref()))
        .collect();

    let count = matching
        .iter()
        .filter_map(|e| e.parsed_quantity())
        .fold(0_i64, i64::saturating_add);

    let check_time: f64 = matching.iter().filter_map(|e| e.parsed_hours()).sum();

    GroupStats { count, check_time }
}

pub fn calculate_cln_stats(entries: &[Entry]) -> GroupStats {
    stats_for(entries, &CLN_STATS)
}

pub fn calculate_chats_stats(entries: &[Entry]) -> GroupStats {
    stats_for(entries, &CHATS_STATS)
}

pub fn calculate_vv_stats(entries: &[Entry]) -> GroupStats {
    stats_for(entries, &VV_STATS)
}

/// Totals over every entry regardless of sub-department.
///
/// Malformed quantities and times count as zero. `_days_in_month` is part
/// of the call shape for callers that derive per-day rates; it does not
/// affect the result.
pub fn calculate_monthly_stats(entries: &[Entry], _days_in_month: u32) -> MonthlyStats {
    let total_count = entries
        .iter()
        .map(|e| e.parsed_quantity().unwrap_or(0))
        .fold(0_i64, i64::saturating_add) as f64;

    let total_time: f64 = entries
        .iter()
        .map(|e| e.parsed_hours().unwrap_or(0.0))
        .sum();

    MonthlyStats::new(total_count, total_time)
}
