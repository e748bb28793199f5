use serde::Serialize;

use crate::model::entry::Entry;
use crate::model::group::{BONUS_GROUPS, STATS_GROUPS};
use crate::model::stats::MonthlyStats;
use crate::service::bonus_service::bonus_for;
use crate::service::stats_service::{calculate_monthly_stats, stats_for};

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct BonusLine {
    pub group: &'static str,
    pub multiplier: i64,
    pub count: i64,
    pub amount: i64,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct BonusReport {
    pub groups: Vec<BonusLine>,
    pub total_amount: i64,
}

impl BonusReport {
    pub fn from_entries(entries: &[Entry]) -> Self {
        let groups: Vec<BonusLine> = BONUS_GROUPS
            .iter()
            .map(|group| {
                let summary = bonus_for(entries, group);
                BonusLine {
                    group: group.name,
                    multiplier: group.multiplier,
                    count: summary.count,
                    amount: summary.amount,
                }
            })
            .collect();

        let total_amount = groups
            .iter()
            .map(|line| line.amount)
            .fold(0_i64, i64::saturating_add);

        Self {
            groups,
            total_amount,
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct StatsLine {
    pub group: &'static str,
    pub count: i64,
    pub check_time: f64, // hours
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct StatsReport {
    pub groups: Vec<StatsLine>,
    pub monthly: MonthlyStats,
    pub days_in_month: u32,
}

impl StatsReport {
    pub fn from_entries(entries: &[Entry], days_in_month: u32) -> Self {
        let groups = STATS_GROUPS
            .iter()
            .map(|group| {
                let stats = stats_for(entries, group);
                StatsLine {
                    group: group.name,
                    count: stats.count,
                    check_time: stats.check_time,
                }
            })
            .collect();

        Self {
            groups,
            monthly: calculate_monthly_stats(entries, days_in_month),
            days_in_month,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entries() -> Vec<Entry> {
        vec![
            Entry::new(Some("КЛН"), Some("10"), Some("1:00:00")),
            Entry::new(Some("NPS"), Some("5"), Some("0:30:00")),
            Entry::new(Some("HL Chats"), Some("-3"), Some("0:30:00")),
            Entry::new(Some("Ідентифікація"), Some("2"), None),
            Entry::new(None, Some("1"), Some("1:00:00")),
        ]
    }

    #[test]
    fn test_bonus_report() {
        let report = BonusReport::from_entries(&sample_entries());
        let names: Vec<&str> = report.groups.iter().map(|l| l.group).collect();
        assert_eq!(names, vec!["CLN", "Chats", "NPS", "VV Risk", "VV Approved"]);

        let amounts: Vec<i64> = report.groups.iter().map(|l| l.amount).collect();
        assert_eq!(amounts, vec![60, 6, 15, 0, 14]);
        assert_eq!(report.total_amount, 95);
    }

    #[test]
    fn test_stats_report() {
        let report = StatsReport::from_entries(&sample_entries(), 31);
        let counts: Vec<i64> = report.groups.iter().map(|l| l.count).collect();
        assert_eq!(counts, vec![15, -3, 2]);
        assert_eq!(report.groups[0].check_time, 1.5);
        assert_eq!(report.groups[1].check_time, 0.5);
        assert_eq!(report.groups[2].check_time, 0.0);

        assert_eq!(report.monthly.total_count, 15.0);
        assert_eq!(report.monthly.total_time, 3.0);
        assert_eq!(report.monthly.average_speed, 5.0);
        assert_eq!(report.days_in_month, 31);
    }

    #[test]
    fn test_reports_serialize() {
        let json = serde_json::to_value(BonusReport::from_entries(&[])).unwrap();
        assert_eq!(json["total_amount"], 0);
        assert_eq!(json["groups"].as_array().map(|g| g.len()), Some(5));
    }
}
