use serde::Serialize;

/// A fixed set of sub-departments that are aggregated together,
/// with the bonus paid per processed item.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryGroup {
    pub name: &'static str,
    pub categories: &'static [&'static str],
    pub multiplier: i64,
}

impl CategoryGroup {
    /// Exact, case-sensitive membership. Entries without a sub-department never match.
    pub fn contains(&self, sub_department: Option<&str>) -> bool {
        match sub_department {
            Some(sub) => self.categories.contains(&sub),
            None => false,
        }
    }
}

const CLN_CATEGORIES: [&str; 12] = [
    "КЛН",
    "Incomplete",
    "Dailer",
    "BX",
    "АО ПО",
    "АО КЛ",
    "ST",
    "AO BX",
    "HL КЛН",
    "Видача",
    "Відміна",
    "Відмова",
];

// Stats count NPS work as part of CLN; bonuses pay it separately.
const CLN_STATS_CATEGORIES: [&str; 13] = [
    "КЛН",
    "NPS",
    "Incomplete",
    "Dailer",
    "BX",
    "АО ПО",
    "АО КЛ",
    "ST",
    "AO BX",
    "HL КЛН",
    "Видача",
    "Відміна",
    "Відмова",
];

pub const CLN_BONUS: CategoryGroup = CategoryGroup {
    name: "CLN",
    categories: &CLN_CATEGORIES,
    multiplier: 6,
};

pub const CHATS_BONUS: CategoryGroup = CategoryGroup {
    name: "Chats",
    categories: &["AO/ST Chats", "HL Chats"],
    multiplier: 2,
};

pub const NPS_BONUS: CategoryGroup = CategoryGroup {
    name: "NPS",
    categories: &["NPS"],
    multiplier: 3,
};

pub const VV_RISK_BONUS: CategoryGroup = CategoryGroup {
    name: "VV Risk",
    categories: &["На ризик"],
    multiplier: 4,
};

pub const VV_APPROVED_BONUS: CategoryGroup = CategoryGroup {
    name: "VV Approved",
    categories: &["Ідентифікація"],
    multiplier: 7,
};

/// Bonus groups in display order.
pub const BONUS_GROUPS: [CategoryGroup; 5] = [
    CLN_BONUS,
    CHATS_BONUS,
    NPS_BONUS,
    VV_RISK_BONUS,
    VV_APPROVED_BONUS,
];

// Stats groups carry no bonus.
pub const CLN_STATS: CategoryGroup = CategoryGroup {
    name: "CLN",
    categories: &CLN_STATS_CATEGORIES,
    multiplier: 0,
};

pub const CHATS_STATS: CategoryGroup = CategoryGroup {
    name: "Chats",
    categories: &["AO/ST Chats", "HL Chats"],
    multiplier: 0,
};

pub const VV_STATS: CategoryGroup = CategoryGroup {
    name: "VV",
    categories: &["На ризик", "Ідентифікація"],
    multiplier: 0,
};

pub const STATS_GROUPS: [CategoryGroup; 3] = [CLN_STATS, CHATS_STATS, VV_STATS];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_exact_match() {
        assert!(CLN_BONUS.contains(Some("КЛН")));
        assert!(CLN_BONUS.contains(Some("HL КЛН")));
        assert!(!CLN_BONUS.contains(Some("клн")));
        assert!(!CLN_BONUS.contains(Some("КЛН ")));
        assert!(!CLN_BONUS.contains(None));
    }

    #[test]
    fn test_nps_only_in_cln_stats() {
        assert!(!CLN_BONUS.contains(Some("NPS")));
        assert!(CLN_STATS.contains(Some("NPS")));
        assert!(NPS_BONUS.contains(Some("NPS")));
    }

    #[test]
    fn test_cln_stats_is_bonus_set_plus_nps() {
        for category in CLN_BONUS.categories {
            assert!(CLN_STATS.contains(Some(category)));
        }
        assert_eq!(CLN_STATS.categories.len(), CLN_BONUS.categories.len() + 1);
    }

    #[test]
    fn test_vv_stats_is_union_of_vv_bonus_groups() {
        assert!(VV_STATS.contains(Some("На ризик")));
        assert!(VV_STATS.contains(Some("Ідентифікація")));
        assert!(!VV_RISK_BONUS.contains(Some("Ідентифікація")));
        assert!(!VV_APPROVED_BONUS.contains(Some("На ризик")));
    }

    #[test]
    fn test_multipliers() {
        let multipliers: Vec<i64> = BONUS_GROUPS.iter().map(|g| g.multiplier).collect();
        assert_eq!(multipliers, vec![6, 2, 3, 4, 7]);
    }
}
