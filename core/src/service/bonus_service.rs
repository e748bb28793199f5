use crate::model::entry::Entry;
use crate::model::group::{
    CategoryGroup, CHATS_BONUS, CLN_BONUS, NPS_BONUS, VV_APPROVED_BONUS, VV_RISK_BONUS,
};
use crate::model::stats::BonusSummary;

/// Bonus for one group: absolute quantities summed over matching entries,
/// times the group multiplier.
///
/// A missing or malformed quantity counts as 0; the entry still belongs to
/// the group. The sign in the raw data never lowers the bonus.
pub fn bonus_for(entries: &[Entry], group: &CategoryGroup) -> BonusSummary {
    let count = entries
        .iter()
        .filter(|e| group.contains(e.sub_department.as_deref()))
        .map(|e| e.parsed_quantity().unwrap_or(0).saturating_abs())
        .fold(0_i64, i64::saturating_add);

    BonusSummary {
        count,
        amount: count.saturating_mul(group.multiplier),
    }
}

pub fn calculate_cln_bonus(entries: &[Entry]) -> BonusSummary {
    bonus_for(entries, &CLN_BONUS)
}

pub fn calculate_chats_bonus(entries: &[Entry]) -> BonusSummary {
    bonus_for(entries, &CHATS_BONUS)
}

pub fn calculate_nps_bonus(entries: &[Entry]) -> BonusSummary {
    bonus_for(entries, &NPS_BONUS)
}

pub fn calculate_vv_risk_bonus(entries: &[Entry]) -> BonusSummary {
    bonus_for(entries, &VV_RISK_BONUS)
}

pub fn calculate_vv_approved_bonus(entries: &[Entry]) -> BonusSummary {
    bonus_for(entries, &VV_APPROVED_BONUS)
}
