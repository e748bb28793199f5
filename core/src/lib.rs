pub mod model;
pub mod time;
pub mod service;

pub use model::{BonusSummary, CategoryGroup, Entry, GroupStats, MonthlyStats};
pub use time::{days_in_month, format_hours, parse_duration, parse_month};
pub use service::bonus_service::{
    bonus_for, calculate_chats_bonus, calculate_cln_bonus, calculate_nps_bonus,
    calculate_vv_approved_bonus, calculate_vv_risk_bonus,
};
pub use service::stats_service::{
    calculate_chats_stats, calculate_cln_stats, calculate_monthly_stats, calculate_vv_stats,
    stats_for,
};
pub use service::dto::{BonusReport, StatsReport};
