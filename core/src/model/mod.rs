pub mod entry;
pub mod group;
pub mod stats;

pub use entry::Entry;
pub use group::CategoryGroup;
pub use stats::{BonusSummary, GroupStats, MonthlyStats};
