use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BonusSummary {
    pub count: i64,
    pub amount: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct GroupStats {
    pub count: i64,
    pub check_time: f64, // hours
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct MonthlyStats {
    pub total_count: f64,
    pub total_time: f64, // hours
    pub average_speed: f64, // items per hour
}

impl MonthlyStats {
    pub fn new(total_count: f64, total_time: f64) -> Self {
        let average_speed = if total_time > 0.0 {
            total_count / total_time
        } else {
            0.0
        };
        Self {
            total_count,
            total_time,
            average_speed,
        }
    }
}
