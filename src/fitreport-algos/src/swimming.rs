use fitreport_types::ActivityCode;

use crate::training::{M_IN_KM, TrainingBase, TrainingMetrics};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swimming {
    pub base: TrainingBase,
    /// Meters.
    pub length_pool: f64,
    /// Number of pool lengths swum.
    pub count_pool: f64,
}

impl Swimming {
    const CALORIES_SPEED_SHIFT: f64 = 1.1;
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

    pub fn new(action: i64, duration: f64, weight: f64, length_pool: f64, count_pool: f64) -> Self {
        Self {
            base: TrainingBase::new(action, duration, weight),
            length_pool,
            count_pool,
        }
    }
}

impl TrainingMetrics for Swimming {
    const CODE: ActivityCode = ActivityCode::Swimming;
    const LEN_STEP: f64 = 1.38;

    fn base(&self) -> &TrainingBase {
        &self.base
    }

    /// Computed from pool geometry; stroke distance is not involved.
    fn get_mean_speed(&self) -> f64 {
        self.length_pool * self.count_pool / M_IN_KM / self.base.duration
    }

    fn get_spent_calories(&self) -> f64 {
        (self.get_mean_speed() + Self::CALORIES_SPEED_SHIFT)
            * Self::CALORIES_WEIGHT_MULTIPLIER
            * self.base.weight
    }
}
