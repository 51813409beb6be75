use fitreport_types::ActivityCode;

use crate::training::{M_IN_KM, MIN_IN_H, TrainingBase, TrainingMetrics};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
    pub base: TrainingBase,
}

impl Running {
    const CALORIES_SPEED_MULTIPLIER: f64 = 18.0;
    const CALORIES_SPEED_SHIFT: f64 = 20.0;

    pub fn new(action: i64, duration: f64, weight: f64) -> Self {
        Self {
            base: TrainingBase::new(action, duration, weight),
        }
    }
}

impl TrainingMetrics for Running {
    const CODE: ActivityCode = ActivityCode::Running;

    fn base(&self) -> &TrainingBase {
        &self.base
    }

    fn get_spent_calories(&self) -> f64 {
        (Self::CALORIES_SPEED_MULTIPLIER * self.get_mean_speed() - Self::CALORIES_SPEED_SHIFT)
            * self.base.weight
            / M_IN_KM
            * self.base.duration
            * MIN_IN_H
    }
}
