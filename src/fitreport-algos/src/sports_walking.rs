use fitreport_types::ActivityCode;

use crate::{
    helpers::float_math::floor_div,
    training::{MIN_IN_H, TrainingBase, TrainingMetrics},
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SportsWalking {
    pub base: TrainingBase,
    /// Centimeters.
    pub height: f64,
}

impl SportsWalking {
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

    pub fn new(action: i64, duration: f64, weight: f64, height: f64) -> Self {
        Self {
            base: TrainingBase::new(action, duration, weight),
            height,
        }
    }
}

impl TrainingMetrics for SportsWalking {
    const CODE: ActivityCode = ActivityCode::SportsWalking;

    fn base(&self) -> &TrainingBase {
        &self.base
    }

    /// Squared speed is floor-divided by height, so the speed term only
    /// contributes once `speed^2 >= height`.
    fn get_spent_calories(&self) -> f64 {
        (Self::CALORIES_WEIGHT_MULTIPLIER
            + Self::CALORIES_SPEED_HEIGHT_MULTIPLIER
                * floor_div(self.get_mean_speed().powi(2), self.height))
            * self.base.weight
            * self.base.duration
            * MIN_IN_H
    }
}
