use fitreport_types::{ActivityCode, InfoMessage};

use crate::{Running, SportsWalking, Swimming};

pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_H: f64 = 60.0;

/// Sensor values every training carries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingBase {
    /// Steps for running and walking, strokes for swimming.
    pub action: i64,
    /// Hours.
    pub duration: f64,
    /// Kilograms.
    pub weight: f64,
}

impl TrainingBase {
    pub fn new(action: i64, duration: f64, weight: f64) -> Self {
        Self {
            action,
            duration,
            weight,
        }
    }
}

/// Distance, speed and calorie formulas of a training.
///
/// Distance and mean speed have step-based defaults; every training must
/// provide its own calorie formula.
pub trait TrainingMetrics {
    const CODE: ActivityCode;

    /// Meters covered by one action.
    const LEN_STEP: f64 = 0.65;

    fn base(&self) -> &TrainingBase;

    /// Distance in km.
    fn get_distance(&self) -> f64 {
        self.base().action as f64 * Self::LEN_STEP / M_IN_KM
    }

    /// Mean speed in km/h. Zero duration gives an infinite or NaN speed.
    fn get_mean_speed(&self) -> f64 {
        self.get_distance() / self.base().duration
    }

    /// Spent energy in kcal.
    fn get_spent_calories(&self) -> f64;

    fn show_training_info(&self) -> InfoMessage {
        InfoMessage {
            training_type: Self::CODE.label().to_owned(),
            duration: self.base().duration,
            distance: self.get_distance(),
            speed: self.get_mean_speed(),
            calories: self.get_spent_calories(),
        }
    }
}

/// Any of the supported trainings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Training {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Training {
    pub fn code(&self) -> ActivityCode {
        match self {
            Training::Running(_) => Running::CODE,
            Training::SportsWalking(_) => SportsWalking::CODE,
            Training::Swimming(_) => Swimming::CODE,
        }
    }

    pub fn base(&self) -> &TrainingBase {
        match self {
            Training::Running(t) => t.base(),
            Training::SportsWalking(t) => t.base(),
            Training::Swimming(t) => t.base(),
        }
    }

    pub fn get_distance(&self) -> f64 {
        match self {
            Training::Running(t) => t.get_distance(),
            Training::SportsWalking(t) => t.get_distance(),
            Training::Swimming(t) => t.get_distance(),
        }
    }

    pub fn get_mean_speed(&self) -> f64 {
        match self {
            Training::Running(t) => t.get_mean_speed(),
            Training::SportsWalking(t) => t.get_mean_speed(),
            Training::Swimming(t) => t.get_mean_speed(),
        }
    }

    pub fn get_spent_calories(&self) -> f64 {
        match self {
            Training::Running(t) => t.get_spent_calories(),
            Training::SportsWalking(t) => t.get_spent_calories(),
            Training::Swimming(t) => t.get_spent_calories(),
        }
    }

    pub fn show_training_info(&self) -> InfoMessage {
        match self {
            Training::Running(t) => t.show_training_info(),
            Training::SportsWalking(t) => t.show_training_info(),
            Training::Swimming(t) => t.show_training_info(),
        }
    }
}

impl From<Running> for Training {
    fn from(value: Running) -> Self {
        Self::Running(value)
    }
}

impl From<SportsWalking> for Training {
    fn from(value: SportsWalking) -> Self {
        Self::SportsWalking(value)
    }
}

impl From<Swimming> for Training {
    fn from(value: Swimming) -> Self {
        Self::Swimming(value)
    }
}
