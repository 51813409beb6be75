#[macro_use]
extern crate log;

pub(crate) mod training;
pub use training::{M_IN_KM, MIN_IN_H, Training, TrainingBase, TrainingMetrics};

pub(crate) mod running;
pub use running::Running;

pub(crate) mod sports_walking;
pub use sports_walking::SportsWalking;

pub(crate) mod swimming;
pub use swimming::Swimming;

pub(crate) mod package;
pub use package::read_package;

pub mod helpers;
