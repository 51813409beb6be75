#[macro_use]
extern crate serde;

pub mod activities;
pub use activities::ActivityCode;

mod error;
pub use error::FitReportError;

mod info_message;
pub use info_message::InfoMessage;
