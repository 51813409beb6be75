#[macro_use]
extern crate log;

mod samples;
pub use samples::SAMPLE_PACKAGES;

mod report;
pub use report::{OutputFormat, Reporter};

pub use fitreport_types as types;
