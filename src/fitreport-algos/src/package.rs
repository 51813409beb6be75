use std::str::FromStr;

use fitreport_types::{ActivityCode, FitReportError};

use crate::{Running, SportsWalking, Swimming, Training};

/// Builds a training from a sensor package.
///
/// `data` holds the raw values in the order given by
/// [`ActivityCode::value_names`].
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<Training, FitReportError> {
    let code = ActivityCode::from_str(workout_type)
        .map_err(|_| FitReportError::UnsupportedActivity(workout_type.to_owned()))?;

    if data.len() != code.value_count() {
        return Err(FitReportError::InvalidValueCount {
            code,
            expected: code.value_count(),
            actual: data.len(),
        });
    }

    debug!("Reading {} package: {:?}", code, data);

    let action = action_count(data[0])?;
    let (duration, weight) = (data[1], data[2]);

    let training: Training = match code {
        ActivityCode::Running => Running::new(action, duration, weight).into(),
        ActivityCode::SportsWalking => SportsWalking::new(action, duration, weight, data[3]).into(),
        ActivityCode::Swimming => {
            Swimming::new(action, duration, weight, data[3], data[4]).into()
        }
    };

    Ok(training)
}

/// Whole numbers only; the sign is left to the formulas.
fn action_count(value: f64) -> Result<i64, FitReportError> {
    // i64::MAX as f64 rounds up to 2^63, which no longer fits
    if value.fract() != 0.0 || value < i64::MIN as f64 || value >= i64::MAX as f64 {
        return Err(FitReportError::InvalidActionCount(value));
    }

    Ok(value as i64)
}
