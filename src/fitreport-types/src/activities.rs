use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Short code a sensor package is tagged with.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    Display,
    AsRefStr,
    EnumIter,
)]
pub enum ActivityCode {
    #[strum(serialize = "RUN")]
    #[serde(rename = "RUN")]
    Running,
    #[strum(serialize = "WLK")]
    #[serde(rename = "WLK")]
    SportsWalking,
    #[strum(serialize = "SWM")]
    #[serde(rename = "SWM")]
    Swimming,
}

impl ActivityCode {
    /// Name shown in the `Тип тренировки` field of a report.
    pub fn label(self) -> &'static str {
        match self {
            ActivityCode::Running => "Running",
            ActivityCode::SportsWalking => "SportsWalking",
            ActivityCode::Swimming => "Swimming",
        }
    }

    /// Number of raw values a package with this code carries.
    pub fn value_count(self) -> usize {
        self.value_names().len()
    }

    /// Positional layout of the raw values, base fields first.
    pub fn value_names(self) -> &'static [&'static str] {
        match self {
            ActivityCode::Running => &["action", "duration", "weight"],
            ActivityCode::SportsWalking => &["action", "duration", "weight", "height"],
            ActivityCode::Swimming => &[
                "action",
                "duration",
                "weight",
                "length_pool",
                "count_pool",
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::ActivityCode;

    #[test]
    fn parses_known_codes() {
        assert_eq!(ActivityCode::from_str("RUN"), Ok(ActivityCode::Running));
        assert_eq!(ActivityCode::from_str("WLK"), Ok(ActivityCode::SportsWalking));
        assert_eq!(ActivityCode::from_str("SWM"), Ok(ActivityCode::Swimming));
    }

    #[test]
    fn rejects_unknown_and_lowercase_codes() {
        assert!(ActivityCode::from_str("FLY").is_err());
        assert!(ActivityCode::from_str("run").is_err());
        assert!(ActivityCode::from_str("").is_err());
    }

    #[test]
    fn display_matches_code() {
        for code in ActivityCode::iter() {
            let parsed: ActivityCode = code.to_string().parse().unwrap();
            assert_eq!(parsed, code);
            assert_eq!(code.as_ref(), code.to_string());
        }
    }

    #[test]
    fn value_counts() {
        assert_eq!(ActivityCode::Running.value_count(), 3);
        assert_eq!(ActivityCode::SportsWalking.value_count(), 4);
        assert_eq!(ActivityCode::Swimming.value_count(), 5);
    }

    #[test]
    fn serde_uses_short_code() {
        let json = serde_json::to_string(&ActivityCode::Swimming).unwrap();
        assert_eq!(json, "\"SWM\"");
        let code: ActivityCode = serde_json::from_str("\"WLK\"").unwrap();
        assert_eq!(code, ActivityCode::SportsWalking);
    }
}
