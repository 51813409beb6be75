use std::io::Write;

use clap::ValueEnum;
use fitreport_algos::read_package;
use fitreport_types::{ActivityCode, InfoMessage};
use strum::IntoEnumIterator;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One human readable line per training
    #[default]
    Text,
    /// One JSON object per training
    Json,
}

/// Turns sensor packages into report lines on `out`.
pub struct Reporter<W> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    pub fn report_package(&mut self, workout_type: &str, data: &[f64]) -> anyhow::Result<()> {
        let training = match read_package(workout_type, data) {
            Ok(training) => training,
            Err(error) => {
                error!("Failed to read {} package: {}", workout_type, error);
                return Err(error.into());
            }
        };

        let info = training.show_training_info();
        info!("{} package processed", training.code());
        self.write_info(&info)
    }

    pub fn report_all(&mut self, packages: &[(&str, &[f64])]) -> anyhow::Result<()> {
        for (workout_type, data) in packages {
            self.report_package(workout_type, data)?;
        }

        Ok(())
    }

    /// One `code<TAB>label<TAB>value names` line per supported activity.
    pub fn write_codes(&mut self) -> anyhow::Result<()> {
        for code in ActivityCode::iter() {
            writeln!(
                self.out,
                "{}\t{}\t{}",
                code,
                code.label(),
                code.value_names().join(" ")
            )?;
        }

        Ok(())
    }

    fn write_info(&mut self, info: &InfoMessage) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.out, "{}", info.get_message())?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, info)?;
                writeln!(self.out)?;
            }
        }

        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use fitreport_types::FitReportError;

    use super::*;
    use crate::SAMPLE_PACKAGES;

    fn render(format: OutputFormat, packages: &[(&str, &[f64])]) -> anyhow::Result<String> {
        let mut reporter = Reporter::new(Vec::new(), format);
        reporter.report_all(packages)?;
        Ok(String::from_utf8(reporter.into_inner())?)
    }

    #[test]
    fn demo_packages_as_text() {
        let output = render(OutputFormat::Text, SAMPLE_PACKAGES).unwrap();
        let lines = output.lines().collect::<Vec<_>>();
        assert_eq!(
            lines,
            vec![
                "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; \
                 Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000.",
                "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; \
                 Ср. скорость: 9.750 км/ч; Потрачено ккал: 699.750.",
                "Тип тренировки: SportsWalking; Длительность: 1.000 ч.; Дистанция: 5.850 км; \
                 Ср. скорость: 5.850 км/ч; Потрачено ккал: 157.500.",
            ]
        );
    }

    #[test]
    fn json_lines() {
        let packages: &[(&str, &[f64])] = &[("RUN", &[15000.0, 1.0, 75.0])];
        let output = render(OutputFormat::Json, packages).unwrap();
        let info: InfoMessage = serde_json::from_str(output.trim_end()).unwrap();
        assert_eq!(info.training_type, "Running");
        assert!((info.calories - 699.75).abs() < 1e-6);
        assert!(output.ends_with('\n'));
    }

    #[test]
    fn lists_codes() {
        let mut reporter = Reporter::new(Vec::new(), OutputFormat::Text);
        reporter.write_codes().unwrap();
        let output = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(
            output.lines().collect::<Vec<_>>(),
            vec![
                "RUN\tRunning\taction duration weight",
                "WLK\tSportsWalking\taction duration weight height",
                "SWM\tSwimming\taction duration weight length_pool count_pool",
            ]
        );
    }

    #[test]
    fn stops_at_first_bad_package() {
        let packages: &[(&str, &[f64])] = &[
            ("RUN", &[15000.0, 1.0, 75.0]),
            ("FLY", &[1.0, 1.0, 1.0]),
            ("WLK", &[9000.0, 1.0, 75.0, 180.0]),
        ];
        let mut reporter = Reporter::new(Vec::new(), OutputFormat::Text);
        let err = reporter.report_all(packages).unwrap_err();

        assert_eq!(
            err.downcast_ref::<FitReportError>(),
            Some(&FitReportError::UnsupportedActivity("FLY".to_owned()))
        );
        let output = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(output.lines().count(), 1);
    }
}
