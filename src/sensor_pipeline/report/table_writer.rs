use std::io::Write;
use tracing::debug;
use crate::sensor_pipeline::common::error::Result;
use crate::sensor_pipeline::reading::types::SensorReading;
use crate::sensor_pipeline::report::writer::ReadingWriter;

/// Width of the entry-name column, excluding the gap before the text.
const NAME_WIDTH: usize = 16;

/// Plain-text table for monospaced terminals.
///
/// ```text
/// == light @ 2000 ==
/// Raw                320.0000
/// Illuminance          320.00 lux
/// ```
pub struct TableWriter;

impl TableWriter {
    fn write_reading(reading: &SensorReading, output: &mut dyn Write) -> Result<()> {
        writeln!(output, "== {} @ {} ==", reading.profile.kind, reading.timestamp)?;

        for value in &reading.converted_values {
            let mut lines = value.text.lines();
            let first = lines.next().unwrap_or_default();
            writeln!(output, "{:<width$} {}", value.name, first, width = NAME_WIDTH)?;
            for line in lines {
                writeln!(output, "{:width$} {}", "", line, width = NAME_WIDTH)?;
            }
        }

        Ok(())
    }
}

impl ReadingWriter for TableWriter {
    fn write_readings(&self, readings: &[SensorReading], output: &mut dyn Write) -> Result<()> {
        debug!("Rendering {} readings as table", readings.len());

        for (index, reading) in readings.iter().enumerate() {
            if index > 0 {
                writeln!(output)?;
            }
            Self::write_reading(reading, output)?;
        }

        output.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensor_pipeline::reading::{ReadingFormatter, SensorKind, SensorProfile};

    fn render(readings: &[SensorReading]) -> String {
        let mut buffer = Vec::new();
        TableWriter.write_readings(readings, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_light_reading_table() {
        let profile = SensorProfile::new(SensorKind::Light, 40000.0);
        let reading = ReadingFormatter::default().read(&profile, 2000, 0, &[5.0]);
        let text = render(&[reading]);

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "== light @ 2000 ==");
        assert_eq!(lines[1], "Raw                  5.0000");
        assert_eq!(lines[2], "Illuminance            5.00 lux   ");
        assert_eq!(lines[6], "Scene            Night");
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn test_multiline_entries_are_indented() {
        let profile = SensorProfile::new(SensorKind::Color, 100.0);
        let reading = ReadingFormatter::default().read(&profile, 7, 0, &[50.0, 50.0, 50.0]);
        let text = render(&[reading]);

        assert!(text.contains("Normalized RGB   R   0.5000\n                 G   0.5000\n                 B   0.5000\n"));
    }

    #[test]
    fn test_readings_separated_by_blank_line() {
        let profile = SensorProfile::new(SensorKind::Unknown, 1.0);
        let formatter = ReadingFormatter::default();
        let readings = vec![
            formatter.read(&profile, 1, 0, &[1.0]),
            formatter.read(&profile, 2, 0, &[2.0]),
        ];

        assert_eq!(
            render(&readings),
            "== unknown @ 1 ==\nRaw                  1.0000\n\n== unknown @ 2 ==\nRaw                  2.0000\n"
        );
    }

    #[test]
    fn test_no_readings_writes_nothing() {
        assert_eq!(render(&[]), "");
    }
}
