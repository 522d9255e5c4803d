//! Rendering of command reports as text tables or JSON.

use serde::Serialize;

use crate::config::OutputFormat;
use crate::Result;

/// A report that can be laid out as a plain-text table.
pub trait Table {
    /// Human-readable rendering, one record per line
    fn to_table(&self) -> String;
}

/// Render `report` in the requested format.
pub fn render<R>(report: &R, format: OutputFormat) -> Result<String>
where
    R: Serialize + Table,
{
    match format {
        OutputFormat::Table => Ok(report.to_table()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

/// Fixed-width cell for a floating-point value.
pub fn cell(value: f64) -> String {
    if value.is_finite() {
        format!("{:>22.12e}", value)
    } else {
        format!("{:>22}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Pair {
        x: f64,
        y: f64,
    }

    impl Table for Pair {
        fn to_table(&self) -> String {
            format!("{}{}", cell(self.x), cell(self.y))
        }
    }

    #[test]
    fn test_render_table() {
        let text = render(&Pair { x: 1.0, y: 2.5 }, OutputFormat::Table).unwrap();
        assert!(text.contains("1.000000000000e0"));
        assert!(text.contains("2.500000000000e0"));
    }

    #[test]
    fn test_render_json() {
        let text = render(&Pair { x: 1.0, y: 2.5 }, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["y"], 2.5);
    }

    #[test]
    fn test_non_finite_cells() {
        assert_eq!(cell(f64::INFINITY).trim(), "inf");
        assert_eq!(cell(f64::NAN).trim(), "NaN");
    }

    #[test]
    fn test_non_finite_json_is_null() {
        let text = render(&Pair { x: f64::INFINITY, y: f64::NAN }, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert!(value["x"].is_null());
        assert!(value["y"].is_null());
    }
}
