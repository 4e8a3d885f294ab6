use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::config::constants::CHART_BAR_WIDTH;

/// File name a persisted chart is written under for the given host:
/// lowercase, spaces collapsed to underscores, `.png` extension.
pub fn host_chart_filename(host_name: &str) -> String {
    let slug = host_name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .to_lowercase();
    format!("{}.png", slug)
}

/// Terminal bar chart over a labeled numeric series.
///
/// Bars are scaled so the widest value fills `width` characters. The
/// renderer knows nothing about how the series was computed; it only
/// consumes `(label, tonnes)` pairs and a title.
pub struct BarChart {
    width: usize,
}

impl Default for BarChart {
    fn default() -> Self {
        Self { width: CHART_BAR_WIDTH }
    }
}

impl BarChart {
    pub fn new(width: usize) -> Self {
        Self { width }
    }

    /// Render the chart as display text.
    pub fn render(&self, series: &[(String, f64)], title: &str) -> String {
        let label_width = series
            .iter()
            .map(|(label, _)| label.len())
            .max()
            .unwrap_or(0);
        let max_value = series.iter().map(|(_, value)| *value).fold(0.0, f64::max);

        let mut out = String::new();
        out.push_str(title);
        out.push('\n');
        out.push_str(&"-".repeat(title.len()));
        out.push('\n');

        for (label, value) in series {
            let filled = if max_value > 0.0 {
                ((value / max_value) * self.width as f64).round() as usize
            } else {
                0
            };
            out.push_str(&format!(
                "{:<width$}  {} {:.1}\n",
                label,
                "\u{2588}".repeat(filled),
                value,
                width = label_width
            ));
        }

        out.push_str("Total emissions (tonnes CO2)\n");
        out
    }

    /// Display the chart on stdout.
    pub fn show(&self, series: &[(String, f64)], title: &str) {
        print!("{}", self.render(series, title));
    }

    /// Persist the rendered chart to `path`, overwriting any previous run.
    pub fn save(&self, series: &[(String, f64)], title: &str, path: &Path) -> std::io::Result<()> {
        let mut file = File::create(path)?;
        file.write_all(self.render(series, title).as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_series() -> Vec<(String, f64)> {
        vec![
            ("United States".to_string(), 1250.0),
            ("United Kingdom".to_string(), 312.5),
            ("All other countries".to_string(), 0.0),
        ]
    }

    #[test]
    fn test_host_chart_filename_slug() {
        assert_eq!(host_chart_filename("San Francisco"), "san_francisco.png");
        assert_eq!(host_chart_filename("Zurich"), "zurich.png");
        assert_eq!(host_chart_filename("Rio De Janeiro"), "rio_de_janeiro.png");
    }

    #[test]
    fn test_render_contains_title_and_labels() {
        let chart = BarChart::default();
        let text = chart.render(&sample_series(), "Total emissions from each country (Top 2)");
        assert!(text.contains("Total emissions from each country (Top 2)"));
        assert!(text.contains("United States"));
        assert!(text.contains("United Kingdom"));
        assert!(text.contains("All other countries"));
        assert!(text.contains("Total emissions (tonnes CO2)"));
    }

    #[test]
    fn test_render_scales_bars_to_widest_value() {
        let chart = BarChart::new(10);
        let text = chart.render(&sample_series(), "t");
        let bars: Vec<usize> = text
            .lines()
            .skip(2)
            .take(3)
            .map(|line| line.matches('\u{2588}').count())
            .collect();
        assert_eq!(bars[0], 10);
        assert_eq!(bars[1], 3); // 312.5 / 1250 * 10, rounded
        assert_eq!(bars[2], 0);
    }

    #[test]
    fn test_render_handles_all_zero_series() {
        let chart = BarChart::new(10);
        let series = vec![("X".to_string(), 0.0)];
        let text = chart.render(&series, "t");
        assert!(!text.contains('\u{2588}'));
    }

    #[test]
    fn test_save_writes_rendered_chart() {
        let chart = BarChart::default();
        let path = std::env::temp_dir().join(format!("chart_test_{}.png", std::process::id()));
        chart.save(&sample_series(), "t", &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, chart.render(&sample_series(), "t"));
        std::fs::remove_file(&path).unwrap();
    }
}
