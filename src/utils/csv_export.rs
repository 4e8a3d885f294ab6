use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::analysis::reporting::country_breakdown_rows;
use crate::config::constants::KG_PER_TONNE;
use crate::models::city::City;
use crate::models::collection::CityCollection;

/// Writes report tables into a timestamped run directory.
pub struct CsvExporter {
    output_dir: PathBuf,
}

impl CsvExporter {
    /// Create the exporter and its `<output_dir>/<timestamp>` directory.
    pub fn new(output_dir: impl AsRef<Path>) -> std::io::Result<Self> {
        let timestamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
        let full_path = Path::new(output_dir.as_ref()).join(timestamp);
        std::fs::create_dir_all(&full_path)?;
        Ok(Self { output_dir: full_path })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Export the candidate-host ranking to `emissions_ranking.csv`.
    pub fn export_ranking(&self, ranking: &[(String, f64)]) -> std::io::Result<PathBuf> {
        let path = self.output_dir.join("emissions_ranking.csv");
        let mut file = File::create(&path)?;

        writeln!(file, "City,Total CO2 (kg),Total CO2 (tonnes)")?;
        for (name, co2_kg) in ranking {
            writeln!(file, "{},{:.2},{:.2}", name, co2_kg, co2_kg / KG_PER_TONNE)?;
        }
        Ok(path)
    }

    /// Export the per-country breakdown for a host to
    /// `country_breakdown.csv`.
    pub fn export_country_breakdown(
        &self,
        collection: &CityCollection,
        host: &City,
    ) -> std::io::Result<PathBuf> {
        let travel = collection.travel_by_country(host);
        let co2 = collection.co2_by_country(host);

        let path = self.output_dir.join("country_breakdown.csv");
        let mut file = File::create(&path)?;

        writeln!(file, "Country,Travel (attendee-km),Total CO2 (tonnes)")?;
        for (country, attendee_km, co2_kg) in country_breakdown_rows(&travel, &co2) {
            writeln!(
                file,
                "{},{:.2},{:.2}",
                country,
                attendee_km,
                co2_kg / KG_PER_TONNE
            )?;
        }
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_collection() -> CityCollection {
        CityCollection::new(vec![
            City::new("Zurich", "Switzerland", 52, 47.22, 8.33).unwrap(),
            City::new("London", "United Kingdom", 15, 51.48, 0.0).unwrap(),
        ])
        .unwrap()
    }

    #[test]
    fn test_export_ranking_writes_header_and_rows() {
        let base = std::env::temp_dir().join(format!("csv_export_test_{}", std::process::id()));
        let exporter = CsvExporter::new(&base).unwrap();

        let ranking = vec![("Zurich".to_string(), 2000.0)];
        let path = exporter.export_ranking(&ranking).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();

        assert!(contents.starts_with("City,Total CO2 (kg),Total CO2 (tonnes)\n"));
        assert!(contents.contains("Zurich,2000.00,2.00"));
        std::fs::remove_dir_all(&base).unwrap();
    }

    #[test]
    fn test_export_country_breakdown_covers_all_countries() {
        let base =
            std::env::temp_dir().join(format!("csv_export_breakdown_{}", std::process::id()));
        let exporter = CsvExporter::new(&base).unwrap();

        let collection = sample_collection();
        let host = collection.get_cities()[0].clone();
        let path = exporter.export_country_breakdown(&collection, &host).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();

        assert!(contents.contains("Switzerland"));
        assert!(contents.contains("United Kingdom"));
        std::fs::remove_dir_all(&base).unwrap();
    }
}
