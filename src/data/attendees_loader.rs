use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use csv::ReaderBuilder;
use serde::Deserialize;
use tracing::info;

use crate::models::city::{City, CityError};
use crate::models::collection::{CityCollection, CollectionError};

#[derive(Debug)]
pub enum AttendeeLoadError {
    IoError(std::io::Error),
    CsvError(csv::Error),
    JsonError(serde_json::Error),
    InvalidCity(CityError),
    EmptyRoster(CollectionError),
}

impl From<std::io::Error> for AttendeeLoadError {
    fn from(err: std::io::Error) -> Self {
        AttendeeLoadError::IoError(err)
    }
}

impl From<csv::Error> for AttendeeLoadError {
    fn from(err: csv::Error) -> Self {
        AttendeeLoadError::CsvError(err)
    }
}

impl From<serde_json::Error> for AttendeeLoadError {
    fn from(err: serde_json::Error) -> Self {
        AttendeeLoadError::JsonError(err)
    }
}

impl From<CityError> for AttendeeLoadError {
    fn from(err: CityError) -> Self {
        AttendeeLoadError::InvalidCity(err)
    }
}

impl From<CollectionError> for AttendeeLoadError {
    fn from(err: CollectionError) -> Self {
        AttendeeLoadError::EmptyRoster(err)
    }
}

impl std::fmt::Display for AttendeeLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttendeeLoadError::IoError(e) => write!(f, "IO error: {}", e),
            AttendeeLoadError::CsvError(e) => write!(f, "CSV error: {}", e),
            AttendeeLoadError::JsonError(e) => write!(f, "JSON error: {}", e),
            AttendeeLoadError::InvalidCity(e) => write!(f, "Invalid attendee city: {}", e),
            AttendeeLoadError::EmptyRoster(e) => write!(f, "Empty roster: {}", e),
        }
    }
}

impl std::error::Error for AttendeeLoadError {}

/// One row of an attendee roster. Numeric parsing happens here; value
/// validation happens in [`City::new`].
#[derive(Debug, Deserialize)]
struct AttendeeRow {
    city: String,
    country: String,
    #[serde(rename = "N")]
    attendees: i64,
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct AttendeeRoster {
    attendees: Vec<AttendeeRow>,
}

fn collect_rows(rows: Vec<AttendeeRow>) -> Result<CityCollection, AttendeeLoadError> {
    let mut cities = Vec::with_capacity(rows.len());
    for row in rows {
        cities.push(City::new(row.city, row.country, row.attendees, row.lat, row.lon)?);
    }
    Ok(CityCollection::new(cities)?)
}

/// Read a CSV roster with header `city,country,N,lat,lon` into a
/// validated collection.
pub fn read_attendees_file(path: impl AsRef<Path>) -> Result<CityCollection, AttendeeLoadError> {
    let file = File::open(path.as_ref())?;
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(file);

    let mut rows = Vec::new();
    for result in reader.deserialize() {
        let row: AttendeeRow = result?;
        rows.push(row);
    }

    let collection = collect_rows(rows)?;
    info!(
        cities = collection.len(),
        path = %path.as_ref().display(),
        "loaded attendee roster"
    );
    Ok(collection)
}

/// Read a JSON roster of the form `{"attendees": [{...}, ...]}`.
pub fn read_attendees_json(path: impl AsRef<Path>) -> Result<CityCollection, AttendeeLoadError> {
    let file = File::open(path.as_ref())?;
    let reader = BufReader::new(file);
    let roster: AttendeeRoster = serde_json::from_reader(reader)?;

    let collection = collect_rows(roster.attendees)?;
    info!(
        cities = collection.len(),
        path = %path.as_ref().display(),
        "loaded attendee roster"
    );
    Ok(collection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("{}_{}", std::process::id(), name));
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_read_attendees_file() {
        let path = temp_file(
            "roster.csv",
            "city,country,N,lat,lon\n\
             Zurich,Switzerland,52,47.22,8.33\n\
             San Francisco,United States,71,37.77,-122.41\n",
        );
        let collection = read_attendees_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(collection.len(), 2);
        assert_eq!(collection.total_attendees(), 123);
        assert_eq!(collection.get_cities()[0].get_name(), "Zurich");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = read_attendees_file("/nonexistent/roster.csv");
        assert!(matches!(result, Err(AttendeeLoadError::IoError(_))));
    }

    #[test]
    fn test_unparseable_count_is_csv_error() {
        let path = temp_file(
            "bad_count.csv",
            "city,country,N,lat,lon\nZurich,Switzerland,many,47.22,8.33\n",
        );
        let result = read_attendees_file(&path);
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(AttendeeLoadError::CsvError(_))));
    }

    #[test]
    fn test_invalid_city_propagates_validation_error() {
        let path = temp_file(
            "bad_lat.csv",
            "city,country,N,lat,lon\nZurich,Switzerland,52,147.22,8.33\n",
        );
        let result = read_attendees_file(&path);
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(
            result,
            Err(AttendeeLoadError::InvalidCity(CityError::LatitudeOutOfRange(_)))
        ));
    }

    #[test]
    fn test_header_only_file_is_empty_roster() {
        let path = temp_file("empty.csv", "city,country,N,lat,lon\n");
        let result = read_attendees_file(&path);
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(AttendeeLoadError::EmptyRoster(_))));
    }

    #[test]
    fn test_read_attendees_json() {
        let path = temp_file(
            "roster.json",
            r#"{"attendees": [
                {"city": "Zurich", "country": "Switzerland", "N": 52, "lat": 47.22, "lon": 8.33},
                {"city": "London", "country": "United Kingdom", "N": 15, "lat": 51.48, "lon": 0.0}
            ]}"#,
        );
        let collection = read_attendees_json(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(collection.len(), 2);
        assert_eq!(collection.total_attendees(), 67);
    }

    #[test]
    fn test_malformed_json_is_json_error() {
        let path = temp_file("broken.json", "{\"attendees\": [");
        let result = read_attendees_json(&path);
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(AttendeeLoadError::JsonError(_))));
    }
}
