use serde::Serialize;

use crate::config::const_funcs::calc_emission_rate;
use crate::config::constants::{
    EARTH_RADIUS_KM, MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE,
};

/// Validation failures raised by [`City::new`].
#[derive(Debug, Clone, PartialEq)]
pub enum CityError {
    AttendeesNegative(i64),
    LatitudeNotNumeric(f64),
    LatitudeOutOfRange(f64),
    LongitudeNotNumeric(f64),
    LongitudeOutOfRange(f64),
}

impl std::fmt::Display for CityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CityError::AttendeesNegative(n) => {
                write!(f, "Number of attendees must be non-negative, got {}", n)
            }
            CityError::LatitudeNotNumeric(v) => {
                write!(f, "Latitude is not a number: {}", v)
            }
            CityError::LatitudeOutOfRange(v) => {
                write!(f, "Latitude must be between -90 and 90 degrees, got {}", v)
            }
            CityError::LongitudeNotNumeric(v) => {
                write!(f, "Longitude is not a number: {}", v)
            }
            CityError::LongitudeOutOfRange(v) => {
                write!(f, "Longitude must be between -180 and 180 degrees, got {}", v)
            }
        }
    }
}

impl std::error::Error for CityError {}

/// One attendee city: identity, attendee count and coordinates.
///
/// Validated on construction and immutable afterwards, so an instance in
/// hand always holds a usable coordinate pair and a non-negative count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct City {
    name: String,
    country: String,
    attendees: u32,
    latitude: f64,
    longitude: f64,
}

impl City {
    /// Validation order is fixed: attendee sign, then latitude, then
    /// longitude; the first failing check wins.
    pub fn new(
        name: impl Into<String>,
        country: impl Into<String>,
        attendees: i64,
        latitude: f64,
        longitude: f64,
    ) -> Result<Self, CityError> {
        if attendees < 0 {
            return Err(CityError::AttendeesNegative(attendees));
        }
        if latitude.is_nan() {
            return Err(CityError::LatitudeNotNumeric(latitude));
        }
        if !(MIN_LATITUDE..=MAX_LATITUDE).contains(&latitude) {
            return Err(CityError::LatitudeOutOfRange(latitude));
        }
        if longitude.is_nan() {
            return Err(CityError::LongitudeNotNumeric(longitude));
        }
        if !(MIN_LONGITUDE..=MAX_LONGITUDE).contains(&longitude) {
            return Err(CityError::LongitudeOutOfRange(longitude));
        }

        Ok(Self {
            name: name.into(),
            country: country.into(),
            attendees: attendees as u32,
            latitude,
            longitude,
        })
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_country(&self) -> &str {
        &self.country
    }

    pub fn get_attendees(&self) -> u32 {
        self.attendees
    }

    pub fn get_latitude(&self) -> f64 {
        self.latitude
    }

    pub fn get_longitude(&self) -> f64 {
        self.longitude
    }

    /// Great-circle distance in km from this city to `other`.
    ///
    /// Haversine on a 6371 km sphere. The `cos(other) * cos(self)` term
    /// order is part of the numeric contract and must not be swapped.
    pub fn distance_to(&self, other: &City) -> f64 {
        use std::f64::consts::PI;

        let d1 = ((self.latitude - other.latitude) * PI / 360.0).sin().powi(2);
        let d2 = (other.latitude * PI / 180.0).cos()
            * (self.latitude * PI / 180.0).cos()
            * ((self.longitude - other.longitude) * PI / 360.0).sin().powi(2);

        2.0 * EARTH_RADIUS_KM * (d1 + d2).sqrt().asin()
    }

    /// Total CO2 cost (kg) of this city's attendees travelling to `other`.
    pub fn co2_to(&self, other: &City) -> f64 {
        let distance = self.distance_to(other);
        distance * self.attendees as f64 * calc_emission_rate(distance)
    }
}
