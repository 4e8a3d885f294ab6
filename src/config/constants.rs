// Geographic Constants
pub const EARTH_RADIUS_KM: f64 = 6371.0;
pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;

// Emission Tiers
// Per-attendee per-km CO2 cost (kg), bracketed by trip distance.
pub const SHORT_HAUL_MAX_KM: f64 = 1000.0;   // Inclusive upper bound of the short tier
pub const MEDIUM_HAUL_MAX_KM: f64 = 8000.0;  // Inclusive upper bound of the medium tier
pub const SHORT_HAUL_RATE: f64 = 200.0;
pub const MEDIUM_HAUL_RATE: f64 = 250.0;
pub const LONG_HAUL_RATE: f64 = 300.0;

// Unit Conversions
pub const KG_PER_TONNE: f64 = 1000.0;

// Chart Constants
pub const CHART_BAR_WIDTH: usize = 48;       // Width of the widest bar in characters
pub const OTHER_COUNTRIES_LABEL: &str = "All other countries";
