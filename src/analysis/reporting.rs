use std::collections::HashMap;

use crate::config::constants::KG_PER_TONNE;
use crate::models::city::City;
use crate::models::collection::CityCollection;

/// Print every member ranked as candidate host, ascending by emissions.
pub fn print_emissions_ranking(ranking: &[(String, f64)]) {
    println!("\nCandidate hosts by total emissions");
    println!("----------------------------------------");
    for (name, co2_kg) in ranking {
        println!("  {}: {:.0} tonnes", name, co2_kg / KG_PER_TONNE);
    }
    println!("----------------------------------------");
}

/// Print the per-country travel and emission totals for a host.
pub fn print_country_breakdown(collection: &CityCollection, host: &City) {
    let travel = collection.travel_by_country(host);
    let co2 = collection.co2_by_country(host);

    println!("\nPer-country breakdown for {}", host.get_name());
    println!("----------------------------------------");
    for (country, attendee_km, co2_kg) in country_breakdown_rows(&travel, &co2) {
        println!(
            "  {}: {:.0} attendee-km, {:.0} tonnes CO2",
            country,
            attendee_km,
            co2_kg / KG_PER_TONNE
        );
    }
    println!("----------------------------------------");
}

/// Rows of the country breakdown, sorted by country name. Shared by the
/// terminal report and the CSV export.
pub fn country_breakdown_rows(
    travel: &HashMap<String, f64>,
    co2: &HashMap<String, f64>,
) -> Vec<(String, f64, f64)> {
    let mut rows: Vec<(String, f64, f64)> = co2
        .iter()
        .map(|(country, kg)| {
            (
                country.clone(),
                travel.get(country).copied().unwrap_or(0.0),
                *kg,
            )
        })
        .collect();
    rows.sort_by(|a, b| a.0.cmp(&b.0));
    rows
}
