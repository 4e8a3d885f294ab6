use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::analysis::chart::{host_chart_filename, BarChart};
use crate::config::constants::{KG_PER_TONNE, OTHER_COUNTRIES_LABEL};
use crate::models::city::City;

#[derive(Debug, Clone, PartialEq)]
pub enum CollectionError {
    Empty,
}

impl std::fmt::Display for CollectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CollectionError::Empty => write!(f, "The list of attendee cities is empty"),
        }
    }
}

impl std::error::Error for CollectionError {}

#[derive(Debug)]
pub enum PlotError {
    TooManyCountries { requested: usize, available: usize },
    IoError(std::io::Error),
}

impl From<std::io::Error> for PlotError {
    fn from(err: std::io::Error) -> Self {
        PlotError::IoError(err)
    }
}

impl std::fmt::Display for PlotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlotError::TooManyCountries { requested, available } => write!(
                f,
                "Cannot plot the top {} countries, the roster only covers {}",
                requested, available
            ),
            PlotError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for PlotError {}

/// A non-empty roster of attendee cities.
///
/// Roster order is preserved; it decides tie order in ranked output but
/// never affects aggregate sums. Every query below is a read-only
/// traversal that recomputes from the members on each call, and the host
/// city passed in does not have to be a member.
#[derive(Debug, Clone)]
pub struct CityCollection {
    cities: Vec<City>,
}

impl CityCollection {
    pub fn new(cities: Vec<City>) -> Result<Self, CollectionError> {
        if cities.is_empty() {
            return Err(CollectionError::Empty);
        }
        Ok(Self { cities })
    }

    pub fn get_cities(&self) -> &[City] {
        &self.cities
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Distinct countries across the roster, unordered.
    pub fn countries(&self) -> HashSet<String> {
        self.cities
            .iter()
            .map(|city| city.get_country().to_string())
            .collect()
    }

    pub fn total_attendees(&self) -> u32 {
        self.cities.iter().map(|city| city.get_attendees()).sum()
    }

    /// Total attendee-weighted distance travelled to `host`, in km.
    pub fn total_distance_travel_to(&self, host: &City) -> f64 {
        self.cities
            .iter()
            .map(|city| city.distance_to(host) * city.get_attendees() as f64)
            .sum()
    }

    /// Attendee-weighted travel distance to `host`, grouped by country.
    pub fn travel_by_country(&self, host: &City) -> HashMap<String, f64> {
        let mut by_country: HashMap<String, f64> = HashMap::new();
        for city in &self.cities {
            *by_country.entry(city.get_country().to_string()).or_insert(0.0) +=
                city.get_attendees() as f64 * city.distance_to(host);
        }
        by_country
    }

    /// CO2 cost (kg) of travel to `host`, grouped by country.
    pub fn co2_by_country(&self, host: &City) -> HashMap<String, f64> {
        let mut by_country: HashMap<String, f64> = HashMap::new();
        for city in &self.cities {
            *by_country.entry(city.get_country().to_string()).or_insert(0.0) +=
                city.co2_to(host);
        }
        by_country
    }

    /// Total CO2 cost (kg) of the whole roster travelling to `host`.
    pub fn total_co2(&self, host: &City) -> f64 {
        self.co2_by_country(host).values().sum()
    }

    /// Every member ranked as a candidate host for the whole roster,
    /// ascending by total emissions. The sort is stable, so cities with
    /// equal totals keep their roster order.
    pub fn sorted_by_emissions(&self) -> Vec<(String, f64)> {
        let mut ranking: Vec<(String, f64)> = self
            .cities
            .iter()
            .map(|city| (city.get_name().to_string(), self.total_co2(city)))
            .collect();
        ranking.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
        ranking
    }

    /// The host summary as display text.
    ///
    /// A member host is excluded from its own attendee count; an external
    /// host is not. The "different cities" figure is `len - 1` in both
    /// cases.
    pub fn summary_report(&self, host: &City) -> String {
        let tonnes = self.total_co2(host) / KG_PER_TONNE;
        let attendees = if self.cities.contains(host) {
            self.total_attendees() - host.get_attendees()
        } else {
            self.total_attendees()
        };

        let mut report = String::new();
        report.push_str(&format!(
            "Host city: {} ({})\n",
            host.get_name(),
            host.get_country()
        ));
        report.push_str(&format!("Total CO2: {:.0} tonnes\n", tonnes));
        report.push_str(&format!(
            "Total attendees travelling to {} from {} different cities: {}\n",
            host.get_name(),
            self.cities.len() - 1,
            attendees
        ));
        report
    }

    /// Print the host summary to stdout.
    pub fn summary(&self, host: &City) {
        print!("{}", self.summary_report(host));
    }

    /// Chart series for the `n` highest-emitting countries, in tonnes.
    ///
    /// Countries are sorted ascending by emissions with first-seen roster
    /// order as tiebreak, then read from the top. The remaining lower
    /// emitters are folded into one "All other countries" bucket.
    pub fn top_emitters_series(
        &self,
        host: &City,
        n: usize,
    ) -> Result<Vec<(String, f64)>, PlotError> {
        let available = self.countries().len();
        if n > available {
            return Err(PlotError::TooManyCountries { requested: n, available });
        }

        let totals = self.co2_by_country(host);
        let mut ordered: Vec<(String, f64)> = Vec::new();
        for city in &self.cities {
            if !ordered.iter().any(|(country, _)| country == city.get_country()) {
                ordered.push((
                    city.get_country().to_string(),
                    totals[city.get_country()],
                ));
            }
        }
        ordered.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

        let rest: f64 = ordered[..available - n].iter().map(|(_, kg)| kg).sum();
        let mut series: Vec<(String, f64)> = ordered[available - n..]
            .iter()
            .rev()
            .map(|(country, kg)| (country.clone(), kg / KG_PER_TONNE))
            .collect();
        series.push((OTHER_COUNTRIES_LABEL.to_string(), rest / KG_PER_TONNE));
        Ok(series)
    }

    /// Render the top-`n` emitting countries as a bar chart; persist it
    /// under the host's slug before displaying when `save` is set.
    pub fn plot_top_emitters(&self, host: &City, n: usize, save: bool) -> Result<(), PlotError> {
        let series = self.top_emitters_series(host, n)?;
        let title = format!("Total emissions from each country (Top {})", n);
        let chart = BarChart::default();
        if save {
            chart.save(&series, &title, Path::new(&host_chart_filename(host.get_name())))?;
        }
        chart.show(&series, &title);
        Ok(())
    }
}
