use std::error::Error;

use clap::Parser;
use tracing::debug;

use confcarbon::analysis::reporting;
use confcarbon::cli::cli::Args;
use confcarbon::data::attendees_loader;
use confcarbon::models::city::City;
use confcarbon::models::collection::CityCollection;
use confcarbon::utils::csv_export::CsvExporter;
use confcarbon::utils::logging;

fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let args = Args::parse();

    logging::init_logging();

    println!("Conference Travel Carbon Planner");

    let collection = load_roster(args.input());
    let host = resolve_host(&collection, &args)?;

    collection.summary(&host);
    reporting::print_country_breakdown(&collection, &host);

    let ranking = collection.sorted_by_emissions();
    reporting::print_emissions_ranking(&ranking);

    let top = args.top().min(collection.countries().len());
    if top < args.top() {
        debug!(requested = args.top(), plotted = top, "clamped chart size to country count");
    }
    collection.plot_top_emitters(&host, top, args.save_chart())?;

    if args.export_csv() {
        let exporter = CsvExporter::new(args.output_dir())?;
        exporter.export_ranking(&ranking)?;
        exporter.export_country_breakdown(&collection, &host)?;
        println!("CSV export completed to: {}", exporter.output_dir().display());
    }

    Ok(())
}

fn load_roster(path: &str) -> CityCollection {
    match attendees_loader::read_attendees_file(path) {
        Ok(collection) => collection,
        Err(e) => {
            eprintln!("Failed to load roster from {}: {}. Using fallback roster.", path, e);
            fallback_roster()
        }
    }
}

// Built-in roster used when no input file is available.
fn fallback_roster() -> CityCollection {
    let cities = vec![
        City::new("Zurich", "Switzerland", 52, 47.22, 8.33),
        City::new("San Francisco", "United States", 71, 37.77, -122.41),
        City::new("London", "United Kingdom", 15, 51.48, 0.0),
        City::new("Los Angeles", "United States", 298, 34.0, -118.24),
    ]
    .into_iter()
    .collect::<Result<Vec<_>, _>>()
    .expect("fallback roster is valid");

    CityCollection::new(cities).expect("fallback roster is non-empty")
}

/// Pick the host: a roster member by name, or an external city when
/// coordinates are supplied on the command line.
fn resolve_host(
    collection: &CityCollection,
    args: &Args,
) -> Result<City, Box<dyn Error + Send + Sync>> {
    if let Some(member) = collection
        .get_cities()
        .iter()
        .find(|city| city.get_name() == args.host())
    {
        return Ok(member.clone());
    }

    match (args.host_lat(), args.host_lon()) {
        (Some(lat), Some(lon)) => {
            let country = args.host_country().unwrap_or("Unknown");
            Ok(City::new(args.host(), country, 0, lat, lon)?)
        }
        _ => Err(format!(
            "Host city '{}' is not in the roster; pass --host-lat/--host-lon to use an external host",
            args.host()
        )
        .into()),
    }
}
