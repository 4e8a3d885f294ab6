use clap::Parser;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[arg(short, long, default_value = "attendee_locations.csv")]
    input: String,

    #[arg(long, default_value = "Zurich", help = "Name of the host city; a roster member unless coordinates are given")]
    host: String,

    #[arg(long, help = "Country of an external host city")]
    host_country: Option<String>,

    #[arg(long, help = "Latitude of an external host city")]
    host_lat: Option<f64>,

    #[arg(long, help = "Longitude of an external host city")]
    host_lon: Option<f64>,

    #[arg(short = 'n', long, default_value_t = 10)]
    top: usize,

    #[arg(short, long, default_value_t = false)]
    save_chart: bool,

    #[arg(long, default_value_t = false)]
    export_csv: bool,

    #[arg(short, long, default_value = "results")]
    output_dir: String,
}

// Add getter methods for all fields
impl Args {
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn host_country(&self) -> Option<&str> {
        self.host_country.as_deref()
    }

    pub fn host_lat(&self) -> Option<f64> {
        self.host_lat
    }

    pub fn host_lon(&self) -> Option<f64> {
        self.host_lon
    }

    pub fn top(&self) -> usize {
        self.top
    }

    pub fn save_chart(&self) -> bool {
        self.save_chart
    }

    pub fn export_csv(&self) -> bool {
        self.export_csv
    }

    pub fn output_dir(&self) -> &str {
        &self.output_dir
    }
}
