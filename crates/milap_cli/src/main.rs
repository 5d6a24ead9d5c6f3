use clap::{Parser, Subcommand};
use milap::{MatchRequest, PersonDetails, chart_for, match_report, parse_birth_moment};
use milap_charts::{nakshatra_from_longitude, rashi_from_longitude};

#[derive(Parser)]
#[command(name = "milap", about = "Milap Gun Milan matching CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full eight-guna compatibility report as JSON
    Match {
        /// Boy's birth date (YYYY-MM-DD)
        #[arg(long)]
        boy_date: String,
        /// Boy's birth time (HH:MM, 24-hour)
        #[arg(long)]
        boy_time: String,
        /// Girl's birth date (YYYY-MM-DD)
        #[arg(long)]
        girl_date: String,
        /// Girl's birth time (HH:MM, 24-hour)
        #[arg(long)]
        girl_time: String,
        /// Observer latitude in degrees (north positive, default New Delhi)
        #[arg(long)]
        lat: Option<f64>,
        /// Observer longitude in degrees (east positive, default New Delhi)
        #[arg(long)]
        lon: Option<f64>,
    },
    /// Classified birth chart for one person
    Chart {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Birth time (HH:MM, 24-hour)
        #[arg(long)]
        time: String,
        /// Observer latitude in degrees (default New Delhi)
        #[arg(long)]
        lat: Option<f64>,
        /// Observer longitude in degrees (default New Delhi)
        #[arg(long)]
        lon: Option<f64>,
    },
    /// Julian Day for a civil date and time
    Jd {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Birth time (HH:MM, 24-hour)
        #[arg(long)]
        time: String,
    },
    /// Rashi from sidereal longitude
    Rashi {
        /// Sidereal ecliptic longitude in degrees
        lon: f64,
    },
    /// Nakshatra from sidereal longitude
    Nakshatra {
        /// Sidereal ecliptic longitude in degrees
        lon: f64,
    },
}

fn person(date: String, time: String) -> PersonDetails {
    PersonDetails {
        date_of_birth: date,
        time_of_birth: time,
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Match {
            boy_date,
            boy_time,
            girl_date,
            girl_time,
            lat,
            lon,
        } => {
            let request = MatchRequest {
                boy: person(boy_date, boy_time),
                girl: person(girl_date, girl_time),
                latitude: lat,
                longitude: lon,
            };
            match match_report(&request) {
                Ok(response) => match serde_json::to_string_pretty(&response) {
                    Ok(json) => println!("{json}"),
                    Err(e) => {
                        eprintln!("Failed to serialize report: {e}");
                        std::process::exit(1);
                    }
                },
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Chart { date, time, lat, lon } => {
            match chart_for(&person(date, time), lat, lon) {
                Ok(chart) => {
                    println!("Nakshatra: {}", chart.nakshatra.name());
                    println!(
                        "Rashi:     {} ({})",
                        chart.rashi.name(),
                        chart.rashi.english_name()
                    );
                    println!(
                        "Ascendant: {} ({})",
                        chart.ascendant.name(),
                        chart.ascendant.english_name()
                    );
                }
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Jd { date, time } => {
            match parse_birth_moment(&person(date, time)) {
                Ok(moment) => println!("{:.6}", moment.to_julian_day()),
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Rashi { lon } => {
            let rashi = rashi_from_longitude(lon);
            println!("{} ({})", rashi.name(), rashi.english_name());
        }

        Commands::Nakshatra { lon } => {
            let nakshatra = nakshatra_from_longitude(lon);
            println!(
                "{} (index {}, lord {})",
                nakshatra.name(),
                nakshatra.index(),
                nakshatra.lord().name()
            );
        }
    }
}
