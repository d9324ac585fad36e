//! Command line interface for tripwise

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

use tripwise::api::AppState;
use tripwise::{
    CannedForecast, LocationIdentity, LocationSearch, TripPlanner, TripRequest, TripwiseConfig,
    WeatherCondition, WeatherObservation, telemetry, web,
};

#[derive(Parser)]
#[command(name = "tripwise")]
#[command(about = "Destination recommendations and weather-aware trip itineraries")]
#[command(version)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search countries, capitals and major cities
    Search {
        query: String,
    },
    /// Show the profile and recommendations for a destination
    Recommend {
        #[arg(long)]
        country: String,
        #[arg(long)]
        city: Option<String>,
    },
    /// Generate a day-by-day itinerary
    Plan {
        #[arg(long)]
        country: String,
        #[arg(long)]
        city: Option<String>,
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        start: String,
        /// End date (YYYY-MM-DD)
        #[arg(long)]
        end: String,
        /// Per-day conditions or forecast summaries, e.g. sunny,"light rain",cloudy
        #[arg(long, value_delimiter = ',', value_parser = parse_condition)]
        weather: Vec<WeatherCondition>,
        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run the HTTP API
    Serve {
        #[arg(short, long)]
        port: Option<u16>,
    },
}

fn parse_condition(value: &str) -> Result<WeatherCondition, std::convert::Infallible> {
    Ok(WeatherCondition::from_tag_or_summary(value))
}

fn identity(country: String, city: Option<String>) -> LocationIdentity {
    match city {
        Some(city) => LocationIdentity::city(city, country),
        None => LocationIdentity::country(country),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = TripwiseConfig::load_from_path(cli.config)?;
    telemetry::init(&config.logging, cli.verbose)?;

    let planner = TripPlanner::offline();

    match cli.command {
        Commands::Search { query } => {
            let results = LocationSearch::new(config.search).search(&query);
            if results.is_empty() {
                println!("No destinations match '{query}'");
            }
            for result in results {
                let detail = result
                    .country
                    .as_deref()
                    .or(result.capital.as_deref())
                    .unwrap_or_default();
                println!("{:<8} {} ({detail})", result.kind, result.name);
            }
        }
        Commands::Recommend { country, city } => {
            let destination = planner
                .recommend(Some(&identity(country, city)))
                .await
                .map_err(|e| anyhow::anyhow!(e.user_message()))?;
            let profile = &destination.profile;
            println!("{}", profile.display_name());
            println!("{}", profile.headline());
            println!("Region: {} ({})", profile.region, profile.subregion);
            let bundle = &destination.recommendations;
            println!("\nTop attractions: {}", bundle.attractions.join(", "));
            println!("Activities: {}", bundle.activities.join(", "));
            println!("Cuisine: {}", bundle.cuisine.join(", "));
        }
        Commands::Plan {
            country,
            city,
            start,
            end,
            weather,
            json,
        } => {
            let request = TripRequest::parse(Some(&start), Some(&end))
                .map_err(|e| anyhow::anyhow!(e.user_message()))?;
            let planner = if weather.is_empty() {
                planner
            } else {
                let observations = weather.into_iter().map(WeatherObservation::from).collect();
                planner.with_weather(Arc::new(CannedForecast::new(observations)))
            };
            let plan = planner
                .plan_trip(Some(&identity(country, city)), request)
                .await
                .map_err(|e| anyhow::anyhow!(e.user_message()))?;

            if json {
                let text = serde_json::to_string_pretty(&plan)
                    .context("Failed to serialize itinerary")?;
                println!("{text}");
            } else {
                println!(
                    "Your {}-night trip to {}\n",
                    plan.nights,
                    plan.destination.profile.display_name()
                );
                print!("{}", plan.itinerary);
            }
        }
        Commands::Serve { port } => {
            let port = port.unwrap_or(config.server.port);
            let state = AppState::new(planner, LocationSearch::new(config.search));
            web::run(&config.server.host, port, state).await?;
        }
    }

    Ok(())
}
