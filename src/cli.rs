use crate::{config::Config, gateways};

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use osmgeo_core::{entities::*, usecases};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "osmgeo", version)]
#[command(about = "Look up places with OpenStreetMap Nominatim", long_about = None)]
struct Cli {
    #[arg(long, global = true, value_name = "FILE", help = "Configuration file (TOML)")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Geocode one or more queries")]
    Search {
        #[arg(required = true, help = "Free-text place queries")]
        queries: Vec<String>,

        #[command(flatten)]
        params: ParamArgs,

        #[arg(long, help = "Print the results as JSON")]
        json: bool,
    },

    #[command(about = "Print the request URL of a query")]
    Url {
        query: String,

        #[command(flatten)]
        params: ParamArgs,
    },
}

#[derive(Args)]
struct ParamArgs {
    #[arg(long, help = "Maximum number of results [default: 10]")]
    limit: Option<u32>,

    #[arg(
        long,
        value_name = "XMIN,YMIN,XMAX,YMAX",
        allow_hyphen_values = true,
        help = "Prefer results within this box (degrees)"
    )]
    bbox: Option<ViewBox>,

    #[arg(long, help = "Only return results within the bounding box")]
    bounded: bool,
}

impl From<ParamArgs> for GeocodingParams {
    fn from(from: ParamArgs) -> Self {
        let ParamArgs {
            limit,
            bbox,
            bounded,
        } = from;
        let params = Self {
            limit,
            bounded,
            ..Default::default()
        };
        match bbox {
            Some(bbox) => params.with_view_box(bbox),
            None => params,
        }
    }
}

#[derive(serde::Serialize)]
struct QueryResults<'a> {
    query: &'a str,
    places: &'a [GeocodedPlace],
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let cfg = Config::try_load_from_file_or_default(cli.config.as_ref())?;
    let gw = gateways::geocoding_gateway(&cfg.geocoding)?;

    match cli.command {
        Commands::Search {
            queries,
            params,
            json,
        } => {
            let params = GeocodingParams::from(params);
            for query in &queries {
                let places = usecases::geocode_places(&gw, query, &params)?;
                if json {
                    let results = QueryResults {
                        query,
                        places: &places,
                    };
                    println!("{}", serde_json::to_string_pretty(&results)?);
                } else {
                    print!("{}", format_places(query, &places));
                }
            }
            log::debug!("{} result list(s) cached", gw.cache().len());
        }
        Commands::Url { query, params } => {
            println!("{}", gw.search_url(&query, &params.into()));
        }
    }
    Ok(())
}

fn format_places(query: &str, places: &[GeocodedPlace]) -> String {
    if places.is_empty() {
        return format!("No places found for \"{query}\".\n");
    }
    let mut out = format!("Places for \"{query}\":\n");
    for (i, place) in places.iter().enumerate() {
        out.push_str(&format!(
            "{}. {}\n   {}\n   ({}, {})\n",
            i + 1,
            place.title,
            place.description,
            place.x,
            place.y
        ));
    }
    out
}
