// SPDX-License-Identifier: GPL-3.0-only

use std::{path::PathBuf, process::ExitCode};

use anywho::{Error, anywho};
use clap::{Parser, Subcommand};
use pokecatalogue::{
    CatalogueApi,
    config::CatalogueConfig,
    core::{
        catalogue::{Catalogue, DetailView, SearchOutcome, search},
        favourites::{FavouritesStore, JsonFavourites},
    },
    utils::capitalize_string,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pokecatalogue", version, about = "Browse the Pokémon catalogue from PokéApi")]
struct Cli {
    /// RON config file, defaults to the user config directory
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the card grid
    Grid,
    /// Print the popular carousel, rotated by the given number of steps
    Carousel {
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        steps: i64,
    },
    /// Search by number or name and show the details
    Show { query: String },
    /// Add or remove a favourite
    Favourite { id: i64 },
    /// List favourites
    Favourites,
    /// Write the loaded catalogue to a RON file
    Export { path: PathBuf },
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), Error> {
    let config = CatalogueConfig::load(cli.config.as_deref())?;
    let api = CatalogueApi::from_config(&config);

    match cli.command {
        Command::Grid => {
            let favourites = open_favourites(&config)?;
            let catalogue = Catalogue::load(&api, &config).await?;
            for card in catalogue.cards(&favourites) {
                println!("{card}");
            }
        }
        Command::Carousel { steps } => {
            let mut catalogue = Catalogue::load(&api, &config).await?;
            catalogue.carousel.rotate(steps);

            let active = catalogue.carousel.active_index();
            for (index, record) in catalogue.carousel.items().iter().enumerate() {
                let marker = if index == active { ">" } else { " " };
                println!(
                    "{marker} {} (number: {}, ability: {}, weight: {}kg, height: {}m)",
                    capitalize_string(&record.name),
                    record.id,
                    record.ability,
                    record.weight,
                    record.height
                );
                if let Some(url) = &record.image_url {
                    println!("    {url}");
                }
            }
        }
        Command::Show { query } => {
            let favourites = open_favourites(&config)?;
            match search(&api, &query).await? {
                SearchOutcome::Found(record) => {
                    println!("{}", DetailView::new(&record, &favourites));
                }
                SearchOutcome::NotFound => println!("No Pokemon found with this name or ID."),
            }
        }
        Command::Favourite { id } => {
            let mut favourites = open_favourites(&config)?;
            if favourites.toggle_favourite(id)? {
                println!("{id} added to favourites");
            } else {
                println!("{id} removed from favourites");
            }
        }
        Command::Favourites => {
            let favourites = open_favourites(&config)?;
            for id in favourites.list_favourites() {
                println!("{id}");
            }
        }
        Command::Export { path } => {
            let catalogue = Catalogue::load(&api, &config).await?;
            let data = catalogue.to_ron()?;

            if let Some(parent) = path.parent() {
                tokio::fs::create_dir_all(parent).await?;
            }
            tokio::fs::write(&path, data).await?;
            println!("Catalogue written to: {path:?}");
        }
    }

    Ok(())
}

fn open_favourites(config: &CatalogueConfig) -> Result<JsonFavourites, Error> {
    let path = config
        .favourites_path()
        .ok_or_else(|| anywho!("No data directory available for favourites"))?;
    Ok(JsonFavourites::open(path))
}
