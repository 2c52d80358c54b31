use anyhow::{Context, Result};
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};

mod analyzer;
mod commands;
mod config;
mod error;
mod generator;
mod logger;
mod models;
mod names;

use commands::{Args, Commands};
use config::{PEOPLE_COUNT, Paths, TOP_COUNT};
use generator::Sampling;

fn generate(paths: &Paths, count: u32, seed: Option<u64>, sampling: Sampling) -> Result<()> {
    tracing::info!("Loading name lists");

    let first_names = names::get_first_names(&paths.first_names)
        .context("Could not load first names")?;
    let last_names =
        names::get_last_names(&paths.last_names).context("Could not load last names")?;

    let written = match seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            generator::write_people(
                &paths.people,
                &first_names,
                &last_names,
                count,
                sampling,
                &mut rng,
            )
        }
        None => {
            let mut rng = rand::rng();
            generator::write_people(
                &paths.people,
                &first_names,
                &last_names,
                count,
                sampling,
                &mut rng,
            )
        }
    }
    .context("Could not write people file")?;

    println!("A dataset with {} people generated.", written);

    Ok(())
}

fn analyze(paths: &Paths, top: usize) -> Result<()> {
    let start = std::time::Instant::now();

    let people = analyzer::read_people(&paths.people).context("Could not read people file")?;
    tracing::info!("Analyzing {} people", people.len());

    let report = analyzer::analyze(&people, top);
    print!("\n{}", report);

    tracing::info!("Analysis completed in {:?}", start.elapsed());

    Ok(())
}

fn main() -> Result<()> {
    logger::init();

    let cli = Args::parse();
    let paths = Paths::new(&cli.data_dir);
    match cli.command {
        Some(Commands::Generate {
            count,
            seed,
            exclude_last,
        }) => {
            let sampling = if exclude_last {
                Sampling::ExcludeLast
            } else {
                Sampling::default()
            };
            generate(&paths, count, seed, sampling)?
        }
        Some(Commands::Analyze { top }) => analyze(&paths, top)?,
        None => {
            generate(&paths, PEOPLE_COUNT, None, Sampling::default())?;
            analyze(&paths, TOP_COUNT)?;
        }
    }

    Ok(())
}
