mod cli;

use crate::cli::{Command, GeneratorArg, CLI};
use anyhow::{bail, Context};
use clap::Parser;
use shortly_generator::{Generator, RandomGenerator, SeqGenerator};
use shortly_storage::FileStorage;
use shortly_store::{MappingStore, StoreError, StoreSettings};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let config = CLI::parse();

    shortly_telemetry::init(config.log_format.into())?;

    info!(
        data_dir = %config.data_dir.display(),
        generator = %config.generator,
        on_corrupt = %config.on_corrupt,
        "starting shortly"
    );

    let storage = FileStorage::open(&config.data_dir)
        .with_context(|| format!("cannot open data directory {}", config.data_dir.display()))?;
    let settings = StoreSettings::builder()
        .corrupt_data_policy(config.on_corrupt.into())
        .build();

    match config.generator {
        GeneratorArg::Random => {
            let mut store = MappingStore::with_settings(storage, RandomGenerator::new(), settings);
            load(&mut store)?;
            run(store, config.command)
        }
        GeneratorArg::Seq => {
            let mut store = MappingStore::with_settings(storage, SeqGenerator::new(), settings);
            let saved = load(&mut store)?;
            // resume after the saved aliases instead of reissuing 000000
            store.generator().advance_to(saved as u64);
            run(store, config.command)
        }
    }
}

/// Loads the saved aliases and returns how many there are.
fn load<G: Generator>(store: &mut MappingStore<FileStorage, G>) -> anyhow::Result<usize> {
    let collection = store.load().context("cannot load saved aliases")?;
    Ok(collection.len())
}

fn run<G: Generator>(
    mut store: MappingStore<FileStorage, G>,
    command: Command,
) -> anyhow::Result<()> {
    match command {
        Command::Add { url } => match store.add(&url) {
            Ok(record) => println!("{}", record.alias()),
            Err(StoreError::Persist { record, source }) => {
                // still show the alias; it lives in memory for this run only
                println!("{}", record.alias());
                bail!("alias could not be saved: {source}");
            }
            Err(e) => bail!(e),
        },
        Command::List => {
            let collection = store.current_collection()?;
            if collection.is_empty() {
                println!("No URLs shortened yet.");
            }
            for record in collection {
                println!("{}  {}", record.alias(), record.display_url());
            }
        }
        Command::Validate { url } => {
            let url = store.validate(&url)?;
            println!("{url}");
        }
    }

    Ok(())
}
