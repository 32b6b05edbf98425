// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Builds the resolution tiers and the catalog file of a Vitrine gallery.
//!
//! Expects `<input>/<category>/<image>` and writes
//! `<output>/<category>/<image>@{1,2,3,4}x.jpg` plus a JSON catalog that the
//! `vitrine` crate loads with `Catalog::from_json`.

mod pipeline;

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use crate::pipeline::{Pipeline, ThumbsError};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Folder holding one sub-folder per category.
    #[arg(long, default_value = "./public/images")]
    input: PathBuf,
    /// Folder receiving the resized tiers.
    #[arg(long, default_value = "./public/thumbs")]
    output: PathBuf,
    /// Where to write the catalog.
    #[arg(long, default_value = "./src/images.json")]
    catalog: PathBuf,
    /// Prefix of `src` entries in the catalog.
    #[arg(long, default_value = "./thumbs")]
    src_prefix: String,
    /// Longest side of the full-resolution tier, in pixels.
    #[arg(long, default_value_t = 1500)]
    max_size: u32,
}

fn run(cli: Cli) -> Result<(), ThumbsError> {
    let pipeline = Pipeline {
        input: cli.input,
        output: cli.output,
        src_prefix: cli.src_prefix,
        max_size: cli.max_size,
    };
    let catalog = pipeline.run()?;
    let json = catalog.to_json()?;
    if let Some(parent) = cli.catalog.parent() {
        fs::create_dir_all(parent).map_err(|source| ThumbsError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(&cli.catalog, json).map_err(|source| ThumbsError::Io {
        path: cli.catalog.clone(),
        source,
    })?;
    log::info!("catalog written to {}", cli.catalog.display());
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
