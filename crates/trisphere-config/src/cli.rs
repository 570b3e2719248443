//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::{Config, IndexWidth, Shape};

/// trisphere command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "trisphere", about = "Subdivided sphere and disc mesh generator")]
pub struct CliArgs {
    /// Surface to generate.
    #[arg(long, value_enum)]
    pub shape: Option<Shape>,

    /// Subdivision depth.
    #[arg(long)]
    pub splits: Option<u32>,

    /// Face fans around each apex.
    #[arg(long)]
    pub faces: Option<usize>,

    /// Index buffer element type.
    #[arg(long, value_enum)]
    pub index_width: Option<IndexWidth>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(shape) = args.shape {
            self.mesh.shape = shape;
        }
        if let Some(splits) = args.splits {
            self.mesh.splits = splits;
        }
        if let Some(faces) = args.faces {
            self.mesh.faces_per_apex = Some(faces);
        }
        if let Some(width) = args.index_width {
            self.mesh.index_width = width;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
