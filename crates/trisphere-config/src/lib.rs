//! Configuration for the trisphere mesh generator.
//!
//! Settings persist to disk as RON, can be overridden from the command line
//! via clap, and support hot-reload detection.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    CONFIG_FILE_NAME, Config, DebugConfig, IndexWidth, MeshConfig, Shape, default_config_dir,
};
pub use error::ConfigError;
