//! Demo binary that builds the configured mesh and reports its statistics.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p trisphere-demo -- --shape disk --splits 4`.

mod report;

use clap::Parser;
use tracing::{error, info, warn};
use trisphere_config::{CliArgs, Config, default_config_dir};

use crate::report::build_report;

fn main() {
    let args = CliArgs::parse();

    let config_dir = args.config.clone().unwrap_or_else(default_config_dir);

    // Load or create config, then apply CLI overrides
    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config
        .debug
        .log_dir
        .clone()
        .unwrap_or_else(|| config_dir.join("logs"));
    trisphere_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    let report = match build_report(&config) {
        Ok(report) => report,
        Err(e) => {
            error!("Mesh generation failed: {e}");
            std::process::exit(1);
        }
    };

    info!(
        "{:?} mesh: faces_per_apex={}, splits={}, {} vertices, {} triangles",
        report.shape, report.faces_per_apex, report.splits, report.vertices, report.triangles
    );
    info!(
        "GPU buffers: {} vertex bytes, {} index bytes ({:?})",
        report.vertex_bytes, report.index_bytes, config.mesh.index_width
    );

    if let Some(topology) = report.topology {
        info!(
            "Topology: euler={}, boundary_edges={}, watertight={}, winding_ok={}",
            topology.euler_characteristic,
            topology.boundary_edges,
            topology.watertight,
            topology.winding_ok
        );
        if !topology.winding_ok {
            warn!("Mesh contains triangles wound against the surface normal");
        }
    }
}
