use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::{info, warn};

use fencer::config::FencerConfig;
use fencer::io;
use fencer::io::cli::Cli;
use fencer::io::output::{FencerOutput, probe_readings};
use fencer::io::svg_export::instance_to_svg;
use geofence_rs::io::geojson::instance_overlays;
use geofence_rs::io::import::import_instance;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            FencerConfig::default()
        }
        Some(config_file) => {
            let file = File::open(config_file)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };

    info!("Successfully parsed FencerConfig: {config:?}");

    let input_file_stem = args.input_file.file_stem().unwrap().to_str().unwrap();

    if !args.output_folder.exists() {
        fs::create_dir_all(&args.output_folder).unwrap_or_else(|_| {
            panic!("could not create output folder: {:?}", args.output_folder)
        });
    }

    let ext_instance = io::read_instance(args.input_file.as_path())?;
    let instance = import_instance(&ext_instance)?;

    info!(
        "[MAIN] imported instance {} with {} sites and {} probes",
        instance.name,
        instance.sites.len(),
        instance.probes.len()
    );

    let overlays = instance_overlays(&instance, config.n_ring_points)?;
    let readings = probe_readings(&instance);

    {
        let output = FencerOutput {
            instance: ext_instance,
            overlays,
            probe_readings: readings,
            config,
            generated_at: jiff::Timestamp::now().to_string(),
        };

        let report_path = args.output_folder.join(format!("report_{input_file_stem}.json"));

        io::write_json(&output, Path::new(&report_path))?;
    }

    {
        let svg_path = args.output_folder.join(format!("{input_file_stem}.svg"));
        let svg = instance_to_svg(&instance, &config)?;

        io::write_svg(&svg, Path::new(&svg_path))?;
    }

    Ok(())
}
