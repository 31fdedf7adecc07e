use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::{info, warn};

use cloudgen::config::CloudGenConfig;
use cloudgen::generate::{GeneratedCloud, generate_all};
use cloudgen::io::cli::Cli;
use cloudgen::{EPOCH, io};
use tagcloud::io::svg::layout_to_svg;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let mut config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            CloudGenConfig::default()
        }
        Some(config_file) => io::read_config(&config_file)?,
    };
    if let Some(seed) = args.seed {
        config.prng_seed = Some(seed);
    }

    info!("[MAIN] Successfully parsed CloudGenConfig: {config:?}");

    if !args.output_folder.exists() {
        fs::create_dir_all(&args.output_folder).with_context(|| {
            format!(
                "could not create output folder: {}",
                args.output_folder.display()
            )
        })?;
    }

    let clouds = generate_all(&config)?;
    for cloud in &clouds {
        write_cloud(cloud, &config, &args.output_folder)?;
    }

    info!(
        "[MAIN] {} clouds generated in {}ms",
        clouds.len(),
        EPOCH.elapsed().as_millis()
    );
    Ok(())
}

fn write_cloud(cloud: &GeneratedCloud, config: &CloudGenConfig, output_folder: &Path) -> Result<()> {
    let name = &cloud.spec.name;

    let json_path = output_folder.join(format!("{name}.json"));
    io::write_json(&cloud.to_output(config), &json_path)?;

    if cloud.snapshot.is_empty() {
        warn!("[MAIN] cloud {name} is empty, skipping svg");
        return Ok(());
    }
    let svg = layout_to_svg(&cloud.snapshot, config.svg_draw_options)?;
    io::write_svg(&svg, &output_folder.join(format!("{name}.svg")))
}
