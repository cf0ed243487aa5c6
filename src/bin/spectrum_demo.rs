use raster_lab::config::{load_config, SpectrumToolConfig};
use raster_lab::frequency::magnitude_spectrum_with_stats;
use raster_lab::image::io::{load_rgba, save_rgba, write_json_file};
use std::env;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config: SpectrumToolConfig = load_config(Path::new(&config_path))?;

    let img = load_rgba(&config.input)?;
    let (spectrum, stats) = magnitude_spectrum_with_stats(&img);

    save_rgba(&spectrum, &config.output.image)?;
    if let Some(path) = &config.output.stats_json {
        write_json_file(path, &stats)?;
    }
    println!(
        "wrote {} (padded {}x{}, max log-magnitude {:.4})",
        config.output.image.display(),
        stats.padded_width,
        stats.padded_height,
        stats.max_log_magnitude
    );
    Ok(())
}

fn usage() -> String {
    "usage: spectrum_demo <config.json>".to_string()
}
