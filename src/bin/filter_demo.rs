use raster_lab::config::{load_config, FilterToolConfig};
use raster_lab::image::io::{load_rgba, save_rgba, write_json_file};
use raster_lab::pointops::Histogram;
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
    let config: FilterToolConfig = load_config(Path::new(&config_path))?;

    let mut img = load_rgba(&config.input)?;
    for (i, op) in config.operations.iter().enumerate() {
        img = op
            .apply(&img)
            .map_err(|e| format!("operation {i} failed: {e}"))?;
    }

    save_rgba(&img, &config.output.image)?;
    if let Some(path) = &config.output.histogram_json {
        write_json_file(path, &Histogram::of(&img))?;
    }
    println!(
        "wrote {} ({} operation(s) applied)",
        config.output.image.display(),
        config.operations.len()
    );
    Ok(())
}

fn usage() -> String {
    "usage: filter_demo <config.json>".to_string()
}
