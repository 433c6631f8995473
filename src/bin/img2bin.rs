//! img2bin - convert every image in a directory to a raw RGBA array

use clap::Parser;
use std::process;
use media2bin::{init_logging, Config, ImageArgs, Result};

fn main() {
    let args = ImageArgs::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: ImageArgs) -> Result<()> {
    let config = Config::from_image_args(&args)?;
    init_logging(config.verbose);

    if let Some(path) = &args.save_config {
        config.save_to_file(path)?;
        log::info!("Saved config to {}", path.display());
    }

    if config.verbose {
        println!("{}", media2bin::get_library_info());
    }

    let summary = media2bin::image::convert_directory(&args.directory, &config.image)?;
    log::debug!("{} converted, {} failed", summary.processed(), summary.failed());
    Ok(())
}
