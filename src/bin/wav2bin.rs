//! wav2bin - convert a WAV file to a raw little-endian i16 array

use anyhow::Context;
use clap::Parser;
use media2bin::{init_logging, AudioArgs, Config};

fn main() -> anyhow::Result<()> {
    let args = AudioArgs::parse();
    let config = Config::from_audio_args(&args)?;
    init_logging(config.verbose);

    if let Some(path) = &args.save_config {
        config.save_to_file(path)
            .with_context(|| format!("failed to save config to {}", path.display()))?;
    }

    let report = media2bin::audio::convert_wav(&args.input, &config.audio)
        .with_context(|| format!("failed to convert {}", args.input.display()))?;

    println!("Generated {}", report.output_path.display());
    if config.verbose {
        println!(
            "Samples: {} ({} ch, {} Hz), {} bytes",
            report.sample_count, report.channels, report.sample_rate, report.bytes_written
        );
    }
    Ok(())
}
