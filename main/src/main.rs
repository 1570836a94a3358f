use anyhow::{ensure, Context, Result};
use clap::Parser;
use colour::SampledSpectrum;
use numeric::Float;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use sample::Sample;

mod sample;

/// Resample a spectrum onto 60 bins over 400nm to 700nm and print its CIE XYZ
/// and linear RGB colour
#[derive(Debug, Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Spectral sample as `wavelength:value`, wavelength in nanometres
    #[clap(short, long = "sample", value_parser, conflicts_with = "constant")]
    samples: Vec<Sample>,

    /// Use a spectrum with this value at every wavelength
    #[clap(short, long, value_parser)]
    constant: Option<Float>,

    /// Sort the samples by wavelength instead of requiring increasing order
    #[clap(long, action)]
    sort: bool,

    /// Print the value of every resampled bin
    #[clap(short, long, action)]
    bins: bool,

    /// Increase logging, may be repeated
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let spectrum = build_spectrum(&args)?;

    if args.bins {
        for idx in 0..SampledSpectrum::<Float>::SAMPLE_COUNT {
            println!(
                "{:>6}nm {:>6}nm {}",
                SampledSpectrum::<Float>::wavelength(idx),
                SampledSpectrum::<Float>::wavelength(idx + 1),
                spectrum[idx]
            );
        }
    }

    let [x, y, z] = spectrum.to_xyz();
    println!("XYZ {} {} {}", x, y, z);

    let [r, g, b] = spectrum.to_rgb();
    println!("RGB {} {} {}", r, g, b);

    Ok(())
}

/// Log level from `RUST_LOG` if set, otherwise from the number of `-v` flags
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_spectrum(args: &Args) -> Result<SampledSpectrum<Float>> {
    if let Some(constant) = args.constant {
        ensure!(constant.is_finite(), "Constant value must be finite, found {}", constant);
        debug!(constant, "using constant spectrum");
        return Ok(SampledSpectrum::new(constant));
    }

    ensure!(
        !args.samples.is_empty(),
        "No spectrum given, use --sample or --constant"
    );

    let (lambda, value): (Vec<Float>, Vec<Float>) =
        args.samples.iter().map(|s| (s.lambda, s.value)).unzip();

    let spectrum = if args.sort {
        SampledSpectrum::from_unsorted_samples(&lambda, &value)
    } else {
        SampledSpectrum::from_sampled(&lambda, &value)
    }
    .context("Unable to resample the given samples")?;

    info!(samples = lambda.len(), "resampled input spectrum");

    Ok(spectrum)
}
