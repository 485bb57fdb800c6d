//! RATS thresholding driver
//!
//! Wires reader -> morphological gradient -> threshold filter ->
//! writer. The output image keeps the bit depth of the input.
//!
//! Exit codes: 0 on success, 1 for usage or I/O failures, 2 when the
//! threshold core rejects the inputs (region mismatch or degenerate
//! gradient).

use clap::Parser;
use rats_core::{Image2, Pixel};
use rats_io::{GrayImage, IoError};
use rats_morph::{MorphError, Sel, gradient_gray};
use rats_threshold::{RatsThresholdFilter, ThresholdError};
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

const EXIT_USAGE: u8 = 1;
const EXIT_CORE: u8 = 2;

/// Threshold a grayscale image with the robust automatic threshold
/// (RATS) method.
#[derive(Debug, Parser)]
#[command(name = "rats", version, about)]
struct Args {
    /// Input image (PGM or PNG grayscale)
    input: PathBuf,

    /// Output image; the extension selects the format
    output: PathBuf,

    /// Gradient weighting exponent
    #[arg(long, default_value_t = 1.0)]
    pow: f64,

    /// Radius of the ball structuring element for the gradient
    #[arg(long, default_value_t = 2)]
    radius: u32,

    /// Output value for pixels above the threshold (default: type max)
    #[arg(long)]
    inside: Option<u32>,

    /// Output value for pixels at or below the threshold (default: 0)
    #[arg(long)]
    outside: Option<u32>,
}

#[derive(Debug, Error)]
enum DriverError {
    #[error(transparent)]
    Io(#[from] IoError),

    #[error(transparent)]
    Morph(#[from] MorphError),

    #[error(transparent)]
    Threshold(#[from] ThresholdError),
}

impl DriverError {
    /// Distinct process exit status per error class: threshold-core
    /// failures exit 2, everything else 1.
    fn exit_code(&self) -> u8 {
        match self {
            DriverError::Threshold(_) => EXIT_CORE,
            _ => EXIT_USAGE,
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // --help/--version print to stdout and are not failures
            let code = if err.use_stderr() { EXIT_USAGE } else { 0 };
            let _ = err.print();
            return ExitCode::from(code);
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("rats: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(args: &Args) -> Result<(), DriverError> {
    let input = rats_io::read_image(&args.input)?;
    log::info!(
        "read {} ({}x{} pixels)",
        args.input.display(),
        input.extent()[0],
        input.extent()[1]
    );

    let output = match &input {
        GrayImage::U8(img) => GrayImage::U8(process(img, args)?),
        GrayImage::U16(img) => GrayImage::U16(process(img, args)?),
    };

    rats_io::write_image(&output, &args.output)?;
    log::info!("wrote {}", args.output.display());
    Ok(())
}

/// Gradient then threshold, generic over the stored pixel type.
fn process<T: Pixel>(image: &Image2<T>, args: &Args) -> Result<Image2<T>, DriverError> {
    let sel = Sel::disk(args.radius);
    let gradient = gradient_gray(image, &sel)?;

    let mut filter: RatsThresholdFilter<T, T> = RatsThresholdFilter::new();
    filter.set_pow(args.pow);
    if let Some(v) = args.inside {
        filter.set_inside_value(T::from_f64(v as f64));
    }
    if let Some(v) = args.outside {
        filter.set_outside_value(T::from_f64(v as f64));
    }

    let output = filter.run(image, &gradient)?;
    log::info!("computed threshold: {:?}", filter.threshold());
    Ok(output)
}
