use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use image_resize::imaging::Filter;
use image_resize::request::{RequestFields, ValidationError};
use image_resize::resize::ResizeError;
use image_resize::{config, output, request, resize};
use std::path::PathBuf;
use std::process::ExitCode;

const EXIT_CONFIG: u8 = 1;
const EXIT_OPEN: u8 = 3;
const EXIT_DIMENSIONS: u8 = 4;
const EXIT_SAVE: u8 = 5;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "image-resize")]
#[command(about = "Resize an image by width, height, or scale")]
#[command(long_about = "\
Resize an image by width, height, or scale

Give --scale alone, or --width and/or --height. With only one side the other
is derived from the source aspect ratio. With both sides the image is
stretched to fit and a warning is printed if the proportions change.

The result is saved as <name>__<width>x<height>.<ext> next to the source,
or in --output if given. The output format matches the source format.

Exit status:
  0  resized file saved
  1  config file could not be read or is invalid
  2  invalid combination of arguments
  3  source could not be opened or decoded
  4  resized image would have a zero-sized side
  5  resized image could not be saved

Run 'image-resize --print-config' for a documented config file.")]
#[command(version = version_string())]
struct Cli {
    /// Path to image file
    #[arg(required_unless_present = "print_config")]
    file: Option<PathBuf>,

    /// The width of the processed image
    #[arg(long, allow_negative_numbers = true)]
    width: Option<i64>,

    /// The height of the processed image
    #[arg(long, allow_negative_numbers = true)]
    height: Option<i64>,

    /// Image scale ratio
    #[arg(long, allow_negative_numbers = true)]
    scale: Option<f64>,

    /// Directory to save the resized image in (default: the source's directory)
    #[arg(long)]
    output: Option<PathBuf>,

    /// TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Largest aspect-ratio change accepted without a warning [default: 0.1]
    #[arg(long)]
    drift_tolerance: Option<f64>,

    /// Resampling filter [default: lanczos3]
    #[arg(long, value_enum)]
    filter: Option<Filter>,

    /// Show source and target sizes
    #[arg(short, long)]
    verbose: bool,

    /// Print a stock config file with all options documented
    #[arg(long)]
    print_config: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", config::stock_config_toml());
        return ExitCode::SUCCESS;
    }

    // Reject bad flag combinations before touching any file
    let fields = RequestFields {
        width: cli.width,
        height: cli.height,
        scale: cli.scale,
    };
    let request = match request::validate(&fields) {
        Ok(request) => request,
        Err(err) => usage_error(&err),
    };

    let Some(file) = cli.file.as_deref() else {
        Cli::command()
            .error(ErrorKind::MissingRequiredArgument, "an image file is required")
            .exit()
    };

    let config = match config::load_config(cli.config.as_deref())
        .and_then(|c| c.with_overrides(cli.drift_tolerance, cli.filter))
    {
        Ok(config) => config,
        Err(err) => {
            output::print_error(&err);
            return ExitCode::from(EXIT_CONFIG);
        }
    };

    let verbose = cli.verbose;
    match resize::resize(file, cli.output.as_deref(), &request, &config, |event| {
        output::print_event(&event, verbose)
    }) {
        Ok(outcome) => {
            output::print_success(&outcome.output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            output::print_error(&err);
            ExitCode::from(exit_code(&err))
        }
    }
}

/// Report a validation failure the way clap reports its own usage errors.
fn usage_error(err: &ValidationError) -> ! {
    let kind = match err {
        ValidationError::NoModeSpecified => ErrorKind::MissingRequiredArgument,
        ValidationError::ConflictingModes => ErrorKind::ArgumentConflict,
        ValidationError::NonPositiveValue | ValidationError::OutOfRange { .. } => {
            ErrorKind::ValueValidation
        }
    };
    Cli::command().error(kind, err).exit()
}

fn exit_code(err: &ResizeError) -> u8 {
    match err {
        ResizeError::Open(_) => EXIT_OPEN,
        ResizeError::Plan(_) => EXIT_DIMENSIONS,
        ResizeError::Save(_) => EXIT_SAVE,
    }
}
