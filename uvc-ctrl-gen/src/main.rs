//! # uvc-ctrl-gen
//!
//! Prints the UVC control accessors to stdout:
//!
//! ```text
//! uvc-ctrl-gen definitions > ctrl_def.rs
//! uvc-ctrl-gen declarations > ctrl_decl.rs
//! ```

use std::io::{self, Write};
use std::process::ExitCode;

use clap::{ArgAction, Parser, ValueEnum};
use log::error;

use uvc_ctrl_gen::{generate, GeneratorConfig, Mode};

mod logger;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    /// Blanket implementation with method bodies, preceded by imports and request type constants
    #[value(alias = "def")]
    Definitions,
    /// The accessor trait, signatures only
    #[value(alias = "decl")]
    Declarations,
}

impl From<ModeArg> for Mode {
    fn from(value: ModeArg) -> Self {
        match value {
            ModeArg::Definitions => Mode::Definitions,
            ModeArg::Declarations => Mode::Declarations,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "uvc-ctrl-gen",
    version,
    about = "Generate typed accessors for fixed-layout UVC controls"
)]
struct Cli {
    #[arg(value_enum)]
    mode: ModeArg,
    #[arg(
        long = "runtime-path",
        value_name = "PATH",
        default_value = "crate",
        long_help = "Path of the uvc-ctrl runtime crate as seen from the generated file."
    )]
    runtime_path: String,
    #[arg(long = "trait-name", value_name = "NAME", default_value = "UvcControls")]
    trait_name: String,
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init_logger(cli.verbose);

    let config = GeneratorConfig {
        runtime_path: cli.runtime_path,
        trait_name: cli.trait_name,
    };

    let source = match generate(cli.mode.into(), &config) {
        Ok(source) => source,
        Err(err) => {
            error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = io::stdout().lock();
    if let Err(err) = stdout.write_all(source.as_bytes()).and_then(|_| stdout.flush()) {
        error!("failed to write output: {err}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
