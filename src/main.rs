use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use spvheader::target::is_valid_identifier;
use spvheader::{pipeline, ConvertJob};

/// Converts spv files (or any binary file) to C char array literals
#[derive(Parser, Debug)]
// Unambiguous prefixes of long options are accepted (`--out`, `--va`)
#[command(
    name = "spvheader",
    author,
    version,
    about,
    long_about = None,
    infer_long_args = true
)]
struct Args {
    /// Path to input spv file
    input: PathBuf,

    /// Path to output C header file. If not given, the input file path followed
    /// by '.h' is used.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Variable name of the C array. If not given, the input file name with '.'
    /// replaced by '_' is used.
    #[arg(short, long)]
    var: Option<String>,
}

/// Exit status for either I/O failure
const FAILURE: u8 = 1;

fn run(args: Args) -> Result<()> {
    let derived = args.var.is_none();
    let job = ConvertJob::resolve(args.input, args.output, args.var);

    // Only a name derived from the file name gets flagged; `-v` is taken as given
    if derived && !is_valid_identifier(&job.identifier) {
        eprintln!(
            "warning: '{}' is not a valid C identifier, emitting it unchanged",
            job.identifier
        );
    }

    pipeline::convert(&job)?;
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // One line naming the offending path, on stdout
            println!("{}", err);
            ExitCode::from(FAILURE)
        }
    }
}
