use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

use crate::error::ShimError;

/// Extract plain text from a PDF and print the outcome as one JSON line.
#[derive(Debug, Parser)]
#[command(
    name = "extract-pdf-text",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Path to the PDF file, taken verbatim
    #[arg(value_name = "PDF_FILE_PATH", allow_hyphen_values = true)]
    pub pdf_file_path: PathBuf,
}

/// Parse the full argument list, program name included.
///
/// Exactly one argument must follow the program name. It is the path, even
/// when it looks like a flag (`-report.pdf`, `--help`, `--`).
pub fn parse<I, T>(args: I) -> Result<PathBuf, ShimError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::<OsString>::into);
    let program = args.next().unwrap_or_else(|| OsString::from("extract-pdf-text"));
    let rest: Vec<OsString> = args.collect();
    let [path] = <[OsString; 1]>::try_from(rest).map_err(|rest| {
        tracing::debug!(count = rest.len(), "wrong number of arguments");
        ShimError::Usage
    })?;

    // The separator keeps clap from reading the lone argument as an option.
    let argv = [program, OsString::from("--"), path];
    Cli::try_parse_from(argv)
        .map(|cli| cli.pdf_file_path)
        .map_err(|e| {
            tracing::debug!(kind = ?e.kind(), "rejected arguments");
            ShimError::Usage
        })
}
