mod converter;
mod error;
mod scanner;
mod util;

use anyhow::Result;
use clap::Parser;
use converter::Converter;
use error::Failure;
use std::ffi::OsString;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "hexring",
    about = "Pack decimal integers into a 16-bit ring buffer and print it as hex",
    version = "0.1",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// Input files, read in order. Each holds whitespace-separated decimal integers.
    files: Vec<PathBuf>,
}

/// Every argument is a path, so option parsing ends before the first one.
/// Once past the leading `--`, clap keeps later `--`, `-h` etc. as values.
fn path_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    let mut out: Vec<OsString> = args.next().into_iter().collect();
    out.push("--".into());
    out.extend(args);
    out
}

fn main() -> ExitCode {
    let cli = Cli::parse_from(path_args(std::env::args_os()));

    // Status is reported through the exit code alone.
    match run(&cli) {
        Ok(())   => ExitCode::SUCCESS,
        Err(err) => ExitCode::from(exit_status(&err)),
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut converter = Converter::new();
    converter.ingest(&cli.files)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    converter.emit(&mut out)
}

/// Anything that isn't a tagged failure can only have come from stdout.
fn exit_status(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<Failure>()
        .map_or(Failure::Write.exit_code(), Failure::exit_code)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn files(args: &[&str]) -> Vec<PathBuf> {
        Cli::try_parse_from(path_args(args.iter().copied())).unwrap().files
    }

    #[test]
    fn parses_positional_files() {
        assert_eq!(
            files(&["hexring", "a.txt", "-weird", "b.txt"]),
            vec![PathBuf::from("a.txt"), PathBuf::from("-weird"), PathBuf::from("b.txt")]
        );
    }

    #[test]
    fn flag_lookalikes_are_paths() {
        assert_eq!(
            files(&["hexring", "-h", "--", "--version", "-V", "--help"]),
            vec![
                PathBuf::from("-h"),
                PathBuf::from("--"),
                PathBuf::from("--version"),
                PathBuf::from("-V"),
                PathBuf::from("--help"),
            ]
        );
        assert_eq!(files(&["hexring", "--"]), vec![PathBuf::from("--")]);
    }

    #[test]
    fn no_files_is_valid() {
        assert!(files(&["hexring"]).is_empty());
    }

    #[test]
    fn untagged_errors_map_to_write_status() {
        assert_eq!(exit_status(&anyhow::anyhow!("boom")), 3);
        let err = anyhow::Error::msg("x").context(Failure::Close("f".into()));
        assert_eq!(exit_status(&err), 2);
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
