use std::ffi::OsString;

use clap::{error::ErrorKind, CommandFactory, Parser};

use crate::settings::DEFAULT_TOKEN_LENGTH;

#[derive(Debug)]
pub enum Invocation {
    Generate(Args),
    /// Rendered help, shown when no arguments are given.
    Usage(String),
}

/// Create unique files with unique contents using random numbers.
#[derive(Debug, Parser)]
#[command(
    name = "uniquefilegen",
    version,
    arg_required_else_help = true,
    after_help = "Examples:\n  uniquefilegen 10                    Creates 10 files with the default settings\n  uniquefilegen 1000 -p TEST- -e txt  Creates 1,000 files named like \"TEST-a1B2c3d4e5.txt\""
)]
pub struct Args {
    /// Number of files to create
    #[arg(allow_negative_numbers = true)]
    pub file_count: Option<i64>,

    /// File name prefix. If the last character is alphanumeric, a space is added after it
    #[arg(short, long)]
    pub prefix: Option<String>,

    /// File extension, with no leading period
    #[arg(short, long)]
    pub extension: Option<String>,

    /// Output subfolder. Multiple words are joined with spaces
    #[arg(short, long, num_args = 1..)]
    pub output: Vec<String>,

    /// Size of each file in bytes, filled with random alphanumeric characters
    #[arg(short, long)]
    pub size: Option<u64>,

    /// Length of the random token in each file name
    #[arg(long, default_value_t = DEFAULT_TOKEN_LENGTH)]
    pub token_length: usize,
}

impl Args {
    /// Like `try_parse_from`, but an empty command line is a request for
    /// usage rather than an error.
    pub fn invocation_from<I, T>(argv: I) -> Result<Invocation, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Self::try_parse_from(argv) {
            Ok(args) => Ok(Invocation::Generate(args)),
            Err(err) if err.kind() == ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                Ok(Invocation::Usage(Self::command().render_help().to_string()))
            }
            Err(err) => Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn parses_all_flags() {
        let args = Args::try_parse_from([
            "uniquefilegen",
            "5",
            "-p",
            "TEST-",
            "-e",
            "txt",
            "-s",
            "20",
            "-o",
            "my",
            "files",
        ])
        .unwrap();
        assert_eq!(args.file_count, Some(5));
        assert_eq!(args.prefix.as_deref(), Some("TEST-"));
        assert_eq!(args.extension.as_deref(), Some("txt"));
        assert_eq!(args.size, Some(20));
        assert_eq!(args.output, vec!["my", "files"]);
        assert_eq!(args.token_length, DEFAULT_TOKEN_LENGTH);
    }

    #[test]
    fn negative_count_reaches_validation() {
        let args = Args::try_parse_from(["uniquefilegen", "-3"]).unwrap();
        assert_eq!(args.file_count, Some(-3));
    }

    #[test]
    fn non_numeric_count_is_rejected() {
        let err = Args::try_parse_from(["uniquefilegen", "ten"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn no_arguments_is_usage() {
        match Args::invocation_from(["uniquefilegen"]).unwrap() {
            Invocation::Usage(usage) => {
                assert!(usage.contains("Usage: uniquefilegen"), "{usage}");
                assert!(usage.contains("--prefix"), "{usage}");
            }
            Invocation::Generate(args) => panic!("parsed {args:?}"),
        }
    }

    #[test]
    fn count_is_a_generate_invocation() {
        match Args::invocation_from(["uniquefilegen", "4"]).unwrap() {
            Invocation::Generate(args) => assert_eq!(args.file_count, Some(4)),
            Invocation::Usage(usage) => panic!("unexpected usage: {usage}"),
        }
    }

    #[test]
    fn other_parse_errors_pass_through() {
        let err = Args::invocation_from(["uniquefilegen", "ten"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }
}
