use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "nullsafe")]
#[command(about = "Null-tolerant string and collection helpers from the command line")]
pub struct CliArgs {
    /// Path to a TOML settings file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Repeat a unit string, optionally delimited
    Generate {
        unit: String,
        count: usize,
        #[arg(short, long)]
        delimiter: Option<String>,
    },
    /// Print each value enclosed in double quotes
    Quote { values: Vec<String> },
    /// Upper-case the first character
    Capitalize { value: String },
    /// Lower-case the first character
    Uncapitalize { value: String },
    /// Remove leading characters
    StripHead { value: String, count: usize },
    /// Remove trailing characters
    StripTail { value: String, count: usize },
    /// Print the items in reverse order
    Reverse { items: Vec<String> },
    /// Print the first item
    Head { items: Vec<String> },
    /// Print the last item
    Tail { items: Vec<String> },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_generate() {
        let args = CliArgs::parse_from(["nullsafe", "generate", "ab", "3", "--delimiter", "-"]);
        match args.command {
            Command::Generate {
                unit,
                count,
                delimiter,
            } => {
                assert_eq!(unit, "ab");
                assert_eq!(count, 3);
                assert_eq!(delimiter.as_deref(), Some("-"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = CliArgs::parse_from(["nullsafe", "reverse", "a", "b", "--verbose"]);
        assert!(args.verbose);
        assert!(args.config.is_none());
    }
}
