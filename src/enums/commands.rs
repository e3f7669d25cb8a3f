use std::path::PathBuf;
use clap::Subcommand;
use crate::enums::output_format::OutputFormat;

#[derive(Subcommand)]
pub enum Commands {
    /// Write a sample configuration file
    Init,
    /// Load and check the configuration file
    Validate,
    /// Print the reviewable changes between two documents
    Diff {
        original: PathBuf,
        modified: PathBuf,
        #[clap(short, long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Apply a set of decisions without the browser and print the merged document
    Merge {
        original: PathBuf,
        modified: PathBuf,
        #[clap(long)]
        approve: Vec<String>,
        #[clap(long)]
        reject: Vec<String>,
        #[clap(short, long)]
        decisions: Option<PathBuf>,
        #[clap(long, conflicts_with = "reject_rest")]
        approve_all: bool,
        #[clap(long)]
        reject_rest: bool,
        #[clap(short, long)]
        output: Option<PathBuf>,
    },
    /// Review changes in the browser and write the merged document
    Review {
        original: PathBuf,
        modified: PathBuf,
        #[clap(short, long)]
        output: Option<PathBuf>,
        #[clap(short, long)]
        port: Option<u16>,
        #[clap(long)]
        no_browser: bool,
    },
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use crate::structs::cli::Cli;

    #[test]
    fn approve_all_and_reject_rest_are_exclusive() {
        let both = Cli::try_parse_from([
            "contract-review", "merge", "a.txt", "b.txt", "--approve-all", "--reject-rest",
        ]);
        assert!(both.is_err());

        let one = Cli::try_parse_from(["contract-review", "merge", "a.txt", "b.txt", "--reject-rest"]);
        assert!(one.is_ok());
    }
}
