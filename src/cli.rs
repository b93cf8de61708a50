use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "interop", version, about = "Rust interop libraries, grouped by foreign language")]
pub struct Cli {
    /// Config file (TOML, YAML or JSON) layered over the user config
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory of library markdown files, overriding the configured one
    #[arg(long, global = true)]
    pub content: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
#[command(arg_required_else_help = true)]
pub enum Command {
    /// List every foreign language, sorted
    Languages,
    /// Print the navigation index: languages, directional sections and anchors
    Index,
    /// Print each library's primary link and badge
    Links,
    /// Cycle through shuffled "X in Y" highlights on the configured interval
    Rotate {
        /// Stop after this many ticks instead of waiting for Ctrl-C
        #[arg(short, long)]
        ticks: Option<u64>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use rstest::rstest;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[rstest]
    #[case(&["interop", "languages"])]
    #[case(&["interop", "index", "--content", "libs"])]
    #[case(&["interop", "--config", "interop.toml", "links"])]
    fn test_parses(#[case] args: &[&str]) {
        assert!(Cli::try_parse_from(args).is_ok());
    }

    #[test]
    fn test_rotate_ticks() {
        let cli = Cli::try_parse_from(["interop", "rotate", "--ticks", "3"]).unwrap();
        assert!(matches!(cli.command, Command::Rotate { ticks: Some(3) }));
    }
}
