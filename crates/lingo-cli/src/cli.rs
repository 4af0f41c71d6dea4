use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "lingo",
    about = "Lingo: chunk, compare, and plan translations of localization files",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Split a document into length-bounded chunks
    Slice(SliceArgs),
    /// List the dot-joined paths of a document
    Paths(PathsArgs),
    /// Show the part of a target that differs from a source
    Diff(DiffArgs),
    /// Partition source entries into kept and missing
    Patch(PatchArgs),
    /// Show what a sync would translate, keep, and skip
    Plan(PlanArgs),
    /// Check that a translation has the source's leaf paths
    Check(CheckArgs),
}

#[derive(Args)]
pub struct SliceArgs {
    pub file: PathBuf,
    #[arg(long)]
    pub max_length: usize,
    #[arg(long)]
    pub max_entries: Option<usize>,
}

#[derive(Args)]
pub struct PathsArgs {
    pub file: PathBuf,
    /// Include container nodes, not only leaves
    #[arg(long)]
    pub all: bool,
}

#[derive(Args)]
pub struct DiffArgs {
    pub source: PathBuf,
    pub target: PathBuf,
    /// Show the matching part instead
    #[arg(long)]
    pub intersection: bool,
    /// Compare leaf values, not only shapes
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args)]
pub struct PatchArgs {
    pub source: PathBuf,
    pub target: PathBuf,
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args)]
pub struct PlanArgs {
    pub source: PathBuf,
    pub target: PathBuf,
    /// Source snapshot from the previous sync
    #[arg(long)]
    pub previous: Option<PathBuf>,
    /// Path prefix to leave untouched (repeatable)
    #[arg(long)]
    pub skip: Vec<String>,
    #[arg(long)]
    pub config: Option<PathBuf>,
    #[arg(long, default_value = "source")]
    pub from: String,
    #[arg(long, default_value = "target")]
    pub to: String,
}

#[derive(Args)]
pub struct CheckArgs {
    pub source: PathBuf,
    pub translated: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_slice() {
        let cli = Cli::try_parse_from(["lingo", "slice", "en.json", "--max-length", "200"]).unwrap();
        if let Command::Slice(args) = cli.command {
            assert_eq!(args.file, PathBuf::from("en.json"));
            assert_eq!(args.max_length, 200);
            assert_eq!(args.max_entries, None);
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn slice_requires_length() {
        assert!(Cli::try_parse_from(["lingo", "slice", "en.json"]).is_err());
    }

    #[test]
    fn parse_plan_with_skips() {
        let cli = Cli::try_parse_from([
            "lingo", "plan", "en.json", "fr.json", "--skip", "brand", "--skip", "legal.terms",
            "--previous", "en.old.json",
        ])
        .unwrap();
        if let Command::Plan(args) = cli.command {
            assert_eq!(args.skip, vec!["brand", "legal.terms"]);
            assert_eq!(args.previous, Some(PathBuf::from("en.old.json")));
            assert_eq!(args.from, "source");
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_global_flags() {
        let cli = Cli::try_parse_from(["lingo", "check", "a.json", "b.json", "--format", "json", "-v"])
            .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(matches!(cli.command, Command::Check(_)));
    }

    #[test]
    fn parse_diff_flags() {
        let cli = Cli::try_parse_from(["lingo", "diff", "a.json", "b.json", "--intersection"]).unwrap();
        if let Command::Diff(args) = cli.command {
            assert!(args.intersection);
            assert!(!args.strict);
        } else {
            panic!("wrong command");
        }
    }
}
