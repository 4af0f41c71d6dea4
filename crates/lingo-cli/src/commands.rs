use std::path::Path;

use anyhow::{bail, Context};
use colored::Colorize;
use lingo_diff::{leaf_paths, node_paths, patch, same_kind, strict_value, tree_diff, DiffMode};
use lingo_sdk::LingoConfig;
use lingo_sync::{PathPrefixSkip, SourceLocale, SyncRequest, TargetLocale};
use lingo_translate::compare_leaf_paths;
use lingo_types::Document;
use serde_json::{json, Value};
use tracing::debug;

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let format = cli.format;
    match cli.command {
        Command::Slice(args) => cmd_slice(args, format),
        Command::Paths(args) => cmd_paths(args, format),
        Command::Diff(args) => cmd_diff(args, format),
        Command::Patch(args) => cmd_patch(args, format),
        Command::Plan(args) => cmd_plan(args, format),
        Command::Check(args) => cmd_check(args, format),
    }
}

fn read_document(path: &Path) -> anyhow::Result<Document> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    let document = serde_json::from_str(&text)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;
    debug!(path = %path.display(), "document loaded");
    Ok(document)
}

fn print_json(value: &impl serde::Serialize) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn keys(document: &Value) -> String {
    document
        .as_object()
        .map(|m| m.keys().cloned().collect::<Vec<_>>().join(", "))
        .unwrap_or_default()
}

fn cmd_slice(args: SliceArgs, format: OutputFormat) -> anyhow::Result<()> {
    let document = read_document(&args.file)?;
    let chunks = lingo_chunk::slice(&document, args.max_length, args.max_entries)?;
    if format == OutputFormat::Json {
        let docs: Vec<Document> = chunks.iter().map(|c| c.to_document()).collect();
        return print_json(&docs);
    }
    for chunk in &chunks {
        println!(
            "{} {} entries, {} chars",
            format!("chunk {}", chunk.index).yellow().bold(),
            chunk.len(),
            chunk.text_len()
        );
        println!("  {}", chunk.text);
    }
    println!("{} chunks", chunks.len().to_string().bold());
    Ok(())
}

fn cmd_paths(args: PathsArgs, format: OutputFormat) -> anyhow::Result<()> {
    let document = read_document(&args.file)?;
    let paths = if args.all {
        node_paths(&document)
    } else {
        leaf_paths(&document)
    };
    if format == OutputFormat::Json {
        return print_json(&paths);
    }
    for path in &paths {
        println!("{path}");
    }
    Ok(())
}

fn cmd_diff(args: DiffArgs, format: OutputFormat) -> anyhow::Result<()> {
    let source = read_document(&args.source)?;
    let target = read_document(&args.target)?;
    let mode = if args.intersection {
        DiffMode::Intersection
    } else {
        DiffMode::Diff
    };
    let result = if args.strict {
        tree_diff(&source, &target, mode, &strict_value)
    } else {
        tree_diff(&source, &target, mode, &same_kind)
    };
    match (result, format) {
        (Some(tree), OutputFormat::Json) => print_json(&tree),
        (None, OutputFormat::Json) => print_json(&Value::Null),
        (Some(tree), OutputFormat::Text) => {
            for path in leaf_paths(&tree) {
                let marker = match mode {
                    DiffMode::Diff => "~".red(),
                    DiffMode::Intersection => "=".green(),
                };
                println!("{marker} {path}");
            }
            Ok(())
        }
        (None, OutputFormat::Text) => {
            match mode {
                DiffMode::Diff => println!("{} No differences.", "✓".green().bold()),
                DiffMode::Intersection => println!("Nothing in common."),
            }
            Ok(())
        }
    }
}

fn cmd_patch(args: PatchArgs, format: OutputFormat) -> anyhow::Result<()> {
    let source = read_document(&args.source)?;
    let target = read_document(&args.target)?;
    let result = if args.strict {
        patch(&source, &target, &strict_value)
    } else {
        patch(&source, &target, &same_kind)
    };
    if format == OutputFormat::Json {
        return print_json(&result);
    }
    println!("{} {}", "kept:".green(), keys(&result.subset_document()));
    println!("{} {}", "missing:".yellow(), keys(&result.superset_document()));
    Ok(())
}

/// Configured skip prefixes followed by those given on the command line.
fn skip_prefixes(config: Option<&Path>, extra: &[String]) -> anyhow::Result<Vec<String>> {
    let mut prefixes = match config {
        Some(path) => LingoConfig::load(path)?.sync.skip,
        None => Vec::new(),
    };
    prefixes.extend(extra.iter().cloned());
    Ok(prefixes)
}

fn cmd_plan(args: PlanArgs, format: OutputFormat) -> anyhow::Result<()> {
    let mut source = SourceLocale::new(args.from, read_document(&args.source)?);
    if let Some(previous) = &args.previous {
        source = source.with_previous(read_document(previous)?);
    }
    let target = TargetLocale::new(args.to, read_document(&args.target)?);
    let mut request = SyncRequest::new(source, target);
    let prefixes = skip_prefixes(args.config.as_deref(), &args.skip)?;
    if !prefixes.is_empty() {
        request = request.with_skip(PathPrefixSkip::new(prefixes));
    }

    let plan = lingo_sync::plan(&request)?;
    if format == OutputFormat::Json {
        return print_json(&plan);
    }
    println!("{} {}", "keep:".green(), keys(&plan.subset));
    if plan.is_up_to_date() {
        println!("{} {}", "translate:".yellow(), "nothing, target is up to date".dimmed());
    } else {
        println!("{}", "translate:".yellow());
        for path in leaf_paths(&plan.to_translate) {
            println!("  {path}");
        }
    }
    if !plan.skipped.is_empty() {
        println!("{} {}", "skip:".blue(), plan.skipped.join(", "));
    }
    Ok(())
}

fn cmd_check(args: CheckArgs, format: OutputFormat) -> anyhow::Result<()> {
    let source = read_document(&args.source)?;
    let translated = read_document(&args.translated)?;
    let comparison = compare_leaf_paths(&source, &translated);
    if format == OutputFormat::Json {
        print_json(&json!({
            "valid": comparison.is_clean(),
            "missed": comparison.missed,
            "added": comparison.added,
        }))?;
    } else if comparison.is_clean() {
        println!("{} Translation matches the source structure", "✓".green().bold());
    } else {
        for path in &comparison.missed {
            println!("  {} {}", "missing:".red(), path);
        }
        for path in &comparison.added {
            println!("  {} {}", "unexpected:".yellow(), path);
        }
    }
    if !comparison.is_clean() {
        bail!(
            "{} does not match {}: {}",
            args.translated.display(),
            args.source.display(),
            comparison.describe()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    fn write_json(dir: &tempfile::TempDir, name: &str, value: Value) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, value.to_string()).unwrap();
        path
    }

    #[test]
    fn read_document_reports_bad_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let err = read_document(file.path()).unwrap_err();
        assert!(err.to_string().contains("is not valid JSON"));
    }

    #[test]
    fn check_fails_on_missing_paths() {
        let dir = tempfile::tempdir().unwrap();
        let source = write_json(&dir, "en.json", json!({"a": "A", "b": "B"}));
        let good = write_json(&dir, "fr.json", json!({"a": "Ah", "b": "Bé"}));
        let bad = write_json(&dir, "de.json", json!({"a": "Ah"}));

        assert!(cmd_check(
            CheckArgs { source: source.clone(), translated: good },
            OutputFormat::Text
        )
        .is_ok());
        let err = cmd_check(CheckArgs { source, translated: bad }, OutputFormat::Json).unwrap_err();
        assert!(err.to_string().contains("missed paths: b"));
    }

    #[test]
    fn skip_prefixes_combine_config_and_flags() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("lingo.toml");
        std::fs::write(&config, "[sync]\nskip = [\"brand\"]\n").unwrap();

        let prefixes = skip_prefixes(Some(&config), &["legal".to_string()]).unwrap();
        assert_eq!(prefixes, vec!["brand", "legal"]);
        assert!(skip_prefixes(None, &[]).unwrap().is_empty());
    }

    #[test]
    fn plan_runs_offline() {
        let dir = tempfile::tempdir().unwrap();
        let source = write_json(&dir, "en.json", json!({"a": "A", "brand": "Acme"}));
        let target = write_json(&dir, "fr.json", json!({"brand": "ACME"}));
        let args = PlanArgs {
            source,
            target,
            previous: None,
            skip: vec!["brand".into()],
            config: None,
            from: "en".into(),
            to: "fr".into(),
        };
        assert!(cmd_plan(args, OutputFormat::Json).is_ok());
    }

    #[test]
    fn keys_lists_top_level_entries() {
        assert_eq!(keys(&json!({"b": 1, "a": {"c": 2}})), "b, a");
        assert_eq!(keys(&json!([1])), "");
    }
}
