//! Command-line interface for logicmedic.

use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;
use walkdir::WalkDir;

use crate::analysis::{get_analyzer, get_analyzer_for_extension, registered_languages};
use crate::config::{self, Config, FORMATS};
use crate::detect::Runner;
use crate::prompt;
use crate::report::{self, Report};

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILED: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// Path argument meaning standard input.
const STDIN: &str = "-";

/// Coding mentor - review Python and Java snippets for common beginner mistakes.
///
/// logicmedic reports syntax errors, out-of-range indexing, undefined
/// variables and missing semicolons or braces, then suggests good practices
/// (functions, loops, conditionals, debug output) with example snippets.
#[derive(Parser)]
#[command(name = "logicmedic")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log level filter (e.g. "debug"); falls back to RUST_LOG, then "warn"
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Review source files, directories or stdin
    #[command(visible_alias = "review")]
    Analyze(AnalyzeArgs),
    /// List supported languages
    Languages,
    /// Print the mentor prompt for a generative assistant
    Prompt(PromptArgs),
}

/// Arguments for the analyze command.
#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Files or directories to review ("-" reads stdin)
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Language of the code (default: inferred from extension)
    #[arg(short, long)]
    pub language: Option<String>,

    /// Output format: pretty, text, or json
    #[arg(short, long)]
    pub format: Option<String>,

    /// Path to config YAML file (default: auto-discover)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Arguments for the prompt command.
#[derive(Parser)]
pub struct PromptArgs {
    /// File to embed in the prompt ("-" reads stdin)
    pub path: PathBuf,
}

/// One piece of code queued for review.
struct Submission {
    label: String,
    language: String,
    source: String,
}

/// Collect reviewable files under a directory.
fn collect_files(root: &Path, config: &Config) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            let name = e.file_name().to_string_lossy();
            // Skip hidden directories and virtualenv/build output
            if e.depth() > 0
                && e.file_type().is_dir()
                && (name.starts_with('.')
                    || name == "__pycache__"
                    || name == "venv"
                    || name == "target"
                    || name == "build")
            {
                return false;
            }
            true
        })
    {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if config.is_path_excluded(path) {
            continue;
        }
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if get_analyzer_for_extension(ext).is_some() {
            files.push(path.to_path_buf());
        }
    }

    Ok(files)
}

fn read_stdin() -> anyhow::Result<String> {
    let mut source = String::new();
    std::io::stdin().read_to_string(&mut source)?;
    Ok(source)
}

/// Pick the language for a file: explicit flag, then extension, then config.
fn resolve_language(path: Option<&Path>, explicit: Option<&str>, config: &Config) -> Option<String> {
    if let Some(lang) = explicit {
        return Some(lang.to_string());
    }
    let from_ext = path
        .and_then(|p| p.extension())
        .and_then(|e| e.to_str())
        .and_then(get_analyzer_for_extension)
        .map(|a| a.language_id().to_string());
    from_ext.or_else(|| config.default_language.clone())
}

/// Turn path arguments into submissions.
fn gather(args: &AnalyzeArgs, config: &Config) -> anyhow::Result<Vec<Submission>> {
    let mut submissions = Vec::new();
    let explicit = args.language.as_deref();

    for path in &args.paths {
        if path.as_os_str() == STDIN {
            let language = resolve_language(None, explicit, config).ok_or_else(|| {
                anyhow::anyhow!("cannot infer the language of stdin, pass --language")
            })?;
            submissions.push(Submission {
                label: STDIN.to_string(),
                language,
                source: read_stdin()?,
            });
            continue;
        }

        let metadata = std::fs::metadata(path)
            .map_err(|e| anyhow::anyhow!("cannot access path {:?}: {}", path, e))?;

        let files = if metadata.is_dir() {
            collect_files(path, config)?
        } else {
            vec![path.clone()]
        };

        for file in files {
            let language = resolve_language(Some(&file), explicit, config).ok_or_else(|| {
                anyhow::anyhow!(
                    "cannot infer the language of {}, pass --language",
                    file.display()
                )
            })?;
            let source = std::fs::read_to_string(&file)
                .map_err(|e| anyhow::anyhow!("cannot read {}: {}", file.display(), e))?;
            submissions.push(Submission {
                label: file.to_string_lossy().to_string(),
                language,
                source,
            });
        }
    }

    Ok(submissions)
}

/// Review submissions in parallel, keeping input order.
fn review_all(runner: &Runner, submissions: &[Submission], show_progress: bool) -> anyhow::Result<Vec<(String, Report)>> {
    let spinner = if show_progress {
        let pb = ProgressBar::new_spinner();
        pb.set_style(ProgressStyle::default_spinner().template("{spinner} {msg} ({pos} done)")?);
        pb.set_message("Analyzing your code...");
        pb.enable_steady_tick(Duration::from_millis(100));
        Some(pb)
    } else {
        None
    };

    let reports = submissions
        .par_iter()
        .map(|s| {
            let report = runner.run(&s.source, &s.language);
            if let Some(pb) = &spinner {
                pb.inc(1);
            }
            (s.label.clone(), report)
        })
        .collect();

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }
    Ok(reports)
}

/// Run the analyze command.
pub fn run_analyze(args: &AnalyzeArgs) -> anyhow::Result<i32> {
    let config = match config::load(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: invalid config: {}", e);
            return Ok(EXIT_ERROR);
        }
    };

    let format = args.format.as_deref().unwrap_or(config.get_format());
    if !FORMATS.contains(&format) {
        eprintln!(
            "Error: invalid format {:?}, must be one of: {}",
            format,
            FORMATS.join(", ")
        );
        return Ok(EXIT_ERROR);
    }

    if let Some(lang) = &args.language {
        if get_analyzer(lang).is_none() {
            eprintln!("Error: unsupported language {:?}", lang);
            eprintln!("Run 'logicmedic languages' to see supported languages");
            return Ok(EXIT_ERROR);
        }
    }

    let submissions = match gather(args, &config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(EXIT_ERROR);
        }
    };

    let (blank, submissions): (Vec<_>, Vec<_>) = submissions
        .into_iter()
        .partition(|s| s.source.trim().is_empty());
    for s in &blank {
        eprintln!("Warning: {}: please enter some code", s.label);
    }

    if submissions.is_empty() {
        eprintln!("Warning: no code to analyze");
        return Ok(EXIT_SUCCESS);
    }

    tracing::info!(count = submissions.len(), format, "reviewing submissions");

    let runner = Runner::with_options(config.analysis_options());
    let show_progress = format == "pretty" && submissions.len() > 1;
    let reports = review_all(&runner, &submissions, show_progress)?;

    match format {
        "json" => report::write_json(&reports)?,
        "text" => report::write_text(&reports),
        _ => report::write_pretty(&reports),
    }

    if reports.iter().any(|(_, r)| r.has_errors()) {
        Ok(EXIT_FAILED)
    } else {
        Ok(EXIT_SUCCESS)
    }
}

/// Run the languages command.
pub fn run_languages() -> anyhow::Result<i32> {
    println!("Supported languages:");
    println!();

    for analyzer in registered_languages() {
        let exts: Vec<String> = analyzer
            .file_extensions()
            .iter()
            .map(|e| format!(".{}", e))
            .collect();
        println!(
            "  {:<10} {:<8} {:<12} {}",
            analyzer.language_id(),
            analyzer.display_name(),
            analyzer.family().as_str(),
            exts.join(" ")
        );
    }

    println!();
    println!("Usage:");
    println!("  logicmedic analyze <file> --language <id>");

    Ok(EXIT_SUCCESS)
}

/// Run the prompt command.
pub fn run_prompt(args: &PromptArgs) -> anyhow::Result<i32> {
    let code = if args.path.as_os_str() == STDIN {
        read_stdin()?
    } else {
        match std::fs::read_to_string(&args.path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error: cannot read {}: {}", args.path.display(), e);
                return Ok(EXIT_ERROR);
            }
        }
    };

    if code.trim().is_empty() {
        eprintln!("Warning: please enter some code");
        return Ok(EXIT_ERROR);
    }

    print!("{}", prompt::render(&code));
    Ok(EXIT_SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_collect_files_filters_extensions_and_exclusions() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        std::fs::write(root.join("a.py"), "x = 1\n").unwrap();
        std::fs::write(root.join("B.java"), "int a = 1;\n").unwrap();
        std::fs::write(root.join("notes.txt"), "hello\n").unwrap();
        std::fs::create_dir_all(root.join(".git")).unwrap();
        std::fs::write(root.join(".git/hook.py"), "x = 1\n").unwrap();
        std::fs::create_dir_all(root.join("skip")).unwrap();
        std::fs::write(root.join("skip/c.py"), "x = 1\n").unwrap();

        let config = Config {
            excluded_paths: vec!["**/skip/**".into()],
            ..Default::default()
        };
        let files = collect_files(root, &config).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["B.java", "a.py"]);
    }

    #[test]
    fn test_resolve_language_precedence() {
        let config = Config {
            default_language: Some("java".into()),
            ..Default::default()
        };
        let py = Path::new("main.py");
        let txt = Path::new("main.txt");
        assert_eq!(resolve_language(Some(py), Some("Java"), &config).as_deref(), Some("Java"));
        assert_eq!(resolve_language(Some(py), None, &config).as_deref(), Some("python"));
        assert_eq!(resolve_language(Some(txt), None, &config).as_deref(), Some("java"));
        assert_eq!(resolve_language(Some(txt), None, &Config::default()), None);
    }

    #[test]
    fn test_review_all_keeps_order() {
        let submissions = vec![
            Submission {
                label: "one".into(),
                language: "java".into(),
                source: "int a = 5".into(),
            },
            Submission {
                label: "two".into(),
                language: "python".into(),
                source: "x = 1\n".into(),
            },
        ];
        let reports = review_all(&Runner::new(), &submissions, false).unwrap();
        assert_eq!(reports[0].0, "one");
        assert!(reports[0].1.has_errors());
        assert_eq!(reports[1].0, "two");
        assert!(!reports[1].1.has_errors());
    }
}
