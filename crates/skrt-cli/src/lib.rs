// skrt-cli: shared utilities for the trie maintenance tools.

use std::path::PathBuf;
use std::process;

use skrt_lexicon::lexicon::DEFAULT_LEXICON_PATH;
use skrt_lexicon::{EntryPolicy, UpdateOptions, UpdateReport};

/// Environment variable overriding the master lexicon location.
pub const LEXICON_ENV: &str = "SKRT_LEXICON_PATH";

/// Parsed command line of `skrt-update-tries`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args {
    pub lexicon: Option<String>,
    pub dir: Option<String>,
    pub skip_dirs: bool,
    pub dry_run: bool,
    pub verbose: bool,
    pub help: bool,
}

impl Args {
    /// Updater options selected by the flags.
    pub fn update_options(&self) -> UpdateOptions {
        UpdateOptions {
            policy: if self.skip_dirs {
                EntryPolicy::SkipDirectories
            } else {
                EntryPolicy::Abort
            },
            dry_run: self.dry_run,
        }
    }

    /// Directory holding the trie files (the working directory by default).
    pub fn trie_dir(&self) -> PathBuf {
        PathBuf::from(self.dir.as_deref().unwrap_or("."))
    }
}

/// Parse the arguments following the program name.
pub fn parse_args(args: &[String]) -> Result<Args, String> {
    let mut parsed = Args::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if let Some(val) = arg.strip_prefix("--lexicon=") {
            parsed.lexicon = Some(val.to_string());
            continue;
        }
        match arg.as_str() {
            "-l" | "--lexicon" => match iter.next() {
                Some(val) => parsed.lexicon = Some(val.clone()),
                None => return Err(format!("{arg} requires a value")),
            },
            "--skip-dirs" => parsed.skip_dirs = true,
            "-n" | "--dry-run" => parsed.dry_run = true,
            "-v" | "--verbose" => parsed.verbose = true,
            "-h" | "--help" => parsed.help = true,
            flag if flag.starts_with('-') && flag.len() > 1 => {
                return Err(format!("unknown option: {flag}"));
            }
            dir => {
                if parsed.dir.is_some() {
                    return Err(format!("unexpected argument: {dir}"));
                }
                parsed.dir = Some(dir.to_string());
            }
        }
    }

    Ok(parsed)
}

/// Resolve the master lexicon path.
///
/// Order:
/// 1. `--lexicon` argument
/// 2. `SKRT_LEXICON_PATH` environment variable
/// 3. the path relative to the trie fixture directory
pub fn resolve_lexicon_path(arg: Option<&str>) -> PathBuf {
    resolve_lexicon_path_with(arg, std::env::var(LEXICON_ENV).ok())
}

fn resolve_lexicon_path_with(arg: Option<&str>, env_path: Option<String>) -> PathBuf {
    if let Some(p) = arg {
        return PathBuf::from(p);
    }
    match env_path {
        Some(p) if !p.is_empty() => PathBuf::from(p),
        _ => PathBuf::from(DEFAULT_LEXICON_PATH),
    }
}

/// One-line summary of a run, printed on stderr.
pub fn summary(report: &UpdateReport, dry_run: bool) -> String {
    let verb = if dry_run { "would change" } else { "changed" };
    let mut line = format!(
        "{} scanned, {} {verb}, {} {verb}",
        count(report.files.len(), "file"),
        report.files_modified(),
        count(report.lines_changed(), "line"),
    );
    let endings = report.files_line_endings_only();
    if endings > 0 {
        line.push_str(&format!(" ({endings} for line endings only)"));
    }
    line
}

fn count(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("{n} {noun}")
    } else {
        format!("{n} {noun}s")
    }
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}
