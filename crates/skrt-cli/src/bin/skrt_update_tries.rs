// skrt-update-tries: Bring trie fixtures in line with the master lexicon.
//
// Loads the master trie content, then rewrites every file in the trie
// directory: each line whose form (text before the first comma) appears in
// the master file is replaced by the master line. Meant to be run from
// src/test/resources/tries, where the default lexicon path resolves.
//
// Usage:
//   skrt-update-tries [-l LEXICON] [OPTIONS] [DIR]
//
// Options:
//   -l, --lexicon PATH   Master trie content file
//   --skip-dirs          Skip subdirectories instead of failing
//   -n, --dry-run        Report what would change, write nothing
//   -v, --verbose        Print one line per file
//   -h, --help           Print help

use skrt_lexicon::{Lexicon, TrieUpdater};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let args = skrt_cli::parse_args(&args).unwrap_or_else(|e| skrt_cli::fatal(&e));

    if args.help {
        println!("skrt-update-tries: Bring trie fixtures in line with the master lexicon.");
        println!();
        println!("Usage: skrt-update-tries [-l LEXICON] [OPTIONS] [DIR]");
        println!();
        println!("Rewrites every file in DIR (default: current directory), replacing");
        println!("each line whose form is found in the lexicon by the lexicon's line.");
        println!();
        println!("Options:");
        println!("  -l, --lexicon PATH   Master trie content file");
        println!(
            "                       (default: ${}, then {})",
            skrt_cli::LEXICON_ENV,
            skrt_lexicon::lexicon::DEFAULT_LEXICON_PATH
        );
        println!("  --skip-dirs          Skip subdirectories instead of failing");
        println!("  -n, --dry-run        Report what would change, write nothing");
        println!("  -v, --verbose        Print one line per file");
        println!("  -h, --help           Print this help");
        return;
    }

    let lexicon_path = skrt_cli::resolve_lexicon_path(args.lexicon.as_deref());
    let lexicon =
        Lexicon::load(&lexicon_path).unwrap_or_else(|e| skrt_cli::fatal(&e.to_string()));
    if args.verbose {
        eprintln!("loaded {} forms from {}", lexicon.len(), lexicon_path.display());
    }

    let updater = TrieUpdater::with_options(&lexicon, args.update_options());
    let report = updater
        .update_dir(args.trie_dir())
        .unwrap_or_else(|e| skrt_cli::fatal(&e.to_string()));

    if args.verbose {
        for file in &report.files {
            let status = match (file.modified, file.written) {
                (true, true) => "updated",
                (true, false) => "would update",
                (false, _) => "unchanged",
            };
            eprintln!(
                "{status}: {} ({} of {} lines replaced, {} changed)",
                file.path.display(),
                file.replaced,
                file.lines,
                file.changed
            );
        }
        for dir in &report.skipped {
            eprintln!("skipped: {}", dir.display());
        }
    }

    eprintln!("{}", skrt_cli::summary(&report, updater.options().dry_run));
}
