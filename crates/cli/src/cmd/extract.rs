use std::fs;
use std::path::{Path, PathBuf};

use mdcarve_core::config::{
    default_config_path, ConfigLoader, ExtractConfig, ResolvedConfig,
};
use mdcarve_core::extract::{ExtractError, ExtractOutcome, Extractor, Selection};
use mdcarve_core::heading;
use mdcarve_core::lines::LineIndex;
use tracing::debug;

use crate::picker;
use crate::{HeadingArgs, SelectionArgs, TargetArgs};

pub fn run_selection(config: Option<&Path>, args: &SelectionArgs) {
    let cfg = load_config(config, "selection");
    let source_text = read_source(&args.source, "selection");

    let (dest_path, dest_text, dest_name) =
        resolve_destination(&args.source, &args.target, "selection");
    let extract_cfg = effective_config(&cfg, &args.target);

    let result = Extractor::extract_selection(
        &source_text,
        Selection::new(args.start, args.end),
        &dest_text,
        &dest_name,
        &extract_cfg,
    );

    let outcome = match result {
        Ok(o) => o,
        Err(e) => {
            eprintln!("FAIL mdc selection");
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    persist_and_report(&args.source, &dest_path, &outcome, &extract_cfg, &args.target, "selection");
}

pub fn run_heading(config: Option<&Path>, args: &HeadingArgs, recursive: bool) {
    let name = if recursive { "heading-recursive" } else { "heading" };

    if args.line == 0 {
        eprintln!("--line is 1-based");
        std::process::exit(2);
    }

    let cfg = load_config(config, name);
    let source_text = read_source(&args.source, name);

    // Recursive extraction is only offered when the cursor sits
    // literally on a heading line, so a comment inside a code block
    // never triggers it.
    if recursive {
        let line_text = source_text.lines().nth(args.line - 1).unwrap_or("");
        if !heading::is_heading_line(line_text) {
            eprintln!("FAIL mdc {name}");
            eprintln!("line {} is not a heading line", args.line);
            std::process::exit(1);
        }
    }

    let (dest_path, dest_text, dest_name) =
        resolve_destination(&args.source, &args.target, name);
    let extract_cfg = effective_config(&cfg, &args.target);

    let cursor = LineIndex::new(&source_text).start(args.line - 1);
    debug!(cursor, line = args.line, "cursor position resolved");

    let result = if recursive {
        Extractor::extract_heading_recursive(
            &source_text,
            cursor,
            &dest_text,
            &dest_name,
            &extract_cfg,
        )
    } else {
        Extractor::extract_heading(&source_text, cursor, &dest_text, &dest_name, &extract_cfg)
    };

    let outcome = match result {
        Ok(o) => o,
        Err(e) => {
            eprintln!("FAIL mdc {name}");
            eprintln!("{e}");
            if matches!(e, ExtractError::NoHeadingAtCursor) {
                let headings = heading::parse(&source_text);
                if !headings.is_empty() {
                    eprintln!("Headings in {}:", args.source.display());
                    for h in headings {
                        eprintln!("  line {:>4}  {} {}", h.line + 1, "#".repeat(h.depth as usize), h.title);
                    }
                }
            }
            std::process::exit(1);
        }
    };

    persist_and_report(&args.source, &dest_path, &outcome, &extract_cfg, &args.target, name);
}

fn load_config(config: Option<&Path>, name: &str) -> ResolvedConfig {
    let cfg = match ConfigLoader::load(config) {
        Ok(rc) => rc,
        Err(e) => {
            eprintln!("FAIL mdc {name}");
            eprintln!("{e}");
            if config.is_none() {
                eprintln!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    };
    crate::logging::init(&cfg);
    cfg
}

fn read_source(path: &Path, name: &str) -> String {
    match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("FAIL mdc {name}");
            eprintln!("failed to read source file {}: {e}", path.display());
            std::process::exit(1);
        }
    }
}

/// Settle the destination: an explicit `--dest`, or an interactive pick
/// over the markdown files under `--root` (the source file excluded).
/// A destination that does not exist yet is treated as empty.
fn resolve_destination(
    source: &Path,
    target: &TargetArgs,
    name: &str,
) -> (PathBuf, String, String) {
    let dest_path = match &target.dest {
        Some(p) => p.clone(),
        None => match picker::choose_destination(&target.root, source) {
            Ok(Some(p)) => p,
            Ok(None) => {
                eprintln!("FAIL mdc {name}");
                eprintln!("no destination chosen");
                std::process::exit(1);
            }
            Err(e) => {
                eprintln!("FAIL mdc {name}");
                eprintln!("{e}");
                std::process::exit(1);
            }
        },
    };

    if same_file(source, &dest_path) {
        eprintln!("FAIL mdc {name}");
        eprintln!("destination must differ from the source file");
        std::process::exit(1);
    }

    let dest_text = match fs::read_to_string(&dest_path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(e) => {
            eprintln!("FAIL mdc {name}");
            eprintln!("failed to read destination file {}: {e}", dest_path.display());
            std::process::exit(1);
        }
    };

    let dest_name = dest_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("Untitled")
        .to_string();

    (dest_path, dest_text, dest_name)
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(ca), Ok(cb)) => ca == cb,
        _ => a == b,
    }
}

fn effective_config(cfg: &ResolvedConfig, target: &TargetArgs) -> ExtractConfig {
    let mut extract = cfg.extract.clone();
    if let Some(replacement) = target.replacement {
        extract.replacement = replacement.into();
    }
    extract
}

/// Write both documents and print the result. The two writes are not
/// transactional: a destination failure after the source write leaves
/// the pair inconsistent and is reported as such.
fn persist_and_report(
    source: &Path,
    dest: &Path,
    outcome: &ExtractOutcome,
    cfg: &ExtractConfig,
    target: &TargetArgs,
    name: &str,
) {
    if let Err(e) = fs::write(source, &outcome.new_source) {
        eprintln!("FAIL mdc {name}");
        eprintln!("failed to write source file {}: {e}", source.display());
        eprintln!("no changes were applied");
        std::process::exit(1);
    }

    if let Err(e) = fs::write(dest, &outcome.new_destination) {
        eprintln!("FAIL mdc {name}");
        eprintln!("failed to write destination file {}: {e}", dest.display());
        eprintln!(
            "warning: {} was already rewritten; the extracted text never reached the destination",
            source.display()
        );
        std::process::exit(1);
    }

    println!("OK   mdc {name}");
    println!("source: {}", source.display());
    println!("dest:   {}", dest.display());
    println!(
        "moved:  {} bytes",
        outcome.span.end - outcome.span.start
    );

    if target.open || !cfg.stay_on_source_file {
        let line = outcome.new_destination[..outcome.insertion_offset]
            .matches('\n')
            .count()
            + 1;
        println!("open:   {}:{line}", dest.display());
    }
}
