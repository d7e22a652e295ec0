//! Interactive destination picker.

use std::path::{Path, PathBuf};

use dialoguer::theme::ColorfulTheme;
use dialoguer::FuzzySelect;
use walkdir::WalkDir;

/// Fuzzy-pick a destination among the markdown files under `root`,
/// with the source file excluded from the candidates.
///
/// Returns `Ok(None)` when the user cancels or no candidates exist.
pub fn choose_destination(
    root: &Path,
    source: &Path,
) -> Result<Option<PathBuf>, String> {
    let candidates = markdown_files(root, source);
    if candidates.is_empty() {
        return Ok(None);
    }

    let items: Vec<String> =
        candidates.iter().map(|p| p.display().to_string()).collect();

    let selection = FuzzySelect::with_theme(&ColorfulTheme::default())
        .with_prompt("Extract to")
        .items(&items)
        .default(0)
        .interact_opt()
        .map_err(|e| format!("selector error: {e}"))?;

    Ok(selection.map(|idx| candidates[idx].clone()))
}

fn markdown_files(root: &Path, source: &Path) -> Vec<PathBuf> {
    let source_abs = std::fs::canonicalize(source).ok();

    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
        .map(|e| e.into_path())
        .filter(|p| match (&source_abs, std::fs::canonicalize(p)) {
            (Some(src), Ok(abs)) => src != &abs,
            _ => p != source,
        })
        .collect();

    files.sort();
    files
}
