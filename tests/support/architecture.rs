//! Source-tree scans for layering rules.

use std::fs;
use std::path::{Path, PathBuf};

/// `(relative path, 1-based line, line text)`
pub type Hit = (String, usize, String);

/// A Rust source file, loaded once for scanning.
pub struct SourceFile {
    pub rel: String,
    pub text: String,
}

impl SourceFile {
    fn is_mod_rs(&self) -> bool {
        self.rel.ends_with("/mod.rs")
    }

    fn numbered(&self) -> impl Iterator<Item = (usize, &str)> {
        self.text.lines().enumerate().map(|(i, line)| (i + 1, line))
    }
}

fn crate_root() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR"))
}

fn collect(dir: &Path, out: &mut Vec<PathBuf>) {
    let listing = fs::read_dir(dir).unwrap_or_else(|e| panic!("cannot list {}: {e}", dir.display()));
    for entry in listing.flatten() {
        let path = entry.path();
        match path.extension() {
            _ if path.is_dir() => collect(&path, out),
            Some(ext) if ext == "rs" => out.push(path),
            _ => {}
        }
    }
}

/// Every `.rs` file at or below `rel`, sorted by path.
pub fn rust_files(rel: &str) -> Vec<PathBuf> {
    let start = crate_root().join(rel);
    let mut found = if start.is_file() { vec![start] } else { Vec::new() };
    if found.is_empty() {
        collect(&crate_root().join(rel), &mut found);
    }
    found.sort();
    found
}

fn load(rel: &str) -> Vec<SourceFile> {
    rust_files(rel)
        .into_iter()
        .map(|path| SourceFile {
            text: fs::read_to_string(&path)
                .unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display())),
            rel: path
                .strip_prefix(crate_root())
                .map_or_else(|_| path.display().to_string(), |p| p.display().to_string())
                .replace('\\', "/"),
        })
        .collect()
}

/// Code lines under `rel` mentioning any of `needles`. Comments and
/// attributes are skipped.
pub fn lines_containing(rel: &str, needles: &[&str]) -> Vec<Hit> {
    load(rel)
        .iter()
        .flat_map(|file| {
            file.numbered()
                .filter(|(_, line)| {
                    let code = line.trim_start();
                    !code.starts_with("//") && !code.starts_with("#[")
                })
                .filter(|(_, line)| needles.iter().any(|n| line.contains(n)))
                .map(|(n, line)| (file.rel.clone(), n, line.to_string()))
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Lines in `mod.rs` files other than module declarations, `#[cfg]` gates,
/// comments and blanks.
pub fn non_declaration_lines_in_mod_files(rel: &str) -> Vec<Hit> {
    const ALLOWED: [&str; 4] = ["//", "pub mod ", "mod ", "#[cfg"];

    load(rel)
        .iter()
        .filter(|file| file.is_mod_rs())
        .flat_map(|file| {
            file.numbered()
                .filter(|(_, line)| {
                    let trimmed = line.trim();
                    !trimmed.is_empty() && !ALLOWED.iter().any(|p| trimmed.starts_with(p))
                })
                .map(|(n, line)| (file.rel.clone(), n, line.to_string()))
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Lines of the leading `//!` block in `rel` that lost their prefix: any
/// non-blank line before the first item that is not an inner doc comment.
pub fn broken_inner_doc_lines(rel: &str) -> Vec<Hit> {
    load(rel)
        .iter()
        .flat_map(|file| {
            file.numbered()
                .take_while(|(_, line)| !line.starts_with("pub mod ") && !line.starts_with("mod "))
                .filter(|(_, line)| !line.trim().is_empty() && !line.starts_with("//!"))
                .map(|(n, line)| (file.rel.clone(), n, line.to_string()))
                .collect::<Vec<_>>()
        })
        .collect()
}

pub fn path_exists(rel: &str) -> bool {
    crate_root().join(rel).exists()
}
