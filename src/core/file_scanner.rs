use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use colored::Colorize;
use glob::{Pattern, glob};
use walkdir::WalkDir;

/// Files found by [`scan_files`].
pub struct ScanResult {
    /// Matching files, sorted and free of duplicates.
    pub files: Vec<PathBuf>,
    /// Entries the walk could not read, such as dangling symlinks.
    pub skipped_count: usize,
}

fn has_wildcard(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Paths excluded from the scan. A plain path excludes everything beneath
/// it; a wildcard pattern is matched against the whole path.
struct IgnoreRules {
    prefixes: Vec<PathBuf>,
    patterns: Vec<Pattern>,
}

impl IgnoreRules {
    fn new(base_dir: &Path, ignores: &[String], verbose: bool) -> Self {
        let mut rules = Self {
            prefixes: Vec::new(),
            patterns: Vec::new(),
        };
        for ignore in ignores {
            if !has_wildcard(ignore) {
                rules.prefixes.push(base_dir.join(ignore));
                continue;
            }
            match Pattern::new(ignore) {
                Ok(pattern) => rules.patterns.push(pattern),
                Err(e) if verbose => eprintln!(
                    "{} ignore pattern '{}' dropped: {}",
                    "warning:".bold().yellow(),
                    ignore,
                    e
                ),
                Err(_) => {}
            }
        }
        rules
    }

    fn is_ignored(&self, path: &Path) -> bool {
        if self.prefixes.iter().any(|prefix| path.starts_with(prefix)) {
            return true;
        }
        let path = path.to_string_lossy();
        self.patterns.iter().any(|p| p.matches(&path))
    }
}

/// Directories named by `includes`, with wildcard entries expanded. An empty
/// list means the whole of `base_dir`.
fn include_dirs(base_dir: &Path, includes: &[String], verbose: bool) -> Vec<PathBuf> {
    if includes.is_empty() {
        return vec![base_dir.to_path_buf()];
    }

    let mut dirs = Vec::new();
    for include in includes {
        let path = base_dir.join(include);
        if !has_wildcard(include) {
            if path.is_dir() {
                dirs.push(path);
            } else if verbose {
                eprintln!(
                    "{} include {} does not exist",
                    "warning:".bold().yellow(),
                    path.display()
                );
            }
            continue;
        }
        match glob(&path.to_string_lossy()) {
            Ok(matches) => dirs.extend(matches.flatten().filter(|p| p.is_dir())),
            Err(e) if verbose => eprintln!(
                "{} include pattern '{}' dropped: {}",
                "warning:".bold().yellow(),
                include,
                e
            ),
            Err(_) => {}
        }
    }
    dirs
}

/// Collect every file under the `includes` of `base_dir` whose extension is
/// in `extensions`.
///
/// Missing include directories contribute nothing. Entries the walk cannot
/// read are counted in [`ScanResult::skipped_count`] and named when `verbose`.
pub fn scan_files(
    base_dir: &Path,
    includes: &[String],
    ignores: &[String],
    extensions: &[String],
    verbose: bool,
) -> ScanResult {
    let ignore_rules = IgnoreRules::new(base_dir, ignores, verbose);
    let mut files = BTreeSet::new();
    let mut skipped_count = 0;

    for dir in include_dirs(base_dir, includes, verbose) {
        for entry in WalkDir::new(dir).follow_links(true) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    skipped_count += 1;
                    if verbose {
                        eprintln!("{} skipped {}", "warning:".bold().yellow(), e);
                    }
                    continue;
                }
            };

            let path = entry.path();
            if entry.file_type().is_file()
                && has_extension(path, extensions)
                && !ignore_rules.is_ignored(path)
            {
                files.insert(path.to_path_buf());
            }
        }
    }

    ScanResult {
        files: files.into_iter().collect(),
        skipped_count,
    }
}

/// Extensions are compared without a leading dot, so `ts` and `.ts` are the
/// same.
fn has_extension(path: &Path, extensions: &[String]) -> bool {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return false;
    };
    extensions
        .iter()
        .any(|wanted| wanted.trim_start_matches('.') == ext)
}
