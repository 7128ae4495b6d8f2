use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result, bail};

use crate::{
    cli::args::CommonArgs,
    config::{CONFIG_FILE_NAME, Config, load_config},
    core::{
        Dictionary, Direction, FileRewriter, SpanExtractor, file_scanner::scan_files,
        read_user_dictionary,
    },
};

/// Everything a translate or revert run needs, resolved up front.
///
/// Configuration is merged with the following priority (highest to lowest):
/// 1. CLI arguments (e.g. `--root`, `--match-order`)
/// 2. `.glossrc.json` config file
/// 3. Built-in defaults
///
/// Construction fails before any file is touched when the root is missing,
/// no source file matches, or the dictionary cannot be built.
pub struct RunContext {
    pub config: Config,
    /// Project root that includes are resolved against.
    pub root_dir: PathBuf,
    /// Source files to process, sorted.
    pub files: Vec<PathBuf>,
    /// Entries under the includes that could not be read.
    pub skipped_count: usize,
    pub rewriter: FileRewriter,
    pub verbose: bool,
}

impl RunContext {
    pub fn new(common_args: &CommonArgs, direction: Direction) -> Result<Self> {
        let verbose = common_args.verbose;

        // Priority: CLI --root arg > current directory
        let start_dir = common_args
            .root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        if !start_dir.is_dir() {
            bail!("Project root does not exist: {}", start_dir.display());
        }

        let config_result = load_config(&start_dir)?;
        if verbose {
            match &config_result.path {
                Some(path) => eprintln!("Note: Using configuration from {}", path.display()),
                None => eprintln!(
                    "Note: No {} found, using default configuration",
                    CONFIG_FILE_NAME
                ),
            }
        }
        let base_dir = config_result.base_dir(&start_dir);
        let mut config = config_result.config;

        if let Some(match_order) = common_args.match_order {
            config.match_order = match_order;
        }

        // An explicit --root wins over the config's own root.
        let root_dir = match &common_args.root {
            Some(root) => root.clone(),
            None => resolve(&base_dir, &config.root),
        };
        if !root_dir.is_dir() {
            bail!("Project root does not exist: {}", root_dir.display());
        }
        let root_dir = root_dir
            .canonicalize()
            .with_context(|| format!("Failed to resolve project root: {}", root_dir.display()))?;

        let dictionary = build_dictionary(&config, &base_dir, direction, verbose)?;
        let extractor = SpanExtractor::new(&config.call_names, direction)?;

        let scan_result = scan_files(
            &root_dir,
            &config.includes,
            &config.ignores,
            &config.extensions,
            verbose,
        );
        if scan_result.files.is_empty() {
            bail!(
                "No source files found under {} (includes: {}; extensions: {})",
                root_dir.display(),
                config.includes.join(", "),
                config.extensions.join(", ")
            );
        }

        Ok(Self {
            config,
            root_dir,
            files: scan_result.files,
            skipped_count: scan_result.skipped_count,
            rewriter: FileRewriter::new(dictionary, extractor),
            verbose,
        })
    }
}

fn resolve(base_dir: &Path, path: &str) -> PathBuf {
    let path = Path::new(path);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}

fn build_dictionary(
    config: &Config,
    base_dir: &Path,
    direction: Direction,
    verbose: bool,
) -> Result<Dictionary> {
    let mut dictionary = Dictionary::builtin()?;

    if let Some(user_path) = &config.dictionary {
        let path = resolve(base_dir, user_path);
        let overrides = read_user_dictionary(&path)?;
        if verbose {
            eprintln!(
                "Note: Merging {} phrase(s) from {}",
                overrides.len(),
                path.display()
            );
        }
        dictionary = dictionary
            .with_overrides(overrides)
            .with_context(|| format!("Invalid dictionary file: {}", path.display()))?;
    }

    dictionary
        .with_match_order(config.match_order)
        .for_direction(direction)
}
