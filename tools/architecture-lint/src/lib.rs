//! Repo-local architectural lint for the gym check-in crate.
//!
//! The crate is split into a `domain` hexagon with ports, `inbound`
//! adapters that drive it, and `outbound` adapters it drives. This lint
//! parses every source file under those three module trees and rejects:
//!
//! - `domain` code that reaches into adapters, startup wiring
//!   (`config`, `fixtures`), or edge crates such as `clap`, `tracing`, and
//!   `cap_std`
//! - `inbound` code that names `outbound` adapters or loads files itself
//! - `outbound` code that names `inbound` adapters or command-line crates
//!
//! Run it with `cargo run -p architecture-lint`.

use std::collections::BTreeSet;
use std::fmt;
use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs::Dir};
use syn::visit::Visit;

/// Library name the linted crate is imported under from tests and binaries.
pub const CRATE_NAME: &str = "gym_checkin";

/// Module trees the lint inspects, relative to `src/`.
pub const LAYER_DIRS: [&str; 3] = ["domain", "inbound", "outbound"];

/// A single boundary violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// File path relative to the crate's `src/` directory.
    pub file: Utf8PathBuf,
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.file, self.message)
    }
}

/// Failure modes returned by the architecture lint.
#[derive(Debug)]
pub enum ArchitectureLintError {
    /// Directory traversal or file reading failed.
    Io { path: Utf8PathBuf, source: io::Error },
    /// A file could not be attributed to a layer or parsed as Rust.
    Parse { file: Utf8PathBuf, message: String },
    /// One or more boundary violations were found.
    Violations(Vec<Violation>),
}

impl fmt::Display for ArchitectureLintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "failed to read {path}: {source}"),
            Self::Parse { file, message } => write!(f, "failed to parse {file}: {message}"),
            Self::Violations(violations) => {
                writeln!(f, "architecture boundary violations:")?;
                for violation in violations {
                    writeln!(f, "- {violation}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ArchitectureLintError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// A Rust source file to be linted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintSource {
    /// Path relative to the crate's `src/` directory.
    pub file: Utf8PathBuf,
    pub contents: String,
}

impl LintSource {
    pub fn new(file: impl Into<Utf8PathBuf>, contents: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            contents: contents.into(),
        }
    }
}

/// Lint the layer sources of the crate rooted at `crate_dir`.
pub fn lint_crate_sources(crate_dir: &Utf8Path) -> Result<(), ArchitectureLintError> {
    let sources = collect_lint_sources(&crate_dir.join("src"))?;
    lint_sources(&sources)
}

/// Lint in-memory sources.
pub fn lint_sources(sources: &[LintSource]) -> Result<(), ArchitectureLintError> {
    let mut violations = Vec::new();

    for source in sources {
        let layer =
            Layer::from_path(&source.file).ok_or_else(|| ArchitectureLintError::Parse {
                file: source.file.clone(),
                message: "file is not under a domain, inbound, or outbound module".to_owned(),
            })?;
        let parsed =
            syn::parse_file(&source.contents).map_err(|err| ArchitectureLintError::Parse {
                file: source.file.clone(),
                message: err.to_string(),
            })?;
        violations.extend(layer.check(&source.file, &parsed));
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ArchitectureLintError::Violations(violations))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layer {
    Domain,
    Inbound,
    Outbound,
}

impl Layer {
    fn from_path(relative: &Utf8Path) -> Option<Self> {
        match relative.components().next()?.as_str() {
            "domain" => Some(Self::Domain),
            "inbound" => Some(Self::Inbound),
            "outbound" => Some(Self::Outbound),
            _ => None,
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Domain => "domain",
            Self::Inbound => "inbound",
            Self::Outbound => "outbound",
        }
    }

    fn forbidden_modules(self) -> &'static [&'static str] {
        match self {
            Self::Domain => &["config", "fixtures", "inbound", "outbound"],
            Self::Inbound => &["fixtures", "outbound"],
            Self::Outbound => &["inbound"],
        }
    }

    fn forbidden_crates(self) -> &'static [&'static str] {
        match self {
            Self::Domain => &[
                "cap_std",
                "clap",
                "ortho_config",
                "tempfile",
                "tracing",
                "tracing_subscriber",
            ],
            Self::Inbound => &["cap_std", "ortho_config"],
            Self::Outbound => &["clap", "ortho_config", "tracing_subscriber"],
        }
    }

    fn check(self, file: &Utf8Path, parsed: &syn::File) -> Vec<Violation> {
        let mut collector = PathCollector::default();
        collector.visit_file(parsed);

        let mut messages = BTreeSet::new();
        for segments in &collector.paths {
            if let Some(module) = internal_module(segments)
                .filter(|module| self.forbidden_modules().contains(module))
            {
                messages.insert(format!(
                    "{} module must not depend on crate::{module}",
                    self.name()
                ));
            }
            if let Some(krate) =
                external_crate(segments).filter(|krate| self.forbidden_crates().contains(krate))
            {
                messages.insert(format!(
                    "{} module must not depend on external crate `{krate}`",
                    self.name()
                ));
            }
        }

        messages
            .into_iter()
            .map(|message| Violation {
                file: file.to_path_buf(),
                message,
            })
            .collect()
    }
}

fn is_relative_segment(segment: &str) -> bool {
    matches!(segment, "crate" | "self" | "super")
}

/// First crate-internal module named by a path, if the path is internal.
fn internal_module(segments: &[String]) -> Option<&str> {
    let first = segments.first()?.as_str();
    if LAYER_DIRS.contains(&first) {
        return Some(first);
    }
    let index = if is_relative_segment(first) {
        segments
            .iter()
            .position(|segment| !is_relative_segment(segment))?
    } else if first == CRATE_NAME {
        1
    } else {
        return None;
    };
    segments.get(index).map(String::as_str)
}

fn external_crate(segments: &[String]) -> Option<&str> {
    let root = segments.first()?.as_str();
    (!is_relative_segment(root) && root != CRATE_NAME).then_some(root)
}

#[derive(Default)]
struct PathCollector {
    paths: BTreeSet<Vec<String>>,
}

impl PathCollector {
    fn record_use_tree(&mut self, tree: &syn::UseTree, mut prefix: Vec<String>) {
        match tree {
            syn::UseTree::Path(path) => {
                prefix.push(path.ident.to_string());
                self.record_use_tree(&path.tree, prefix);
            }
            syn::UseTree::Name(name) => {
                prefix.push(name.ident.to_string());
                self.paths.insert(prefix);
            }
            syn::UseTree::Rename(rename) => {
                prefix.push(rename.ident.to_string());
                self.paths.insert(prefix);
            }
            syn::UseTree::Glob(_) => {
                prefix.push("*".to_owned());
                self.paths.insert(prefix);
            }
            syn::UseTree::Group(group) => {
                for item in &group.items {
                    self.record_use_tree(item, prefix.clone());
                }
            }
        }
    }
}

impl<'ast> Visit<'ast> for PathCollector {
    fn visit_path(&mut self, node: &'ast syn::Path) {
        let segments: Vec<String> = node
            .segments
            .iter()
            .map(|segment| segment.ident.to_string())
            .collect();
        if !segments.is_empty() {
            self.paths.insert(segments);
        }
        syn::visit::visit_path(self, node);
    }

    fn visit_item_use(&mut self, node: &'ast syn::ItemUse) {
        self.record_use_tree(&node.tree, Vec::new());
    }
}

fn collect_lint_sources(src_dir: &Utf8Path) -> Result<Vec<LintSource>, ArchitectureLintError> {
    let io_error = |source| ArchitectureLintError::Io {
        path: src_dir.to_path_buf(),
        source,
    };
    let root = Dir::open_ambient_dir(src_dir, ambient_authority()).map_err(io_error)?;

    let mut sources = Vec::new();
    for layer in LAYER_DIRS {
        if !root.is_dir(layer) {
            continue;
        }
        let dir = root.open_dir(layer).map_err(io_error)?;
        collect_sources_under(&dir, Utf8Path::new(layer), src_dir, &mut sources)?;
    }
    sources.sort_by(|left, right| left.file.cmp(&right.file));
    Ok(sources)
}

fn collect_sources_under(
    dir: &Dir,
    relative: &Utf8Path,
    src_dir: &Utf8Path,
    sources: &mut Vec<LintSource>,
) -> Result<(), ArchitectureLintError> {
    let io_error = |source| ArchitectureLintError::Io {
        path: src_dir.join(relative),
        source,
    };
    for entry in dir.entries().map_err(io_error)? {
        let entry = entry.map_err(io_error)?;
        let name = entry
            .file_name()
            .into_string()
            .map_err(|name| ArchitectureLintError::Parse {
                file: relative.to_path_buf(),
                message: format!("non UTF-8 file name {name:?}"),
            })?;
        let path = relative.join(&name);

        if entry.file_type().map_err(io_error)?.is_dir() {
            let child = dir.open_dir(&name).map_err(io_error)?;
            collect_sources_under(&child, &path, src_dir, sources)?;
        } else if path.extension() == Some("rs") {
            let contents = dir.read_to_string(&name).map_err(io_error)?;
            sources.push(LintSource::new(path, contents));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests;
