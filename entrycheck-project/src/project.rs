//! Loading a project's packages and entry-points from disk.

use std::fs;
use std::path::{Component, Path, PathBuf};

use entrycheck_model::{Entrypoint, Manifest, Package};
use tracing::{debug, warn};

use crate::options::DiscoveryOptions;
use crate::{ProjectError, ProjectResult};

pub const MANIFEST_FILE: &str = "package.json";

/// A loaded project: its root directory and packages in discovery order.
#[derive(Debug, Clone)]
pub struct Project {
    pub directory: PathBuf,
    pub packages: Vec<Package>,
}

impl Project {
    /// Loads the project rooted at `directory`.
    ///
    /// # Errors
    ///
    /// Fails if a manifest is missing or malformed, a package has no name, or
    /// a package pattern is not a valid glob.
    pub fn load(directory: impl AsRef<Path>) -> ProjectResult<Self> {
        let directory = canonicalize(directory.as_ref())?;
        let manifest_path = directory.join(MANIFEST_FILE);
        let root = read_manifest(&directory)?
            .ok_or_else(|| ProjectError::MissingManifest(directory.clone()))?;
        let options = DiscoveryOptions::from_config(&root.config, &manifest_path)?;

        let packages = match options.packages {
            Some(patterns) => expand_packages(&directory, &patterns)?
                .into_iter()
                .map(|dir| load_package(&dir))
                .collect::<ProjectResult<Vec<_>>>()?,
            None => vec![package_from_manifest(&directory, root)?],
        };

        debug!(
            directory = %directory.display(),
            packages = packages.len(),
            "Loaded project"
        );
        Ok(Self {
            directory,
            packages,
        })
    }

    /// Total number of entry-points across all packages.
    #[must_use]
    pub fn entrypoint_count(&self) -> usize {
        self.packages.iter().map(|p| p.entrypoints.len()).sum()
    }
}

/// Loads the package whose manifest lives in `directory`.
fn load_package(directory: &Path) -> ProjectResult<Package> {
    let manifest = read_manifest(directory)?
        .ok_or_else(|| ProjectError::MissingManifest(directory.to_owned()))?;
    package_from_manifest(directory, manifest)
}

fn package_from_manifest(directory: &Path, manifest: Manifest) -> ProjectResult<Package> {
    let manifest_path = directory.join(MANIFEST_FILE);
    let name = manifest
        .name
        .clone()
        .ok_or_else(|| ProjectError::MissingName(directory.to_owned()))?;
    let options = DiscoveryOptions::from_config(&manifest.config, &manifest_path)?;
    let entrypoint_dirs = options.entrypoints.unwrap_or_else(|| vec![".".to_owned()]);

    let mut package = Package::new(name.clone(), directory);
    for relative in entrypoint_dirs {
        let relative = clean_relative(&relative);
        let entrypoint = if relative.is_empty() {
            load_entrypoint(name.clone(), directory, manifest.clone())?
        } else {
            let entrypoint_dir = canonicalize(&directory.join(&relative))?;
            let entrypoint_manifest = read_manifest(&entrypoint_dir)?
                .ok_or_else(|| ProjectError::MissingManifest(entrypoint_dir.clone()))?;
            load_entrypoint(
                format!("{name}/{relative}"),
                &entrypoint_dir,
                entrypoint_manifest,
            )?
        };
        debug!(entrypoint = %entrypoint.name, "Discovered entrypoint");
        package.entrypoints.push(entrypoint);
    }
    Ok(package)
}

/// Builds an entry-point, rejecting a configured `source` that is not a string.
fn load_entrypoint(
    name: String,
    directory: &Path,
    manifest: Manifest,
) -> ProjectResult<Entrypoint> {
    let manifest_path = directory.join(MANIFEST_FILE);
    let options = DiscoveryOptions::from_config(&manifest.config, &manifest_path)?;
    let mut entrypoint = Entrypoint::from_manifest(name, directory, manifest);
    if let Some(source) = options.source {
        entrypoint.config_source = source;
    }
    Ok(entrypoint)
}

/// Strips `.` components and trailing separators: `./utils/` becomes `utils`,
/// `.` becomes the empty string.
fn clean_relative(relative: &str) -> String {
    Path::new(relative)
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// Expands package patterns to directories containing a manifest, sorted and
/// without duplicates.
fn expand_packages(root: &Path, patterns: &[String]) -> ProjectResult<Vec<PathBuf>> {
    let mut dirs = Vec::new();
    for pattern in patterns {
        let matched = dirs.len();
        let full = Path::new(&glob::Pattern::escape(&root.to_string_lossy())).join(pattern);
        let paths = glob::glob(&full.to_string_lossy()).map_err(|source| {
            ProjectError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            }
        })?;
        for path in paths {
            let path = path?;
            if path.is_dir() && path.join(MANIFEST_FILE).is_file() {
                dirs.push(canonicalize(&path)?);
            } else {
                debug!(path = %path.display(), "Skipping non-package match");
            }
        }
        if dirs.len() == matched {
            warn!(pattern = %pattern, "Package pattern matched no packages");
        }
    }
    dirs.sort();
    dirs.dedup();
    Ok(dirs)
}

/// Reads and parses `<directory>/package.json`, or `None` if it does not exist.
fn read_manifest(directory: &Path) -> ProjectResult<Option<Manifest>> {
    let path = directory.join(MANIFEST_FILE);
    let contents = match fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => return Err(ProjectError::Io { path, source }),
    };
    Manifest::from_json(&contents)
        .map(Some)
        .map_err(|source| ProjectError::InvalidManifest { path, source })
}

fn canonicalize(path: &Path) -> ProjectResult<PathBuf> {
    fs::canonicalize(path).map_err(|source| ProjectError::Io {
        path: path.to_owned(),
        source,
    })
}
