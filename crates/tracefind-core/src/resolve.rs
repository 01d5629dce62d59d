//! The resolution sweep.

use std::{env, fs::File};

use anyhow::Result;
use tracing::{debug, warn};

use tracefind_domain::{tokenize, Location, SUFFIXES};

use crate::{
    config::{PathConfig, PathKind},
    fetch::UrlFetcher,
    probe::probe_directory,
    source::ByteSource,
};

/// Environment variable consulted when a request carries no explicit
/// search path and no kind-specific configuration applies.
const FALLBACK_PATH_VAR: &str = "RAWDATA";

/// One resolution request.
#[derive(Clone, Copy, Debug)]
pub struct ResolveRequest<'a> {
    /// Name to look up, usually without any directory part.
    pub file: &'a str,
    /// Explicit search path; `RAWDATA` from the environment when absent.
    pub path: Option<&'a str>,
    /// Reference file whose directory is probed as a last resort, e.g.
    /// the experiment file that names this trace.
    pub relative_to: Option<&'a str>,
}

impl<'a> ResolveRequest<'a> {
    pub fn new(file: &'a str) -> Self {
        Self {
            file,
            path: None,
            relative_to: None,
        }
    }
}

/// Resolves logical file names against configured search paths.
#[derive(Debug, Default)]
pub struct Resolver {
    config: PathConfig,
    fetcher: UrlFetcher,
}

impl Resolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: PathConfig) -> Self {
        Self {
            config,
            fetcher: UrlFetcher::new(),
        }
    }

    pub fn config(&self) -> &PathConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut PathConfig {
        &mut self.config
    }

    /// Walks the search path and returns the first candidate that
    /// resolves, or `None` when everything misses.
    ///
    /// Components are tried strictly in order, each against the bare
    /// name and then every compression suffix; the first hit wins and
    /// ends the sweep. Exact-only components skip the suffixed names.
    /// Remote failures are reported and skipped. When the whole sweep
    /// misses and a reference file was given, its directory is probed
    /// once for the bare name. A miss is the normal outcome here and is
    /// never logged.
    pub fn resolve(&self, request: &ResolveRequest<'_>) -> Option<ByteSource> {
        let spec = match request.path {
            Some(path) => Some(path.to_string()),
            None => env::var(FALLBACK_PATH_VAR).ok(),
        };

        for component in tokenize(spec.as_deref()) {
            for (index, suffix) in SUFFIXES.iter().enumerate() {
                if component.exact_only && index > 0 {
                    continue;
                }
                let candidate = format!("{}{suffix}", request.file);
                let hit = match &component.location {
                    Location::Directory(template) => {
                        debug!(name = %candidate, directory = %template, "probing");
                        probe_directory(&candidate, template)
                    }
                    Location::Url(template) => {
                        debug!(name = %candidate, url = %template, "fetching");
                        match self.fetcher.fetch(&candidate, template) {
                            Ok(found) => found,
                            Err(err) => {
                                warn!(error = %err, "remote candidate skipped");
                                None
                            }
                        }
                    }
                };
                if let Some(source) = hit {
                    debug!(origin = %source.origin(), "resolved");
                    return Some(source);
                }
            }
        }

        let reference = request.relative_to?;
        let dir = match reference.rfind('/') {
            Some(idx) => &reference[..idx],
            None => reference,
        };
        probe_directory(request.file, dir)
    }

    /// Like [`resolve`](Self::resolve), but hands back a real file
    /// handle, copying in-memory content into an anonymous temporary
    /// file when needed.
    ///
    /// `Ok(None)` is the normal miss; an error means the content could
    /// not be spilled to disk.
    pub fn resolve_file(&self, request: &ResolveRequest<'_>) -> Result<Option<File>> {
        match self.resolve(request) {
            Some(source) => source.into_file().map(Some),
            None => Ok(None),
        }
    }

    /// Resolves `file` against the search path configured for `kind`,
    /// with the same fallback chain as [`resolve`](Self::resolve) when
    /// nothing is configured.
    pub fn resolve_kind(
        &self,
        kind: PathKind,
        file: &str,
        relative_to: Option<&str>,
    ) -> Option<ByteSource> {
        let path = self.config.get(kind);
        self.resolve(&ResolveRequest {
            file,
            path: path.as_deref(),
            relative_to,
        })
    }

    /// File-handle variant of [`resolve_kind`](Self::resolve_kind).
    pub fn resolve_kind_file(
        &self,
        kind: PathKind,
        file: &str,
        relative_to: Option<&str>,
    ) -> Result<Option<File>> {
        match self.resolve_kind(kind, file, relative_to) {
            Some(source) => source.into_file().map(Some),
            None => Ok(None),
        }
    }
}
