//! Local directory probing.

use std::{
    fs::{self, File},
    io,
};

use tracefind_domain::expand_dir_template;
use tracing::warn;

use crate::source::ByteSource;

/// Probes one directory template for `name`, opening the file on a hit.
///
/// A plain miss is silent. I/O failures other than "does not exist" (a
/// candidate that exists but cannot be statted or opened, say) are
/// logged and then treated as misses so the sweep can carry on.
pub(crate) fn probe_directory(name: &str, dir_template: &str) -> Option<ByteSource> {
    let path = expand_dir_template(dir_template, name);

    match fs::metadata(&path) {
        Ok(meta) if meta.is_file() => {}
        Ok(_) => return None,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return None,
        Err(err) => {
            warn!(path = %path, error = %err, "cannot stat candidate");
            return None;
        }
    }

    match File::open(&path) {
        Ok(file) => Some(ByteSource::from_file(path, file)),
        Err(err) => {
            warn!(path = %path, error = %err, "matched file could not be opened");
            None
        }
    }
}
