#![deny(clippy::all, warnings)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]

pub mod search_path;
pub mod template;

pub use search_path::{tokenize, Location, PathComponent, PATH_SEPARATOR, URL_PREFIX};
pub use template::{expand_dir_template, expand_url_template, MAX_URL_LEN, SUFFIXES};
