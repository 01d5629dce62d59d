#![deny(clippy::all, warnings)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]

mod config;
mod fetch;
mod probe;
mod resolve;
mod source;

pub use config::{PathConfig, PathKind};
pub use fetch::{FetchError, UrlFetcher};
pub use resolve::{ResolveRequest, Resolver};
pub use source::ByteSource;
