//! Search-path tokenization.
//!
//! A search path is a `:`-separated list of candidate locations. `::`
//! escapes a literal colon so URL templates can be embedded, e.g.
//! `URL=http:://ncbi.example/traces/%s`.

/// Separator between search-path components (POSIX path-list convention).
pub const PATH_SEPARATOR: char = ':';

/// Prefix marking a component as a remote URL template. Case-sensitive.
pub const URL_PREFIX: &str = "URL=";

/// Prefix marking a component as exact-match only: compression suffixes
/// are not probed against it.
pub const EXACT_PREFIX: char = '|';

/// Where one search-path component points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Location {
    /// Local directory template; may contain `%s` / `%Ns` placeholders.
    Directory(String),
    /// Remote URL template with `%s` placeholders, from a `URL=` entry.
    Url(String),
}

/// One normalized entry of a tokenized search path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathComponent {
    pub location: Location,
    /// Set for `|`-prefixed entries: only the unsuffixed name is probed.
    pub exact_only: bool,
}

impl PathComponent {
    fn from_raw(raw: &str) -> Self {
        let (exact_only, rest) = match raw.strip_prefix(EXACT_PREFIX) {
            Some(rest) => (true, rest),
            None => (false, raw),
        };
        let location = match rest.strip_prefix(URL_PREFIX) {
            Some(template) => Location::Url(template.to_string()),
            None => Location::Directory(rest.to_string()),
        };
        Self {
            location,
            exact_only,
        }
    }
}

/// Splits a search-path spec into its components.
///
/// Empty components are dropped, `::` collapses to one literal `:` inside
/// the current component, and a final `./` (current directory) component
/// is always appended. An absent or empty spec therefore yields exactly
/// one `./` component.
pub fn tokenize(spec: Option<&str>) -> Vec<PathComponent> {
    let spec = spec.unwrap_or("");
    let mut raw = Vec::new();
    let mut current = String::new();

    let mut chars = spec.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == PATH_SEPARATOR {
            if chars.peek() == Some(&PATH_SEPARATOR) {
                chars.next();
                current.push(PATH_SEPARATOR);
            } else if !current.is_empty() {
                raw.push(std::mem::take(&mut current));
            }
        } else {
            current.push(ch);
        }
    }
    if !current.is_empty() {
        raw.push(current);
    }
    raw.push("./".to_string());

    raw.into_iter()
        .map(|entry| PathComponent::from_raw(&entry))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directories(spec: &str) -> Vec<String> {
        tokenize(Some(spec))
            .into_iter()
            .map(|component| match component.location {
                Location::Directory(dir) => dir,
                Location::Url(url) => format!("URL={url}"),
            })
            .collect()
    }

    #[test]
    fn absent_and_empty_specs_yield_current_directory() {
        assert_eq!(directories(""), vec!["./"]);
        let components = tokenize(None);
        assert_eq!(components.len(), 1);
        assert_eq!(components[0].location, Location::Directory("./".into()));
        assert!(!components[0].exact_only);
    }

    #[test]
    fn doubled_separator_escapes_a_literal_colon() {
        assert_eq!(directories("a::b:c"), vec!["a:b", "c", "./"]);
    }

    #[test]
    fn blank_components_are_skipped() {
        assert_eq!(directories(":/data::x::"), vec!["/data:x:", "./"]);
        assert_eq!(directories(":::"), vec![":", "./"]);
        assert_eq!(directories("a:::b"), vec!["a:", "b", "./"]);
    }

    #[test]
    fn components_never_come_out_empty() {
        for spec in ["", ":", "::", "a::", ":a:", "a:b:"] {
            for dir in directories(spec) {
                assert!(!dir.is_empty(), "empty component from {spec:?}");
            }
        }
    }

    #[test]
    fn current_directory_is_appended_even_after_components() {
        let dirs = directories("/seq/traces");
        assert_eq!(dirs, vec!["/seq/traces", "./"]);
    }

    #[test]
    fn pipe_prefix_disables_suffix_search() {
        let components = tokenize(Some("|/archive:/data"));
        assert!(components[0].exact_only);
        assert_eq!(components[0].location, Location::Directory("/archive".into()));
        assert!(!components[1].exact_only);
    }

    #[test]
    fn url_prefix_marks_remote_templates() {
        let components = tokenize(Some("URL=http:://host/%s:/data"));
        assert_eq!(components[0].location, Location::Url("http://host/%s".into()));
        assert_eq!(components[1].location, Location::Directory("/data".into()));
    }

    #[test]
    fn url_prefix_is_case_sensitive() {
        let components = tokenize(Some("url=http"));
        assert_eq!(components[0].location, Location::Directory("url=http".into()));
    }

    #[test]
    fn pipe_combines_with_url_prefix() {
        let components = tokenize(Some("|URL=http:://host/%s"));
        assert!(components[0].exact_only);
        assert_eq!(components[0].location, Location::Url("http://host/%s".into()));
    }
}
