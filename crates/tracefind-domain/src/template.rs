//! Candidate path and URL construction from location templates.

/// Compression suffixes probed after the bare name, in priority order.
///
/// `.bz2` appears twice; the duplicate is deliberate and the probe order
/// is an observable contract, so it stays rather than being deduped.
pub const SUFFIXES: &[&str] = &["", ".gz", ".bz2", ".sz", ".Z", ".bz2"];

/// Upper bound on a composed URL; anything past it is dropped.
pub const MAX_URL_LEN: usize = 8192;

/// Expands a directory template against a file name.
///
/// `%Ns` consumes exactly `N` leading characters of `name`, `%s` (or
/// `%0s`) consumes whatever remains, and any other `%`-sequence is copied
/// through literally, digits included. One trailing `/` on the template
/// is dropped, and any part of `name` still unconsumed afterwards is
/// appended behind a `/`. Absolute names and the bare current-directory
/// template bypass expansion: the result is `name` verbatim.
pub fn expand_dir_template(template: &str, name: &str) -> String {
    if name.starts_with('/') || template == "." || template == "./" {
        return name.to_string();
    }

    let mut rest = template.strip_suffix('/').unwrap_or(template);
    let mut name = name;
    let mut path = String::with_capacity(rest.len() + name.len() + 1);

    while let Some(pos) = rest.find('%') {
        path.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];
        let digits = after.len() - after.trim_start_matches(|c: char| c.is_ascii_digit()).len();
        match after[digits..].strip_prefix('s') {
            Some(tail) => {
                let width: usize = after[..digits].parse().unwrap_or(0);
                let cut = if width == 0 {
                    name.len()
                } else {
                    name.char_indices().nth(width).map_or(name.len(), |(idx, _)| idx)
                };
                path.push_str(&name[..cut]);
                name = &name[cut..];
                rest = tail;
            }
            None => {
                // Not a placeholder: keep the `%`, the digits, and the
                // character that broke the match.
                let keep = 1 + digits + after[digits..].chars().next().map_or(0, char::len_utf8);
                path.push_str(&rest[pos..pos + keep]);
                rest = &rest[pos + keep..];
            }
        }
    }
    path.push_str(rest);

    if !name.is_empty() {
        path.push('/');
        path.push_str(name);
    }
    path
}

/// Expands a URL template, substituting every `%s` with the file name.
///
/// The composed URL is capped at [`MAX_URL_LEN`]; a template and name
/// that together blow the cap are truncated, not rejected.
pub fn expand_url_template(template: &str, name: &str) -> String {
    let mut url = String::with_capacity(template.len() + name.len());
    let mut rest = template;
    while let Some(pos) = rest.find("%s") {
        url.push_str(&rest[..pos]);
        url.push_str(name);
        rest = &rest[pos + 2..];
    }
    url.push_str(rest);

    if url.len() > MAX_URL_LEN {
        let mut cut = MAX_URL_LEN;
        while !url.is_char_boundary(cut) {
            cut -= 1;
        }
        url.truncate(cut);
    }
    url
}
