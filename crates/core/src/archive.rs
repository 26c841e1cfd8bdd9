//! Naming rules for the bulk archive export.
//!
//! The export bundles every file of every submission into one zip,
//! foldered per submitter. These helpers derive display filenames from
//! stored names or URLs, sanitize folder names, and keep entry paths
//! unique within the archive.

use std::collections::HashSet;

use chrono::NaiveDate;

/// Characters illegal in filesystem paths, replaced with `_` when a
/// submitter name becomes a folder.
const ILLEGAL_PATH_CHARS: &[char] = &['/', '\\', '?', '%', '*', ':', '|', '"', '<', '>'];

/// Derive the display filename for an archive entry.
///
/// Prefers the stored name, then the URL's trailing path segment, then a
/// synthetic `file-{index}.dat` fallback.
pub fn display_filename(name: &str, url: &str, index: usize) -> String {
    let trimmed = name.trim();
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }
    url_filename(url).unwrap_or_else(|| format!("file-{index}.dat"))
}

/// Extract the last non-empty path segment from a URL, without query
/// string or fragment. Returns `None` when the URL has no usable path.
pub fn url_filename(url: &str) -> Option<String> {
    let clean = url.split('?').next().unwrap_or(url);
    let clean = clean.split('#').next().unwrap_or(clean);

    // Strip scheme and domain to get the path only.
    let path = if let Some(rest) = clean
        .strip_prefix("https://")
        .or_else(|| clean.strip_prefix("http://"))
    {
        rest.find('/').map(|i| &rest[i..]).unwrap_or("")
    } else {
        clean
    };

    path.rsplit('/')
        .find(|s| !s.is_empty())
        .map(|s| s.to_string())
}

/// Sanitize a submitter's display name for use as a folder name.
pub fn sanitize_folder(name: &str) -> String {
    name.chars()
        .map(|c| if ILLEGAL_PATH_CHARS.contains(&c) { '_' } else { c })
        .collect()
}

/// Reserve a unique entry path within the archive.
///
/// If `candidate` is taken, appends `-1`, `-2`, ... before the extension
/// until unused, so no file silently overwrites another. The chosen path
/// is recorded in `used`.
pub fn unique_entry_path(used: &mut HashSet<String>, candidate: String) -> String {
    if used.insert(candidate.clone()) {
        return candidate;
    }

    let (base, extension) = match candidate.rfind('.') {
        // A dot inside the final path segment splits name from extension;
        // a dot before the last '/' belongs to a folder name.
        Some(i) if i > candidate.rfind('/').map_or(0, |s| s + 1) => {
            (&candidate[..i], &candidate[i..])
        }
        _ => (candidate.as_str(), ""),
    };

    let mut counter = 1;
    loop {
        let next = format!("{base}-{counter}{extension}");
        if used.insert(next.clone()) {
            return next;
        }
        counter += 1;
    }
}

/// Download filename for the archive: `{projectSlug}-submissions-{date}.zip`.
pub fn archive_filename(project_slug: &str, date: NaiveDate) -> String {
    format!("{project_slug}-submissions-{}.zip", date.format("%Y-%m-%d"))
}
