// src/domain/content/slug.rs
use regex::Regex;
use std::sync::LazyLock;

static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s-]").expect("valid slug filter pattern"));
static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s_-]+").expect("valid slug separator pattern"));

/// Map a display title to its URL segment.
///
/// The title is lowercased and trimmed, everything that is not a word
/// character, whitespace or hyphen is dropped, separator runs collapse to a
/// single `-` and hyphens are stripped from both ends. Word characters are
/// Unicode-aware, so `"Çocuklarda"` keeps its `ç`. Existing persisted slugs
/// depend on this exact mapping.
///
/// The result may be empty (e.g. `"!!!"`); callers decide whether that is
/// acceptable.
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    let filtered = DISALLOWED.replace_all(lowered.trim(), "");
    let collapsed = SEPARATORS.replace_all(&filtered, "-");
    collapsed.trim_matches('-').to_string()
}
