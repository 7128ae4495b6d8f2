//! Dictionary-driven text translation.
//!
//! Two tiers: an exact lookup of the whole trimmed text, then ordered
//! substring replacement. Partial replacement may leave mixed-language text
//! when coverage is incomplete; that is accepted output, not an error.

use super::dictionary::Dictionary;

/// Translate `text` with `dictionary`.
///
/// # Examples
///
/// ```
/// use gloss::core::{Dictionary, translate};
///
/// let dictionary = Dictionary::builtin().unwrap();
/// assert_eq!(translate(" Initialize system tray ", &dictionary), "시스템 트레이 초기화");
/// assert_eq!(translate("Loading plugins", &dictionary), "로딩 중 plugins");
/// assert_eq!(translate("nothing known", &dictionary), "nothing known");
/// ```
pub fn translate(text: &str, dictionary: &Dictionary) -> String {
    let text = text.trim();

    if let Some(target) = dictionary.lookup_exact(text) {
        return target.to_string();
    }

    let mut working = text.to_string();
    for entry in dictionary.partial_entries() {
        if working.contains(entry.source.as_str()) {
            working = working.replace(entry.source.as_str(), &entry.target);
        }
    }
    working
}
