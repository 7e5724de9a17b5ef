//! Locale-aware README suffix priorities
//!
//! A README is named `README` followed by one of an ordered list of
//! suffixes. The order encodes the locale fallback policy: the reader's
//! exact locale first, then its language alone, then the generic markup
//! extension, then `.txt`, then no extension at all.

/// Lower-cased stem every README name starts with.
pub const README_STEM: &str = "readme";

/// Markup extension used when the caller does not pick one.
pub const DEFAULT_MARKUP_EXTENSION: &str = ".md";

/// Plain-text extension, ranked below every markup suffix.
pub const TEXT_EXTENSION: &str = ".txt";

/// Prepend the language code, with and without its region, to `ext`.
///
/// The language code is always lower-cased. A region must be separated
/// with a `-`; `ext` should start with a `.`.
///
/// ```
/// use readme_locate::localized_extensions;
///
/// assert_eq!(
///     localized_extensions(".md", "zh-CN"),
///     [".zh-cn.md", ".zh_cn.md", ".zh.md", "_zh.md", ".md"]
/// );
/// assert_eq!(localized_extensions(".md", "en"), [".en.md", ".md"]);
/// assert_eq!(localized_extensions(".md", ""), [".md"]);
/// ```
pub fn localized_extensions(ext: &str, language_code: &str) -> Vec<String> {
    if language_code.is_empty() {
        return vec![ext.to_string()];
    }

    let lower = format!(".{}", language_code.to_lowercase());

    match lower.find('-') {
        Some(dash) => {
            let underscored = lower.replace('-', "_");
            let language = &lower[..dash];
            vec![
                format!("{lower}{ext}"),
                format!("{underscored}{ext}"),
                format!("{language}{ext}"),
                // Legacy `README_zh.md` naming
                format!("_{}{ext}", &language[1..]),
                ext.to_string(),
            ]
        }
        None => vec![format!("{lower}{ext}"), ext.to_string()],
    }
}

/// Full suffix priority list used to rank README candidates.
///
/// Localized markup suffixes come first, then `.txt`, then the empty
/// suffix matching a bare `README`.
pub fn suffix_priorities(markup_ext: &str, language_code: &str) -> Vec<String> {
    let mut suffixes = localized_extensions(markup_ext, language_code);
    suffixes.push(TEXT_EXTENSION.to_string());
    suffixes.push(String::new());
    suffixes
}

/// Slot index of `name` in a table ranked by `suffixes`.
///
/// Returns the position of the first suffix that completes the name after
/// its `README` stem, compared case-insensitively. Any other `README.<ext>`
/// lands in the catch-all slot `suffixes.len()`. Names that are not READMEs
/// return `None`.
pub fn readme_slot(name: &str, suffixes: &[String]) -> Option<usize> {
    let lower = name.to_lowercase();
    let rest = lower.strip_prefix(README_STEM)?;

    if let Some(index) = suffixes
        .iter()
        .position(|suffix| suffix.to_lowercase() == rest)
    {
        return Some(index);
    }

    rest.starts_with('.').then_some(suffixes.len())
}
