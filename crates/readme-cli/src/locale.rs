//! Process locale detection

use std::env;

/// Variables consulted for the process locale, most specific first.
const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

/// Locale of the current process as a BCP 47-style tag, or empty.
pub fn system_locale() -> String {
    LOCALE_VARS
        .iter()
        .filter_map(|var| env::var(var).ok())
        .find(|value| !value.is_empty())
        .map(|value| from_posix(&value))
        .unwrap_or_default()
}

/// Convert a POSIX locale such as `zh_CN.UTF-8@euro` to `zh-CN`.
///
/// `C` and `POSIX` carry no language and map to the empty string.
pub fn from_posix(value: &str) -> String {
    let tag = value
        .split(['.', '@'])
        .next()
        .unwrap_or_default();

    match tag {
        "" | "C" | "POSIX" => String::new(),
        tag => tag.replace('_', "-"),
    }
}
