//! Extensions command: print the README suffix priority list

use readme_locate::suffix_priorities;

use crate::config::Settings;
use crate::error::Result;

/// Run the extensions command
///
/// The bare suffix is printed as `(none)` and the catch-all slot as
/// `.*`, so every line is visible.
pub fn run_extensions(settings: &Settings) -> Result<()> {
    for line in extension_lines(settings) {
        println!("{line}");
    }
    Ok(())
}

fn extension_lines(settings: &Settings) -> Vec<String> {
    let mut lines: Vec<String> = suffix_priorities(&settings.markup_extension, &settings.locale)
        .into_iter()
        .map(|suffix| {
            if suffix.is_empty() {
                "(none)".to_string()
            } else {
                suffix
            }
        })
        .collect();
    lines.push(".*".to_string());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_lines() {
        let settings = Settings {
            locale: "pt-BR".into(),
            markup_extension: ".md".into(),
        };
        assert_eq!(
            extension_lines(&settings),
            [
                ".pt-br.md",
                ".pt_br.md",
                ".pt.md",
                "_pt.md",
                ".md",
                ".txt",
                "(none)",
                ".*"
            ]
        );
    }
}
