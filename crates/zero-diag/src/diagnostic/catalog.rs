//! Locale catalog loading: maps a diagnostic code to a localized message
//! template. Grounded on the original compiler's `I18nMessages` loader —
//! same search order, same sectioned text format, same `en_US` fallback.

use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};

use zero_util::{ResourceError, ResourceResult};

/// One code's localized text: the message template, an optional help line,
/// and an optional source/rationale note. `{0}`, `{1}`, … in `message` and
/// `help` are replaced by a diagnostic's positional `args`.
#[derive(Clone, Debug, Default)]
pub struct MessageTemplate {
    pub message: String,
    pub help: Option<String>,
    pub source: Option<String>,
}

/// A loaded set of code → message mappings for one locale.
#[derive(Clone, Debug)]
pub struct LocaleCatalog {
    locale: String,
    messages: HashMap<String, MessageTemplate>,
}

const DEFAULT_LOCALE: &str = "en_US";

impl LocaleCatalog {
    /// Load the catalog for `locale`, searching (in order) `$ZERO_LOCALE_PATH`,
    /// `./locales/<locale>/`, `../locales/<locale>/`, `../../locales/<locale>/`.
    /// Any failure (missing file, unreadable, malformed) falls back to
    /// `en_US`; if even that fails, an empty catalog is returned so lookups
    /// degrade to the generic "unknown error" template rather than panicking.
    pub fn load(locale: &str) -> Self {
        match Self::try_load(locale) {
            Ok(catalog) => catalog,
            Err(_) if locale != DEFAULT_LOCALE => {
                Self::try_load(DEFAULT_LOCALE).unwrap_or_else(|_| Self::empty(DEFAULT_LOCALE))
            }
            Err(_) => Self::empty(locale),
        }
    }

    fn empty(locale: &str) -> Self {
        Self {
            locale: locale.to_string(),
            messages: HashMap::new(),
        }
    }

    fn try_load(locale: &str) -> ResourceResult<Self> {
        let path = Self::find_catalog_file(locale)?;
        let text = std::fs::read_to_string(&path).map_err(|source| ResourceError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self {
            locale: locale.to_string(),
            messages: parse_catalog(&text),
        })
    }

    fn find_catalog_file(locale: &str) -> ResourceResult<PathBuf> {
        if let Ok(root) = env::var("ZERO_LOCALE_PATH") {
            let candidate = Path::new(&root).join(locale).join("diagnostics.toml");
            if candidate.is_file() {
                return Ok(candidate);
            }
        }
        for prefix in ["./locales", "../locales", "../../locales"] {
            let candidate = Path::new(prefix).join(locale).join("diagnostics.toml");
            if candidate.is_file() {
                return Ok(candidate);
            }
        }
        Err(ResourceError::NotFound(format!(
            "diagnostics.toml for locale {locale}"
        )))
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Look up the template for `code`, falling back to a generic
    /// "unknown error" template rather than reporting a lookup failure.
    pub fn get(&self, code: &str) -> MessageTemplate {
        self.messages.get(code).cloned().unwrap_or_else(|| MessageTemplate {
            message: format!("unknown error ({code})"),
            help: None,
            source: None,
        })
    }

    /// Render `template.message` with `{0}`, `{1}`, … replaced by `args`.
    pub fn format_message(&self, code: &str, args: &[String]) -> String {
        let template = self.get(code);
        substitute(&template.message, args)
    }

    pub fn help_for(&self, code: &str, args: &[String]) -> Option<String> {
        let template = self.get(code);
        template.help.map(|h| substitute(&h, args))
    }
}

fn substitute(template: &str, args: &[String]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.char_indices().peekable();
    while let Some((i, ch)) = chars.next() {
        if ch == '{' {
            if let Some(end) = template[i + 1..].find('}') {
                let digits = &template[i + 1..i + 1 + end];
                if let Ok(index) = digits.parse::<usize>() {
                    if let Some(arg) = args.get(index) {
                        out.push_str(arg);
                    }
                    for _ in 0..=end {
                        chars.next();
                    }
                    continue;
                }
            }
        }
        out.push(ch);
    }
    out
}

/// Parse a `[CODE]` / `key = "value"` sectioned text file into a code map.
fn parse_catalog(text: &str) -> HashMap<String, MessageTemplate> {
    let mut messages = HashMap::new();
    let mut current_code: Option<String> = None;
    let mut current = MessageTemplate::default();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some(stripped) = line.strip_prefix('[') {
            if let Some(code) = stripped.strip_suffix(']') {
                if let Some(prev) = current_code.take() {
                    messages.insert(prev, std::mem::take(&mut current));
                }
                current_code = Some(code.trim().to_string());
            }
            continue;
        }
        if current_code.is_none() {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        let value = value.trim().trim_matches('"');
        match key {
            "message" => current.message = value.to_string(),
            "help" => current.help = Some(value.to_string()),
            "source" => current.source = Some(value.to_string()),
            _ => {}
        }
    }
    if let Some(code) = current_code.take() {
        messages.insert(code, current);
    }
    messages
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sectioned_catalog() {
        let text = r#"
            [L0007]
            message = "unterminated string literal"
            help = "close the string with a matching quote"

            [P0001]
            message = "unexpected token {0}, expected {1}"
        "#;
        let messages = parse_catalog(text);
        assert_eq!(
            messages["L0007"].message,
            "unterminated string literal"
        );
        assert_eq!(
            messages["L0007"].help.as_deref(),
            Some("close the string with a matching quote")
        );
        assert_eq!(messages["P0001"].message, "unexpected token {0}, expected {1}");
    }

    #[test]
    fn substitutes_positional_args() {
        let rendered = substitute("found {0}, expected {1}", &["`}`".into(), "`;`".into()]);
        assert_eq!(rendered, "found `}`, expected `;`");
    }

    #[test]
    fn unknown_code_yields_generic_template() {
        let catalog = LocaleCatalog::empty("en_US");
        let template = catalog.get("L9999");
        assert!(template.message.contains("unknown error"));
    }

    #[test]
    fn missing_arg_index_renders_empty() {
        let rendered = substitute("value: {0}", &[]);
        assert_eq!(rendered, "value: ");
    }

    #[test]
    fn zero_locale_path_takes_priority_over_relative_search() {
        let dir = tempfile::tempdir().unwrap();
        let locale_dir = dir.path().join("fr_FR");
        std::fs::create_dir_all(&locale_dir).unwrap();
        std::fs::write(
            locale_dir.join("diagnostics.toml"),
            "[L0007]\nmessage = \"from ZERO_LOCALE_PATH\"\n",
        )
        .unwrap();

        env::set_var("ZERO_LOCALE_PATH", dir.path());
        let catalog = LocaleCatalog::load("fr_FR");
        env::remove_var("ZERO_LOCALE_PATH");

        assert_eq!(catalog.get("L0007").message, "from ZERO_LOCALE_PATH");
    }
}
