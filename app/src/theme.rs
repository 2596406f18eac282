//! Design tokens shared by every visual component.
//!
//! `ThemeTokens` is built once when the server starts and handed out behind an
//! `Arc`. Components never name a token by string; they go through [`Token`], so
//! referencing an undefined token fails to compile. String lookups exist for
//! the JSON override file and return [`ThemeError::MissingToken`] on unknown
//! names.

use core::fmt::Write as _;
use std::{collections::BTreeMap, fs, path::Path};
use thiserror::Error;

/// Environment variable pointing at an optional JSON theme override.
pub const THEME_FILE_ENV: &str = "POPMATE_THEME_FILE";

/// Characters that would end a custom property or the `<style>` element.
const FORBIDDEN_VALUE_CHARS: &[char] = &[';', '{', '}', '<', '>', '\\'];

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("theme token `{0}` is not defined")]
    MissingToken(String),
    #[error("theme token `{token}` has an invalid value `{value}`")]
    InvalidValue { token: &'static str, value: String },
    #[error("failed to read theme file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse theme file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Semantic names of every token the theme defines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    Primary,
    PrimaryLight,
    PrimaryDark,
    Secondary,
    SecondaryLight,
    SecondaryDark,
    Background,
    FontFamily,
}

impl Token {
    pub const ALL: [Self; 8] = [
        Self::Primary,
        Self::PrimaryLight,
        Self::PrimaryDark,
        Self::Secondary,
        Self::SecondaryLight,
        Self::SecondaryDark,
        Self::Background,
        Self::FontFamily,
    ];

    /// The name used in theme files and lookups.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::PrimaryLight => "primaryLight",
            Self::PrimaryDark => "primaryDark",
            Self::Secondary => "secondary",
            Self::SecondaryLight => "secondaryLight",
            Self::SecondaryDark => "secondaryDark",
            Self::Background => "background",
            Self::FontFamily => "fontFamily",
        }
    }

    /// The CSS custom property the stylesheet reads this token from.
    pub const fn css_variable(self) -> &'static str {
        match self {
            Self::Primary => "--popmate-primary",
            Self::PrimaryLight => "--popmate-primary-light",
            Self::PrimaryDark => "--popmate-primary-dark",
            Self::Secondary => "--popmate-secondary",
            Self::SecondaryLight => "--popmate-secondary-light",
            Self::SecondaryDark => "--popmate-secondary-dark",
            Self::Background => "--popmate-background",
            Self::FontFamily => "--popmate-font-family",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|token| token.name() == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeTokens {
    pub primary: String,
    pub primary_light: String,
    pub primary_dark: String,
    pub secondary: String,
    pub secondary_light: String,
    pub secondary_dark: String,
    pub background: String,
    pub font_family: String,
}

impl Default for ThemeTokens {
    fn default() -> Self {
        Self {
            primary: "#2563eb".to_owned(),
            primary_light: "#60a5fa".to_owned(),
            primary_dark: "#1e40af".to_owned(),
            secondary: "#f97316".to_owned(),
            secondary_light: "#fdba74".to_owned(),
            secondary_dark: "#c2410c".to_owned(),
            background: "#f8fafc".to_owned(),
            font_family: "\"Noto Sans JP\", sans-serif".to_owned(),
        }
    }
}

impl ThemeTokens {
    pub fn get(&self, token: Token) -> &str {
        match token {
            Token::Primary => &self.primary,
            Token::PrimaryLight => &self.primary_light,
            Token::PrimaryDark => &self.primary_dark,
            Token::Secondary => &self.secondary,
            Token::SecondaryLight => &self.secondary_light,
            Token::SecondaryDark => &self.secondary_dark,
            Token::Background => &self.background,
            Token::FontFamily => &self.font_family,
        }
    }

    /// Looks a token up by its semantic name (`primaryDark`, `fontFamily`, ...).
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::MissingToken`] when no token has that name.
    pub fn color(&self, name: &str) -> Result<&str, ThemeError> {
        Token::from_name(name)
            .map(|token| self.get(token))
            .ok_or_else(|| ThemeError::MissingToken(name.to_owned()))
    }

    /// Builds a theme from a name → value map. Every token must be present;
    /// extra keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::MissingToken`] naming the first absent token, or
    /// [`ThemeError::InvalidValue`] for a value that would escape its CSS
    /// declaration.
    pub fn from_map(map: &BTreeMap<String, String>) -> Result<Self, ThemeError> {
        let lookup = |token: Token| -> Result<String, ThemeError> {
            let value = map
                .get(token.name())
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ThemeError::MissingToken(token.name().to_owned()))?;
            if value.contains(FORBIDDEN_VALUE_CHARS) {
                return Err(ThemeError::InvalidValue {
                    token: token.name(),
                    value: value.clone(),
                });
            }
            Ok(value.clone())
        };

        Ok(Self {
            primary: lookup(Token::Primary)?,
            primary_light: lookup(Token::PrimaryLight)?,
            primary_dark: lookup(Token::PrimaryDark)?,
            secondary: lookup(Token::Secondary)?,
            secondary_light: lookup(Token::SecondaryLight)?,
            secondary_dark: lookup(Token::SecondaryDark)?,
            background: lookup(Token::Background)?,
            font_family: lookup(Token::FontFamily)?,
        })
    }

    /// Loads the theme once at startup: the JSON file at `path` when given,
    /// the built-in palette otherwise.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read, is not a JSON object of strings, or
    /// lacks a token.
    pub fn load(path: Option<&Path>) -> Result<Self, ThemeError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = fs::read_to_string(path)?;
        let map: BTreeMap<String, String> = serde_json::from_str(&raw)?;
        Self::from_map(&map)
    }

    /// Renders the tokens as a `:root` rule of CSS custom properties.
    pub fn to_css_variables(&self) -> String {
        let mut css = String::from(":root{");
        for token in Token::ALL {
            let _ = write!(css, "{}:{};", token.css_variable(), self.get(token));
        }
        css.push('}');
        css
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::io::Write as _;

    #[test]
    fn test_default_theme_resolves_every_token() {
        let theme = ThemeTokens::default();
        for token in Token::ALL {
            let value = theme.color(token.name()).expect("token should resolve");
            assert!(!value.is_empty(), "{} is empty", token.name());
            assert_eq!(value, theme.get(token));
        }
    }

    #[test]
    fn test_unknown_token_is_missing() {
        let theme = ThemeTokens::default();
        assert_matches!(
            theme.color("tertiary"),
            Err(ThemeError::MissingToken(name)) if name == "tertiary"
        );
    }

    #[test]
    fn test_css_variables_cover_all_tokens() {
        let css = ThemeTokens::default().to_css_variables();
        assert!(css.starts_with(":root{"));
        assert!(css.ends_with('}'));
        assert!(css.contains("--popmate-primary:#2563eb;"));
        assert!(css.contains("--popmate-primary-dark:#1e40af;"));
        for token in Token::ALL {
            assert!(css.contains(token.css_variable()));
        }
    }

    #[test]
    fn test_load_without_path_uses_defaults() {
        let theme = ThemeTokens::load(None).unwrap();
        assert_eq!(theme, ThemeTokens::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut map: BTreeMap<String, String> = Token::ALL
            .into_iter()
            .map(|token| (token.name().to_owned(), "#000000".to_owned()))
            .collect();
        map.insert(Token::FontFamily.name().to_owned(), "serif".to_owned());

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(serde_json::to_string(&map).unwrap().as_bytes())
            .unwrap();

        let theme = ThemeTokens::load(Some(file.path())).unwrap();
        assert_eq!(theme.primary, "#000000");
        assert_eq!(theme.font_family, "serif");
    }

    #[test]
    fn test_load_reports_missing_token() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br##"{"primary": "#111111", "primaryLight": "#222222"}"##)
            .unwrap();

        assert_matches!(
            ThemeTokens::load(Some(file.path())),
            Err(ThemeError::MissingToken(name)) if name == "primaryDark"
        );
    }

    #[test]
    fn test_values_cannot_escape_the_style_block() {
        for bad in ["red;} body{display:none", "#fff</style><script>", "blue}"] {
            let mut map: BTreeMap<String, String> = Token::ALL
                .into_iter()
                .map(|token| (token.name().to_owned(), "#000000".to_owned()))
                .collect();
            map.insert(Token::Primary.name().to_owned(), bad.to_owned());

            assert_matches!(
                ThemeTokens::from_map(&map),
                Err(ThemeError::InvalidValue { token: "primary", value }) if value == bad
            );
        }
    }

    #[test]
    fn test_font_stack_with_quotes_is_accepted() {
        let map: BTreeMap<String, String> = Token::ALL
            .into_iter()
            .map(|token| (token.name().to_owned(), ThemeTokens::default().get(token).to_owned()))
            .collect();
        assert_eq!(ThemeTokens::from_map(&map).unwrap(), ThemeTokens::default());
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"not json").unwrap();
        assert_matches!(
            ThemeTokens::load(Some(file.path())),
            Err(ThemeError::Parse(_))
        );
    }

    #[test]
    fn test_load_reports_unreadable_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.json");
        assert_matches!(ThemeTokens::load(Some(&missing)), Err(ThemeError::Io(_)));
    }
}
