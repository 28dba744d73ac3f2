use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Default,
    Celo,
    Solana,
    Base,
    Coinbase,
}

/// CSS custom properties a theme sets on the document root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg: &'static str,
    pub surface: &'static str,
    pub fg: &'static str,
    pub text_secondary: &'static str,
    pub accent: &'static str,
    pub border: &'static str,
}

impl Palette {
    pub fn css_variables(&self) -> [(&'static str, &'static str); 6] {
        [
            ("--bg", self.bg),
            ("--surface", self.surface),
            ("--fg", self.fg),
            ("--text-secondary", self.text_secondary),
            ("--accent", self.accent),
            ("--border", self.border),
        ]
    }
}

impl Theme {
    pub const ALL: [Theme; 5] = [
        Theme::Default,
        Theme::Celo,
        Theme::Solana,
        Theme::Base,
        Theme::Coinbase,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Theme::Default => "default",
            Theme::Celo => "celo",
            Theme::Solana => "solana",
            Theme::Base => "base",
            Theme::Coinbase => "coinbase",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Theme::Default => "ErrandMate (Default)",
            Theme::Celo => "Celo",
            Theme::Solana => "Solana",
            Theme::Base => "Base",
            Theme::Coinbase => "Coinbase",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Theme::Default => "Warm community theme with coral accents",
            Theme::Celo => "Black background with yellow accents",
            Theme::Solana => "Dark purple with magenta accents",
            Theme::Base => "Dark blue with Base blue accents",
            Theme::Coinbase => "Dark navy with Coinbase blue accents",
        }
    }

    /// Swatch shown next to the theme name in the selector.
    pub fn swatch(&self) -> &'static str {
        self.palette().accent
    }

    pub fn palette(&self) -> Palette {
        match self {
            Theme::Default => Palette {
                bg: "#1a1a2e",
                surface: "#232340",
                fg: "#f5f5f7",
                text_secondary: "#a0a0b8",
                accent: "#ff6b6b",
                border: "#34345a",
            },
            Theme::Celo => Palette {
                bg: "#000000",
                surface: "#141414",
                fg: "#ffffff",
                text_secondary: "#b3b3b3",
                accent: "#fbcc5c",
                border: "#2b2b2b",
            },
            Theme::Solana => Palette {
                bg: "#1b0f2e",
                surface: "#26163f",
                fg: "#f4efff",
                text_secondary: "#b4a4d4",
                accent: "#dc1fff",
                border: "#3a2560",
            },
            Theme::Base => Palette {
                bg: "#0a1128",
                surface: "#111b3a",
                fg: "#eef2ff",
                text_secondary: "#9aa8cf",
                accent: "#0052ff",
                border: "#1f2d58",
            },
            Theme::Coinbase => Palette {
                bg: "#0b1426",
                surface: "#122038",
                fg: "#ffffff",
                text_secondary: "#8a9bb8",
                accent: "#0052ff",
                border: "#1e3050",
            },
        }
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::ALL
            .into_iter()
            .find(|t| t.key() == s)
            .ok_or_else(|| ThemeError::Unknown(s.to_string()))
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_parse_back() {
        for theme in Theme::ALL {
            assert_eq!(theme.key().parse::<Theme>(), Ok(theme));
        }
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert_eq!(
            "neon".parse::<Theme>(),
            Err(ThemeError::Unknown("neon".into()))
        );
        assert!("Celo".parse::<Theme>().is_err());
    }

    #[test]
    fn palette_exposes_all_variables() {
        let vars = Theme::Celo.palette().css_variables();
        assert!(vars.contains(&("--accent", "#fbcc5c")));
        assert_eq!(Theme::default(), Theme::Default);
    }
}
