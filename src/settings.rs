//! Site-wide settings edited through the settings form.

use std::{fmt, str::FromStr};

/// Default color scheme of the generated site.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    /// Follow the visitor's system preference.
    #[default]
    System,
    /// Always light.
    Light,
    /// Always dark.
    Dark,
}

impl Theme {
    /// Every selectable theme, in form order.
    pub const ALL: [Self; 3] = [Self::System, Self::Light, Self::Dark];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown theme `{0}`, expected system, light or dark")]
pub struct UnknownTheme(String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "system" => Ok(Self::System),
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

/// Editable site metadata.
///
/// Only these fields are substituted into the generated config module;
/// everything else in that module is constant. Values are taken as-is, no
/// email or URL syntax checks. State lives for one settings session and is
/// never persisted.
#[derive(Debug, Clone)]
pub struct SiteSettings {
    title: String,
    author: String,
    description: String,
    email: String,
    github_url: String,
    twitter_url: String,
    theme: Theme,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            title: "我的个人博客".to_string(),
            author: "Your Name".to_string(),
            description: "分享技术、生活和思考的个人空间".to_string(),
            email: "your.email@example.com".to_string(),
            github_url: "https://github.com".to_string(),
            twitter_url: "https://twitter.com/x".to_string(),
            theme: Theme::System,
        }
    }
}

impl SiteSettings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn set_author(&mut self, author: impl Into<String>) {
        self.author = author.into();
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    #[must_use]
    pub fn github_url(&self) -> &str {
        &self.github_url
    }

    pub fn set_github_url(&mut self, url: impl Into<String>) {
        self.github_url = url.into();
    }

    #[must_use]
    pub fn twitter_url(&self) -> &str {
        &self.twitter_url
    }

    pub fn set_twitter_url(&mut self, url: impl Into<String>) {
        self.twitter_url = url.into();
    }

    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_parses_strictly() {
        assert_eq!("system".parse::<Theme>().unwrap(), Theme::System);
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert!("Dark".parse::<Theme>().is_err());
        assert!("auto".parse::<Theme>().is_err());
    }

    #[test]
    fn theme_round_trips_through_display() {
        for theme in Theme::ALL {
            assert_eq!(theme.as_str().parse::<Theme>().unwrap(), theme);
        }
    }

    #[test]
    fn defaults_match_the_original_form() {
        let settings = SiteSettings::default();
        assert_eq!(settings.author(), "Your Name");
        assert_eq!(settings.theme(), Theme::System);
        assert_eq!(settings.twitter_url(), "https://twitter.com/x");
    }
}
