//! URL-safe identifiers derived from post titles.

use std::{fmt, str::FromStr};

#[derive(Debug, thiserror::Error)]
#[error("generated post slug is empty")]
pub struct EmptySlug;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PostSlug(String);

impl PostSlug {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    pub fn from_title(title: &str) -> Result<Self, EmptySlug> {
        let generated = normalize(title);
        PostSlug::from_str(&generated)
    }

    /// File name the content directory expects for this slug.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.mdx", self.0)
    }
}

impl AsRef<str> for PostSlug {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for PostSlug {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for PostSlug {
    type Err = EmptySlug;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(EmptySlug);
        }

        Ok(Self(trimmed.to_string()))
    }
}

/// Normalize a title into slug form.
///
/// Lowercases the input, keeps ASCII alphanumerics and CJK ideographs, and
/// collapses every other run of characters into a single interior hyphen.
/// Total over all strings; an all-disallowed title yields the empty string.
#[must_use]
pub fn normalize(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut gap = false;
    for c in title.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() || is_cjk(c) {
            if gap && !slug.is_empty() {
                slug.push('-');
            }
            gap = false;
            slug.push(c);
        } else {
            gap = true;
        }
    }
    slug
}

// The range the downstream site treats as word characters (U+4E00..=U+9FA5).
const fn is_cjk(c: char) -> bool {
    matches!(c, '\u{4e00}'..='\u{9fa5}')
}
