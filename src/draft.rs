//! In-memory form state for a single post draft.

/// Uncommitted field values for one post.
///
/// Created empty when a drafting session starts, mutated field by field,
/// and discarded once the rendered artifact has been handed off. Nothing
/// here touches disk.
#[derive(Debug, Clone)]
pub struct PostDraft {
    title: String,
    summary: String,
    tags: Vec<String>,
    content: String,
    draft: bool,
}

impl Default for PostDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            summary: String::new(),
            tags: Vec::new(),
            content: String::new(),
            // New posts start unpublished.
            draft: true,
        }
    }
}

impl PostDraft {
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
    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn set_summary(&mut self, summary: impl Into<String>) {
        self.summary = summary.into();
    }

    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Replace the tag list from comma-separated input.
    ///
    /// Each entry is trimmed; empty segments are dropped, so empty input
    /// yields an empty tag list rather than an error.
    pub fn set_tags(&mut self, input: &str) {
        self.tags = input
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(String::from)
            .collect();
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Whether the post should land as an unpublished draft.
    #[must_use]
    pub const fn is_draft(&self) -> bool {
        self.draft
    }

    pub fn set_draft(&mut self, draft: bool) {
        self.draft = draft;
    }

    /// Clear every field back to its initial state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Check the required fields before serialization.
    ///
    /// The error names every offending field, not just the first one.
    pub fn validate(&self) -> Result<(), InvalidDraft> {
        let mut fields = Vec::new();
        if self.title.trim().is_empty() {
            fields.push("title");
        }
        if self.summary.trim().is_empty() {
            fields.push("summary");
        }
        if self.content.trim().is_empty() {
            fields.push("content");
        }

        if fields.is_empty() {
            Ok(())
        } else {
            Err(InvalidDraft { fields })
        }
    }
}

/// Required fields that were left empty.
#[derive(Debug, thiserror::Error)]
#[error("required fields are empty: {}", .fields.join(", "))]
pub struct InvalidDraft {
    /// Names of the offending fields, in form order.
    pub fields: Vec<&'static str>,
}
