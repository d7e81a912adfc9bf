//! Front-matter serializer for post drafts.

use time::{Date, macros::format_description};

use crate::{draft::PostDraft, encode};

/// Render the front-matter artifact for a post.
///
/// The header shape is the contract the downstream static-site generator
/// expects: title, date, a bracketed tag list, the draft flag, summary and
/// the constant authors list, then a blank line and the body verbatim.
/// Byte-for-byte deterministic for identical inputs; the date is injected
/// by the caller, never read from the clock here.
#[must_use]
pub fn render_post(draft: &PostDraft, date: Date) -> String {
    let date = date
        .format(format_description!("[year]-[month]-[day]"))
        // Formatting a valid date with these components cannot fail.
        .expect("date formats as year-month-day");

    let tags = draft
        .tags()
        .iter()
        .map(|tag| encode::front_matter_scalar(tag))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "---\n\
         title: {title}\n\
         date: '{date}'\n\
         tags: [{tags}]\n\
         draft: {flag}\n\
         summary: {summary}\n\
         authors: ['default']\n\
         ---\n\
         \n\
         {content}\n",
        title = encode::front_matter_scalar(draft.title()),
        flag = draft.is_draft(),
        summary = encode::front_matter_scalar(draft.summary()),
        content = draft.content(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn sample() -> PostDraft {
        let mut draft = PostDraft::new();
        draft.set_title("My Post");
        draft.set_summary("S");
        draft.set_tags("a, b");
        draft.set_content("Body");
        draft.set_draft(true);
        draft
    }

    #[test]
    fn renders_the_documented_shape() {
        let rendered = render_post(&sample(), date!(2024 - 01 - 01));
        assert_eq!(
            rendered,
            "---\n\
             title: 'My Post'\n\
             date: '2024-01-01'\n\
             tags: ['a', 'b']\n\
             draft: true\n\
             summary: 'S'\n\
             authors: ['default']\n\
             ---\n\
             \n\
             Body\n"
        );
    }

    #[test]
    fn is_deterministic() {
        let draft = sample();
        assert_eq!(
            render_post(&draft, date!(2024 - 01 - 01)),
            render_post(&draft, date!(2024 - 01 - 01))
        );
    }

    #[test]
    fn empty_tags_render_an_empty_list() {
        let mut draft = sample();
        draft.set_tags("");
        assert!(render_post(&draft, date!(2024 - 01 - 01)).contains("tags: []\n"));
    }

    #[test]
    fn quoted_title_cannot_corrupt_the_header() {
        let mut draft = sample();
        draft.set_title("It's a 'post'");
        let rendered = render_post(&draft, date!(2024 - 01 - 01));
        assert!(rendered.contains("title: 'It''s a ''post'''\n"));
    }

    #[test]
    fn body_is_appended_verbatim_after_the_separator() {
        let mut draft = sample();
        draft.set_content("# Heading\n\n---\ntext with: colons");
        let rendered = render_post(&draft, date!(2024 - 01 - 01));
        let body = rendered
            .split_once("---\n\n")
            .map(|(_, body)| body)
            .unwrap();
        assert_eq!(body, "# Heading\n\n---\ntext with: colons\n");
    }

    #[test]
    fn published_posts_render_draft_false() {
        let mut draft = sample();
        draft.set_draft(false);
        assert!(render_post(&draft, date!(2024 - 01 - 01)).contains("draft: false\n"));
    }
}
