use std::{fs, path::PathBuf};

use color_eyre::eyre::{self, WrapErr, eyre};
use dialoguer::{Confirm, Editor, Input, theme::ColorfulTheme};
use quill::{draft::PostDraft, frontmatter, handoff::Artifact, remote::SiteRepo, slug::PostSlug};
use time::OffsetDateTime;
use tracing::info;

use crate::Output;

pub struct PostArgs {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub tags: Option<String>,
    pub body: Option<PathBuf>,
    pub draft: Option<bool>,
}

pub fn command(repo: &SiteRepo, args: PostArgs, output: &Output) -> eyre::Result<()> {
    let theme = ColorfulTheme::default();
    let mut post = PostDraft::new();

    let title: String = match args.title {
        Some(title) => title,
        None => Input::with_theme(&theme)
            .with_prompt("Title")
            .interact_text()?,
    };
    post.set_title(title);

    let summary: String = match args.summary {
        Some(summary) => summary,
        None => Input::with_theme(&theme)
            .with_prompt("Summary")
            .interact_text()?,
    };
    post.set_summary(summary);

    let tags: String = match args.tags {
        Some(tags) => tags,
        None => Input::with_theme(&theme)
            .with_prompt("Tags (comma separated)")
            .allow_empty(true)
            .interact_text()?,
    };
    post.set_tags(&tags);

    let content = match args.body {
        Some(path) => fs::read_to_string(&path)
            .wrap_err_with(|| format!("failed to read post body from {}", path.display()))?,
        None => Editor::new()
            .edit("")?
            .ok_or_else(|| eyre!("post body editing was cancelled"))?,
    };
    post.set_content(content);

    let draft = match args.draft {
        Some(draft) => draft,
        None => Confirm::with_theme(&theme)
            .with_prompt("Save as draft?")
            .default(true)
            .interact()?,
    };
    post.set_draft(draft);

    post.validate()?;
    let slug = PostSlug::from_title(post.title())?;
    info!("post file name: {}", slug.file_name());

    let date = OffsetDateTime::now_utc().date();
    let artifact = Artifact::new(frontmatter::render_post(&post, date), repo.new_post(&slug));
    output.deliver(&artifact, "front matter")
}
