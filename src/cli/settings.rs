use color_eyre::eyre;
use dialoguer::{Input, Select, theme::ColorfulTheme};
use quill::{
    handoff::Artifact,
    manifest::Manifest,
    remote::SiteRepo,
    settings::{SiteSettings, Theme},
    siteconfig,
};

use crate::Output;

pub fn command(repo: &SiteRepo, manifest: &Manifest, output: &Output) -> eyre::Result<()> {
    let theme = ColorfulTheme::default();
    let mut settings = SiteSettings::new();
    settings.set_author(manifest.author());

    let title: String = Input::with_theme(&theme)
        .with_prompt("Site title")
        .default(settings.title().to_string())
        .interact_text()?;
    settings.set_title(title);

    let author: String = Input::with_theme(&theme)
        .with_prompt("Author name")
        .default(settings.author().to_string())
        .interact_text()?;
    settings.set_author(author);

    let description: String = Input::with_theme(&theme)
        .with_prompt("Site description")
        .default(settings.description().to_string())
        .interact_text()?;
    settings.set_description(description);

    let email: String = Input::with_theme(&theme)
        .with_prompt("Contact email")
        .default(settings.email().to_string())
        .interact_text()?;
    settings.set_email(email);

    let github: String = Input::with_theme(&theme)
        .with_prompt("GitHub link")
        .default(settings.github_url().to_string())
        .interact_text()?;
    settings.set_github_url(github);

    let twitter: String = Input::with_theme(&theme)
        .with_prompt("Twitter/X link")
        .default(settings.twitter_url().to_string())
        .interact_text()?;
    settings.set_twitter_url(twitter);

    let current = Theme::ALL
        .iter()
        .position(|candidate| *candidate == settings.theme())
        .unwrap_or(0);
    let selection = Select::with_theme(&theme)
        .with_prompt("Default theme")
        .items(&Theme::ALL)
        .default(current)
        .interact()?;
    settings.set_theme(Theme::ALL[selection]);

    let artifact = Artifact::new(
        siteconfig::render_site_config(&settings),
        repo.edit_site_metadata(),
    );
    output.deliver(&artifact, "site configuration")
}
