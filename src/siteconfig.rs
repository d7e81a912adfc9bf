//! Config-module serializer for site settings.

use crate::{encode, settings::SiteSettings};

/// Render the full `siteMetadata.js` module for the site build.
///
/// Only the editable [`SiteSettings`] fields are substituted (the site
/// title also feeds `headerTitle`). Every other key, including the social
/// links and the analytics, newsletter, comments and search provider
/// blocks, is a constant the downstream build relies on and round-trips
/// unchanged. Total and deterministic; no email or URL syntax validation.
#[must_use]
pub fn render_site_config(settings: &SiteSettings) -> String {
    format!(
        r#"/** @type {{import("pliny/config").PlinyConfig }} */
const siteMetadata = {{
  title: {title},
  author: {author},
  headerTitle: {title},
  description: {description},
  language: 'zh-cn',
  theme: '{theme}', // system, dark or light
  siteUrl: 'https://your-blog.vercel.app',
  siteRepo: 'https://github.com/Howdrian/my-personal-blog',
  siteLogo: `${{process.env.BASE_PATH || ''}}/static/images/logo.png`,
  socialBanner: `${{process.env.BASE_PATH || ''}}/static/images/twitter-card.png`,
  mastodon: 'https://mastodon.social/@mastodonuser',
  email: {email},
  github: {github},
  x: {twitter},
  facebook: 'https://facebook.com',
  youtube: 'https://youtube.com',
  linkedin: 'https://www.linkedin.com',
  threads: 'https://www.threads.net',
  instagram: 'https://www.instagram.com',
  medium: 'https://medium.com',
  bluesky: 'https://bsky.app/',
  locale: 'zh-CN',
  stickyNav: false,
  analytics: {{
    umamiAnalytics: {{
      umamiWebsiteId: process.env.NEXT_UMAMI_ID,
    }},
  }},
  newsletter: {{
    provider: 'buttondown',
  }},
  comments: {{
    provider: 'giscus',
    giscusConfig: {{
      repo: process.env.NEXT_PUBLIC_GISCUS_REPO,
      repositoryId: process.env.NEXT_PUBLIC_GISCUS_REPOSITORY_ID,
      category: process.env.NEXT_PUBLIC_GISCUS_CATEGORY,
      categoryId: process.env.NEXT_PUBLIC_GISCUS_CATEGORY_ID,
      mapping: 'pathname',
      reactions: '1',
      metadata: '0',
      theme: 'light',
      darkTheme: 'transparent_dark',
      themeURL: '',
      lang: 'en',
    }},
  }},
  search: {{
    provider: 'kbar',
    kbarConfig: {{
      searchDocumentsPath: `${{process.env.BASE_PATH || ''}}/search.json`,
    }},
  }},
}}

module.exports = siteMetadata"#,
        title = encode::config_literal(settings.title()),
        author = encode::config_literal(settings.author()),
        description = encode::config_literal(settings.description()),
        theme = settings.theme(),
        email = encode::config_literal(settings.email()),
        github = encode::config_literal(settings.github_url()),
        twitter = encode::config_literal(settings.twitter_url()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Theme;

    // Lines that must survive any combination of editable values.
    const CONSTANTS: [&str; 8] = [
        "  language: 'zh-cn',",
        "  siteUrl: 'https://your-blog.vercel.app',",
        "  siteRepo: 'https://github.com/Howdrian/my-personal-blog',",
        "  siteLogo: `${process.env.BASE_PATH || ''}/static/images/logo.png`,",
        "  locale: 'zh-CN',",
        "    provider: 'buttondown',",
        "    provider: 'giscus',",
        "    provider: 'kbar',",
    ];

    #[test]
    fn constants_round_trip_unchanged() {
        let defaults = render_site_config(&SiteSettings::default());

        let mut edited = SiteSettings::default();
        edited.set_title("A different title");
        edited.set_author("Somebody Else");
        edited.set_email("else@example.com");
        edited.set_theme(Theme::Dark);
        let changed = render_site_config(&edited);

        for constant in CONSTANTS {
            assert!(defaults.contains(constant), "missing: {constant}");
            assert!(changed.contains(constant), "lost: {constant}");
        }
    }

    #[test]
    fn editable_fields_are_substituted() {
        let mut settings = SiteSettings::default();
        settings.set_title("Field Notes");
        settings.set_author("A. Writer");
        settings.set_description("Notes from the field");
        settings.set_email("notes@example.com");
        settings.set_github_url("https://github.com/writer");
        settings.set_twitter_url("https://twitter.com/writer");
        settings.set_theme(Theme::Light);

        let rendered = render_site_config(&settings);
        assert!(rendered.contains("  title: 'Field Notes',"));
        assert!(rendered.contains("  headerTitle: 'Field Notes',"));
        assert!(rendered.contains("  author: 'A. Writer',"));
        assert!(rendered.contains("  theme: 'light', // system, dark or light"));
        assert!(rendered.contains("  github: 'https://github.com/writer',"));
        assert!(rendered.contains("  x: 'https://twitter.com/writer',"));
    }

    #[test]
    fn quoted_values_cannot_break_the_module() {
        let mut settings = SiteSettings::default();
        settings.set_title("Bob's Blog");
        let rendered = render_site_config(&settings);
        assert!(rendered.contains(r"  title: 'Bob\'s Blog',"));
        assert!(rendered.contains(r"  headerTitle: 'Bob\'s Blog',"));
    }

    #[test]
    fn module_export_closes_the_file() {
        let rendered = render_site_config(&SiteSettings::default());
        assert!(rendered.ends_with("module.exports = siteMetadata"));
    }
}
