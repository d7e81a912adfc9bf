//! Destination URLs on the hosting platform for each hand-off.

use url::Url;

use crate::{media::UploadTarget, slug::PostSlug};

/// A repository URL that cannot carry content paths.
#[derive(Debug, thiserror::Error)]
#[error("repository URL cannot be a base for content paths: {0}")]
pub struct InvalidRepoUrl(pub Url);

/// The source-control repository hosting the site content.
///
/// Every artifact is pasted by a human into a page of this repository's
/// web UI; this type builds those pre-filled page URLs.
#[derive(Debug, Clone)]
pub struct SiteRepo {
    base: Url,
}

impl SiteRepo {
    pub fn new(base: Url) -> Result<Self, InvalidRepoUrl> {
        if base.cannot_be_a_base() {
            return Err(InvalidRepoUrl(base));
        }
        Ok(Self { base })
    }

    #[must_use]
    pub fn base(&self) -> &Url {
        &self.base
    }

    fn at<'a>(&self, segments: impl IntoIterator<Item = &'a str>) -> Url {
        let mut url = self.base.clone();
        url.path_segments_mut()
            // The constructor rejects cannot-be-a-base URLs.
            .expect("base URL accepts path segments")
            .pop_if_empty()
            .extend(segments);
        url
    }

    /// New-file page for a post, pre-filled with the slug-derived filename.
    #[must_use]
    pub fn new_post(&self, slug: &PostSlug) -> Url {
        let mut url = self.at(["new", "main", "data", "blog"]);
        url.query_pairs_mut()
            .append_pair("filename", &slug.file_name());
        url
    }

    /// Edit page for the site metadata module.
    #[must_use]
    pub fn edit_site_metadata(&self) -> Url {
        self.at(["edit", "main", "data", "siteMetadata.js"])
    }

    /// Browse page for a media target directory.
    #[must_use]
    pub fn media_tree(&self, target: UploadTarget) -> Url {
        self.at(["tree", "main"].into_iter().chain(target.repo_dir().split('/')))
    }

    /// Upload page for a media target directory.
    #[must_use]
    pub fn media_upload(&self, target: UploadTarget) -> Url {
        self.at(
            ["upload", "main"]
                .into_iter()
                .chain(target.repo_dir().split('/')),
        )
    }

    /// Browse page for the blog content directory.
    #[must_use]
    pub fn blog_data(&self) -> Url {
        self.at(["tree", "main", "data", "blog"])
    }

    /// Browse page for the authors directory.
    #[must_use]
    pub fn authors_data(&self) -> Url {
        self.at(["tree", "main", "data", "authors"])
    }
}
