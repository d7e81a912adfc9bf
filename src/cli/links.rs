use std::collections::BTreeMap;

use color_eyre::eyre;
use quill::{media::UploadTarget, remote::SiteRepo};

use crate::Output;

pub fn command(repo: &SiteRepo, output: &Output) -> eyre::Result<()> {
    let links = [
        ("posts", repo.blog_data()),
        ("authors", repo.authors_data()),
        ("media", repo.media_tree(UploadTarget::Root)),
        ("media-upload", repo.media_upload(UploadTarget::Root)),
        ("site-metadata", repo.edit_site_metadata()),
    ];

    if output.json {
        let map: BTreeMap<&str, &str> = links
            .iter()
            .map(|(name, url)| (*name, url.as_str()))
            .collect();
        println!("{}", serde_json::to_string_pretty(&map)?);
        return Ok(());
    }

    for (name, url) in &links {
        println!("{name}: {url}");
    }
    Ok(())
}
