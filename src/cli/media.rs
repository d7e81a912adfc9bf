use std::{fs, path::PathBuf};

use color_eyre::eyre::{self, WrapErr, eyre};
use quill::{
    handoff::Artifact,
    media::{self, MediaUploadIntent, UploadTarget},
    remote::SiteRepo,
};

use crate::Output;

pub fn command(
    repo: &SiteRepo,
    files: Vec<PathBuf>,
    target: UploadTarget,
    output: &Output,
) -> eyre::Result<()> {
    let mut intent = MediaUploadIntent::new(target);
    for path in &files {
        let metadata = fs::metadata(path)
            .wrap_err_with(|| format!("cannot read file for upload: {}", path.display()))?;
        let name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| eyre!("file name is not valid UTF-8: {}", path.display()))?;
        intent.select(name, metadata.len());
    }
    intent.validate()?;

    let artifact = Artifact::new(media::render_instructions(&intent), repo.media_tree(target));
    output.deliver(&artifact, "upload instructions")
}
