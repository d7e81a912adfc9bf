//! Pending media selections and their upload-instruction artifact.
//!
//! Nothing is transferred by this module. It describes a purely local file
//! selection and renders the instructions a human follows to upload the
//! files through the repository's web UI.

use std::{fmt, str::FromStr};

/// Directory under the site's image tree that receives an upload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UploadTarget {
    /// Images referenced by blog posts.
    #[default]
    Blog,
    /// Project showcase images.
    Projects,
    /// General-purpose images.
    General,
    /// The image tree root (avatar, logo and other site assets).
    Root,
}

impl UploadTarget {
    /// Every selectable target, in form order.
    pub const ALL: [Self; 4] = [Self::Blog, Self::Projects, Self::General, Self::Root];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blog => "blog",
            Self::Projects => "projects",
            Self::General => "general",
            Self::Root => "root",
        }
    }

    /// Directory inside the repository that receives the files.
    #[must_use]
    pub const fn repo_dir(self) -> &'static str {
        match self {
            Self::Blog => "public/static/images/blog",
            Self::Projects => "public/static/images/projects",
            Self::General => "public/static/images/general",
            Self::Root => "public/static/images",
        }
    }

    /// URL prefix the deployed site serves the files under.
    #[must_use]
    pub const fn public_prefix(self) -> &'static str {
        match self {
            Self::Blog => "/static/images/blog",
            Self::Projects => "/static/images/projects",
            Self::General => "/static/images/general",
            Self::Root => "/static/images",
        }
    }
}

impl fmt::Display for UploadTarget {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown upload target `{0}`, expected blog, projects, general or root")]
pub struct UnknownTarget(String);

impl FromStr for UploadTarget {
    type Err = UnknownTarget;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "blog" => Ok(Self::Blog),
            "projects" => Ok(Self::Projects),
            "general" => Ok(Self::General),
            "root" => Ok(Self::Root),
            other => Err(UnknownTarget(other.to_string())),
        }
    }
}

/// One selected file: its name and size on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaFile {
    name: String,
    bytes: u64,
}

impl MediaFile {
    pub fn new(name: impl Into<String>, bytes: u64) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn bytes(&self) -> u64 {
        self.bytes
    }
}

/// A pending, purely client-side file selection.
#[derive(Debug, Clone)]
pub struct MediaUploadIntent {
    files: Vec<MediaFile>,
    target: UploadTarget,
}

#[derive(Debug, thiserror::Error)]
#[error("no files selected for upload")]
pub struct EmptySelection;

impl MediaUploadIntent {
    #[must_use]
    pub const fn new(target: UploadTarget) -> Self {
        Self {
            files: Vec::new(),
            target,
        }
    }

    #[must_use]
    pub const fn target(&self) -> UploadTarget {
        self.target
    }

    #[must_use]
    pub fn files(&self) -> &[MediaFile] {
        &self.files
    }

    /// Add a file to the selection, keeping selection order.
    pub fn select(&mut self, name: impl Into<String>, bytes: u64) {
        self.files.push(MediaFile::new(name, bytes));
    }

    /// An upload with nothing selected is a validation error, not an empty
    /// artifact.
    pub fn validate(&self) -> Result<(), EmptySelection> {
        if self.files.is_empty() {
            Err(EmptySelection)
        } else {
            Ok(())
        }
    }
}

/// Render the upload-instruction artifact for a selection.
///
/// One block per file (repository path, public URL, a suggested image tag
/// built from the file stem), followed by the manual upload steps.
#[must_use]
pub fn render_instructions(intent: &MediaUploadIntent) -> String {
    let target = intent.target();
    let mut out = String::new();

    out.push_str("Media upload instructions\n\n");
    out.push_str(&format!(
        "{} file(s) selected for {}/:\n\n",
        intent.files().len(),
        target.repo_dir()
    ));

    for (index, file) in intent.files().iter().enumerate() {
        let repo_path = format!("{}/{}", target.repo_dir(), file.name());
        let public_url = format!("{}/{}", target.public_prefix(), file.name());
        let stem = file.name().split('.').next().unwrap_or_default();
        out.push_str(&format!(
            "File {}: {} ({:.1} KB)\n\
             - repository path: {repo_path}\n\
             - reference in posts: {public_url}\n\
             - image tag: ![{stem}]({public_url})\n\n",
            index + 1,
            file.name(),
            file.bytes() as f64 / 1024.0,
        ));
    }

    out.push_str(&format!(
        "Upload steps:\n\
         1. The repository's {}/ directory opens in the browser\n\
         2. Choose \"Add file\" > \"Upload files\"\n\
         3. Drag the selected files in and commit the change\n\n\
         Once committed, the images are available to posts at the paths above.\n",
        target.repo_dir()
    ));

    out
}
