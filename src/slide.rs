use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CarouselError, Result};

/// One carousel entry. The controller only counts these; renderers read them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Slide {
    pub title: String,
    pub description: Option<String>,
    pub image: Option<PathBuf>,
    pub button_label: Option<String>,
}

impl Slide {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<PathBuf>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_button_label(mut self, label: impl Into<String>) -> Self {
        self.button_label = Some(label.into());
        self
    }
}

fn is_image(path: &Path) -> bool {
    match path.extension().and_then(|s| s.to_str()) {
        Some(ext) => matches!(
            ext.to_lowercase().as_str(),
            "png" | "jpg" | "jpeg" | "bmp" | "gif"
        ),
        None => false,
    }
}

/// Build one slide per image file in `dir`, ordered by file name.
pub fn discover_slides(dir: impl AsRef<Path>) -> Result<Vec<Slide>> {
    let dir = dir.as_ref();
    let io_err = |source| CarouselError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if path.is_file() && is_image(&path) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    if paths.is_empty() {
        return Err(CarouselError::NoSlides(dir.to_path_buf()));
    }
    tracing::debug!("found {} slide images in {}", paths.len(), dir.display());

    Ok(paths
        .into_iter()
        .map(|path| {
            let title = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default();
            Slide::new(title).with_image(path)
        })
        .collect())
}
