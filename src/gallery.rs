use std::sync::LazyLock;

use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Horizontal distance covered by one click on a gallery scroll button.
pub const SCROLL_STEP: f64 = 320.0;

const MANIFEST: &str = "certifications.json";

#[derive(Embed)]
#[folder = "content"]
pub struct Content;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    pub id: String,
    pub title: String,
    pub issuer: String,
    /// Site-relative path of the certificate image.
    pub image: String,
}

#[derive(Error, Debug)]
pub enum GalleryError {
    #[error("certification manifest is missing")]
    Missing,
    #[error("couldn't parse certification manifest: {0}")]
    Parse(#[from] serde_json::Error),
}

pub fn load_catalog() -> Result<Vec<Certification>, GalleryError> {
    let file = Content::get(MANIFEST).ok_or(GalleryError::Missing)?;
    Ok(serde_json::from_slice(&file.data)?)
}

static CATALOG: LazyLock<Vec<Certification>> = LazyLock::new(|| {
    load_catalog().unwrap_or_else(|e| {
        log::error!("{e}");
        Vec::new()
    })
});

pub fn catalog() -> &'static [Certification] {
    &CATALOG
}

/// Translates a vertical wheel delta into a horizontal scroll distance.
///
/// `None` means the event is left alone.
pub fn wheel_to_horizontal(delta_y: f64) -> Option<f64> {
    (delta_y != 0.0).then_some(delta_y)
}

/// What a click on the open overlay landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayClick {
    /// The overlay element itself.
    Backdrop,
    /// Anything inside it, such as the image.
    Content,
}

/// The shared certificate viewer. Shows at most one image.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Overlay {
    #[default]
    Closed,
    Open { image: String },
}

impl Overlay {
    pub fn open(&mut self, image: impl Into<String>) {
        *self = Self::Open {
            image: image.into(),
        };
    }

    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    /// Closes only when the click hit the backdrop. Returns whether it closed.
    pub fn click(&mut self, target: OverlayClick) -> bool {
        if target == OverlayClick::Backdrop && self.is_open() {
            self.close();
            true
        } else {
            false
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    pub fn image(&self) -> Option<&str> {
        match self {
            Self::Open { image } => Some(image),
            Self::Closed => None,
        }
    }
}
