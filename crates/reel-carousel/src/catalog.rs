//! Slide Catalog
//!
//! Ordered, read-only list of clips. Order defines carousel order.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{CatalogError, Result};

/// One clip: video source, declared duration and caption lines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideDescriptor {
    pub id: u32,
    #[serde(rename = "video")]
    pub video_source: String,
    #[serde(rename = "videoDuration")]
    pub duration_seconds: f64,
    #[serde(rename = "textLists", default)]
    pub caption_lines: Vec<String>,
}

impl SlideDescriptor {
    pub fn new(id: u32, video_source: impl Into<String>, duration_seconds: f64) -> Self {
        Self {
            id,
            video_source: video_source.into(),
            duration_seconds,
            caption_lines: Vec::new(),
        }
    }
}

/// Validated, non-empty slide catalog
#[derive(Debug, Clone)]
pub struct SlideCatalog {
    slides: Vec<SlideDescriptor>,
}

impl SlideCatalog {
    pub fn new(slides: Vec<SlideDescriptor>) -> std::result::Result<Self, CatalogError> {
        if slides.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for slide in &slides {
            if !slide.duration_seconds.is_finite() || slide.duration_seconds <= 0.0 {
                return Err(CatalogError::InvalidDuration {
                    id: slide.id,
                    duration: slide.duration_seconds,
                });
            }
            if !seen.insert(slide.id) {
                return Err(CatalogError::DuplicateId(slide.id));
            }
        }

        Ok(Self { slides })
    }

    /// Parse a JSON array of slides
    pub fn from_json(json: &str) -> Result<Self> {
        let slides: Vec<SlideDescriptor> = serde_json::from_str(json)?;
        Ok(Self::new(slides)?)
    }

    /// Read and parse a catalog file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_json(&std::fs::read_to_string(path)?)
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always false for a constructed catalog
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn last_index(&self) -> usize {
        self.slides.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&SlideDescriptor> {
        self.slides.get(index)
    }

    /// Declared duration of clip `index` in seconds
    pub fn duration(&self, index: usize) -> Option<f64> {
        self.slides.get(index).map(|s| s.duration_seconds)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SlideDescriptor> {
        self.slides.iter()
    }

    pub fn total_duration(&self) -> f64 {
        self.slides.iter().map(|s| s.duration_seconds).sum()
    }
}
