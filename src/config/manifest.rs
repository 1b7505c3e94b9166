// SPDX-License-Identifier: MPL-2.0
//! Gallery manifest files.
//!
//! A manifest lists the images of one gallery in display order:
//!
//! ```toml
//! [[images]]
//! url = "https://example.org/harbour.jpg"
//! title = "Harbour"
//! author = "A. Painter"
//!
//! [[images]]
//! url = "https://example.org/dunes.jpg"
//! ```

use crate::domain::gallery::Image;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Default, Serialize, Deserialize)]
struct Manifest {
    #[serde(default)]
    images: Vec<ImageEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ImageEntry {
    url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    author: Option<String>,
}

impl From<ImageEntry> for Image {
    fn from(entry: ImageEntry) -> Self {
        Image {
            url: entry.url,
            title: entry.title,
            description: entry.description,
            date: entry.date,
            location: entry.location,
            author: entry.author,
        }
    }
}

impl From<&Image> for ImageEntry {
    fn from(image: &Image) -> Self {
        ImageEntry {
            url: image.url.clone(),
            title: image.title.clone(),
            description: image.description.clone(),
            date: image.date.clone(),
            location: image.location.clone(),
            author: image.author.clone(),
        }
    }
}

/// Parses manifest text into images, keeping their order.
///
/// An empty `images` list is valid here; the browser refuses to open it.
///
/// # Errors
///
/// Returns [`crate::error::Error::Config`] when the text is not a valid manifest.
pub fn parse(content: &str) -> Result<Vec<Image>> {
    let manifest: Manifest = toml::from_str(content)?;
    Ok(manifest.images.into_iter().map(Image::from).collect())
}

/// Reads a manifest file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_from_path(path: &Path) -> Result<Vec<Image>> {
    let content = fs::read_to_string(path)?;
    parse(&content)
}

/// Writes images as a manifest file, creating parent directories.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn save_to_path(images: &[Image], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let manifest = Manifest {
        images: images.iter().map(ImageEntry::from).collect(),
    };
    fs::write(path, toml::to_string_pretty(&manifest)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn parse_keeps_order_and_optional_fields() {
        let images = parse(
            r#"
            [[images]]
            url = "a.jpg"
            title = "A"
            author = "Ann"

            [[images]]
            url = "b.jpg"
            "#,
        )
        .expect("valid manifest");

        assert_eq!(images.len(), 2);
        assert_eq!(images[0].title.as_deref(), Some("A"));
        assert_eq!(images[0].author.as_deref(), Some("Ann"));
        assert_eq!(images[1].url, "b.jpg");
        assert!(images[1].title.is_none());
    }

    #[test]
    fn empty_manifest_parses_to_no_images() {
        assert!(parse("").expect("valid manifest").is_empty());
    }

    #[test]
    fn missing_url_is_a_config_error() {
        let result = parse("[[images]]\ntitle = \"no url\"\n");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn save_then_load_returns_same_images() {
        let images = vec![
            Image::new("one.png").with_title("One").with_location("Lisbon"),
            Image::new("two.png").with_date("2019-05-01"),
        ];
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("galleries").join("trip.toml");

        save_to_path(&images, &path).expect("save should succeed");
        assert_eq!(load_from_path(&path).expect("load should succeed"), images);
    }
}
