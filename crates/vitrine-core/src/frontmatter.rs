//! Frontmatter parsing for collection entries.

use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Frontmatter shared by pages, posts, and glass types.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryFrontmatter {
    /// Entry title (required).
    #[serde(default)]
    pub title: String,

    /// Optional hero media.
    #[serde(default)]
    pub featured_media: FeaturedMedia,

    /// Description for search engine optimization.
    #[serde(default)]
    pub description: Option<String>,

    /// Keyphrase for search engine optimization.
    #[serde(default)]
    pub seo_keyphrase: Option<String>,

    /// Comma separated list of keywords.
    #[serde(default)]
    pub seo_keywords: Option<String>,

    /// Title to use in the navigation menu.
    #[serde(default)]
    pub navigation_title: Option<String>,

    /// Publication date.
    #[serde(default)]
    pub published_at: Option<NaiveDate>,

    /// Last updated date.
    #[serde(default)]
    pub updated_at: Option<NaiveDate>,
}

/// Optional image or video attached to an entry.
///
/// Stored as `{ discriminant: image, value: { ... } }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "discriminant", content = "value", rename_all = "lowercase")]
pub enum FeaturedMedia {
    /// No media.
    #[default]
    None,
    /// A hero image.
    Image(ImageMedia),
    /// A video with an optional thumbnail override.
    Video(VideoMedia),
}

/// Image asset with alt text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageMedia {
    /// Asset path under the image directory.
    #[serde(default)]
    pub asset: String,
    /// Image alt text.
    #[serde(default)]
    pub alt: Option<String>,
}

/// Video reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoMedia {
    /// A YouTube video URL.
    #[serde(default)]
    pub url: Option<String>,
    /// Thumbnail image override for the video.
    #[serde(default)]
    pub image: Option<VideoThumbnail>,
}

/// Thumbnail override; unlike [`ImageMedia`] the asset may be left empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoThumbnail {
    #[serde(default)]
    pub asset: Option<String>,
    #[serde(default)]
    pub alt: Option<String>,
}

/// Delimiter types for frontmatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontmatterFormat {
    /// YAML frontmatter delimited by `---`.
    Yaml,
    /// TOML frontmatter delimited by `+++`.
    Toml,
}

impl FrontmatterFormat {
    /// Get the delimiter string for this format.
    pub fn delimiter(&self) -> &'static str {
        match self {
            Self::Yaml => "---",
            Self::Toml => "+++",
        }
    }
}

/// Split content into frontmatter and body.
pub fn split_frontmatter(content: &str) -> Option<(FrontmatterFormat, &str, &str)> {
    let content = content.trim_start();

    let format = if content.starts_with("---") {
        FrontmatterFormat::Yaml
    } else if content.starts_with("+++") {
        FrontmatterFormat::Toml
    } else {
        return None;
    };

    let delimiter = format.delimiter();

    let after_first = &content[delimiter.len()..];
    let (start, end) = closing_line(after_first, delimiter)?;

    let frontmatter = after_first[..start].trim();
    let body = after_first[end..].trim_start();

    Some((format, frontmatter, body))
}

/// Byte range of the first line that holds only the delimiter.
///
/// The first line is the rest of the opening delimiter line and never closes.
fn closing_line(s: &str, delimiter: &str) -> Option<(usize, usize)> {
    let mut offset = 0;
    for line in s.split_inclusive('\n') {
        if offset > 0 && line.trim_end() == delimiter {
            return Some((offset, offset + line.len()));
        }
        offset += line.len();
    }
    None
}

/// Parse entry frontmatter from a file's content.
///
/// A file without frontmatter yields the default frontmatter and the whole
/// content as body; callers decide whether that is acceptable.
pub fn parse_frontmatter(content: &str, path: &Path) -> Result<(EntryFrontmatter, String)> {
    let Some((format, fm_str, body)) = split_frontmatter(content) else {
        return Ok((EntryFrontmatter::default(), content.to_string()));
    };

    if fm_str.is_empty() {
        return Ok((EntryFrontmatter::default(), body.to_string()));
    }

    let frontmatter: EntryFrontmatter = match format {
        FrontmatterFormat::Yaml => {
            serde_yaml::from_str(fm_str).map_err(|e| CoreError::frontmatter(path, e.to_string()))?
        }
        FrontmatterFormat::Toml => {
            toml::from_str(fm_str).map_err(|e| CoreError::frontmatter(path, e.to_string()))?
        }
    };

    Ok((frontmatter, body.to_string()))
}

impl EntryFrontmatter {
    /// Validate required fields.
    pub fn validate(&self, path: &Path) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(CoreError::frontmatter(path, "title is required"));
        }

        match &self.featured_media {
            FeaturedMedia::Image(image) if image.asset.trim().is_empty() => {
                return Err(CoreError::frontmatter(
                    path,
                    "featuredMedia image requires an asset",
                ));
            }
            FeaturedMedia::Video(VideoMedia { url: Some(url), .. })
                if !url.is_empty() && !is_http_url(url) =>
            {
                return Err(CoreError::frontmatter(
                    path,
                    format!("featuredMedia video url is not an absolute http(s) url: {url}"),
                ));
            }
            _ => {}
        }

        Ok(())
    }
}

fn is_http_url(url: &str) -> bool {
    url.strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .is_some_and(|rest| !rest.is_empty())
}
