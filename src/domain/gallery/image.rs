// SPDX-License-Identifier: MPL-2.0
//! Caller-owned image record.

/// A single image of the gallery as supplied by the caller.
///
/// Only `url` is required. The browser never interprets the optional fields;
/// they are shown verbatim in the info panel and footer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Image {
    pub url: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub location: Option<String>,
    pub author: Option<String>,
}

impl Image {
    /// Creates an image with only its URL set.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Alternative text for renderers: the description, if any.
    #[must_use]
    pub fn alt_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}
