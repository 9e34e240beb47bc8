// SPDX-License-Identifier: MPL-2.0
//! Art piece value type.

/// One artwork shown by the gallery.
///
/// Art pieces are created once when the gallery asset is loaded and never
/// mutated afterwards. Two pieces are equal when all three fields match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtPiece {
    title: String,
    author: String,
    image_url: String,
}

impl ArtPiece {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            image_url: image_url.into(),
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Image reference: an `http(s)://` URL, a `file://` URL or a file path.
    #[must_use]
    pub fn image_url(&self) -> &str {
        &self.image_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_return_constructor_values() {
        let piece = ArtPiece::new("Starry Night", "Vincent van Gogh", "starry.jpg");
        assert_eq!(piece.title(), "Starry Night");
        assert_eq!(piece.author(), "Vincent van Gogh");
        assert_eq!(piece.image_url(), "starry.jpg");
    }

    #[test]
    fn equality_is_structural() {
        let a = ArtPiece::new("Title", "Author", "a.png");
        let b = ArtPiece::new("Title", "Author", "a.png");
        let c = ArtPiece::new("Title", "Author", "c.png");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
