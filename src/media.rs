//! Media item types and alt-text classification.

use crate::extract::ImageDescriptor;

/// Fixed prefix of vimeo video urls; the suffix is the video id.
const VIMEO_PREFIX: &str = "https://vimeo.com/";

/// The kind of media a gallery entry renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    /// Plain image.
    Img,
    /// Embedded iframe.
    Iframe,
    /// Vimeo video referenced by id.
    Video,
    /// Arbitrary component reference.
    Component,
}

impl MediaKind {
    /// Literal tag used in the generated media records.
    pub fn as_str(self) -> &'static str {
        match self {
            MediaKind::Img => "img",
            MediaKind::Iframe => "iframe",
            MediaKind::Video => "video",
            MediaKind::Component => "component",
        }
    }
}

/// A media source: either a string literal or a bound import identifier.
///
/// Classification always produces literals; the asset importer swaps local
/// paths for identifiers, so codegen can render them unquoted without
/// guessing from the value itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SrcRef {
    /// Source rendered as a quoted string literal.
    Literal(String),
    /// Bare identifier resolving to an import binding.
    Identifier(String),
}

/// One classified gallery entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaItem {
    /// Media kind selected by the alt-text sentinel.
    pub kind: MediaKind,
    /// Source reference.
    pub src: SrcRef,
    /// Alt text, present only for [`MediaKind::Img`].
    pub alt: Option<String>,
}

/// Rows of classified media items, order preserved from the source.
pub type GalleryMatrix = Vec<Vec<MediaItem>>;

/// Classifies one image descriptor by its alt-text sentinel.
///
/// The sentinel comparison is case-insensitive. Anything that is not a
/// sentinel (including an empty alt) is a plain image with its alt text
/// preserved verbatim.
pub fn classify(descriptor: ImageDescriptor) -> MediaItem {
    let ImageDescriptor { url, alt } = descriptor;

    if alt.eq_ignore_ascii_case(":iframe:") {
        return MediaItem {
            kind: MediaKind::Iframe,
            src: SrcRef::Literal(url),
            alt: None,
        };
    }

    if alt.eq_ignore_ascii_case(":video:") {
        let id = match url.strip_prefix(VIMEO_PREFIX) {
            Some(rest) => rest.to_string(),
            None => url,
        };
        return MediaItem {
            kind: MediaKind::Video,
            src: SrcRef::Literal(id),
            alt: None,
        };
    }

    if alt.eq_ignore_ascii_case(":component:") {
        return MediaItem {
            kind: MediaKind::Component,
            src: SrcRef::Literal(url),
            alt: None,
        };
    }

    MediaItem {
        kind: MediaKind::Img,
        src: SrcRef::Literal(url),
        alt: Some(alt),
    }
}
