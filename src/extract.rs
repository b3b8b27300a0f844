//! Gallery block detection and row extraction.

use crate::error::GalleryError;
use crate::shape;
use markdown::mdast::{List, Node};

/// A single image reference pulled out of a gallery row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageDescriptor {
    /// Image destination url.
    pub url: String,
    /// Alt text, which may carry a media-kind sentinel.
    pub alt: String,
}

/// Returns true when the list is a gallery block: a single wrapping item
/// whose leading text reads `gallery`, compared case-insensitively.
///
/// Total over all lists; any other shape is simply not a gallery.
pub fn is_gallery_list(list: &List) -> bool {
    shape::sole_list_item(list)
        .and_then(shape::first_paragraph)
        .and_then(shape::leading_text)
        .map(|text| text.eq_ignore_ascii_case("gallery"))
        .unwrap_or(false)
}

/// Walks a matched gallery list into ordered rows of image descriptors.
///
/// Non-image inline content (dividers and the like) is silently dropped, so
/// a row whose paragraph holds no image yields an empty row. The nested row
/// list and the per-row paragraphs are preconditions; their absence aborts
/// with a structural mismatch.
pub fn extract_rows(list: &List) -> Result<Vec<Vec<ImageDescriptor>>, GalleryError> {
    let wrapper = shape::sole_list_item(list)?;
    let rows = shape::nested_list(wrapper)?;

    rows.children
        .iter()
        .map(|row| {
            let item = shape::row_item(row)?;
            let paragraph = shape::first_paragraph(item)?;
            Ok(paragraph
                .children
                .iter()
                .filter_map(|inline| match inline {
                    Node::Image(image) => Some(ImageDescriptor {
                        url: image.url.clone(),
                        alt: image.alt.clone(),
                    }),
                    _ => None,
                })
                .collect())
        })
        .collect()
}
