//! Safe accessors over the mdast shapes the gallery micro-syntax expects.
//!
//! The gallery grammar is positional: a marker item, a nested row list, a
//! leading paragraph per row. Each helper names one of those accesses and
//! turns a shape violation into a [`GalleryError::StructuralMismatch`]
//! carrying the nearest source position.

use crate::error::GalleryError;
use markdown::mdast::{List, ListItem, Node, Paragraph};

/// Returns the list's sole item, failing when it wraps anything else.
pub fn sole_list_item(list: &List) -> Result<&ListItem, GalleryError> {
    match list.children.as_slice() {
        [Node::ListItem(item)] => Ok(item),
        _ => Err(GalleryError::structural(
            "a list wrapping exactly one item",
            list.position.as_ref(),
        )),
    }
}

/// Returns the item's first child as a paragraph.
pub fn first_paragraph(item: &ListItem) -> Result<&Paragraph, GalleryError> {
    match item.children.first() {
        Some(Node::Paragraph(paragraph)) => Ok(paragraph),
        _ => Err(GalleryError::structural(
            "a leading paragraph in the list item",
            item.position.as_ref(),
        )),
    }
}

/// Returns the item's second child as a nested list holding the gallery rows.
pub fn nested_list(item: &ListItem) -> Result<&List, GalleryError> {
    match item.children.get(1) {
        Some(Node::List(list)) => Ok(list),
        _ => Err(GalleryError::structural(
            "a nested row list after the gallery marker",
            item.position.as_ref(),
        )),
    }
}

/// Returns the paragraph's first inline child as plain text.
pub fn leading_text(paragraph: &Paragraph) -> Result<&str, GalleryError> {
    match paragraph.children.first() {
        Some(Node::Text(text)) => Ok(&text.value),
        _ => Err(GalleryError::structural(
            "leading text in the paragraph",
            paragraph.position.as_ref(),
        )),
    }
}

/// Returns a row node as a list item.
pub fn row_item(node: &Node) -> Result<&ListItem, GalleryError> {
    match node {
        Node::ListItem(item) => Ok(item),
        other => Err(GalleryError::structural(
            "a list item per gallery row",
            other.position(),
        )),
    }
}
