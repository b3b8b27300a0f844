#![deny(missing_docs)]
//! Gallery block transform for markdown ASTs.
//!
//! A single-pass transform over an mdast tree ([`markdown::mdast::Node`])
//! that locates single-item lists marked with the word `gallery`, extracts
//! the nested rows of images they wrap, and rewrites each matched list into
//! an embeddable `<Gallery media={…} />` invocation. Locally-referenced
//! assets get import bindings, emitted as a `<script>` header prepended to
//! the document.
//!
//! Parsing markdown, rendering the generated component, and resolving asset
//! paths on a filesystem are host-pipeline concerns and stay outside this
//! crate.

/// Component markup serialization.
pub mod codegen;
/// Error and diagnostic types.
pub mod error;
/// Gallery detection and row extraction.
pub mod extract;
/// Import identifier derivation.
pub mod ident;
/// Local-asset import bindings and header rendering.
pub mod imports;
/// Media item types and alt-text classification.
pub mod media;
/// Safe accessors over expected mdast shapes.
pub mod shape;
/// The tree-visiting transform pass.
pub mod transform;

pub use codegen::{gallery_component, media_literal};
pub use error::{GalleryError, SourceLocation};
pub use extract::{ImageDescriptor, extract_rows, is_gallery_list};
pub use imports::{ImportBinding, bind_local_assets, derive_identifier, render_header};
pub use media::{GalleryMatrix, MediaItem, MediaKind, SrcRef, classify};
pub use transform::{GalleryOptions, GalleryRewrite, GalleryTransform, rewrite_gallery};
