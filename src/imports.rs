//! Local-asset import bindings and the generated `<script>` header.

use crate::ident::camel_case;
use crate::media::{GalleryMatrix, MediaKind, SrcRef};
use std::collections::HashSet;

// Framework imports every gallery document ends with.
const GALLERY_IMPORT: &str = "import Gallery from \"$lib/components/Gallery.svelte\"";
const TAG_LIST_IMPORT: &str = "import TagList from \"$lib/components/TagList.svelte\"";

/// An import synthesized for a locally-referenced asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportBinding {
    /// Identifier the generated markup refers to.
    pub identifier: String,
    /// Relative path the identifier is imported from.
    pub path: String,
}

/// Derives the import identifier for a local media source.
///
/// Component sources keep their final path segment verbatim; every other
/// kind camel-cases the full path.
pub fn derive_identifier(kind: MediaKind, path: &str) -> String {
    match kind {
        MediaKind::Component => path.rsplit('/').next().unwrap_or(path).to_string(),
        _ => camel_case(path),
    }
}

/// Rebinds every local source in the matrix to an import identifier.
///
/// A source is local when its literal contains `./`. Items are visited in
/// row-major order and mutated in place; the returned bindings follow the
/// same order. Remote and other non-local sources are untouched.
pub fn bind_local_assets(matrix: &mut GalleryMatrix) -> Vec<ImportBinding> {
    let mut bindings = Vec::new();

    for item in matrix.iter_mut().flatten() {
        let SrcRef::Literal(path) = &item.src else {
            continue;
        };
        if !path.contains("./") {
            continue;
        }

        let identifier = derive_identifier(item.kind, path);
        bindings.push(ImportBinding {
            identifier: identifier.clone(),
            path: path.clone(),
        });
        item.src = SrcRef::Identifier(identifier);
    }

    bindings
}

/// Renders the `<script>` header for a set of bindings.
///
/// Asset imports come first in binding order, then the fixed Gallery and
/// TagList component imports. The template matches the site's previous
/// build pipeline byte for byte, including the blank line left when no
/// asset was bound.
pub fn render_header(bindings: &[ImportBinding]) -> String {
    let imports: Vec<String> = bindings
        .iter()
        .map(|binding| format!("import {} from '{}'", binding.identifier, binding.path))
        .collect();

    format!(
        "<script>\n{}\n{}\n{}\n</script>",
        imports.join("\n"),
        GALLERY_IMPORT,
        TAG_LIST_IMPORT
    )
}

/// Merges binding sets from several galleries, keeping the first occurrence
/// of each path in encounter order.
pub fn merge_bindings(sets: impl IntoIterator<Item = Vec<ImportBinding>>) -> Vec<ImportBinding> {
    let mut seen = HashSet::new();
    let mut merged = Vec::new();
    for bindings in sets {
        for binding in bindings {
            if seen.insert(binding.path.clone()) {
                merged.push(binding);
            }
        }
    }
    merged
}
