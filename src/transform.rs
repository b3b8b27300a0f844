//! The gallery transform pass: visits the tree, rewrites matched lists into
//! embedded component markup, and prepends import headers.

use crate::codegen::gallery_component;
use crate::error::GalleryError;
use crate::extract::{extract_rows, is_gallery_list};
use crate::imports::{ImportBinding, bind_local_assets, merge_bindings, render_header};
use crate::media::{GalleryMatrix, classify};
use markdown::mdast::{Html, List, Node};

/// Options for the gallery pass.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct GalleryOptions {
    /// Merge import headers across galleries instead of prepending one per
    /// gallery, dropping repeated asset bindings. Off by default: each
    /// gallery prepends its own independent header.
    #[serde(default)]
    pub dedupe_imports: bool,
}

/// The computed rewrite for one matched gallery, before any tree mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryRewrite {
    /// Markup replacing the matched list node.
    pub markup: String,
    /// Import bindings for the gallery's local assets, in row-major order.
    pub bindings: Vec<ImportBinding>,
}

impl GalleryRewrite {
    /// Renders this gallery's own `<script>` header.
    pub fn header(&self) -> String {
        render_header(&self.bindings)
    }
}

/// Computes the rewrite for a matched gallery list without touching the tree.
///
/// Extraction, classification, asset binding, and codegen all run here over
/// transient values; applying the result to the tree is the orchestrator's
/// job alone.
pub fn rewrite_gallery(list: &List) -> Result<GalleryRewrite, GalleryError> {
    let mut matrix: GalleryMatrix = extract_rows(list)?
        .into_iter()
        .map(|row| row.into_iter().map(classify).collect())
        .collect();

    let bindings = bind_local_assets(&mut matrix);

    Ok(GalleryRewrite {
        markup: gallery_component(&matrix),
        bindings,
    })
}

/// Single-pass gallery transform over one parsed document tree.
#[derive(Debug, Clone, Default)]
pub struct GalleryTransform {
    options: GalleryOptions,
    file: Option<String>,
}

impl GalleryTransform {
    /// Creates a transform with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a transform with explicit options.
    pub fn with_options(options: GalleryOptions) -> Self {
        Self {
            options,
            file: None,
        }
    }

    /// Attaches the host-supplied file identifier, used in diagnostics only.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Rewrites every gallery block in the tree and prepends import headers.
    ///
    /// Returns the number of galleries rewritten. A rewritten node becomes
    /// an opaque [`Html`] node, so running the pass again over its own
    /// output is a no-op. Structural violations of the gallery micro-syntax
    /// abort the pass with a [`GalleryError::StructuralMismatch`].
    pub fn transform(&self, root: &mut Node) -> Result<usize, GalleryError> {
        let mut binding_sets = Vec::new();
        self.visit(root, &mut binding_sets)
            .map_err(|err| self.locate(err))?;

        let count = binding_sets.len();
        if count == 0 {
            return Ok(0);
        }

        if let Some(children) = root.children_mut() {
            if self.options.dedupe_imports {
                let merged = merge_bindings(binding_sets);
                children.insert(0, header_node(render_header(&merged)));
            } else {
                // One prepend per gallery in match order, so with several
                // galleries the later headers land first.
                for bindings in &binding_sets {
                    children.insert(0, header_node(render_header(bindings)));
                }
            }
        }

        Ok(count)
    }

    fn visit(
        &self,
        node: &mut Node,
        binding_sets: &mut Vec<Vec<ImportBinding>>,
    ) -> Result<(), GalleryError> {
        if let Node::List(list) = node {
            if is_gallery_list(list) {
                let GalleryRewrite { markup, bindings } = rewrite_gallery(list)?;
                log::debug!(
                    "rewrote gallery block into <Gallery> markup ({} local assets)",
                    bindings.len()
                );
                *node = Node::Html(Html {
                    value: markup,
                    position: None,
                });
                binding_sets.push(bindings);
                return Ok(());
            }
        }

        if let Some(children) = node.children_mut() {
            for child in children.iter_mut() {
                self.visit(child, binding_sets)?;
            }
        }
        Ok(())
    }

    fn locate(&self, err: GalleryError) -> GalleryError {
        match &self.file {
            Some(file) => err.with_file(file),
            None => err,
        }
    }
}

fn header_node(value: String) -> Node {
    Node::Html(Html {
        value,
        position: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_list(source: &str) -> List {
        let root = markdown::to_mdast(source, &markdown::ParseOptions::default()).unwrap();
        match root.children().unwrap().first() {
            Some(Node::List(list)) => list.clone(),
            other => panic!("expected a list, got {:?}", other),
        }
    }

    #[test]
    fn rewrite_is_computed_without_tree_mutation() {
        let list = first_list("- gallery\n  - ![](./photo.jpg)\n");
        let rewrite = rewrite_gallery(&list).unwrap();

        assert_eq!(
            rewrite.markup,
            "<Gallery media={[[{kind:'img',src:photoJpg,alt:''}]]} />"
        );
        assert_eq!(rewrite.bindings.len(), 1);
        assert!(rewrite.header().contains("import photoJpg from './photo.jpg'"));
    }
}
