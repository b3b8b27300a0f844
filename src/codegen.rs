//! Serialization of a gallery matrix into `<Gallery>` component markup.

use crate::media::{GalleryMatrix, MediaItem, SrcRef};
use std::fmt::Write as _;

/// Wraps the serialized matrix in the component invocation.
pub fn gallery_component(matrix: &GalleryMatrix) -> String {
    format!("<Gallery media={{{}}} />", media_literal(matrix))
}

/// Renders the matrix as a 2-D JS array literal of media records.
///
/// Record keys are bare. [`SrcRef::Identifier`] sources are rendered bare
/// so they resolve against the import header; literal sources and alt text
/// are single-quoted JS strings.
pub fn media_literal(matrix: &GalleryMatrix) -> String {
    let mut out = String::from("[");
    for (i, row) in matrix.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push('[');
        for (j, item) in row.iter().enumerate() {
            if j > 0 {
                out.push(',');
            }
            push_item(&mut out, item);
        }
        out.push(']');
    }
    out.push(']');
    out
}

fn push_item(out: &mut String, item: &MediaItem) {
    out.push('{');
    write!(out, "kind:{}", single_quoted(item.kind.as_str())).ok();
    match &item.src {
        SrcRef::Identifier(name) => {
            write!(out, ",src:{}", name).ok();
        }
        SrcRef::Literal(value) => {
            write!(out, ",src:{}", single_quoted(value)).ok();
        }
    }
    if let Some(alt) = &item.alt {
        write!(out, ",alt:{}", single_quoted(alt)).ok();
    }
    out.push('}');
}

/// Converts a value to a single-quoted JS string literal.
///
/// serde_json handles backslash and control-character escaping; the
/// double-quote escapes are then rewritten for single-quoted form.
pub fn single_quoted(value: &str) -> String {
    let json = serde_json::to_string(value).unwrap_or_else(|_| String::from("\"\""));
    let inner = &json[1..json.len() - 1];
    format!("'{}'", inner.replace("\\\"", "\"").replace('\'', "\\'"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::MediaKind;

    #[test]
    fn identifier_src_is_rendered_bare() {
        let matrix = vec![vec![MediaItem {
            kind: MediaKind::Img,
            src: SrcRef::Identifier("photoJpg".into()),
            alt: Some(String::new()),
        }]];
        assert_eq!(
            gallery_component(&matrix),
            "<Gallery media={[[{kind:'img',src:photoJpg,alt:''}]]} />"
        );
    }

    #[test]
    fn literal_src_stays_quoted_even_without_http_prefix() {
        let matrix = vec![vec![MediaItem {
            kind: MediaKind::Video,
            src: SrcRef::Literal("12345".into()),
            alt: None,
        }]];
        assert_eq!(
            gallery_component(&matrix),
            "<Gallery media={[[{kind:'video',src:'12345'}]]} />"
        );
    }

    #[test]
    fn rows_and_items_keep_their_order() {
        let matrix = vec![
            vec![
                MediaItem {
                    kind: MediaKind::Iframe,
                    src: SrcRef::Literal("https://example.com/a".into()),
                    alt: None,
                },
                MediaItem {
                    kind: MediaKind::Video,
                    src: SrcRef::Literal("98765".into()),
                    alt: None,
                },
            ],
            vec![MediaItem {
                kind: MediaKind::Component,
                src: SrcRef::Identifier("Foo.svelte".into()),
                alt: None,
            }],
        ];
        assert_eq!(
            media_literal(&matrix),
            "[[{kind:'iframe',src:'https://example.com/a'},{kind:'video',src:'98765'}],\
             [{kind:'component',src:Foo.svelte}]]"
        );
    }

    #[test]
    fn alt_text_is_escaped_for_single_quotes() {
        assert_eq!(single_quoted("cat's"), "'cat\\'s'");
        assert_eq!(single_quoted("say \"hi\""), "'say \"hi\"'");
        assert_eq!(single_quoted("a\\b"), "'a\\\\b'");
        assert_eq!(single_quoted("line\nbreak"), "'line\\nbreak'");
    }

    #[test]
    fn empty_matrix_and_empty_row() {
        assert_eq!(media_literal(&Vec::new()), "[]");
        assert_eq!(media_literal(&vec![Vec::new()]), "[[]]");
    }
}
