//! Import identifier derivation for local asset paths.
//!
//! Follows the npm `camel-case` package's word model so identifiers match
//! the ones the site's previous build pipeline generated for the same
//! paths.

/// Camel-cases a path-like string into an import identifier.
///
/// Words are the ASCII-alphanumeric runs of the input, split further at a
/// lowercase-or-digit to uppercase transition and before the last capital
/// of an acronym run. The first word is lowercased; subsequent words are
/// lowercased with their first letter capitalized.
///
/// # Examples
///
/// ```
/// use mdast_gallery::ident::camel_case;
///
/// assert_eq!(camel_case("./img/cat.png"), "imgCatPng");
/// assert_eq!(camel_case("./photo.jpg"), "photoJpg");
/// ```
pub fn camel_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for (i, word) in split_words(input).into_iter().enumerate() {
        let lower = word.to_ascii_lowercase();
        if i == 0 {
            out.push_str(&lower);
        } else {
            let mut chars = lower.chars();
            if let Some(head) = chars.next() {
                out.push(head.to_ascii_uppercase());
                out.push_str(chars.as_str());
            }
        }
    }
    out
}

fn split_words(input: &str) -> Vec<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_ascii_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if !current.is_empty() {
            // current is non-empty, so the previous char was alphanumeric
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase());
            let boundary = c.is_ascii_uppercase()
                && (prev.is_ascii_lowercase()
                    || prev.is_ascii_digit()
                    || (prev.is_ascii_uppercase() && next_is_lower));
            if boundary {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Parity with the npm `camel-case` package for path-like inputs.
    #[test]
    fn camel_case_parity() {
        let cases: Vec<(&str, &str)> = vec![
            ("./photo.jpg", "photoJpg"),
            ("./img/cat.png", "imgCatPng"),
            ("./assets/my-photo.jpeg", "assetsMyPhotoJpeg"),
            ("../shared/Header.svelte", "sharedHeaderSvelte"),
            ("./a.png", "aPng"),
            ("foo", "foo"),
            ("FOO", "foo"),
            ("XMLHttpRequest", "xmlHttpRequest"),
            ("version2Final", "version2Final"),
            ("snake_case_name", "snakeCaseName"),
        ];

        for (input, expected) in &cases {
            let actual = camel_case(input);
            assert_eq!(
                &actual, expected,
                "Mismatch for {:?}: got {:?}, expected {:?}",
                input, actual, expected
            );
        }
    }

    #[test]
    fn empty_and_delimiter_only_inputs() {
        assert_eq!(camel_case(""), "");
        assert_eq!(camel_case("./"), "");
        assert_eq!(camel_case("---"), "");
    }
}
