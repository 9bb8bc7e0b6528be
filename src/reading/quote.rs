use super::token::WordToken;

/// Lowercased alphanumerics only, so "Don't," and "dont" compare equal.
fn normalize(word: &str) -> String {
    word.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Locates `quote` in the token stream and returns the index of the token
/// holding its final word.
///
/// Matching ignores case and punctuation, and tokens with no alphanumeric
/// content (stand-alone dashes, ellipses) are skipped on both sides. When
/// the quote occurs more than once the last occurrence wins.
pub fn find_quote_index(tokens: &[WordToken], quote: &str) -> Option<usize> {
    let needle: Vec<String> = quote
        .split_whitespace()
        .map(normalize)
        .filter(|word| !word.is_empty())
        .collect();
    if needle.is_empty() {
        return None;
    }

    let haystack: Vec<(usize, String)> = tokens
        .iter()
        .enumerate()
        .map(|(i, token)| (i, normalize(&token.text)))
        .filter(|(_, word)| !word.is_empty())
        .collect();
    if haystack.len() < needle.len() {
        return None;
    }

    (0..=haystack.len() - needle.len())
        .rev()
        .find(|&start| {
            haystack[start..start + needle.len()]
                .iter()
                .zip(&needle)
                .all(|((_, word), expected)| word == expected)
        })
        .map(|start| haystack[start + needle.len() - 1].0)
}
