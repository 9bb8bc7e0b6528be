use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::token::{chapter_start, Section, WordToken};

/// Where a navigation request should land.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum NavigationTarget {
    Book,
    Chapter,
    PrevParagraph,
    PrevSentence,
    NextParagraph,
    NextSentence,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Boundary {
    Paragraph,
    Sentence,
}

impl Boundary {
    fn matches(self, token: &WordToken) -> bool {
        match self {
            Boundary::Paragraph => token.is_paragraph_start,
            Boundary::Sentence => token.is_sentence_start,
        }
    }
}

impl NavigationTarget {
    pub const ALL: [NavigationTarget; 6] = [
        NavigationTarget::Book,
        NavigationTarget::Chapter,
        NavigationTarget::PrevParagraph,
        NavigationTarget::PrevSentence,
        NavigationTarget::NextParagraph,
        NavigationTarget::NextSentence,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            NavigationTarget::Book => "book",
            NavigationTarget::Chapter => "chapter",
            NavigationTarget::PrevParagraph => "prev-paragraph",
            NavigationTarget::PrevSentence => "prev-sentence",
            NavigationTarget::NextParagraph => "next-paragraph",
            NavigationTarget::NextSentence => "next-sentence",
        }
    }
}

impl fmt::Display for NavigationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NavigationTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NavigationTarget::ALL
            .into_iter()
            .find(|target| target.as_str() == s)
            .ok_or_else(|| format!("unknown navigation target: {}", s))
    }
}

/// Nearest boundary at or before `from`, or strictly before it when `from`
/// is itself a boundary.
fn previous_boundary(tokens: &[WordToken], from: usize, boundary: Boundary) -> usize {
    let end = if boundary.matches(&tokens[from]) {
        from
    } else {
        from + 1
    };
    tokens[..end]
        .iter()
        .rposition(|token| boundary.matches(token))
        .unwrap_or(0)
}

/// First boundary after `from`, or `from` itself when there is none.
fn next_boundary(tokens: &[WordToken], from: usize, boundary: Boundary) -> usize {
    let start = from + 1;
    tokens
        .get(start..)
        .and_then(|rest| rest.iter().position(|token| boundary.matches(token)))
        .map(|pos| pos + start)
        .unwrap_or(from)
}

/// Resolves a navigation request to a token index.
///
/// The result is always within `[0, tokens.len() - 1]`; an empty token
/// sequence returns `current_index` unchanged.
pub fn calculate_navigation_target(
    current_index: usize,
    tokens: &[WordToken],
    sections: &[Section],
    target: NavigationTarget,
) -> usize {
    if tokens.is_empty() {
        return current_index;
    }
    let current = current_index.min(tokens.len() - 1);

    let index = match target {
        NavigationTarget::Book => 0,
        NavigationTarget::Chapter => chapter_start(sections, current),
        NavigationTarget::PrevParagraph => previous_boundary(tokens, current, Boundary::Paragraph),
        NavigationTarget::PrevSentence => previous_boundary(tokens, current, Boundary::Sentence),
        NavigationTarget::NextParagraph => next_boundary(tokens, current, Boundary::Paragraph),
        NavigationTarget::NextSentence => next_boundary(tokens, current, Boundary::Sentence),
    };

    index.min(tokens.len() - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Two paragraphs, three sentences:
    /// [0 One 1 two. 2 Three 3 four] [4 Five 5 six. 6 Seven]
    fn sample_tokens() -> Vec<WordToken> {
        vec![
            WordToken::new("One", true, true),
            WordToken::new("two.", false, false),
            WordToken::new("Three", false, true),
            WordToken::new("four", false, false),
            WordToken::new("Five", true, true),
            WordToken::new("six.", false, false),
            WordToken::new("Seven", false, true),
        ]
    }

    fn nav(current: usize, target: NavigationTarget) -> usize {
        calculate_navigation_target(current, &sample_tokens(), &[], target)
    }

    #[test]
    fn test_book_goes_to_start() {
        assert_eq!(nav(5, NavigationTarget::Book), 0);
    }

    #[test]
    fn test_chapter_goes_to_section_start() {
        let sections = vec![Section::new("One", 0), Section::new("Two", 4)];
        let tokens = sample_tokens();
        assert_eq!(
            calculate_navigation_target(6, &tokens, &sections, NavigationTarget::Chapter),
            4
        );
        assert_eq!(
            calculate_navigation_target(3, &tokens, &sections, NavigationTarget::Chapter),
            0
        );
    }

    #[test]
    fn test_chapter_without_sections() {
        assert_eq!(nav(6, NavigationTarget::Chapter), 0);
    }

    #[test]
    fn test_prev_sentence_from_inside_sentence() {
        assert_eq!(nav(3, NavigationTarget::PrevSentence), 2);
    }

    #[test]
    fn test_prev_sentence_from_sentence_start() {
        assert_eq!(nav(2, NavigationTarget::PrevSentence), 0);
        assert_eq!(nav(4, NavigationTarget::PrevSentence), 2);
    }

    #[test]
    fn test_prev_paragraph() {
        assert_eq!(nav(6, NavigationTarget::PrevParagraph), 4);
        assert_eq!(nav(4, NavigationTarget::PrevParagraph), 0);
        assert_eq!(nav(0, NavigationTarget::PrevParagraph), 0);
    }

    #[test]
    fn test_next_sentence() {
        assert_eq!(nav(0, NavigationTarget::NextSentence), 2);
        assert_eq!(nav(2, NavigationTarget::NextSentence), 4);
    }

    #[test]
    fn test_next_at_end_stays() {
        assert_eq!(nav(6, NavigationTarget::NextSentence), 6);
        assert_eq!(nav(5, NavigationTarget::NextParagraph), 5);
    }

    #[test]
    fn test_next_then_prev_paragraph_snaps_to_paragraph_start() {
        let tokens = sample_tokens();
        let next = calculate_navigation_target(1, &tokens, &[], NavigationTarget::NextParagraph);
        assert_eq!(next, 4);
        let back = calculate_navigation_target(next, &tokens, &[], NavigationTarget::PrevParagraph);
        assert_eq!(back, 0);
    }

    #[test]
    fn test_out_of_range_index_is_clamped() {
        assert_eq!(nav(99, NavigationTarget::NextSentence), 6);
        assert_eq!(nav(99, NavigationTarget::PrevSentence), 4);
    }

    #[test]
    fn test_empty_tokens_return_current() {
        for target in NavigationTarget::ALL {
            assert_eq!(calculate_navigation_target(7, &[], &[], target), 7);
        }
    }

    #[test]
    fn test_missing_boundaries_fall_back_to_zero() {
        let tokens = vec![
            WordToken::new("a", false, false),
            WordToken::new("b", false, false),
        ];
        assert_eq!(
            calculate_navigation_target(1, &tokens, &[], NavigationTarget::PrevParagraph),
            0
        );
    }

    #[test]
    fn test_target_names_round_trip() {
        for target in NavigationTarget::ALL {
            assert_eq!(target.to_string().parse::<NavigationTarget>(), Ok(target));
        }
        assert!("sideways".parse::<NavigationTarget>().is_err());
    }
}
