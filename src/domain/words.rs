//! Word counting over markdown content

use pulldown_cmark::{Event, Parser as MdParser, TagEnd};

/// Count words in the rendered text of a markdown document.
///
/// Markup (emphasis markers, heading hashes, link targets) is not counted;
/// inline code spans count as words.
pub fn count_words(markdown: &str) -> usize {
    let mut count = 0;
    let mut in_word = false;

    for event in MdParser::new(markdown) {
        let text = match event {
            Event::Text(text) | Event::Code(text) => text,
            Event::End(end) if is_inline(&end) => continue,
            Event::SoftBreak | Event::HardBreak | Event::End(_) => {
                in_word = false;
                continue;
            }
            _ => continue,
        };

        // Text events can split a single word (e.g. around entities), so
        // track word boundaries across consecutive events.
        for ch in text.chars() {
            if ch.is_whitespace() {
                in_word = false;
            } else if !in_word {
                in_word = true;
                count += 1;
            }
        }
    }

    count
}

fn is_inline(end: &TagEnd) -> bool {
    matches!(
        end,
        TagEnd::Emphasis | TagEnd::Strong | TagEnd::Strikethrough | TagEnd::Link | TagEnd::Image
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("   \n\n"), 0);
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(count_words("one two three"), 3);
    }

    #[test]
    fn test_markup_not_counted() {
        assert_eq!(count_words("# Morning\n\nFelt **really** good"), 4);
        assert_eq!(count_words("- first item\n- second item"), 4);
        assert_eq!(count_words("[a link](https://example.com) here"), 3);
    }

    #[test]
    fn test_paragraph_boundaries() {
        assert_eq!(count_words("end\n\nstart"), 2);
        assert_eq!(count_words("line\nwrap"), 2);
    }

    #[test]
    fn test_emphasis_inside_word() {
        assert_eq!(count_words("un**believ**able day"), 2);
    }

    #[test]
    fn test_inline_code() {
        assert_eq!(count_words("ran `cargo` today"), 3);
    }
}
