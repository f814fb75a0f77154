//! Text normalization for upstream names.

/// Title-case a string.
///
/// The first letter of each word is upper-cased and the rest lower-cased.
/// Words start at the beginning of the text, after whitespace, and after `-`.
///
/// # Examples
///
/// ```
/// use ltc_server::domain::title_case;
///
/// assert_eq!(title_case("WHITE OAKS MALL"), "White Oaks Mall");
/// assert_eq!(title_case("north-east"), "North-East");
/// ```
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;

    for ch in text.chars() {
        if at_word_start {
            out.extend(ch.to_uppercase());
        } else {
            out.extend(ch.to_lowercase());
        }
        at_word_start = ch.is_whitespace() || ch == '-';
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalizes_each_word() {
        assert_eq!(title_case("main st"), "Main St");
        assert_eq!(title_case("MAIN ST"), "Main St");
        assert_eq!(title_case("mAiN sT"), "Main St");
    }

    #[test]
    fn hyphen_starts_a_word() {
        assert_eq!(title_case("2 - downtown b line"), "2 - Downtown B Line");
        assert_eq!(title_case("WONDERLAND-SOUTH"), "Wonderland-South");
    }

    #[test]
    fn other_punctuation_does_not_start_a_word() {
        assert_eq!(title_case("king's college"), "King's College");
        assert_eq!(title_case("3RD AVE"), "3rd Ave");
        assert_eq!(title_case("FANSHAWE/OXFORD"), "Fanshawe/oxford");
    }

    #[test]
    fn preserves_whitespace() {
        assert_eq!(title_case("  a  b "), "  A  B ");
        assert_eq!(title_case("a\tb"), "A\tB");
    }

    #[test]
    fn empty_string() {
        assert_eq!(title_case(""), "");
    }
}
