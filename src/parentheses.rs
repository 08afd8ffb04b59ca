/// The opening bracket matched by `close`, or `None` if `close` is not a
/// closing bracket.
fn opener_for(close: char) -> Option<char> {
    match close {
        ')' => Some('('),
        ']' => Some('['),
        '}' => Some('{'),
        _ => None,
    }
}

fn is_opener(ch: char) -> bool {
    matches!(ch, '(' | '[' | '{')
}

/// `true` when every `()`, `[]` and `{}` in `s` is closed by the matching
/// bracket in the correct order.
///
/// Characters other than these six brackets are ignored.
pub fn is_valid(s: &str) -> bool {
    let mut stack = Vec::new();
    for ch in s.chars() {
        if is_opener(ch) {
            stack.push(ch);
        } else if let Some(open) = opener_for(ch) {
            if stack.pop() != Some(open) {
                return false;
            }
        }
    }
    stack.is_empty()
}

/// Validate by repeatedly deleting adjacent matched pairs until none remain.
///
/// Quadratic; kept as the reference the stack version is checked against.
pub fn is_valid_by_elimination(s: &str) -> bool {
    let mut brackets: String = s
        .chars()
        .filter(|&ch| is_opener(ch) || opener_for(ch).is_some())
        .collect();
    loop {
        let before = brackets.len();
        brackets = brackets
            .replace("()", "")
            .replace("[]", "")
            .replace("{}", "");
        if brackets.len() == before {
            return brackets.is_empty();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case("", true)]
    #[case("()", true)]
    #[case("()[]{}", true)]
    #[case("{[]}", true)]
    #[case("([{}])[]", true)]
    #[case("(]", false)]
    #[case("([)]", false)]
    #[case("(", false)]
    #[case(")", false)]
    #[case("(()", false)]
    #[case("]", false)]
    fn brackets_only(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(is_valid(input), expected);
        assert_eq!(is_valid_by_elimination(input), expected);
    }

    #[rstest]
    #[case("fn main() { let x = [1, 2]; }", true)]
    #[case("if (a[0] > b) {", false)]
    #[case("no brackets at all", true)]
    fn other_characters_are_ignored(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(is_valid(input), expected);
        assert_eq!(is_valid_by_elimination(input), expected);
    }

    proptest! {
        #[test]
        fn strategies_agree(s in "[\\(\\)\\[\\]\\{\\}]{0,16}") {
            prop_assert_eq!(is_valid(&s), is_valid_by_elimination(&s));
        }
    }
}
