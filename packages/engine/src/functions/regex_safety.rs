//! Static heuristics for patterns prone to catastrophic backtracking
//!
//! Three shapes are rejected: numeric backreferences, a quantified group whose
//! body is itself quantified (`(a+)+`), and a quantified group whose top-level
//! alternatives are literals where one is a prefix of another (`(a|aa)+`).

const LITERAL_METACHARACTERS: &[char] = &[
    '\\', '.', '[', ']', '(', ')', '{', '}', '*', '+', '?', '^', '$', '|',
];

/// Why `pattern` is considered unsafe, or `None` if no heuristic fires
#[must_use]
pub fn unsafe_pattern_reason(pattern: &str) -> Option<&'static str> {
    let chars: Vec<char> = pattern.chars().collect();

    if has_numeric_backreference(&chars) {
        return Some("numeric backreference");
    }

    for (open, close) in groups(&chars) {
        if !matches!(chars.get(close + 1), Some('+' | '*' | '{')) {
            continue;
        }
        let body = strip_non_capturing(&chars[open + 1..close]);
        if has_quantifier(body) {
            return Some("quantified group containing a quantifier");
        }
        if has_overlapping_alternatives(body) {
            return Some("quantified group with overlapping literal alternatives");
        }
    }

    None
}

fn has_numeric_backreference(chars: &[char]) -> bool {
    let mut i = 0;
    while i < chars.len() {
        if chars[i] == '\\' {
            if matches!(chars.get(i + 1), Some('1'..='9')) {
                return true;
            }
            i += 2;
        } else {
            i += 1;
        }
    }
    false
}

/// Calls `visit(index, char)` for every character that is neither escaped nor
/// inside a character class
fn scan_structural(chars: &[char], mut visit: impl FnMut(usize, char)) {
    let mut i = 0;
    let mut in_class = false;
    while i < chars.len() {
        match chars[i] {
            '\\' => {
                i += 2;
                continue;
            }
            '[' if !in_class => in_class = true,
            ']' if in_class => in_class = false,
            c if !in_class => visit(i, c),
            _ => {}
        }
        i += 1;
    }
}

/// `(open, close)` index pairs of every balanced group
fn groups(chars: &[char]) -> Vec<(usize, usize)> {
    let mut open = Vec::new();
    let mut pairs = Vec::new();
    scan_structural(chars, |i, c| match c {
        '(' => open.push(i),
        ')' => {
            if let Some(start) = open.pop() {
                pairs.push((start, i));
            }
        }
        _ => {}
    });
    pairs
}

fn strip_non_capturing(body: &[char]) -> &[char] {
    match body {
        ['?', ':', rest @ ..] => rest,
        _ => body,
    }
}

fn has_quantifier(body: &[char]) -> bool {
    let mut found = false;
    scan_structural(body, |_, c| found |= matches!(c, '+' | '*' | '{'));
    found
}

fn has_overlapping_alternatives(body: &[char]) -> bool {
    let mut depth = 0usize;
    let mut splits = Vec::new();
    scan_structural(body, |i, c| match c {
        '(' => depth += 1,
        ')' => depth = depth.saturating_sub(1),
        '|' if depth == 0 => splits.push(i),
        _ => {}
    });
    if splits.is_empty() {
        return false;
    }

    let mut alternatives = Vec::with_capacity(splits.len() + 1);
    let mut start = 0;
    for split in splits {
        alternatives.push(&body[start..split]);
        start = split + 1;
    }
    alternatives.push(&body[start..]);

    if alternatives
        .iter()
        .any(|alt| alt.iter().any(|c| LITERAL_METACHARACTERS.contains(c)))
    {
        return false;
    }

    alternatives.iter().enumerate().any(|(i, a)| {
        alternatives[i + 1..]
            .iter()
            .any(|b| a.starts_with(b) || b.starts_with(a))
    })
}

#[cfg(test)]
mod tests {
    use super::unsafe_pattern_reason;

    #[test]
    fn rejects_numeric_backreferences() {
        assert!(unsafe_pattern_reason(r"(a)\1").is_some());
        assert!(unsafe_pattern_reason(r"\\1").is_none());
    }

    #[test]
    fn rejects_nested_quantifiers() {
        assert!(unsafe_pattern_reason("(a+)+").is_some());
        assert!(unsafe_pattern_reason("(x*)*$").is_some());
        assert!(unsafe_pattern_reason("([a-z]+){2,}").is_some());
        assert!(unsafe_pattern_reason("(?:ab+)*").is_some());
    }

    #[test]
    fn quantifiers_in_classes_or_escaped_do_not_count() {
        assert!(unsafe_pattern_reason("([+*])+").is_none());
        assert!(unsafe_pattern_reason(r"(a\+)+").is_none());
    }

    #[test]
    fn rejects_overlapping_literal_alternatives() {
        assert!(unsafe_pattern_reason("(a|aa)+$").is_some());
        assert!(unsafe_pattern_reason("(?:ab|abc)*").is_some());
        assert!(unsafe_pattern_reason("(x|x)+").is_some());
    }

    #[test]
    fn accepts_ordinary_patterns() {
        assert!(unsafe_pattern_reason("^[a-z]+$").is_none());
        assert!(unsafe_pattern_reason("(ab|cd)+").is_none());
        assert!(unsafe_pattern_reason("(a|aa)").is_none());
        assert!(unsafe_pattern_reason("(a.|aa)+").is_none());
        assert!(unsafe_pattern_reason("colou?r").is_none());
    }
}
