#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Star,
    QMark,
    Literal(char),
}

/// A compiled spreadsheet wildcard pattern (`*`, `?`, `~` escape), matched case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct WildcardPattern {
    tokens: Vec<Token>,
}

impl WildcardPattern {
    pub(crate) fn new(pattern: &str) -> Self {
        Self {
            tokens: tokenize_pattern(pattern),
        }
    }

    pub(crate) fn matches(&self, text: &str) -> bool {
        match_tokens(&self.tokens, &FoldedText::new(text))
    }
}

/// Uppercase-folded text that remembers which folded chars came from the same source char.
///
/// Folding can expand one char into several (`ß` -> `SS`); `?` still consumes exactly one
/// source char.
struct FoldedText {
    chars: Vec<char>,
    /// For each folded char, the index one past the last folded char of its source char.
    source_end: Vec<usize>,
}

impl FoldedText {
    fn new(text: &str) -> Self {
        let mut chars = Vec::with_capacity(text.len());
        let mut source_end = Vec::with_capacity(text.len());
        for c in text.chars() {
            let start = chars.len();
            chars.extend(c.to_uppercase());
            let end = chars.len();
            source_end.extend(std::iter::repeat(end).take(end - start));
        }
        Self { chars, source_end }
    }
}

fn tokenize_pattern(pattern: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut chars = pattern.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '~' => match chars.peek().copied() {
                Some(next @ ('*' | '?' | '~')) => {
                    chars.next();
                    tokens.push(Token::Literal(next));
                }
                _ => tokens.push(Token::Literal('~')),
            },
            '*' => {
                // Consecutive stars are equivalent to one.
                if tokens.last() != Some(&Token::Star) {
                    tokens.push(Token::Star);
                }
            }
            '?' => tokens.push(Token::QMark),
            other => tokens.extend(other.to_uppercase().map(Token::Literal)),
        }
    }
    tokens
}

/// Greedy matcher with single-star backtracking; linear in practice, `O(n*m)` worst case.
fn match_tokens(pattern: &[Token], folded: &FoldedText) -> bool {
    let text = &folded.chars;
    let mut pi = 0usize;
    let mut ti = 0usize;
    let mut star: Option<usize> = None;
    let mut star_text = 0usize;

    while ti < text.len() {
        match pattern.get(pi) {
            Some(Token::Literal(c)) if *c == text[ti] => {
                pi += 1;
                ti += 1;
                continue;
            }
            Some(Token::QMark) => {
                pi += 1;
                ti = folded.source_end[ti];
                continue;
            }
            Some(Token::Star) => {
                star = Some(pi);
                pi += 1;
                star_text = ti;
                continue;
            }
            _ => {}
        }

        let Some(star_pos) = star else {
            return false;
        };
        pi = star_pos + 1;
        star_text += 1;
        ti = star_text;
    }

    pattern[pi..].iter().all(|t| *t == Token::Star)
}
