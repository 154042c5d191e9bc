/// Word tokenizer for case-folded text.
///
/// Runs of word characters form tokens. A hyphen, apostrophe or period
/// between two word characters stays inside the token (`kata-kata`, `10.000`,
/// `slot88.com`), and so does a comma between two digits (`1,5`). Any other
/// non-space character becomes a token of its own, except that runs of
/// periods collapse into one ellipsis token.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordTokenizer;

impl WordTokenizer {
    pub fn new() -> Self {
        Self
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        let mut tokens = Vec::new();
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];

            if c.is_whitespace() {
                i += 1;
                continue;
            }

            if is_word_char(c) {
                let start = i;
                i += 1;
                while i < chars.len() {
                    if is_word_char(chars[i]) {
                        i += 1;
                    } else if i + 1 < chars.len()
                        && joins(chars[i - 1], chars[i], chars[i + 1])
                    {
                        i += 2;
                    } else {
                        break;
                    }
                }
                tokens.push(chars[start..i].iter().collect());
                continue;
            }

            if c == '.' {
                let start = i;
                while i < chars.len() && chars[i] == '.' {
                    i += 1;
                }
                tokens.push(chars[start..i].iter().collect());
                continue;
            }

            tokens.push(c.to_string());
            i += 1;
        }

        tokens
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn joins(prev: char, c: char, next: char) -> bool {
    match c {
        '-' | '\'' | '\u{2019}' | '.' => is_word_char(next),
        ',' => prev.is_numeric() && next.is_numeric(),
        _ => false,
    }
}
