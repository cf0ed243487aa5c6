//! Tokenizer for the formula grammar.

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Token {
    Number(f32),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Caret,
    LParen,
    RParen,
    Comma,
}

/// Token plus its byte offset in the source, for error messages.
#[derive(Clone, Debug)]
pub(crate) struct Spanned {
    pub tok: Token,
    pub pos: usize,
}

pub(crate) fn tokenize(src: &str) -> Result<Vec<Spanned>, String> {
    let bytes = src.as_bytes();
    let mut out = Vec::new();
    let mut i = 0usize;
    while i < bytes.len() {
        let c = bytes[i] as char;
        if c.is_ascii_whitespace() {
            i += 1;
            continue;
        }
        let pos = i;
        let tok = match c {
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Star,
            '/' => Token::Slash,
            '%' => Token::Percent,
            '^' => Token::Caret,
            '(' => Token::LParen,
            ')' => Token::RParen,
            ',' => Token::Comma,
            _ if c.is_ascii_digit() || c == '.' => {
                let start = i;
                while i < bytes.len() && (bytes[i] as char).is_ascii_digit() {
                    i += 1;
                }
                if i < bytes.len() && bytes[i] == b'.' {
                    i += 1;
                    while i < bytes.len() && (bytes[i] as char).is_ascii_digit() {
                        i += 1;
                    }
                }
                let text = &src[start..i];
                let value: f32 = text
                    .parse()
                    .map_err(|_| format!("invalid number '{text}' at offset {start}"))?;
                out.push(Spanned {
                    tok: Token::Number(value),
                    pos: start,
                });
                continue;
            }
            _ if c.is_ascii_alphabetic() || c == '_' => {
                let start = i;
                while i < bytes.len() {
                    let c = bytes[i] as char;
                    if c.is_ascii_alphanumeric() || c == '_' {
                        i += 1;
                    } else {
                        break;
                    }
                }
                out.push(Spanned {
                    tok: Token::Ident(src[start..i].to_string()),
                    pos: start,
                });
                continue;
            }
            _ => return Err(format!("unexpected character '{c}' at offset {pos}")),
        };
        out.push(Spanned { tok, pos });
        i += 1;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(src: &str) -> Vec<Token> {
        tokenize(src).unwrap().into_iter().map(|s| s.tok).collect()
    }

    #[test]
    fn tokenizes_operators_and_numbers() {
        assert_eq!(
            toks("1.5 + r*2"),
            vec![
                Token::Number(1.5),
                Token::Plus,
                Token::Ident("r".into()),
                Token::Star,
                Token::Number(2.0),
            ]
        );
    }

    #[test]
    fn tokenizes_calls() {
        assert_eq!(
            toks("min(x, y)"),
            vec![
                Token::Ident("min".into()),
                Token::LParen,
                Token::Ident("x".into()),
                Token::Comma,
                Token::Ident("y".into()),
                Token::RParen,
            ]
        );
    }

    #[test]
    fn rejects_stray_characters() {
        let err = tokenize("r + $").unwrap_err();
        assert!(err.contains('$'), "{err}");
        assert!(err.contains("offset 4"), "{err}");
    }
}
