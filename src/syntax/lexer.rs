use super::token::{Token, TokenKind};

fn is_spacing(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\r' || c == '\n'
}

fn is_numeric(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

/// Single-pass scanner over one source line. The cursor only advances;
/// `reset` rewinds it over a fresh source so one lexer serves many inputs.
pub(crate) struct Lexer {
    source: String,
    position: usize,
    limit: usize,
}

impl Lexer {
    pub fn new() -> Self {
        Self {
            source: String::new(),
            position: 0,
            limit: 0,
        }
    }

    pub fn peek_source(&self) -> &str {
        &self.source
    }

    pub fn reset(&mut self, text: &str) {
        self.source.clear();
        self.source.push_str(text);
        self.position = 0;
        self.limit = self.source.len();
    }

    pub fn lex_next(&mut self) -> Token {
        let symbol = match self.peek_char() {
            None => {
                return Token {
                    begin: self.limit,
                    length: 0,
                    kind: TokenKind::EndOfInput,
                }
            }
            Some(c) => c,
        };

        match symbol {
            '+' => self.lex_single(TokenKind::Plus),
            '-' => self.lex_single(TokenKind::Minus),
            '*' => self.lex_single(TokenKind::Times),
            '/' => self.lex_single(TokenKind::Slash),
            '^' => self.lex_single(TokenKind::Caret),
            '(' => self.lex_single(TokenKind::LParen),
            ')' => self.lex_single(TokenKind::RParen),
            c if is_spacing(c) => self.lex_spacing(),
            c if is_numeric(c) => self.lex_numeric(),
            c => {
                let begin = self.position;
                self.position += c.len_utf8();

                Token {
                    begin,
                    length: c.len_utf8(),
                    kind: TokenKind::Unknown,
                }
            }
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.source[self.position..].chars().next()
    }

    fn lex_single(&mut self, kind: TokenKind) -> Token {
        let begin = self.position;
        self.position += 1;

        Token {
            begin,
            length: 1,
            kind,
        }
    }

    fn lex_spacing(&mut self) -> Token {
        let begin = self.position;

        while let Some(c) = self.peek_char() {
            if !is_spacing(c) {
                break;
            }
            self.position += 1;
        }

        Token {
            begin,
            length: self.position - begin,
            kind: TokenKind::Whitespace,
        }
    }

    // A run with more than one dot is malformed but still consumed in full.
    fn lex_numeric(&mut self) -> Token {
        let begin = self.position;
        let mut dot_count = 0;

        while let Some(c) = self.peek_char() {
            if !is_numeric(c) {
                break;
            }
            if c == '.' {
                dot_count += 1;
            }
            self.position += 1;
        }

        let kind = if dot_count > 1 {
            TokenKind::Unknown
        } else {
            TokenKind::Number
        };

        Token {
            begin,
            length: self.position - begin,
            kind,
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Lexer, Token, TokenKind};

    fn lex_str(s: &str) -> Vec<Token> {
        let mut lexer = Lexer::new();
        lexer.reset(s);

        let mut tokens = vec![];
        loop {
            let token = lexer.lex_next();
            let done = token.kind == TokenKind::EndOfInput;
            tokens.push(token);

            if done {
                break;
            }
        }
        tokens
    }

    fn kinds_of(s: &str) -> Vec<TokenKind> {
        lex_str(s).iter().map(|t| t.kind).collect()
    }

    #[test]
    fn lex_single_operators() {
        use TokenKind::*;

        let kinds = kinds_of("+-*/^()");
        let expected = &[Plus, Minus, Times, Slash, Caret, LParen, RParen, EndOfInput];

        assert_eq!(kinds, expected);
    }

    #[test]
    fn lex_numbers_and_spacing() {
        let tokens = lex_str("12 3.5\t.25");
        let expected = &[
            Token {
                begin: 0,
                length: 2,
                kind: TokenKind::Number,
            },
            Token {
                begin: 2,
                length: 1,
                kind: TokenKind::Whitespace,
            },
            Token {
                begin: 3,
                length: 3,
                kind: TokenKind::Number,
            },
            Token {
                begin: 6,
                length: 1,
                kind: TokenKind::Whitespace,
            },
            Token {
                begin: 7,
                length: 3,
                kind: TokenKind::Number,
            },
            Token {
                begin: 10,
                length: 0,
                kind: TokenKind::EndOfInput,
            },
        ];

        assert_eq!(tokens, expected);
    }

    #[test]
    fn lex_malformed_number_consumes_whole_run() {
        let tokens = lex_str("1.2.3+4");

        assert_eq!(
            tokens[0],
            Token {
                begin: 0,
                length: 5,
                kind: TokenKind::Unknown,
            }
        );
        assert_eq!(tokens[1].kind, TokenKind::Plus);
        assert_eq!(tokens[2].kind, TokenKind::Number);
    }

    #[test]
    fn lex_unknown_character() {
        let tokens = lex_str("@");

        assert_eq!(
            tokens[0],
            Token {
                begin: 0,
                length: 1,
                kind: TokenKind::Unknown,
            }
        );
        assert_eq!(tokens[1].kind, TokenKind::EndOfInput);
    }

    #[test]
    fn lex_eof_at_limit() {
        let tokens = lex_str("");

        assert_eq!(
            tokens,
            &[Token {
                begin: 0,
                length: 0,
                kind: TokenKind::EndOfInput,
            }]
        );
    }

    #[test]
    fn reset_rewinds_cursor_over_new_source() {
        let mut lexer = Lexer::new();

        lexer.reset("1+2");
        while lexer.lex_next().kind != TokenKind::EndOfInput {}

        lexer.reset("78");
        let token = lexer.lex_next();

        assert_eq!(
            token,
            Token {
                begin: 0,
                length: 2,
                kind: TokenKind::Number,
            }
        );
        assert_eq!(lexer.peek_source(), "78");
    }
}
