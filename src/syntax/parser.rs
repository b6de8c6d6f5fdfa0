use crate::{
    error::{ErrorKind, PResult},
    syntax::{
        expr::ExpressionTree,
        lexer::Lexer,
        token::{stringify_token, Token, TokenKind},
        ExprParser,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ConsumeStatus {
    Eof,
    Ok,
    Optional,
}

pub(crate) struct Parser {
    lexer: Lexer,
    previous: Token,
    current: Token,
    scratch: String,
}

impl Parser {
    pub fn new() -> Self {
        Self {
            lexer: Lexer::new(),
            previous: Token::default(),
            current: Token::default(),
            scratch: String::new(),
        }
    }

    pub fn parse_source(&mut self, text: &str) -> PResult<ExpressionTree> {
        self.lexer.reset(text);
        self.previous = Token::default();
        self.current = self.advance_token()?;

        if self.current.kind == TokenKind::EndOfInput {
            return Ok(ExpressionTree::empty());
        }

        let root = self.parse_term()?;
        log::debug!("parsed root: {root:?}");

        Ok(ExpressionTree::with_root(root))
    }

    // Pulls tokens until something significant shows up. Whitespace is
    // skipped; an unknown token aborts the whole scan.
    pub(super) fn advance_token(&mut self) -> PResult<Token> {
        loop {
            let token = self.lexer.lex_next();

            match token.kind {
                TokenKind::Whitespace => continue,
                TokenKind::Unknown => {
                    self.scratch.clear();
                    stringify_token(&token, self.lexer.peek_source(), &mut self.scratch);

                    return Err(ErrorKind::LexError(format!(
                        "Invalid token `{}` at offset {}",
                        self.scratch, token.begin
                    )));
                }
                _ => return Ok(token),
            }
        }
    }

    pub(super) fn consume_token(
        &mut self,
        expected_main: TokenKind,
        expected_alternate: TokenKind,
    ) -> PResult<ConsumeStatus> {
        if self.current.kind == TokenKind::EndOfInput {
            return Ok(ConsumeStatus::Eof);
        }

        let status = if self.current.kind == expected_main {
            ConsumeStatus::Ok
        } else if self.current.kind == expected_alternate {
            ConsumeStatus::Optional
        } else {
            return Err(ErrorKind::SyntaxError(format!(
                "Expected {expected_main:?} or {expected_alternate:?}, found {:?}",
                self.current.kind
            )));
        };

        self.previous = self.current;
        self.current = self.advance_token()?;

        Ok(status)
    }

    pub(super) fn lookahead_is(
        &self,
        expected_main: TokenKind,
        expected_alternate: TokenKind,
    ) -> bool {
        self.current.kind == expected_main || self.current.kind == expected_alternate
    }

    // Rematerializes the literal just shifted into `previous`.
    pub(super) fn previous_number(&mut self) -> PResult<f64> {
        self.scratch.clear();

        if !stringify_token(&self.previous, self.lexer.peek_source(), &mut self.scratch) {
            return Err(ErrorKind::SyntaxError(format!(
                "Expected a numeric literal, found {:?}",
                self.previous.kind
            )));
        }

        self.scratch
            .parse::<f64>()
            .map_err(|_| ErrorKind::LexError(format!("Malformed number `{}`", self.scratch)))
    }
}

#[cfg(test)]
mod test {
    use super::Parser;
    use crate::error::ErrorKind;

    #[test]
    fn parse_empty_source_gives_empty_tree() {
        let mut parser = Parser::new();

        assert!(parser.parse_source("").unwrap().root().is_none());
        assert!(parser.parse_source(" \t ").unwrap().root().is_none());
    }

    #[test]
    fn parse_rejects_unknown_character() {
        let mut parser = Parser::new();
        let result = parser.parse_source("2+@3");

        assert!(matches!(result, Err(ErrorKind::LexError(_))));
    }

    #[test]
    fn parse_rejects_malformed_number() {
        let mut parser = Parser::new();
        let result = parser.parse_source("1.2.3");

        assert!(matches!(result, Err(ErrorKind::LexError(_))));
    }

    #[test]
    fn parse_rejects_unexpected_token() {
        let mut parser = Parser::new();

        assert!(matches!(
            parser.parse_source("2+*3"),
            Err(ErrorKind::SyntaxError(_))
        ));
        assert!(matches!(
            parser.parse_source("(2+3)"),
            Err(ErrorKind::SyntaxError(_))
        ));
    }

    #[test]
    fn parse_recovers_after_failed_source() {
        let mut parser = Parser::new();

        assert!(parser.parse_source("2+@3").is_err());

        let tree = parser.parse_source("42").unwrap();
        assert!(tree.root().is_some());
    }
}
