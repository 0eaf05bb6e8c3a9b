//! Tokenizer for path expressions.

use std::fmt;

use serde_json::Value;

use super::error::CompileError;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Names and values
    Identifier(String),
    QuotedIdentifier(String),
    Literal(Value),
    RawString(String),
    Integer(i64),

    // Operators
    Dot,  // .
    Pipe, // |
    Or,   // ||
    At,   // @

    // Delimiters
    Comma,        // ,
    Colon,        // :
    LeftBracket,  // [
    RightBracket, // ]
    LeftBrace,    // {
    RightBrace,   // }
    LeftParen,    // (
    RightParen,   // )

    Eof,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Identifier(name) => write!(f, "identifier '{}'", name),
            Token::QuotedIdentifier(name) => write!(f, "quoted identifier \"{}\"", name),
            Token::Literal(value) => write!(f, "literal `{}`", value),
            Token::RawString(s) => write!(f, "raw string '{}'", s),
            Token::Integer(n) => write!(f, "number {}", n),
            Token::Dot => write!(f, "'.'"),
            Token::Pipe => write!(f, "'|'"),
            Token::Or => write!(f, "'||'"),
            Token::At => write!(f, "'@'"),
            Token::Comma => write!(f, "','"),
            Token::Colon => write!(f, "':'"),
            Token::LeftBracket => write!(f, "'['"),
            Token::RightBracket => write!(f, "']'"),
            Token::LeftBrace => write!(f, "'{{'"),
            Token::RightBrace => write!(f, "'}}'"),
            Token::LeftParen => write!(f, "'('"),
            Token::RightParen => write!(f, "')'"),
            Token::Eof => write!(f, "end of expression"),
        }
    }
}

/// A token and the byte offset where it starts
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned {
    pub token: Token,
    pub position: usize,
}

pub struct Lexer<'a> {
    source: &'a str,
    chars: Vec<(usize, char)>,
    index: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().collect(),
            index: 0,
        }
    }

    fn current(&self) -> Option<char> {
        self.chars.get(self.index).map(|&(_, ch)| ch)
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.index + 1).map(|&(_, ch)| ch)
    }

    /// Byte offset of the current character (or end of input)
    fn offset(&self) -> usize {
        self.chars
            .get(self.index)
            .map(|&(pos, _)| pos)
            .unwrap_or(self.source.len())
    }

    fn advance(&mut self) {
        self.index += 1;
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.current(), Some(ch) if ch.is_whitespace()) {
            self.advance();
        }
    }

    /// Tokenize the whole input. The last token is always `Token::Eof`.
    pub fn tokenize(&mut self) -> Result<Vec<Spanned>, CompileError> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace();
            let position = self.offset();
            let Some(ch) = self.current() else {
                tokens.push(Spanned {
                    token: Token::Eof,
                    position,
                });
                return Ok(tokens);
            };

            let token = match ch {
                '.' => self.single(Token::Dot),
                '@' => self.single(Token::At),
                ',' => self.single(Token::Comma),
                ':' => self.single(Token::Colon),
                '[' => self.single(Token::LeftBracket),
                ']' => self.single(Token::RightBracket),
                '{' => self.single(Token::LeftBrace),
                '}' => self.single(Token::RightBrace),
                '(' => self.single(Token::LeftParen),
                ')' => self.single(Token::RightParen),
                '|' => {
                    self.advance();
                    if self.current() == Some('|') {
                        self.advance();
                        Token::Or
                    } else {
                        Token::Pipe
                    }
                }
                '`' => self.read_literal(position)?,
                '\'' => self.read_raw_string(position)?,
                '"' => self.read_quoted_identifier(position)?,
                '-' if matches!(self.peek(), Some(next) if next.is_ascii_digit()) => {
                    self.read_integer(position)?
                }
                c if c.is_ascii_digit() => self.read_integer(position)?,
                c if c.is_ascii_alphabetic() || c == '_' => self.read_identifier(),
                c => {
                    return Err(CompileError::UnexpectedCharacter { ch: c, position });
                }
            };

            tokens.push(Spanned { token, position });
        }
    }

    fn single(&mut self, token: Token) -> Token {
        self.advance();
        token
    }

    fn read_identifier(&mut self) -> Token {
        let mut name = String::new();
        while let Some(ch) = self.current() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                name.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        Token::Identifier(name)
    }

    fn read_integer(&mut self, position: usize) -> Result<Token, CompileError> {
        let mut digits = String::new();
        if self.current() == Some('-') {
            digits.push('-');
            self.advance();
        }
        while let Some(ch) = self.current() {
            if ch.is_ascii_digit() {
                digits.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        digits
            .parse::<i64>()
            .map(Token::Integer)
            .map_err(|e| CompileError::InvalidToken {
                what: "number",
                message: e.to_string(),
                position,
            })
    }

    /// Read everything up to an unescaped `delimiter`. Only `\<delimiter>`
    /// is unescaped; any other backslash sequence is kept verbatim.
    fn read_delimited(
        &mut self,
        delimiter: char,
        what: &'static str,
        position: usize,
    ) -> Result<String, CompileError> {
        self.advance(); // consume opening delimiter
        let mut text = String::new();

        loop {
            match self.current() {
                None => return Err(CompileError::Unterminated { what, position }),
                Some('\\') if self.peek() == Some(delimiter) => {
                    text.push(delimiter);
                    self.advance();
                    self.advance();
                }
                Some(ch) if ch == delimiter => {
                    self.advance();
                    return Ok(text);
                }
                Some(ch) => {
                    text.push(ch);
                    self.advance();
                }
            }
        }
    }

    /// Backtick literal: JSON text, or a bare string when the text is not JSON
    fn read_literal(&mut self, position: usize) -> Result<Token, CompileError> {
        let text = self.read_delimited('`', "literal", position)?;
        let value = serde_json::from_str::<Value>(&text)
            .unwrap_or_else(|_| Value::String(text.trim_start().to_string()));
        Ok(Token::Literal(value))
    }

    fn read_raw_string(&mut self, position: usize) -> Result<Token, CompileError> {
        self.read_delimited('\'', "raw string", position)
            .map(Token::RawString)
    }

    /// Double-quoted identifier, decoded with JSON string escapes
    fn read_quoted_identifier(&mut self, position: usize) -> Result<Token, CompileError> {
        let what = "quoted identifier";
        self.advance(); // consume opening quote
        let mut raw = String::from('"');

        loop {
            match self.current() {
                None => return Err(CompileError::Unterminated { what, position }),
                Some('\\') => {
                    raw.push('\\');
                    self.advance();
                    match self.current() {
                        Some(escaped) => {
                            raw.push(escaped);
                            self.advance();
                        }
                        None => return Err(CompileError::Unterminated { what, position }),
                    }
                }
                Some('"') => {
                    raw.push('"');
                    self.advance();
                    break;
                }
                Some(ch) => {
                    raw.push(ch);
                    self.advance();
                }
            }
        }

        serde_json::from_str::<String>(&raw)
            .map(Token::QuotedIdentifier)
            .map_err(|e| CompileError::InvalidToken {
                what,
                message: e.to_string(),
                position,
            })
    }
}
