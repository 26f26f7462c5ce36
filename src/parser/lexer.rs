//! Lexer (tokenizer) for `xrandr --props` reports
//!
//! Converts the raw report bytes into classified [`Token`]s. The lexer knows
//! nothing about the report grammar: whitespace is returned as tokens and the
//! parser decides whether it matters. Numeric structure inside words such as
//! `1920x1080` or `310mm` is left for the parser to recover.

use super::model::SourceLocation;
use std::fmt;
use thiserror::Error;

/// Token classes produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Name,
    IntValue,
    FloatValue,
    Punctuator,
    /// A run of spaces, or a single tab.
    WhiteSpace,
    LineTerminator,
    EndOfInput,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Name => "Name",
            TokenKind::IntValue => "IntValue",
            TokenKind::FloatValue => "FloatValue",
            TokenKind::Punctuator => "Punctuator",
            TokenKind::WhiteSpace => "WhiteSpace",
            TokenKind::LineTerminator => "LineTerminator",
            TokenKind::EndOfInput => "EndOfInput",
        };
        f.write_str(name)
    }
}

/// A classified slice of the input.
///
/// `literal` borrows from the buffer handed to [`Lexer::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub literal: &'a str,
    pub location: SourceLocation,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, literal: &'a str, location: SourceLocation) -> Self {
        Self {
            kind,
            literal,
            location,
        }
    }

    pub fn is(&self, kind: TokenKind, literal: &str) -> bool {
        self.kind == kind && self.literal == literal
    }

    pub fn is_tab(&self) -> bool {
        self.is(TokenKind::WhiteSpace, "\t")
    }

    /// Whitespace made of spaces (as opposed to a tab).
    pub fn is_space(&self) -> bool {
        self.kind == TokenKind::WhiteSpace && self.literal.starts_with(' ')
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:?})", self.kind, self.literal)
    }
}

/// Malformed UTF-8 in the report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid UTF-8 at byte offset {offset} ({location})")]
pub struct LexError {
    /// Absolute offset of the first offending byte.
    pub offset: usize,
    pub location: SourceLocation,
}

/// Characters that terminate a word and lex as single-character punctuators.
fn is_punctuator(byte: u8) -> bool {
    matches!(byte, b'+' | b':' | b'(' | b')' | b'*' | b',')
}

fn is_word_byte(byte: u8) -> bool {
    !matches!(byte, b' ' | b'\t' | b'\n') && !is_punctuator(byte)
}

/// Classify a complete word as an integer, a float, or a plain name.
fn classify_word(word: &[u8]) -> TokenKind {
    let int_part = word.iter().take_while(|b| b.is_ascii_digit()).count();
    if int_part == 0 {
        return TokenKind::Name;
    }
    if int_part == word.len() {
        return TokenKind::IntValue;
    }
    let rest = &word[int_part..];
    if rest[0] == b'.' && rest.len() > 1 && rest[1..].iter().all(u8::is_ascii_digit) {
        TokenKind::FloatValue
    } else {
        TokenKind::Name
    }
}

/// Pull-based lexer over a report buffer.
pub struct Lexer<'a> {
    input: &'a [u8],
    position: usize,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given report bytes.
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Scan the next token. Keeps returning `EndOfInput` once the buffer is
    /// exhausted.
    pub fn scan(&mut self) -> Result<Token<'a>, LexError> {
        let location = self.current_location();
        let start = self.position;

        let Some(byte) = self.peek() else {
            return Ok(Token::new(TokenKind::EndOfInput, "", location));
        };

        let kind = match byte {
            b'\n' => {
                self.position += 1;
                self.line += 1;
                self.column = 1;
                return Ok(Token::new(TokenKind::LineTerminator, "\n", location));
            }
            b' ' => {
                while self.peek() == Some(b' ') {
                    self.advance();
                }
                TokenKind::WhiteSpace
            }
            // Tabs are never coalesced: the parser counts them.
            b'\t' => {
                self.advance();
                TokenKind::WhiteSpace
            }
            // A leading minus is a sign; inside a word it is part of the name.
            b'-' => {
                self.advance();
                TokenKind::Punctuator
            }
            b if is_punctuator(b) => {
                self.advance();
                TokenKind::Punctuator
            }
            _ => {
                while self.peek().is_some_and(is_word_byte) {
                    self.advance();
                }
                classify_word(&self.input[start..self.position])
            }
        };

        let literal = self.slice(start, location)?;
        Ok(Token::new(kind, literal, location))
    }

    /// Tokenize the entire input, `EndOfInput` included.
    pub fn tokenize(&mut self) -> Result<Vec<Token<'a>>, LexError> {
        let mut tokens = Vec::new();

        loop {
            let token = self.scan()?;
            tokens.push(token);
            if token.kind == TokenKind::EndOfInput {
                break;
            }
        }

        Ok(tokens)
    }

    fn slice(&self, start: usize, location: SourceLocation) -> Result<&'a str, LexError> {
        let bytes = &self.input[start..self.position];
        std::str::from_utf8(bytes).map_err(|err| LexError {
            offset: start + err.valid_up_to(),
            location,
        })
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.position).copied()
    }

    /// Advance past one byte that is not a newline.
    fn advance(&mut self) {
        self.position += 1;
        self.column += 1;
    }

    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }
}
