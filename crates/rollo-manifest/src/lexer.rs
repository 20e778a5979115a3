//! Tokenizer for the manifest dialect
//!
//! The dialect is a small Python subset: top-level assignments of nested
//! dict/list/string literals, `#` comments, and the `Str(..)`/`Var(..)`
//! helper calls. The lexer produces positioned tokens; all structure is
//! left to the parser.

use crate::error::{Error, Result};

/// A lexical token
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Identifier or keyword (`vars`, `deps`, `Var`, `True`, ...)
    Ident(String),
    /// String literal, escapes resolved
    Str(String),
    /// Integer literal
    Int(i64),
    /// `=`
    Equals,
    /// `+`
    Plus,
    /// `,`
    Comma,
    /// `:`
    Colon,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// End of input
    Eof,
}

impl Token {
    /// Human-readable description for error messages
    pub fn describe(&self) -> String {
        match self {
            Token::Ident(name) => format!("identifier '{}'", name),
            Token::Str(_) => "string literal".to_string(),
            Token::Int(n) => format!("integer {}", n),
            Token::Equals => "'='".to_string(),
            Token::Plus => "'+'".to_string(),
            Token::Comma => "','".to_string(),
            Token::Colon => "':'".to_string(),
            Token::LBrace => "'{'".to_string(),
            Token::RBrace => "'}'".to_string(),
            Token::LBracket => "'['".to_string(),
            Token::RBracket => "']'".to_string(),
            Token::LParen => "'('".to_string(),
            Token::RParen => "')'".to_string(),
            Token::Eof => "end of input".to_string(),
        }
    }
}

/// A token with its source position (1-based)
#[derive(Debug, Clone)]
pub struct SpannedToken {
    /// The token
    pub token: Token,
    /// Line the token starts on
    pub line: usize,
    /// Column the token starts at
    pub column: usize,
}

/// Tokenize manifest text.
pub fn tokenize(text: &str) -> Result<Vec<SpannedToken>> {
    Lexer::new(text).run()
}

struct Lexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            chars: text.chars().peekable(),
            line: 1,
            column: 1,
        }
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.chars.next()?;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn run(mut self) -> Result<Vec<SpannedToken>> {
        let mut tokens = Vec::new();
        loop {
            // Skip whitespace and comments between tokens
            while let Some(&ch) = self.chars.peek() {
                if ch.is_whitespace() {
                    self.bump();
                } else if ch == '#' {
                    while let Some(&ch) = self.chars.peek() {
                        if ch == '\n' {
                            break;
                        }
                        self.bump();
                    }
                } else {
                    break;
                }
            }

            let line = self.line;
            let column = self.column;
            let Some(&ch) = self.chars.peek() else {
                tokens.push(SpannedToken {
                    token: Token::Eof,
                    line,
                    column,
                });
                return Ok(tokens);
            };

            let token = match ch {
                '=' => {
                    self.bump();
                    Token::Equals
                }
                '+' => {
                    self.bump();
                    Token::Plus
                }
                ',' => {
                    self.bump();
                    Token::Comma
                }
                ':' => {
                    self.bump();
                    Token::Colon
                }
                '{' => {
                    self.bump();
                    Token::LBrace
                }
                '}' => {
                    self.bump();
                    Token::RBrace
                }
                '[' => {
                    self.bump();
                    Token::LBracket
                }
                ']' => {
                    self.bump();
                    Token::RBracket
                }
                '(' => {
                    self.bump();
                    Token::LParen
                }
                ')' => {
                    self.bump();
                    Token::RParen
                }
                '\'' | '"' => self.string(line, column)?,
                ch if ch.is_ascii_digit() || ch == '-' => self.number(line, column)?,
                ch if ch.is_alphabetic() || ch == '_' => self.ident(),
                ch => {
                    return Err(Error::UnexpectedChar { ch, line, column });
                }
            };

            tokens.push(SpannedToken {
                token,
                line,
                column,
            });
        }
    }

    fn string(&mut self, line: usize, column: usize) -> Result<Token> {
        let quote = self.bump().unwrap_or('\'');
        let mut out = String::new();
        loop {
            let Some(ch) = self.bump() else {
                return Err(Error::UnterminatedString { line, column });
            };
            match ch {
                ch if ch == quote => return Ok(Token::Str(out)),
                '\n' => return Err(Error::UnterminatedString { line, column }),
                '\\' => {
                    let Some(escaped) = self.bump() else {
                        return Err(Error::UnterminatedString { line, column });
                    };
                    match escaped {
                        'n' => out.push('\n'),
                        't' => out.push('\t'),
                        '\\' => out.push('\\'),
                        '\'' => out.push('\''),
                        '"' => out.push('"'),
                        other => {
                            // Unknown escapes pass through untouched
                            out.push('\\');
                            out.push(other);
                        }
                    }
                }
                ch => out.push(ch),
            }
        }
    }

    fn number(&mut self, line: usize, column: usize) -> Result<Token> {
        let mut digits = String::new();
        if self.chars.peek() == Some(&'-') {
            digits.push('-');
            self.bump();
        }
        while let Some(&ch) = self.chars.peek() {
            if ch.is_ascii_digit() {
                digits.push(ch);
                self.bump();
            } else {
                break;
            }
        }
        digits
            .parse::<i64>()
            .map(Token::Int)
            .map_err(|_| Error::UnexpectedChar {
                ch: digits.chars().next().unwrap_or('-'),
                line,
                column,
            })
    }

    fn ident(&mut self) -> Token {
        let mut name = String::new();
        while let Some(&ch) = self.chars.peek() {
            if ch.is_alphanumeric() || ch == '_' {
                name.push(ch);
                self.bump();
            } else {
                break;
            }
        }
        Token::Ident(name)
    }
}
