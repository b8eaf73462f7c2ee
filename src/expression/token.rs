//! Tokenizer for boolean expression text
//!
//! Turns raw input into a flat [`Token`] sequence. Rules are tried in a fixed
//! order: whitespace, parentheses, postfix `'`, the constants `0`/`1`,
//! identifiers (checked case-insensitively against the keyword set), the
//! two-character operators `&&`/`||`, and finally the single-character symbol
//! aliases. Anything left over is an [`SyntaxError::UnrecognizedSymbol`].

use super::error::SyntaxError;
use std::fmt;
use std::sync::Arc;

/// Canonical operator carried by an [`TokenKind::Op`] token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    And,
    Or,
    Not,
    Xor,
    Nand,
    Nor,
}

impl Operator {
    /// Match a keyword case-insensitively
    pub fn from_keyword(word: &str) -> Option<Self> {
        match word.to_ascii_uppercase().as_str() {
            "AND" => Some(Operator::And),
            "OR" => Some(Operator::Or),
            "NOT" => Some(Operator::Not),
            "XOR" => Some(Operator::Xor),
            "NAND" => Some(Operator::Nand),
            "NOR" => Some(Operator::Nor),
            _ => None,
        }
    }

    /// Match a single-character symbol alias
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' | '|' | '∨' => Some(Operator::Or),
            '^' | '⊕' | '⊻' => Some(Operator::Xor),
            '*' | '·' | '&' | '∧' | '×' => Some(Operator::And),
            '!' | '~' | '¬' => Some(Operator::Not),
            '⊼' => Some(Operator::Nand),
            '⊽' => Some(Operator::Nor),
            _ => None,
        }
    }

    /// Whether this operator joins two operands
    pub fn is_binary(self) -> bool {
        !matches!(self, Operator::Not)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operator::And => "AND",
            Operator::Or => "OR",
            Operator::Not => "NOT",
            Operator::Xor => "XOR",
            Operator::Nand => "NAND",
            Operator::Nor => "NOR",
        };
        f.write_str(name)
    }
}

/// Kind of a token, with its value where it has one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    LParen,
    RParen,
    PostfixNot,
    Const(bool),
    /// Variable name, spelled exactly as written
    Var(Arc<str>),
    Op(Operator),
}

/// A single token with its source lexeme and character offset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: Arc<str>,
    pub position: usize,
}

impl Token {
    fn new(kind: TokenKind, lexeme: &str, position: usize) -> Self {
        Token {
            kind,
            lexeme: Arc::from(lexeme),
            position,
        }
    }

    /// Whether this token can begin a new primary term (used for implicit AND)
    pub fn starts_term(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::Var(_)
                | TokenKind::Const(_)
                | TokenKind::LParen
                | TokenKind::Op(Operator::Not)
        )
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Split `input` into tokens
///
/// # Examples
///
/// ```
/// use boolean_calculator::expression::{tokenize, Operator, TokenKind};
///
/// let tokens = tokenize("a && NOT b'").unwrap();
/// assert_eq!(tokens.len(), 5);
/// assert_eq!(tokens[1].kind, TokenKind::Op(Operator::And));
/// assert_eq!(tokens[4].kind, TokenKind::PostfixNot);
/// ```
pub fn tokenize(input: &str) -> Result<Vec<Token>, SyntaxError> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];

        if ch.is_whitespace() {
            i += 1;
            continue;
        }

        let structural = match ch {
            '(' => Some(TokenKind::LParen),
            ')' => Some(TokenKind::RParen),
            '\'' => Some(TokenKind::PostfixNot),
            '0' => Some(TokenKind::Const(false)),
            '1' => Some(TokenKind::Const(true)),
            _ => None,
        };
        if let Some(kind) = structural {
            tokens.push(Token::new(kind, &ch.to_string(), i));
            i += 1;
            continue;
        }

        if is_ident_start(ch) {
            let start = i;
            while i < chars.len() && is_ident_continue(chars[i]) {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            let kind = match Operator::from_keyword(&word) {
                Some(op) => TokenKind::Op(op),
                None => TokenKind::Var(Arc::from(word.as_str())),
            };
            tokens.push(Token::new(kind, &word, start));
            continue;
        }

        if let Some(&next) = chars.get(i + 1) {
            let doubled = match (ch, next) {
                ('&', '&') => Some(Operator::And),
                ('|', '|') => Some(Operator::Or),
                _ => None,
            };
            if let Some(op) = doubled {
                let lexeme: String = [ch, next].iter().collect();
                tokens.push(Token::new(TokenKind::Op(op), &lexeme, i));
                i += 2;
                continue;
            }
        }

        match Operator::from_symbol(ch) {
            Some(op) => {
                tokens.push(Token::new(TokenKind::Op(op), &ch.to_string(), i));
                i += 1;
            }
            None => {
                return Err(SyntaxError::UnrecognizedSymbol {
                    symbol: ch,
                    position: i,
                })
            }
        }
    }

    log::trace!("tokenize({:?}) -> {} tokens", input, tokens.len());
    Ok(tokens)
}
