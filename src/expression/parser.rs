//! Recursive-descent parser for boolean expressions
//!
//! Grammar, lowest to highest binding:
//!
//! ```text
//! or      := xor (("OR" | "NOR") xor)*
//! xor     := and ("XOR" and)*
//! and     := unary ((("AND" | "NAND") unary) | <implicit> unary)*
//! unary   := "NOT" unary | primary "'"*
//! primary := "(" or ")" | CONST | VAR
//! ```
//!
//! An implicit AND is synthesized whenever the next token can start a new term
//! (a variable, a constant, `(` or prefix NOT), so `A B'C` means `A · ¬B · C`.

use super::error::{Expected, SyntaxError};
use super::token::{tokenize, Operator, Token, TokenKind};
use super::{BinaryOp, BoolExpr};

/// Default bound on parenthesis and prefix-NOT nesting
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 256;

/// Bound on the height of the built tree, reached by long flat chains
///
/// Raised to the nesting bound when that is configured higher.
pub const MAX_TREE_HEIGHT: usize = 1024;

/// A parsed subtree together with its height
struct Node {
    expr: BoolExpr,
    height: usize,
}

struct Parser<'t> {
    tokens: &'t [Token],
    current: usize,
    depth: usize,
    max_depth: usize,
    max_height: usize,
}

impl<'t> Parser<'t> {
    fn new(tokens: &'t [Token], max_depth: usize) -> Self {
        Parser {
            tokens,
            current: 0,
            depth: 0,
            max_depth,
            max_height: MAX_TREE_HEIGHT.max(max_depth),
        }
    }

    fn parse(mut self) -> Result<BoolExpr, SyntaxError> {
        if self.tokens.is_empty() {
            return Err(SyntaxError::EmptyExpression);
        }
        let node = self.parse_or()?;
        if let Some(token) = self.peek() {
            return Err(SyntaxError::UnexpectedToken {
                lexeme: token.lexeme.clone(),
                position: token.position,
            });
        }
        Ok(node.expr)
    }

    fn parse_or(&mut self) -> Result<Node, SyntaxError> {
        let mut node = self.parse_xor()?;
        while let Some(op) = self.match_binary(&[Operator::Or, Operator::Nor]) {
            let right = self.parse_xor()?;
            node = self.join(op, node, right)?;
        }
        Ok(node)
    }

    fn parse_xor(&mut self) -> Result<Node, SyntaxError> {
        let mut node = self.parse_and()?;
        while let Some(op) = self.match_binary(&[Operator::Xor]) {
            let right = self.parse_and()?;
            node = self.join(op, node, right)?;
        }
        Ok(node)
    }

    fn parse_and(&mut self) -> Result<Node, SyntaxError> {
        let mut node = self.parse_unary()?;
        loop {
            if let Some(op) = self.match_binary(&[Operator::And, Operator::Nand]) {
                let right = self.parse_unary()?;
                node = self.join(op, node, right)?;
            } else if self.peek().is_some_and(Token::starts_term) {
                let right = self.parse_unary()?;
                node = self.join(BinaryOp::And, node, right)?;
            } else {
                return Ok(node);
            }
        }
    }

    fn parse_unary(&mut self) -> Result<Node, SyntaxError> {
        if self.match_kind(&TokenKind::Op(Operator::Not)) {
            self.enter()?;
            let operand = self.parse_unary();
            self.depth -= 1;
            return self.negate(operand?);
        }

        let mut node = self.parse_primary()?;
        while self.match_kind(&TokenKind::PostfixNot) {
            node = self.negate(node)?;
        }
        Ok(node)
    }

    fn parse_primary(&mut self) -> Result<Node, SyntaxError> {
        let Some(token) = self.peek() else {
            return Err(SyntaxError::ExpectedToken {
                expected: Expected::Operand,
                found: None,
            });
        };

        match &token.kind {
            TokenKind::LParen => {
                self.current += 1;
                self.enter()?;
                let inner = self.parse_or();
                self.depth -= 1;
                let inner = inner?;
                self.consume(&TokenKind::RParen, Expected::ClosingParen)?;
                Ok(inner)
            }
            TokenKind::Const(value) => {
                let expr = BoolExpr::Const(*value);
                self.current += 1;
                Ok(Node { expr, height: 0 })
            }
            TokenKind::Var(name) => {
                let expr = BoolExpr::Var(name.clone());
                self.current += 1;
                Ok(Node { expr, height: 0 })
            }
            TokenKind::Op(op) if op.is_binary() => Err(SyntaxError::MissingOperand {
                operator: token.lexeme.clone(),
                position: token.position,
            }),
            _ => Err(SyntaxError::ExpectedToken {
                expected: Expected::Operand,
                found: Some((token.lexeme.clone(), token.position)),
            }),
        }
    }

    fn join(&self, op: BinaryOp, left: Node, right: Node) -> Result<Node, SyntaxError> {
        let height = left.height.max(right.height) + 1;
        self.check_height(height)?;
        Ok(Node {
            expr: BoolExpr::binary(op, left.expr, right.expr),
            height,
        })
    }

    fn negate(&self, node: Node) -> Result<Node, SyntaxError> {
        let height = node.height + 1;
        self.check_height(height)?;
        Ok(Node {
            expr: BoolExpr::negated(node.expr),
            height,
        })
    }

    fn check_height(&self, height: usize) -> Result<(), SyntaxError> {
        if height > self.max_height {
            return Err(SyntaxError::ExpressionTooLarge {
                limit: self.max_height,
            });
        }
        Ok(())
    }

    /// Descend one nesting level (parenthesis or prefix NOT)
    fn enter(&mut self) -> Result<(), SyntaxError> {
        if self.depth >= self.max_depth {
            return Err(SyntaxError::RecursionLimitExceeded {
                limit: self.max_depth,
            });
        }
        self.depth += 1;
        Ok(())
    }

    fn match_binary(&mut self, accepted: &[Operator]) -> Option<BinaryOp> {
        let op = match self.peek()?.kind {
            TokenKind::Op(op) if accepted.contains(&op) => op,
            _ => return None,
        };
        self.current += 1;
        BinaryOp::from_operator(op)
    }

    fn match_kind(&mut self, kind: &TokenKind) -> bool {
        if self.peek().is_some_and(|t| &t.kind == kind) {
            self.current += 1;
            true
        } else {
            false
        }
    }

    fn consume(&mut self, kind: &TokenKind, expected: Expected) -> Result<(), SyntaxError> {
        if self.match_kind(kind) {
            return Ok(());
        }
        Err(SyntaxError::ExpectedToken {
            expected,
            found: self.peek().map(|t| (t.lexeme.clone(), t.position)),
        })
    }

    fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.current)
    }
}

impl BoolExpr {
    /// Parse a boolean expression from a string
    ///
    /// Accepts keywords (`AND`, `OR`, `NOT`, `XOR`, `NAND`, `NOR`, any case),
    /// symbol aliases, postfix `'` negation, the constants `0`/`1` and implicit
    /// AND by juxtaposition. Nesting is bounded by
    /// [`DEFAULT_MAX_NESTING_DEPTH`].
    ///
    /// # Examples
    ///
    /// ```
    /// use boolean_calculator::BoolExpr;
    ///
    /// let postfix = BoolExpr::parse("A'").unwrap();
    /// let prefix = BoolExpr::parse("NOT A").unwrap();
    /// assert_eq!(postfix, prefix);
    ///
    /// assert!(BoolExpr::parse("   ").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, SyntaxError> {
        Self::parse_with_limit(input, DEFAULT_MAX_NESTING_DEPTH)
    }

    /// Parse with an explicit nesting bound
    pub fn parse_with_limit(input: &str, max_depth: usize) -> Result<Self, SyntaxError> {
        let tokens = tokenize(input)?;
        Parser::new(&tokens, max_depth).parse()
    }
}
