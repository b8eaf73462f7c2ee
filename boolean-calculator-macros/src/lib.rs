use proc_macro::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream, Result};
use syn::{parse_macro_input, Ident, Token};

/// Expression tree recognised by the macro
enum Expr {
    Variable(Ident),
    StringLiteral(syn::LitStr),
    Constant(bool),
    Not(Box<Expr>),
    And(Box<Expr>, Box<Expr>),
    Or(Box<Expr>, Box<Expr>),
    Xor(Box<Expr>, Box<Expr>),
}

impl Expr {
    /// Generate builder calls; identifiers are borrowed, never moved
    fn to_tokens(&self) -> proc_macro2::TokenStream {
        match self {
            Expr::Variable(ident) => quote! { #ident },
            Expr::StringLiteral(lit) => quote! { BoolExpr::variable(#lit) },
            Expr::Constant(value) => quote! { BoolExpr::constant(#value) },
            Expr::Not(inner) => {
                let inner_tokens = inner.to_tokens();
                // Path call so a `std::ops::Not` import at the call site cannot win
                quote! { BoolExpr::not(&(#inner_tokens)) }
            }
            Expr::And(left, right) => binary(quote! { and }, left, right),
            Expr::Or(left, right) => binary(quote! { or }, left, right),
            Expr::Xor(left, right) => binary(quote! { xor }, left, right),
        }
    }
}

fn binary(method: proc_macro2::TokenStream, left: &Expr, right: &Expr) -> proc_macro2::TokenStream {
    let left_tokens = left.to_tokens();
    let right_tokens = right.to_tokens();
    quote! {
        BoolExpr::#method(&(#left_tokens), &(#right_tokens))
    }
}

struct BoolExprParser {
    expr: Expr,
}

impl Parse for BoolExprParser {
    fn parse(input: ParseStream) -> Result<Self> {
        let expr = parse_or(input)?;
        if !input.is_empty() {
            return Err(input.error("unexpected token in boolean expression"));
        }
        Ok(BoolExprParser { expr })
    }
}

/// OR tier (lowest precedence)
fn parse_or(input: ParseStream) -> Result<Expr> {
    let mut left = parse_xor(input)?;

    while input.peek(Token![+]) || input.peek(Token![|]) {
        if input.peek(Token![+]) {
            input.parse::<Token![+]>()?;
        } else {
            input.parse::<Token![|]>()?;
        }
        let right = parse_xor(input)?;
        left = Expr::Or(Box::new(left), Box::new(right));
    }

    Ok(left)
}

/// XOR tier, between OR and AND like the text parser
fn parse_xor(input: ParseStream) -> Result<Expr> {
    let mut left = parse_and(input)?;

    while input.peek(Token![^]) {
        input.parse::<Token![^]>()?;
        let right = parse_and(input)?;
        left = Expr::Xor(Box::new(left), Box::new(right));
    }

    Ok(left)
}

fn parse_and(input: ParseStream) -> Result<Expr> {
    let mut left = parse_unary(input)?;

    while input.peek(Token![*]) || input.peek(Token![&]) {
        if input.peek(Token![*]) {
            input.parse::<Token![*]>()?;
        } else {
            input.parse::<Token![&]>()?;
        }
        let right = parse_unary(input)?;
        left = Expr::And(Box::new(left), Box::new(right));
    }

    Ok(left)
}

fn parse_unary(input: ParseStream) -> Result<Expr> {
    if input.peek(Token![!]) {
        input.parse::<Token![!]>()?;
        let inner = parse_unary(input)?;
        Ok(Expr::Not(Box::new(inner)))
    } else if input.peek(Token![~]) {
        input.parse::<Token![~]>()?;
        let inner = parse_unary(input)?;
        Ok(Expr::Not(Box::new(inner)))
    } else {
        parse_atom(input)
    }
}

/// Variables, string literals, `0`/`1` and parenthesized groups
fn parse_atom(input: ParseStream) -> Result<Expr> {
    if input.peek(syn::token::Paren) {
        let content;
        syn::parenthesized!(content in input);
        let inner = parse_or(&content)?;
        if !content.is_empty() {
            return Err(content.error("unexpected token in parenthesized expression"));
        }
        Ok(inner)
    } else if input.peek(syn::LitStr) {
        let lit: syn::LitStr = input.parse()?;
        Ok(Expr::StringLiteral(lit))
    } else if input.peek(syn::LitInt) {
        let lit: syn::LitInt = input.parse()?;
        let value: u8 = lit.base10_parse()?;
        match value {
            0 => Ok(Expr::Constant(false)),
            1 => Ok(Expr::Constant(true)),
            _ => Err(syn::Error::new(
                lit.span(),
                "only 0 and 1 are supported as boolean constants",
            )),
        }
    } else {
        let ident: Ident = input.parse()?;
        Ok(Expr::Variable(ident))
    }
}

/// Build a `BoolExpr` from Rust tokens
///
/// `BoolExpr` must be in scope at the call site.
///
/// # Supported Syntax
///
/// - `a` - any `BoolExpr` identifier in scope (borrowed)
/// - `"a"` - string literal, becomes `BoolExpr::variable("a")`
/// - `0` / `1` - constants
/// - `!a` or `~a` - NOT
/// - `a * b` or `a & b` - AND
/// - `a ^ b` - XOR
/// - `a + b` or `a | b` - OR
/// - `( ... )` - grouping
///
/// Precedence from highest to lowest: NOT, AND, XOR, OR, matching
/// `BoolExpr::parse`.
///
/// # Examples
///
/// ```ignore
/// use boolean_calculator::{expr, BoolExpr};
///
/// let a = BoolExpr::variable("A");
/// let b = BoolExpr::variable("B");
///
/// let sop = expr!(a * !b + !a * b);
/// let xor = expr!(a ^ b);
/// assert_eq!(sop.to_string(), "A · ¬B + ¬A · B");
/// assert_eq!(xor.to_string(), "A ⊕ B");
///
/// let literal = expr!("C" * 1 + "D" * 0);
/// assert_eq!(literal.to_string(), "C · 1 + D · 0");
/// ```
#[proc_macro]
pub fn expr(input: TokenStream) -> TokenStream {
    let parser = parse_macro_input!(input as BoolExprParser);
    let tokens = parser.expr.to_tokens();
    TokenStream::from(tokens)
}
