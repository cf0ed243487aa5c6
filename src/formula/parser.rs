//! Recursive-descent parser producing an expression tree.
//!
//! Precedence, loosest to tightest: `+ -`, `* / %`, unary minus, `^`
//! (right-associative), atoms. `PI` and `E` fold to literals at parse time.

use super::token::{tokenize, Spanned, Token};

#[derive(Clone, Debug)]
pub(crate) enum Expr {
    Num(f32),
    Var(Var),
    Neg(Box<Expr>),
    Bin(BinOp, Box<Expr>, Box<Expr>),
    Call(Func, Vec<Expr>),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Var {
    R,
    G,
    B,
    X,
    Y,
    W,
    H,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Pow,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Func {
    Sin,
    Cos,
    Tan,
    Sqrt,
    Abs,
    Floor,
    Ceil,
    Round,
    Min,
    Max,
    Log,
}

impl Func {
    fn arity(self) -> usize {
        match self {
            Func::Min | Func::Max => 2,
            _ => 1,
        }
    }

    fn by_name(name: &str) -> Option<Func> {
        Some(match name {
            "sin" => Func::Sin,
            "cos" => Func::Cos,
            "tan" => Func::Tan,
            "sqrt" => Func::Sqrt,
            "abs" => Func::Abs,
            "floor" => Func::Floor,
            "ceil" => Func::Ceil,
            "round" => Func::Round,
            "min" => Func::Min,
            "max" => Func::Max,
            "log" => Func::Log,
            _ => return None,
        })
    }
}

fn var_by_name(name: &str) -> Option<Var> {
    Some(match name {
        "r" => Var::R,
        "g" => Var::G,
        "b" => Var::B,
        "x" => Var::X,
        "y" => Var::Y,
        "w" => Var::W,
        "h" => Var::H,
        _ => return None,
    })
}

fn const_by_name(name: &str) -> Option<f32> {
    Some(match name {
        "PI" => std::f32::consts::PI,
        "E" => std::f32::consts::E,
        _ => return None,
    })
}

pub(crate) fn parse(source: &str) -> Result<Expr, String> {
    let tokens = tokenize(source)?;
    let mut parser = Parser { tokens, pos: 0 };
    let expr = parser.expr()?;
    if let Some(extra) = parser.peek() {
        return Err(format!(
            "unexpected trailing input at offset {}",
            extra.pos
        ));
    }
    Ok(expr)
}

struct Parser {
    tokens: Vec<Spanned>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Spanned> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<Spanned> {
        let tok = self.tokens.get(self.pos).cloned();
        if tok.is_some() {
            self.pos += 1;
        }
        tok
    }

    fn eat(&mut self, expected: &Token) -> bool {
        if self.peek().map(|s| &s.tok) == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: Token, what: &str) -> Result<(), String> {
        match self.next() {
            Some(s) if s.tok == expected => Ok(()),
            Some(s) => Err(format!("expected {what} at offset {}", s.pos)),
            None => Err(format!("expected {what}, found end of input")),
        }
    }

    // expr := term (('+' | '-') term)*
    fn expr(&mut self) -> Result<Expr, String> {
        let mut lhs = self.term()?;
        loop {
            let op = match self.peek().map(|s| &s.tok) {
                Some(Token::Plus) => BinOp::Add,
                Some(Token::Minus) => BinOp::Sub,
                _ => break,
            };
            self.pos += 1;
            let rhs = self.term()?;
            lhs = Expr::Bin(op, Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    // term := unary (('*' | '/' | '%') unary)*
    fn term(&mut self) -> Result<Expr, String> {
        let mut lhs = self.unary()?;
        loop {
            let op = match self.peek().map(|s| &s.tok) {
                Some(Token::Star) => BinOp::Mul,
                Some(Token::Slash) => BinOp::Div,
                Some(Token::Percent) => BinOp::Rem,
                _ => break,
            };
            self.pos += 1;
            let rhs = self.unary()?;
            lhs = Expr::Bin(op, Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    // unary := '-' unary | power
    fn unary(&mut self) -> Result<Expr, String> {
        if self.eat(&Token::Minus) {
            let inner = self.unary()?;
            return Ok(Expr::Neg(Box::new(inner)));
        }
        self.power()
    }

    // power := atom ('^' unary)?   -- right-associative, binds tighter
    // than unary minus so -r^2 parses as -(r^2)
    fn power(&mut self) -> Result<Expr, String> {
        let base = self.atom()?;
        if self.eat(&Token::Caret) {
            let exponent = self.unary()?;
            return Ok(Expr::Bin(BinOp::Pow, Box::new(base), Box::new(exponent)));
        }
        Ok(base)
    }

    fn atom(&mut self) -> Result<Expr, String> {
        let spanned = self
            .next()
            .ok_or_else(|| "unexpected end of input".to_string())?;
        match spanned.tok {
            Token::Number(value) => Ok(Expr::Num(value)),
            Token::LParen => {
                let inner = self.expr()?;
                self.expect(Token::RParen, "')'")?;
                Ok(inner)
            }
            Token::Ident(name) => self.ident(&name, spanned.pos),
            _ => Err(format!("unexpected token at offset {}", spanned.pos)),
        }
    }

    fn ident(&mut self, name: &str, pos: usize) -> Result<Expr, String> {
        if let Some(func) = Func::by_name(name) {
            self.expect(Token::LParen, &format!("'(' after function '{name}'"))?;
            let mut args = vec![self.expr()?];
            while self.eat(&Token::Comma) {
                args.push(self.expr()?);
            }
            self.expect(Token::RParen, "')'")?;
            if args.len() != func.arity() {
                return Err(format!(
                    "function '{name}' takes {} argument(s), got {} (offset {pos})",
                    func.arity(),
                    args.len()
                ));
            }
            return Ok(Expr::Call(func, args));
        }
        if let Some(var) = var_by_name(name) {
            return Ok(Expr::Var(var));
        }
        if let Some(value) = const_by_name(name) {
            return Ok(Expr::Num(value));
        }
        Err(format!("unknown identifier '{name}' at offset {pos}"))
    }
}
