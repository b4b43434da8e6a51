/*!
Expression evaluator: recursive descent that computes while it parses.

Grammar (left‑associative at every level)
-----------------------------------------

```text
expression     → term ( ( "+" | "-" ) term )* ;
term           → primary ( ( "*" | "/" | "%" ) primary )* ;
primary        → NUMBER
               | "(" expression ")"
               | "-" primary
               | "+" primary ;
```

The evaluator only ever sees *resolved* tokens: identifiers have already been
replaced by `NUMBER` tokens by the resolver.  An `IDENTIFIER` reaching
`primary` is therefore a malformed expression.

### Logging Policy

| Location                     | Level  | Purpose                                   |
|------------------------------|--------|-------------------------------------------|
| `Evaluator::new`, `evaluate` | `info` | Lifecycle milestones.                     |
| productions                  | `debug`| Operator applications.                    |
| error paths                  | `debug`| Context before returning structured error.|

Arithmetic wraps on overflow; division and remainder truncate toward zero.
*/

use crate::cursor::TokenCursor;
use crate::error::{EvalError, Result};
use crate::token::{Integer, Token, TokenType};

use log::{debug, info};

/// Maximum nesting of parentheses and unary signs.
const MAX_DEPTH: usize = 255;

pub struct Evaluator<'t, 'a> {
    cursor: TokenCursor<'t, 'a>,
    depth: usize,
}

impl<'t, 'a> Evaluator<'t, 'a> {
    /// Construct an evaluator over an already resolved token slice.
    pub fn new(tokens: &'t [Token<'a>]) -> Self {
        info!("Evaluator created with {} tokens", tokens.len());

        Self {
            cursor: TokenCursor::new(tokens),
            depth: 0,
        }
    }

    // ───────────────────────── public API ─────────────────────────

    /// Evaluate the whole slice as one expression.  Leftover tokens make the
    /// statement invalid.
    pub fn evaluate(mut self) -> Result<Integer> {
        info!("Beginning evaluation");

        let value: Integer = self.expression()?;

        if let Some(extra) = self.cursor.get() {
            debug!(
                "Unconsumed token '{}' at position {}",
                extra.lexeme,
                self.cursor.position() - 1
            );

            return Err(EvalError::expression(format!(
                "unexpected '{}' after expression",
                extra.lexeme
            )));
        }

        info!("Evaluated to {}", value);

        Ok(value)
    }

    // ─────────────────────── expression rules ─────────────────────

    fn expression(&mut self) -> Result<Integer> {
        let mut left: Integer = self.term()?;

        while let Some(token) = self.cursor.get() {
            let right: Integer = match token.token_type {
                TokenType::PLUS | TokenType::MINUS => self.term()?,
                _ => {
                    self.cursor.put_back();
                    break;
                }
            };

            debug!("{} {} {}", left, token.lexeme, right);

            left = match token.token_type {
                TokenType::PLUS => left.wrapping_add(right),
                _ => left.wrapping_sub(right),
            };
        }

        Ok(left)
    }

    fn term(&mut self) -> Result<Integer> {
        let mut left: Integer = self.primary()?;

        while let Some(token) = self.cursor.get() {
            let operator: TokenType = token.token_type;

            if !matches!(
                operator,
                TokenType::STAR | TokenType::SLASH | TokenType::PERCENT
            ) {
                self.cursor.put_back();
                break;
            }

            let right: Integer = self.primary()?;

            debug!("{} {} {}", left, token.lexeme, right);

            left = apply_factor(operator, left, right)?;
        }

        Ok(left)
    }

    fn primary(&mut self) -> Result<Integer> {
        let token: &Token<'a> = match self.cursor.get() {
            Some(token) => token,
            None => {
                debug!("Primary expected, stream exhausted");
                return Err(EvalError::expression("expected operand, found end of line"));
            }
        };

        match token.token_type {
            TokenType::NUMBER(n) => Ok(n),

            TokenType::LEFT_PAREN => {
                let value: Integer = self.nested(Self::expression)?;

                match self.cursor.get() {
                    Some(close) if close.token_type == TokenType::RIGHT_PAREN => Ok(value),
                    _ => Err(EvalError::expression("expected ')'")),
                }
            }

            TokenType::MINUS => Ok(self.nested(Self::primary)?.wrapping_neg()),

            TokenType::PLUS => self.nested(Self::primary),

            _ => {
                debug!("Token '{}' cannot start an operand", token.lexeme);

                Err(EvalError::expression(format!(
                    "unexpected '{}'",
                    token.lexeme
                )))
            }
        }
    }

    // ────────────────────── utility helpers ───────────────────────

    /// Run a production one nesting level deeper.
    fn nested(&mut self, production: fn(&mut Self) -> Result<Integer>) -> Result<Integer> {
        if self.depth >= MAX_DEPTH {
            return Err(EvalError::expression("nesting too deep"));
        }

        self.depth += 1;
        let result: Result<Integer> = production(self);
        self.depth -= 1;

        result
    }
}

/// Apply `*`, `/` or `%` with truncating division; a zero divisor aborts.
fn apply_factor(operator: TokenType, left: Integer, right: Integer) -> Result<Integer> {
    match operator {
        TokenType::STAR => Ok(left.wrapping_mul(right)),

        TokenType::SLASH | TokenType::PERCENT if right == 0 => {
            debug!("Zero divisor for {} {:?}", left, operator);
            Err(EvalError::DivisionByZero)
        }

        TokenType::SLASH => Ok(left.wrapping_div(right)),

        _ => Ok(left.wrapping_rem(right)),
    }
}

/// Evaluate a resolved token slice.
pub fn evaluate(tokens: &[Token<'_>]) -> Result<Integer> {
    Evaluator::new(tokens).evaluate()
}
