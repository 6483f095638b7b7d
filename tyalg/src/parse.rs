//! Textual syntax for type expressions.
//!
//! ```text
//! sum     = product ('+' product)*
//! product = power ('*' power)*
//! power   = atom ('^' power)?
//! atom    = number | '(' sum ')'
//! ```
//!
//! `0` is `Zero`, `1` is `One`, any larger number is an atom of that size.
//! `^` binds tightest and associates to the right.

use {
    crate::expr::TypeExpr,
    core::{iter::Peekable, str::CharIndices, str::FromStr},
    thiserror::Error,
};

/// Why a string is not a type expression.
/// Offsets are in bytes from the start of the input.
#[derive(Clone, Debug, Eq, Error, Hash, PartialEq)]
#[non_exhaustive]
pub enum ParseError {
    /// The input stopped in the middle of an expression.
    #[error("unexpected end of input")]
    UnexpectedEnd,
    /// A character that cannot start or continue an expression here.
    #[error("unexpected `{found}` at offset {offset}")]
    Unexpected { found: char, offset: usize },
    /// A literal too large to be an atom size.
    #[error("number at offset {offset} does not fit in 64 bits")]
    TooLarge { offset: usize },
}

struct Parser<'s> {
    input: &'s str,
    chars: Peekable<CharIndices<'s>>,
}

impl<'s> Parser<'s> {
    fn new(input: &'s str) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
        }
    }

    fn skip_whitespace(&mut self) {
        while self.chars.next_if(|&(_, c)| c.is_whitespace()).is_some() {}
    }

    fn peek(&mut self) -> Option<(usize, char)> {
        let () = self.skip_whitespace();
        self.chars.peek().copied()
    }

    fn eat(&mut self, expected: char) -> bool {
        let () = self.skip_whitespace();
        self.chars.next_if(|&(_, c)| c == expected).is_some()
    }

    fn finish(mut self, t: TypeExpr) -> Result<TypeExpr, ParseError> {
        match self.peek() {
            None => Ok(t),
            Some((offset, found)) => Err(ParseError::Unexpected { found, offset }),
        }
    }

    fn sum(&mut self) -> Result<TypeExpr, ParseError> {
        let mut acc = self.product()?;
        while self.eat('+') {
            acc = TypeExpr::sum(acc, self.product()?);
        }
        Ok(acc)
    }

    fn product(&mut self) -> Result<TypeExpr, ParseError> {
        let mut acc = self.power()?;
        while self.eat('*') {
            acc = TypeExpr::product(acc, self.power()?);
        }
        Ok(acc)
    }

    fn power(&mut self) -> Result<TypeExpr, ParseError> {
        let base = self.atom()?;
        if self.eat('^') {
            Ok(TypeExpr::exp(base, self.power()?))
        } else {
            Ok(base)
        }
    }

    fn atom(&mut self) -> Result<TypeExpr, ParseError> {
        match self.peek() {
            None => Err(ParseError::UnexpectedEnd),
            Some((_, '(')) => {
                let _: Option<_> = self.chars.next();
                let inner = self.sum()?;
                if self.eat(')') {
                    Ok(inner)
                } else {
                    match self.peek() {
                        None => Err(ParseError::UnexpectedEnd),
                        Some((offset, found)) => Err(ParseError::Unexpected { found, offset }),
                    }
                }
            }
            Some((start, c)) if c.is_ascii_digit() => {
                let mut end = start;
                while let Some((i, c)) = self.chars.next_if(|&(_, c)| c.is_ascii_digit()) {
                    end = i.saturating_add(c.len_utf8());
                }
                let digits = self.input.get(start..end).unwrap_or_default();
                let n = digits
                    .parse::<u64>()
                    .map_err(|_| ParseError::TooLarge { offset: start })?;
                Ok(TypeExpr::natural(n))
            }
            Some((offset, found)) => Err(ParseError::Unexpected { found, offset }),
        }
    }
}

impl FromStr for TypeExpr {
    type Err = ParseError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parser = Parser::new(s);
        let t = parser.sum()?;
        parser.finish(t)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn n(n: u64) -> TypeExpr {
        TypeExpr::natural(n)
    }

    #[test]
    fn precedence() {
        pretty_assertions::assert_eq!(
            "2 + 3 * 4 ^ 5".parse::<TypeExpr>(),
            Ok(n(2) + n(3) * n(4).pow(n(5))),
        );
        pretty_assertions::assert_eq!("(2+2)*2".parse::<TypeExpr>(), Ok((n(2) + n(2)) * n(2)));
    }

    #[test]
    fn exponentiation_is_right_associative() {
        pretty_assertions::assert_eq!(
            "2 ^ 3 ^ 2".parse::<TypeExpr>(),
            Ok(n(2).pow(n(3).pow(n(2)))),
        );
    }

    #[test]
    fn sums_and_products_are_left_associative() {
        pretty_assertions::assert_eq!("1 + 2 + 3".parse::<TypeExpr>(), Ok((n(1) + n(2)) + n(3)));
        pretty_assertions::assert_eq!("1 * 2 * 3".parse::<TypeExpr>(), Ok((n(1) * n(2)) * n(3)));
    }

    #[test]
    fn display_parses_back() {
        let t = (n(0) + n(7)) * n(3).pow(n(2) + n(1));
        pretty_assertions::assert_eq!(t.to_string().parse::<TypeExpr>(), Ok(t));
    }

    #[test]
    fn errors_point_at_the_problem() {
        pretty_assertions::assert_eq!("".parse::<TypeExpr>(), Err(ParseError::UnexpectedEnd));
        pretty_assertions::assert_eq!("(2 + 3".parse::<TypeExpr>(), Err(ParseError::UnexpectedEnd));
        pretty_assertions::assert_eq!(
            "2 + x".parse::<TypeExpr>(),
            Err(ParseError::Unexpected {
                found: 'x',
                offset: 4,
            }),
        );
        pretty_assertions::assert_eq!(
            "2 3".parse::<TypeExpr>(),
            Err(ParseError::Unexpected {
                found: '3',
                offset: 2,
            }),
        );
        pretty_assertions::assert_eq!(
            "99999999999999999999".parse::<TypeExpr>(),
            Err(ParseError::TooLarge { offset: 0 }),
        );
    }
}
