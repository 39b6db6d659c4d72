use crate::{
    cursor::Cursor,
    error::CalcError,
    functions::Function,
    ops::Op,
    options::{EvalOptions, MAX_DEPTH_LIMIT},
};

/// Single-pass recursive-descent evaluator. No tree is built: each grammar
/// level returns the value of what it consumed.
///
/// ```text
/// expression := term (('+' | '-') term)*
/// term       := factor (('*' | '/' | '^') factor)*
/// factor     := ('+' | '-') factor
///             | '(' expression ')'
///             | number
///             | name factor
/// ```
///
/// `*`, `/` and `^` share one precedence level and apply left to right, so
/// `2*3^2` is `36` and `2^3^2` is `64`.
pub struct Evaluator<'a> {
    cursor: Cursor<'a>,
    options: EvalOptions,
    depth: usize,
}

impl<'a> Evaluator<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::with_options(input, EvalOptions::default())
    }

    /// `options.max_depth` is clamped to `MAX_DEPTH_LIMIT` even when the
    /// field was set directly.
    pub fn with_options(input: &'a str, mut options: EvalOptions) -> Self {
        options.max_depth = options.max_depth.min(MAX_DEPTH_LIMIT);
        Self {
            cursor: Cursor::new(input),
            options,
            depth: 0,
        }
    }

    /// Evaluates the whole input. The input must be consumed completely.
    pub fn evaluate(mut self) -> Result<f64, CalcError> {
        let value = self.expression()?;

        if !self.cursor.is_at_end() {
            let start = self.cursor.pos();
            let rest = self.cursor.rest();
            return Err(CalcError::TrailingInput {
                rest: rest.to_string(),
                span: (start, rest.len()).into(),
            });
        }

        Ok(value)
    }

    fn expression(&mut self) -> Result<f64, CalcError> {
        let mut x = self.term()?;
        while let Some(op) = self.eat_op(&Op::ADDITIVE) {
            x = op.apply(x, self.term()?);
        }
        Ok(x)
    }

    fn term(&mut self) -> Result<f64, CalcError> {
        let mut x = self.factor()?;
        while let Some(op) = self.eat_op(&Op::MULTIPLICATIVE) {
            x = op.apply(x, self.factor()?);
        }
        Ok(x)
    }

    fn eat_op(&mut self, ops: &[Op]) -> Option<Op> {
        ops.iter().copied().find(|op| self.cursor.try_consume(op.symbol()))
    }

    /// Every recursion path runs through here, so this is where nesting is
    /// bounded.
    fn factor(&mut self) -> Result<f64, CalcError> {
        if self.depth >= self.options.max_depth {
            return Err(CalcError::DepthExceeded {
                limit: self.options.max_depth,
                span: self.cursor.current_span(),
            });
        }

        self.depth += 1;
        let value = self.factor_inner();
        self.depth -= 1;
        value
    }

    fn factor_inner(&mut self) -> Result<f64, CalcError> {
        if self.cursor.try_consume('+') {
            return self.factor();
        }
        if self.cursor.try_consume('-') {
            return Ok(-self.factor()?);
        }

        let start = self.cursor.pos();
        if self.cursor.try_consume('(') {
            let value = self.expression()?;
            // A missing ')' is tolerated unless strict mode asks otherwise.
            if !self.cursor.try_consume(')') && self.options.strict_parens {
                return Err(CalcError::UnclosedParen {
                    span: (start, 1).into(),
                });
            }
            return Ok(value);
        }

        match self.cursor.current() {
            Some(c) if is_number_char(c) => self.number(),
            Some(c) if c.is_ascii_lowercase() => {
                let name = self.cursor.take_while(|c| c.is_ascii_lowercase());
                let span = self.cursor.span_from(start);
                let argument = self.factor()?;
                let function = Function::from_name(name).ok_or_else(|| {
                    CalcError::UnknownFunction {
                        name: name.to_string(),
                        span,
                    }
                })?;
                function.apply(argument, span)
            }
            Some(_) if self.options.symbol_aliases => match self.eat_alias() {
                Some(function) => {
                    let span = self.cursor.span_from(start);
                    let argument = self.factor()?;
                    function.apply(argument, span)
                }
                None => Err(self.unexpected()),
            },
            _ => Err(self.unexpected()),
        }
    }

    fn number(&mut self) -> Result<f64, CalcError> {
        let start = self.cursor.pos();
        let literal = self.cursor.take_while(is_number_char);
        literal.parse::<f64>().map_err(|_| CalcError::NumericFormat {
            literal: literal.to_string(),
            span: self.cursor.span_from(start),
        })
    }

    fn eat_alias(&mut self) -> Option<Function> {
        Function::ALIASES
            .iter()
            .find(|(symbol, _)| self.cursor.try_consume_str(symbol))
            .map(|&(_, function)| function)
    }

    fn unexpected(&self) -> CalcError {
        CalcError::UnexpectedCharacter {
            found: self.cursor.current(),
            span: self.cursor.current_span(),
        }
    }
}

fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

/// Evaluates `input` with the default options.
pub fn evaluate(input: &str) -> Result<f64, CalcError> {
    Evaluator::new(input).evaluate()
}

pub fn evaluate_with(input: &str, options: &EvalOptions) -> Result<f64, CalcError> {
    Evaluator::with_options(input, *options).evaluate()
}
