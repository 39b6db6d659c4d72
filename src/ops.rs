/// Binary operators. `Plus`/`Minus` are expression-level, the rest share the
/// single term-level precedence and apply strictly left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
}

impl Op {
    /// Operators tried by `expression`, in order.
    pub const ADDITIVE: [Op; 2] = [Op::Plus, Op::Minus];
    /// Operators tried by `term`, in order.
    pub const MULTIPLICATIVE: [Op; 3] = [Op::Star, Op::Slash, Op::Caret];

    pub fn symbol(self) -> char {
        match self {
            Op::Plus => '+',
            Op::Minus => '-',
            Op::Star => '*',
            Op::Slash => '/',
            Op::Caret => '^',
        }
    }

    /// Non-finite results are returned as they are, never rejected.
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Op::Plus => add(a, b),
            Op::Minus => minus(a, b),
            Op::Star => mult(a, b),
            Op::Slash => div(a, b),
            Op::Caret => expt(a, b),
        }
    }
}

fn add(a: f64, b: f64) -> f64 {
    a + b
}

fn minus(a: f64, b: f64) -> f64 {
    a - b
}

fn mult(a: f64, b: f64) -> f64 {
    a * b
}

fn div(a: f64, b: f64) -> f64 {
    a / b
}

fn expt(a: f64, b: f64) -> f64 {
    a.powf(b)
}
