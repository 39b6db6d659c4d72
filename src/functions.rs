use miette::SourceSpan;

use crate::error::CalcError;

/// The fixed dispatch table of named functions. Each takes exactly one
/// argument. Trig inputs and inverse-trig outputs are in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    Sqrt,
    Cbrt,
    Log,
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Abs,
    Fact,
    Percent,
}

impl Function {
    pub const ALL: [Function; 12] = [
        Function::Sqrt,
        Function::Cbrt,
        Function::Log,
        Function::Sin,
        Function::Cos,
        Function::Tan,
        Function::Asin,
        Function::Acos,
        Function::Atan,
        Function::Abs,
        Function::Fact,
        Function::Percent,
    ];

    /// Calculator button symbols accepted in place of a name when symbol
    /// aliases are enabled. Longest first.
    pub const ALIASES: [(&'static str, Function); 3] = [
        ("|x|", Function::Abs),
        ("!", Function::Fact),
        ("%", Function::Percent),
    ];

    pub fn name(self) -> &'static str {
        match self {
            Function::Sqrt => "sqrt",
            Function::Cbrt => "cbrt",
            Function::Log => "log",
            Function::Sin => "sin",
            Function::Cos => "cos",
            Function::Tan => "tan",
            Function::Asin => "asin",
            Function::Acos => "acos",
            Function::Atan => "atan",
            Function::Abs => "abs",
            Function::Fact => "fact",
            Function::Percent => "%",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|function| function.name() == name)
    }

    /// Applies the function. `span` locates the function name for errors.
    pub fn apply(self, x: f64, span: SourceSpan) -> Result<f64, CalcError> {
        let result = match self {
            Function::Sqrt => x.sqrt(),
            Function::Cbrt => x.cbrt(),
            Function::Log => x.log10(),
            Function::Sin => x.to_radians().sin(),
            Function::Cos => x.to_radians().cos(),
            Function::Tan => x.to_radians().tan(),
            Function::Asin => x.asin().to_degrees(),
            Function::Acos => x.acos().to_degrees(),
            Function::Atan => x.atan().to_degrees(),
            Function::Abs => x.abs(),
            Function::Fact => {
                // Truncates toward zero; saturates out of range, NaN becomes 0.
                let n = x as i64;
                factorial(n).ok_or(CalcError::NegativeFactorial { value: n, span })?
            }
            Function::Percent => x / 100.0,
        };
        Ok(result)
    }
}

/// `n!` as a float, `None` for negative `n`.
///
/// The product is accumulated in `f64`, so results past `22!` lose precision
/// and everything from `171!` on is infinite. The loop stops as soon as the
/// product overflows.
pub fn factorial(n: i64) -> Option<f64> {
    if n < 0 {
        return None;
    }

    let mut product = 1.0;
    for i in 1..=n {
        product *= i as f64;
        if product.is_infinite() {
            break;
        }
    }
    Some(product)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span() -> SourceSpan {
        (0, 0).into()
    }

    fn apply(function: Function, x: f64) -> f64 {
        function.apply(x, span()).unwrap()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_lookup_every_name() {
        for function in Function::ALL {
            assert_eq!(Function::from_name(function.name()), Some(function));
        }
    }

    #[test]
    fn test_lookup_unknown() {
        assert_eq!(Function::from_name("foo"), None);
        assert_eq!(Function::from_name("SIN"), None);
        assert_eq!(Function::from_name(""), None);
    }

    #[test]
    fn test_roots_and_log() {
        assert_eq!(apply(Function::Sqrt, 16.0), 4.0);
        assert_close(apply(Function::Cbrt, 27.0), 3.0);
        assert_close(apply(Function::Cbrt, -8.0), -2.0);
        assert_close(apply(Function::Log, 1000.0), 3.0);
    }

    #[test]
    fn test_trig_in_degrees() {
        assert_close(apply(Function::Sin, 30.0), 0.5);
        assert_close(apply(Function::Cos, 60.0), 0.5);
        assert_close(apply(Function::Tan, 45.0), 1.0);
    }

    #[test]
    fn test_inverse_trig_in_degrees() {
        assert_close(apply(Function::Asin, 0.5), 30.0);
        assert_close(apply(Function::Acos, 0.5), 60.0);
        assert_close(apply(Function::Atan, 1.0), 45.0);
    }

    #[test]
    fn test_abs_and_percent() {
        assert_eq!(apply(Function::Abs, -3.5), 3.5);
        assert_eq!(apply(Function::Percent, 50.0), 0.5);
    }

    #[test]
    fn test_domain_errors_are_values() {
        assert!(apply(Function::Sqrt, -1.0).is_nan());
        assert!(apply(Function::Log, -1.0).is_nan());
        assert_eq!(apply(Function::Log, 0.0), f64::NEG_INFINITY);
        assert!(apply(Function::Asin, 2.0).is_nan());
    }

    #[test]
    fn test_fact_truncates() {
        assert_eq!(apply(Function::Fact, 3.9), 6.0);
        assert_eq!(apply(Function::Fact, -0.5), 1.0);
        assert_eq!(apply(Function::Fact, f64::NAN), 1.0);
    }

    #[test]
    fn test_fact_negative() {
        let err = Function::Fact.apply(-2.7, (3, 4).into()).unwrap_err();
        assert_eq!(
            err,
            CalcError::NegativeFactorial {
                value: -2,
                span: (3, 4).into()
            }
        );
    }

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(0), Some(1.0));
        assert_eq!(factorial(1), Some(1.0));
        assert_eq!(factorial(5), Some(120.0));
        assert_eq!(factorial(12), Some(479001600.0));
        assert_eq!(factorial(-1), None);
    }

    #[test]
    fn test_factorial_overflows_to_infinity() {
        assert!(factorial(170).unwrap().is_finite());
        assert_eq!(factorial(171), Some(f64::INFINITY));
        assert_eq!(factorial(i64::MAX), Some(f64::INFINITY));
    }
}
