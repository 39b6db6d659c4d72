pub mod cursor;
pub mod error;
pub mod evaluator;
pub mod functions;
pub mod ops;
pub mod options;

pub use error::CalcError;
pub use evaluator::*;
pub use options::EvalOptions;
