use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PythagorasError {
    #[error("recursion depth must be non-negative, got {requested}")]
    NegativeDepth { requested: i64 },
    #[error("recursion depth {requested} exceeds the cacheable maximum of {max}")]
    DepthTooLarge { requested: i64, max: u32 },
}
