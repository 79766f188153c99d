/// Notice that a depth batch landed in the draw list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchData {
    pub generation: u64,
    pub depth: u32,
    pub units: usize,
}
