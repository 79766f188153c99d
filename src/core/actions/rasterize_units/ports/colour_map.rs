use crate::core::data::colour::Colour;

/// Chooses a fill colour from a unit's recursion depth.
pub trait ColourMap: Send + Sync {
    fn map(&self, depth: u32) -> Colour;

    fn display_name(&self) -> &str;
}
