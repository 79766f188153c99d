use crate::core::actions::rasterize_units::ports::colour_map::ColourMap;
use crate::core::fractals::pythagoras::colour_mapping::kinds::PythagorasColourMapKinds;

pub trait PythagorasColourMap: ColourMap {
    fn kind(&self) -> PythagorasColourMapKinds;
}
