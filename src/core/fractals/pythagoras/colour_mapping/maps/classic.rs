use crate::core::actions::rasterize_units::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::pythagoras::colour_mapping::kinds::PythagorasColourMapKinds;
use crate::core::fractals::pythagoras::colour_mapping::map::PythagorasColourMap;

const RED_AT_ROOT: i64 = 110;
const RED_STEP_PER_DEPTH: i64 = 35;

/// Dark red trunk fading to black, then rising green towards the leaves.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassicDepthColours;

impl ClassicDepthColours {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ColourMap for ClassicDepthColours {
    fn map(&self, depth: u32) -> Colour {
        let r = RED_AT_ROOT - RED_STEP_PER_DEPTH * i64::from(depth);
        Colour::from_clamped(r, -r, 0)
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl PythagorasColourMap for ClassicDepthColours {
    fn kind(&self) -> PythagorasColourMapKinds {
        PythagorasColourMapKinds::Classic
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_is_dark_red() {
        assert_eq!(ClassicDepthColours.map(0), Colour::new(110, 0, 0));
    }

    #[test]
    fn red_fades_into_green() {
        assert_eq!(ClassicDepthColours.map(3), Colour::new(5, 0, 0));
        assert_eq!(ClassicDepthColours.map(4), Colour::new(0, 30, 0));
        assert_eq!(ClassicDepthColours.map(10), Colour::new(0, 240, 0));
    }

    #[test]
    fn green_saturates_at_full_intensity() {
        assert_eq!(ClassicDepthColours.map(11), Colour::new(0, 255, 0));
        assert_eq!(ClassicDepthColours.map(32), Colour::new(0, 255, 0));
    }
}
