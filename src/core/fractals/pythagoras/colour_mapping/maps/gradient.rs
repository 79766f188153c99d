use crate::core::actions::rasterize_units::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::pythagoras::colour_mapping::kinds::PythagorasColourMapKinds;
use crate::core::fractals::pythagoras::colour_mapping::map::PythagorasColourMap;

const TRUNK: Colour = Colour::new(101, 67, 33);
const LEAF: Colour = Colour::new(60, 200, 70);

/// Linear interpolation from `start` at depth 0 to `end` at `depth_span`,
/// holding `end` beyond it.
#[derive(Debug, Clone, Copy)]
pub struct DepthGradient {
    start: Colour,
    end: Colour,
    depth_span: u32,
}

impl DepthGradient {
    #[must_use]
    pub fn new(start: Colour, end: Colour, depth_span: u32) -> Self {
        Self {
            start,
            end,
            depth_span,
        }
    }

    #[must_use]
    pub fn with_span(depth_span: u32) -> Self {
        Self::new(TRUNK, LEAF, depth_span)
    }
}

fn lerp_channel(start: u8, end: u8, t: f64) -> i64 {
    let start = f64::from(start);
    let end = f64::from(end);
    (start + (end - start) * t).round() as i64
}

impl ColourMap for DepthGradient {
    fn map(&self, depth: u32) -> Colour {
        let t = if self.depth_span == 0 {
            1.0
        } else {
            (f64::from(depth) / f64::from(self.depth_span)).min(1.0)
        };

        Colour::from_clamped(
            lerp_channel(self.start.r, self.end.r, t),
            lerp_channel(self.start.g, self.end.g, t),
            lerp_channel(self.start.b, self.end.b, t),
        )
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl PythagorasColourMap for DepthGradient {
    fn kind(&self) -> PythagorasColourMapKinds {
        PythagorasColourMapKinds::Gradient
    }
}
