use crate::core::fractals::pythagoras::colour_mapping::kinds::PythagorasColourMapKinds;
use crate::core::fractals::pythagoras::colour_mapping::map::PythagorasColourMap;
use crate::core::fractals::pythagoras::colour_mapping::maps::classic::ClassicDepthColours;
use crate::core::fractals::pythagoras::colour_mapping::maps::gradient::DepthGradient;

/// `depth_span` is the depth at which gradient maps reach their end colour.
#[must_use]
pub fn pythagoras_colour_map_factory(
    kind: PythagorasColourMapKinds,
    depth_span: u32,
) -> Box<dyn PythagorasColourMap> {
    match kind {
        PythagorasColourMapKinds::Classic => Box::new(ClassicDepthColours::new()),
        PythagorasColourMapKinds::Gradient => Box::new(DepthGradient::with_span(depth_span)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_array_has_default_first() {
        assert_eq!(
            PythagorasColourMapKinds::ALL.first(),
            Some(&PythagorasColourMapKinds::default())
        );
    }

    #[test]
    fn factory_builds_requested_kind() {
        for &kind in PythagorasColourMapKinds::ALL {
            let map = pythagoras_colour_map_factory(kind, 32);
            assert_eq!(map.kind(), kind);
            assert_eq!(map.display_name(), kind.display_name());
        }
    }

    #[test]
    fn display_names_are_unique() {
        let names: Vec<&str> = PythagorasColourMapKinds::ALL
            .iter()
            .map(|k| k.display_name())
            .collect();

        assert_ne!(names[0], names[1]);
    }
}
