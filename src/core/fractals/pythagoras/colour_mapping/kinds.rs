#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PythagorasColourMapKinds {
    #[default]
    Classic,
    Gradient,
}

impl PythagorasColourMapKinds {
    pub const ALL: &'static [Self] = &[Self::Classic, Self::Gradient];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Classic => "Classic bark-to-leaf",
            Self::Gradient => "Linear gradient",
        }
    }
}

impl std::fmt::Display for PythagorasColourMapKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
