use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColourStrategyKind {
    Direct,
    Palette,
}

impl ColourStrategyKind {
    pub const ALL: &'static [Self] = &[Self::Palette, Self::Direct];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::Palette => "palette",
        }
    }
}

impl Default for ColourStrategyKind {
    fn default() -> Self {
        Self::Palette
    }
}

impl fmt::Display for ColourStrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).display_name())
    }
}

impl FromStr for ColourStrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.display_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown colour strategy '{}', expected direct or palette", s))
    }
}
