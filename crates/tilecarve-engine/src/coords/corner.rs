use std::fmt;
use std::str::FromStr;

/// One of the four corners of a tile.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    /// All corners in canonical order.
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    /// Snake-case identifier (`top_left`, `top_right`, ...).
    pub const fn as_str(self) -> &'static str {
        match self {
            Corner::TopLeft => "top_left",
            Corner::TopRight => "top_right",
            Corner::BottomLeft => "bottom_left",
            Corner::BottomRight => "bottom_right",
        }
    }

    #[inline]
    pub const fn is_left(self) -> bool {
        matches!(self, Corner::TopLeft | Corner::BottomLeft)
    }

    #[inline]
    pub const fn is_top(self) -> bool {
        matches!(self, Corner::TopLeft | Corner::TopRight)
    }

    /// Corner on the other side of a vertical axis (left <-> right).
    pub const fn mirrored_horizontally(self) -> Corner {
        match self {
            Corner::TopLeft => Corner::TopRight,
            Corner::TopRight => Corner::TopLeft,
            Corner::BottomLeft => Corner::BottomRight,
            Corner::BottomRight => Corner::BottomLeft,
        }
    }

    /// Corner on the other side of a horizontal axis (top <-> bottom).
    pub const fn mirrored_vertically(self) -> Corner {
        match self {
            Corner::TopLeft => Corner::BottomLeft,
            Corner::TopRight => Corner::BottomRight,
            Corner::BottomLeft => Corner::TopLeft,
            Corner::BottomRight => Corner::TopRight,
        }
    }

    const fn bit(self) -> u8 {
        match self {
            Corner::TopLeft => 0b0001,
            Corner::TopRight => 0b0010,
            Corner::BottomLeft => 0b0100,
            Corner::BottomRight => 0b1000,
        }
    }
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a corner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCornerError {
    pub input: String,
}

impl fmt::Display for ParseCornerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown corner `{}` (expected top_left, top_right, bottom_left or bottom_right)",
            self.input
        )
    }
}

impl std::error::Error for ParseCornerError {}

impl FromStr for Corner {
    type Err = ParseCornerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Corner::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ParseCornerError { input: s.to_owned() })
    }
}

/// Set of corners to round on a tile.
///
/// Stored as a bit set so it can be built in `const` context; duplicates
/// collapse and iteration always follows [`Corner::ALL`] order.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct CornerSet(u8);

impl CornerSet {
    #[inline]
    pub const fn empty() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn all() -> Self {
        Self(0b1111)
    }

    pub const fn from_corners(corners: &[Corner]) -> Self {
        let mut set = Self::empty();
        let mut i = 0;
        while i < corners.len() {
            set = set.with(corners[i]);
            i += 1;
        }
        set
    }

    #[inline]
    pub const fn with(self, corner: Corner) -> Self {
        Self(self.0 | corner.bit())
    }

    #[inline]
    pub const fn contains(self, corner: Corner) -> bool {
        self.0 & corner.bit() != 0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(self) -> impl Iterator<Item = Corner> {
        Corner::ALL.into_iter().filter(move |c| self.contains(*c))
    }

    pub fn mirrored_horizontally(self) -> Self {
        self.iter().map(Corner::mirrored_horizontally).collect()
    }

    pub fn mirrored_vertically(self) -> Self {
        self.iter().map(Corner::mirrored_vertically).collect()
    }
}

impl FromIterator<Corner> for CornerSet {
    fn from_iter<I: IntoIterator<Item = Corner>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), CornerSet::with)
    }
}
