/// The axis pages are laid out and swiped along.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

/// How a paging backend animates between pages.
///
/// `Curl` is only meaningful on horizontal backends that support it; the scroll transport always
/// slides.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionStyle {
    #[default]
    Scroll,
    Curl,
}

/// Direction of a page transition, resolved from an index delta.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NavigationDirection {
    Forward,
    Reverse,
}

impl NavigationDirection {
    /// `Forward` iff `to > from`, `Reverse` otherwise (including `to == from`).
    pub fn between(from: usize, to: usize) -> Self {
        if to > from {
            Self::Forward
        } else {
            Self::Reverse
        }
    }
}

/// One of nine anchor positions inside a container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Alignment {
    TopLeading,
    Top,
    TopTrailing,
    Leading,
    #[default]
    Center,
    Trailing,
    BottomLeading,
    Bottom,
    BottomTrailing,
}

impl Alignment {
    /// Horizontal anchor as a fraction of the free space: 0 (leading), 0.5, 1 (trailing).
    pub fn horizontal_fraction(self) -> f32 {
        match self {
            Self::TopLeading | Self::Leading | Self::BottomLeading => 0.0,
            Self::Top | Self::Center | Self::Bottom => 0.5,
            Self::TopTrailing | Self::Trailing | Self::BottomTrailing => 1.0,
        }
    }

    /// Vertical anchor as a fraction of the free space: 0 (top), 0.5, 1 (bottom).
    pub fn vertical_fraction(self) -> f32 {
        match self {
            Self::TopLeading | Self::Top | Self::TopTrailing => 0.0,
            Self::Leading | Self::Center | Self::Trailing => 0.5,
            Self::BottomLeading | Self::Bottom | Self::BottomTrailing => 1.0,
        }
    }
}

/// Four-sided spacing.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeInsets {
    pub top: f32,
    pub leading: f32,
    pub bottom: f32,
    pub trailing: f32,
}

impl EdgeInsets {
    pub const ZERO: Self = Self::all(0.0);

    pub const fn all(value: f32) -> Self {
        Self {
            top: value,
            leading: value,
            bottom: value,
            trailing: value,
        }
    }

    pub const fn new(top: f32, leading: f32, bottom: f32, trailing: f32) -> Self {
        Self {
            top,
            leading,
            bottom,
            trailing,
        }
    }

    pub fn horizontal(&self) -> f32 {
        self.leading + self.trailing
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// The component along `orientation`'s paging axis.
    pub fn along(self, orientation: Orientation) -> f32 {
        match orientation {
            Orientation::Horizontal => self.x,
            Orientation::Vertical => self.y,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// The extent along `orientation`'s paging axis.
    pub fn along(self, orientation: Orientation) -> f32 {
        match orientation {
            Orientation::Horizontal => self.width,
            Orientation::Vertical => self.height,
        }
    }
}
