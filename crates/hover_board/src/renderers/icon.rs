//! Icon codes and the item-shape icon mapping

use crate::items::ItemKind;

/// Icon atlas entries a renderer canvas can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IconType {
    /// No icon
    #[default]
    None,
    /// Checkbox frame
    CheckOuter,
    /// Checkbox tick
    CheckInner,
    /// Radio ring
    RadioOuter,
    /// Radio dot
    RadioInner,
    /// Parent arrow
    Parent,
    /// Sticky marker
    Sticky,
    /// Slider grip
    Slider,
}

/// Outer and inner icon shown on a canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IconPair {
    /// Background/frame icon
    pub outer: IconType,
    /// Foreground icon layered on the outer one
    pub inner: IconType,
}

impl IconPair {
    /// Create an icon pair
    pub const fn new(outer: IconType, inner: IconType) -> Self {
        Self { outer, inner }
    }

    /// Pair with no icons
    pub const NONE: Self = Self::new(IconType::None, IconType::None);

    /// Pair shown on a slider handle
    pub const SLIDER: Self = Self::new(IconType::Slider, IconType::None);
}

/// Icons a button shows for an item shape
pub fn icon_pair_for(kind: &ItemKind) -> IconPair {
    match *kind {
        ItemKind::Checkbox { value } => IconPair::new(
            IconType::CheckOuter,
            if value { IconType::CheckInner } else { IconType::None },
        ),
        ItemKind::Radio { value } => IconPair::new(
            IconType::RadioOuter,
            if value { IconType::RadioInner } else { IconType::None },
        ),
        ItemKind::Parent => IconPair::new(IconType::Parent, IconType::None),
        ItemKind::Sticky => IconPair::new(IconType::Sticky, IconType::None),
        ItemKind::Plain | ItemKind::Slider(_) => IconPair::NONE,
    }
}
