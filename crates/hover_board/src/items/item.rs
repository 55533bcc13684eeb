//! Item records and shape discriminants

use super::slider::SliderItem;

/// Discriminant of an item's shape
///
/// Controllers only care whether an item is a slider; the remaining
/// variants all render through a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemType {
    /// Plain selectable button
    Plain,
    /// Toggle with a checked state
    Checkbox,
    /// Member of a radio group
    Radio,
    /// Opens a child level
    Parent,
    /// Stays selected while held
    Sticky,
    /// Continuous or snapped value slider
    Slider,
}

impl ItemType {
    /// Whether this type renders through a slider renderer
    pub fn is_slider(self) -> bool {
        self == Self::Slider
    }
}

/// Shape-specific item data
#[derive(Debug, Clone, PartialEq)]
pub enum ItemKind {
    /// Plain selectable button
    Plain,
    /// Toggle with a checked state
    Checkbox {
        /// Whether the box is checked
        value: bool,
    },
    /// Member of a radio group
    Radio {
        /// Whether this option is the selected one
        value: bool,
    },
    /// Opens a child level
    Parent,
    /// Stays selected while held
    Sticky,
    /// Value slider
    Slider(SliderItem),
}

impl ItemKind {
    /// The shape discriminant
    pub fn item_type(&self) -> ItemType {
        match self {
            Self::Plain => ItemType::Plain,
            Self::Checkbox { .. } => ItemType::Checkbox,
            Self::Radio { .. } => ItemType::Radio,
            Self::Parent => ItemType::Parent,
            Self::Sticky => ItemType::Sticky,
            Self::Slider(_) => ItemType::Slider,
        }
    }
}

/// An interactive item bound to a controller
#[derive(Debug, Clone, PartialEq)]
pub struct ItemData {
    /// Display label
    pub label: String,
    /// Shape and shape-specific state
    pub kind: ItemKind,
}

impl ItemData {
    /// Create an item with the given label and shape
    pub fn new(label: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            label: label.into(),
            kind,
        }
    }

    /// Plain button item
    pub fn plain(label: impl Into<String>) -> Self {
        Self::new(label, ItemKind::Plain)
    }

    /// Checkbox item
    pub fn checkbox(label: impl Into<String>, value: bool) -> Self {
        Self::new(label, ItemKind::Checkbox { value })
    }

    /// Radio item
    pub fn radio(label: impl Into<String>, value: bool) -> Self {
        Self::new(label, ItemKind::Radio { value })
    }

    /// Parent item
    pub fn parent(label: impl Into<String>) -> Self {
        Self::new(label, ItemKind::Parent)
    }

    /// Sticky item
    pub fn sticky(label: impl Into<String>) -> Self {
        Self::new(label, ItemKind::Sticky)
    }

    /// Slider item
    pub fn slider(label: impl Into<String>, slider: SliderItem) -> Self {
        Self::new(label, ItemKind::Slider(slider))
    }

    /// The shape discriminant
    pub fn item_type(&self) -> ItemType {
        self.kind.item_type()
    }

    /// Slider data, if this item is a slider
    pub fn as_slider(&self) -> Option<&SliderItem> {
        match &self.kind {
            ItemKind::Slider(slider) => Some(slider),
            _ => None,
        }
    }

    /// Mutable slider data, if this item is a slider
    pub fn as_slider_mut(&mut self) -> Option<&mut SliderItem> {
        match &mut self.kind {
            ItemKind::Slider(slider) => Some(slider),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_type_follows_kind() {
        assert_eq!(ItemData::plain("a").item_type(), ItemType::Plain);
        assert_eq!(ItemData::checkbox("a", true).item_type(), ItemType::Checkbox);
        assert_eq!(ItemData::radio("a", false).item_type(), ItemType::Radio);
        assert_eq!(ItemData::parent("a").item_type(), ItemType::Parent);
        assert_eq!(ItemData::sticky("a").item_type(), ItemType::Sticky);
        assert!(ItemData::slider("a", SliderItem::default()).item_type().is_slider());
    }

    #[test]
    fn test_slider_accessors() {
        let mut item = ItemData::slider("Volume", SliderItem::new(0.0, 10.0));
        assert!(item.as_slider().is_some());

        if let Some(slider) = item.as_slider_mut() {
            slider.set_value(0.5);
        }
        assert_eq!(item.as_slider().map(SliderItem::value), Some(0.5));

        item.kind = ItemKind::Sticky;
        assert!(item.as_slider().is_none());
        assert!(item.as_slider_mut().is_none());
    }
}
