//! Rectangle renderer controller
//!
//! Each frame the controller:
//! 1. Picks button or slider mode from the bound item's shape, destroying the
//!    renderer of the other mode before acquiring (reuse, adopt an existing
//!    child, or build) the one it needs
//! 2. Pushes item, highlight and selection state into the active renderer
//! 3. For sliders, resolves hover, jump preview and sticky drags
//! 4. Calls the renderer's `update_after_parent`
//!
//! At most one renderer is held at any time; [`ActiveRenderer`] makes the
//! "both at once" state unrepresentable.

use log::{debug, error};

use super::button::RectangleButton;
use super::icon::{icon_pair_for, IconPair};
use super::slider::{RectangleSlider, JUMP_INACTIVE};
use crate::config::{clamp_renderer_size, RendererConfig};
use crate::foundation::math::{eased_value, Mat4, Vec3};
use crate::items::{ItemData, ItemKind, ItemType, SliderItem};
use crate::scene::{NodeKey, RendererRole, RendererScene, SceneComponent, SceneError};
use crate::state::{HighlightState, SelectionState};

/// Controller errors
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ControllerError {
    /// Nearest-position query while no renderer is active
    #[error("No button or slider renderer")]
    NoActiveRenderer,

    /// Slider settings were pushed for an item that is not a slider
    #[error("Item shape {0:?} cannot drive a slider renderer")]
    ItemShapeMismatch(ItemType),

    /// The controller's own scene node is gone
    #[error("Controller node {0:?} is missing from the scene")]
    MissingNode(NodeKey),

    /// Scene operation failed while acquiring a renderer
    #[error("Scene error: {0}")]
    Scene(#[from] SceneError),
}

/// Drives renderer objects from item state each frame
pub trait RendererController {
    /// Run one frame of synchronization
    fn update(
        &mut self,
        scene: &mut RendererScene,
        item: &mut ItemData,
        highlight: &HighlightState,
        selection: &SelectionState,
    ) -> Result<(), ControllerError>;

    /// Nearest point on the active renderer's surface to a world-space point
    fn nearest_world_position(&self, scene: &RendererScene, from: Vec3) -> Result<Vec3, ControllerError>;

    /// Hand the renderer back to manual editing without destroying it
    fn release_control_of_renderer(&mut self, scene: &mut RendererScene);

    /// Enable or disable the controller; disabled controllers release their
    /// renderer on the next update and then stay idle
    fn set_enabled(&mut self, enabled: bool);
}

/// Renderer currently held by a controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveRenderer {
    /// Nothing acquired yet
    #[default]
    None,
    /// Button renderer node
    Button(NodeKey),
    /// Slider renderer node
    Slider(NodeKey),
}

/// Controller binding an item to a rectangle button or slider renderer
#[derive(Debug, Clone)]
pub struct RectangleController {
    node: NodeKey,
    size_x: f32,
    size_y: f32,
    renderer: ActiveRenderer,
    config: RendererConfig,
    enabled: bool,
    released: bool,
}

impl RectangleController {
    /// Create a controller whose renderers are parented under `node`
    pub fn new(node: NodeKey, config: RendererConfig) -> Self {
        Self {
            node,
            size_x: clamp_renderer_size(config.controller.default_size_x),
            size_y: clamp_renderer_size(config.controller.default_size_y),
            renderer: ActiveRenderer::None,
            config,
            enabled: true,
            released: false,
        }
    }

    /// Scene node renderers are parented under
    pub fn node(&self) -> NodeKey {
        self.node
    }

    /// Width pushed to the active renderer
    pub fn size_x(&self) -> f32 {
        self.size_x
    }

    /// Height pushed to the active renderer
    pub fn size_y(&self) -> f32 {
        self.size_y
    }

    /// Set the renderer size; each axis is clamped to `[0, 100]` and non-finite values become 0
    pub fn set_size(&mut self, size_x: f32, size_y: f32) {
        self.size_x = clamp_renderer_size(size_x);
        self.size_y = clamp_renderer_size(size_y);
    }

    /// Renderer held after the last update
    pub fn active_renderer(&self) -> ActiveRenderer {
        self.renderer
    }

    /// Role of the held renderer, if any
    pub fn active_role(&self) -> Option<RendererRole> {
        match self.renderer {
            ActiveRenderer::None => None,
            ActiveRenderer::Button(_) => Some(RendererRole::Button),
            ActiveRenderer::Slider(_) => Some(RendererRole::Slider),
        }
    }

    /// Whether the controller runs its updates
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn try_rebuild_with_item_type(&mut self, scene: &mut RendererScene, item_type: ItemType) -> Result<(), ControllerError> {
        if item_type.is_slider() {
            if let ActiveRenderer::Button(key) = self.renderer {
                debug!("Destroying button renderer for slider item");
                scene.destroy(key);
                self.renderer = ActiveRenderer::None;
            }
            self.renderer = ActiveRenderer::Slider(self.use_or_find_or_build(scene, RendererRole::Slider)?);
        } else {
            if let ActiveRenderer::Slider(key) = self.renderer {
                debug!("Destroying slider renderer for {item_type:?} item");
                scene.destroy(key);
                self.renderer = ActiveRenderer::None;
            }
            self.renderer = ActiveRenderer::Button(self.use_or_find_or_build(scene, RendererRole::Button)?);
        }

        Ok(())
    }

    fn use_or_find_or_build(&self, scene: &mut RendererScene, role: RendererRole) -> Result<NodeKey, ControllerError> {
        let held = match (self.renderer, role) {
            (ActiveRenderer::Button(key), RendererRole::Button) if scene.button(key).is_some() => Some(key),
            (ActiveRenderer::Slider(key), RendererRole::Slider) if scene.slider(key).is_some() => Some(key),
            _ => None,
        };
        if let Some(key) = held {
            return Ok(key);
        }

        if let Some(existing) = scene.find_child_with_role(self.node, role) {
            debug!("Adopting existing {role:?} renderer");
            return Ok(existing);
        }

        let (name, component) = match role {
            RendererRole::Button => ("ButtonRenderer", SceneComponent::Button(Box::new(RectangleButton::new()))),
            RendererRole::Slider => (
                "SliderRenderer",
                SceneComponent::Slider(Box::new(RectangleSlider::new(&self.config.slider, &self.config.mesh))),
            ),
        };

        debug!("Building new {role:?} renderer");
        Ok(scene.spawn_renderer(self.node, name, component)?)
    }

    fn update_button_settings(
        &self,
        button: &mut RectangleButton,
        item: &ItemData,
        highlight: &HighlightState,
        selection: &SelectionState,
    ) {
        button.controlled_by_item = true;
        button.size_x = self.size_x;
        button.size_y = self.size_y;

        button.canvas.label_text.clone_from(&item.label);
        button.canvas.icons = icon_pair_for(&item.kind);

        button.fill.set_highlight_progress(highlight.max_highlight_progress());
        button.fill.edge_visible = highlight.is_nearest_across_all_items_for_any_cursor;
        button.fill.set_selection_progress(selection.selection_progress());
    }

    fn update_slider_settings(
        &self,
        slider: &mut RectangleSlider,
        world: &Mat4,
        label: &str,
        data: &mut SliderItem,
        highlight: &HighlightState,
        selection: &SelectionState,
    ) {
        slider.controlled_by_item = true;
        slider.size_x = self.size_x;
        slider.size_y = self.size_y;

        let handle_canvas = &mut slider.handle_button.canvas;
        handle_canvas.label_text = data.formatted_label(label);
        handle_canvas.icons = IconPair::SLIDER;

        slider.handle_value = data.snapped_value();
        slider.fill_starting_point = data.fill_starting_point;
        slider.zero_value = data.zero_value();
        slider.allow_jump = data.allow_jump;

        let high_progress = highlight.max_highlight_progress();
        let edge_visible = highlight.is_nearest_across_all_items_for_any_cursor;
        let sel_progress = selection.selection_progress();
        for button in [&mut slider.handle_button, &mut slider.jump_button] {
            button.fill.set_highlight_progress(high_progress);
            button.fill.edge_visible = edge_visible;
            button.fill.set_selection_progress(sel_progress);
        }

        let Some(high) = highlight.nearest_highlight else {
            data.set_hover_value(None);
            slider.jump_value = JUMP_INACTIVE;
            return;
        };

        let value = slider.value_via_nearest_world_position(world, high.nearest_world_pos);
        data.set_hover_value(Some(value));

        let snapped = data.snapped_hover_value().unwrap_or(value);
        let show_value = eased_value(data.snaps, value, snapped, self.config.controller.hover_ease_power);
        slider.jump_value = show_value;

        if data.is_sticky_selected {
            data.set_value(value);
            slider.handle_value = show_value;
        }
    }

    fn sync_button(
        &self,
        scene: &mut RendererScene,
        key: NodeKey,
        item: &ItemData,
        highlight: &HighlightState,
        selection: &SelectionState,
    ) {
        if let Some(button) = scene.button_mut(key) {
            self.update_button_settings(button, item, highlight, selection);
            button.update_after_parent();
        }
    }

    fn sync_slider(
        &self,
        scene: &mut RendererScene,
        key: NodeKey,
        item: &mut ItemData,
        highlight: &HighlightState,
        selection: &SelectionState,
    ) -> Result<(), ControllerError> {
        let item_type = item.item_type();
        let ItemData { label, kind } = item;
        let ItemKind::Slider(data) = kind else {
            error!("Slider renderer active for a {item_type:?} item");
            return Err(ControllerError::ItemShapeMismatch(item_type));
        };

        let world = scene.world_matrix(key).unwrap_or_else(Mat4::identity);
        if let Some(slider) = scene.slider_mut(key) {
            self.update_slider_settings(slider, &world, label.as_str(), data, highlight, selection);
            slider.update_after_parent();
        }

        Ok(())
    }
}

impl RendererController for RectangleController {
    fn update(
        &mut self,
        scene: &mut RendererScene,
        item: &mut ItemData,
        highlight: &HighlightState,
        selection: &SelectionState,
    ) -> Result<(), ControllerError> {
        if !self.enabled {
            if !self.released {
                self.release_control_of_renderer(scene);
                self.released = true;
            }
            return Ok(());
        }
        self.released = false;

        if !scene.contains(self.node) {
            return Err(ControllerError::MissingNode(self.node));
        }

        self.try_rebuild_with_item_type(scene, item.item_type())?;

        match self.renderer {
            ActiveRenderer::Button(key) => self.sync_button(scene, key, item, highlight, selection),
            ActiveRenderer::Slider(key) => self.sync_slider(scene, key, item, highlight, selection)?,
            ActiveRenderer::None => {}
        }

        Ok(())
    }

    fn nearest_world_position(&self, scene: &RendererScene, from: Vec3) -> Result<Vec3, ControllerError> {
        let nearest = match self.renderer {
            ActiveRenderer::Button(key) => scene
                .button(key)
                .zip(scene.world_matrix(key))
                .map(|(button, world)| button.nearest_world_position(&world, from)),
            ActiveRenderer::Slider(key) => scene
                .slider(key)
                .zip(scene.world_matrix(key))
                .map(|(slider, world)| slider.nearest_world_position(&world, from)),
            ActiveRenderer::None => None,
        };

        nearest.ok_or_else(|| {
            error!("Nearest position requested with no active renderer");
            ControllerError::NoActiveRenderer
        })
    }

    fn release_control_of_renderer(&mut self, scene: &mut RendererScene) {
        match self.renderer {
            ActiveRenderer::Button(key) => {
                if let Some(button) = scene.button_mut(key) {
                    button.controlled_by_item = false;
                }
            }
            ActiveRenderer::Slider(key) => {
                if let Some(slider) = scene.slider_mut(key) {
                    slider.controlled_by_item = false;
                }
            }
            ActiveRenderer::None => {}
        }
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Transform;
    use crate::items::SliderFillType;
    use crate::renderers::IconType;
    use crate::state::Highlight;
    use approx::assert_relative_eq;

    struct Fixture {
        scene: RendererScene,
        controller: RectangleController,
    }

    impl Fixture {
        fn new() -> Self {
            crate::foundation::logging::init();
            let mut scene = RendererScene::new();
            let node = scene.spawn_root("item");
            Self {
                scene,
                controller: RectangleController::new(node, RendererConfig::default()),
            }
        }

        fn tick(&mut self, item: &mut ItemData, highlight: &HighlightState) {
            self.controller
                .update(&mut self.scene, item, highlight, &SelectionState::new(0.25))
                .unwrap();
        }

        fn slider(&self) -> &RectangleSlider {
            match self.controller.active_renderer() {
                ActiveRenderer::Slider(key) => self.scene.slider(key).unwrap(),
                other => panic!("expected slider, got {other:?}"),
            }
        }

        fn button(&self) -> &RectangleButton {
            match self.controller.active_renderer() {
                ActiveRenderer::Button(key) => self.scene.button(key).unwrap(),
                other => panic!("expected button, got {other:?}"),
            }
        }
    }

    fn highlight_at(y: f32) -> HighlightState {
        HighlightState::with_highlight(Highlight::new(Vec3::new(0.0, y, 0.0), 0.0, 0.6), true)
    }

    #[test]
    fn test_button_settings_pushed() {
        let mut fixture = Fixture::new();
        fixture.controller.set_size(20.0, 5.0);
        let mut item = ItemData::radio("Option", true);

        fixture.tick(&mut item, &highlight_at(0.0));

        let button = fixture.button();
        assert!(button.controlled_by_item);
        assert_eq!(button.canvas.label_text, "Option");
        assert_eq!(button.canvas.icons, IconPair::new(IconType::RadioOuter, IconType::RadioInner));
        assert_eq!(button.canvas.size_x, 20.0);
        assert_eq!(button.fill.highlight_progress(), 0.6);
        assert_eq!(button.fill.selection_progress(), 0.25);
        assert!(button.fill.edge_visible);
    }

    #[test]
    fn test_size_is_clamped() {
        let mut fixture = Fixture::new();
        fixture.controller.set_size(-4.0, 400.0);
        assert_eq!(fixture.controller.size_x(), 0.0);
        assert_eq!(fixture.controller.size_y(), 100.0);

        fixture.controller.set_size(f32::NAN, f32::INFINITY);
        assert_eq!(fixture.controller.size_x(), 0.0);
        assert_eq!(fixture.controller.size_y(), 0.0);

        let mut item = ItemData::slider("Empty", SliderItem::default());
        fixture.tick(&mut item, &highlight_at(0.0));
        assert_eq!(fixture.slider().size_y, 0.0);
    }

    #[test]
    fn test_mode_switch_destroys_previous_renderer() {
        let mut fixture = Fixture::new();
        let mut item = ItemData::checkbox("Check", true);
        fixture.tick(&mut item, &HighlightState::none());

        let ActiveRenderer::Button(button_key) = fixture.controller.active_renderer() else {
            panic!("expected button");
        };

        item.kind = ItemKind::Slider(SliderItem::new(0.0, 100.0));
        fixture.tick(&mut item, &HighlightState::none());

        assert!(!fixture.scene.contains(button_key));
        assert_eq!(fixture.controller.active_role(), Some(RendererRole::Slider));
        assert_eq!(fixture.scene.len(), 2);

        item.kind = ItemKind::Plain;
        fixture.tick(&mut item, &HighlightState::none());
        assert_eq!(fixture.controller.active_role(), Some(RendererRole::Button));
        assert_eq!(fixture.scene.len(), 2);
    }

    #[test]
    fn test_existing_child_is_adopted() {
        let mut fixture = Fixture::new();
        let node = fixture.controller.node();
        let config = RendererConfig::default();
        let existing = fixture
            .scene
            .spawn_renderer(
                node,
                "SliderRenderer",
                SceneComponent::Slider(Box::new(RectangleSlider::new(&config.slider, &config.mesh))),
            )
            .unwrap();

        let mut item = ItemData::slider("Volume", SliderItem::new(0.0, 10.0));
        fixture.tick(&mut item, &HighlightState::none());

        assert_eq!(fixture.controller.active_renderer(), ActiveRenderer::Slider(existing));
        assert_eq!(fixture.scene.len(), 2);
    }

    #[test]
    fn test_slider_settings_pushed() {
        let mut fixture = Fixture::new();
        let slider_data = SliderItem::new(-50.0, 50.0)
            .with_value(0.75)
            .with_fill_starting_point(SliderFillType::Zero)
            .with_allow_jump(true);
        let mut item = ItemData::slider("Pan", slider_data);

        fixture.tick(&mut item, &HighlightState::none());

        let slider = fixture.slider();
        assert!(slider.controlled_by_item);
        assert_eq!(slider.handle_button.canvas.label_text, "Pan: 25");
        assert_eq!(slider.handle_button.canvas.icons, IconPair::SLIDER);
        assert_relative_eq!(slider.handle_value, 0.75);
        assert_relative_eq!(slider.zero_value, 0.5);
        assert_eq!(slider.fill_starting_point, SliderFillType::Zero);
        assert!(slider.allow_jump);
        assert_eq!(slider.jump_value, JUMP_INACTIVE);
        assert_eq!(slider.jump_button.fill.selection_progress(), 0.25);
        assert!(item.as_slider().unwrap().hover_value().is_none());
    }

    #[test]
    fn test_hover_sets_jump_preview_without_committing() {
        let mut fixture = Fixture::new();
        let mut item = ItemData::slider("Level", SliderItem::new(0.0, 1.0).with_value(0.1));

        // Local y = 2 maps to 0.75 with the default 10-high slider and 2-high handle.
        fixture.tick(&mut item, &highlight_at(2.0));

        let data = item.as_slider().unwrap();
        assert_relative_eq!(data.hover_value().unwrap(), 0.75);
        assert_relative_eq!(data.value(), 0.1);
        assert_relative_eq!(fixture.slider().jump_value, 0.75);
        assert_relative_eq!(fixture.slider().handle_value, 0.1);

        fixture.tick(&mut item, &HighlightState::none());
        assert!(item.as_slider().unwrap().hover_value().is_none());
        assert_eq!(fixture.slider().jump_value, JUMP_INACTIVE);
    }

    #[test]
    fn test_sticky_drag_commits_eased_value() {
        let mut fixture = Fixture::new();
        let mut data = SliderItem::new(0.0, 100.0).with_snaps(5).with_value(0.0);
        data.is_sticky_selected = true;
        let mut item = ItemData::slider("Snap", data);

        // 0.73 along the 8-unit handle travel centered on the origin.
        fixture.tick(&mut item, &highlight_at(-4.0 + 8.0 * 0.73));

        let data = item.as_slider().unwrap();
        let raw = data.value();
        assert_relative_eq!(raw, 0.73, epsilon = 1e-5);
        assert_relative_eq!(data.snapped_hover_value().unwrap(), 0.75);

        let slider = fixture.slider();
        assert!(slider.jump_value > 0.73 && slider.jump_value < 0.75);
        assert_relative_eq!(slider.handle_value, slider.jump_value);
    }

    #[test]
    fn test_hover_uses_renderer_world_transform() {
        let mut fixture = Fixture::new();
        let node = fixture.controller.node();
        fixture.scene.node_mut(node).unwrap().transform = Transform::from_position(Vec3::new(0.0, 100.0, 0.0));
        let mut item = ItemData::slider("Offset", SliderItem::default());

        fixture.tick(&mut item, &highlight_at(100.0));
        assert_relative_eq!(item.as_slider().unwrap().hover_value().unwrap(), 0.5);
    }

    #[test]
    fn test_nearest_world_position_requires_renderer() {
        let mut fixture = Fixture::new();
        assert_eq!(
            fixture.controller.nearest_world_position(&fixture.scene, Vec3::zeros()),
            Err(ControllerError::NoActiveRenderer)
        );

        let mut item = ItemData::plain("Go");
        fixture.tick(&mut item, &HighlightState::none());
        let nearest = fixture
            .controller
            .nearest_world_position(&fixture.scene, Vec3::new(8.0, 0.0, 3.0))
            .unwrap();
        assert_relative_eq!(nearest, Vec3::new(5.0, 0.0, 0.0));
    }

    #[test]
    fn test_release_and_disable() {
        let mut fixture = Fixture::new();
        let mut item = ItemData::sticky("Hold");
        fixture.tick(&mut item, &HighlightState::none());
        assert!(fixture.button().controlled_by_item);

        fixture.controller.release_control_of_renderer(&mut fixture.scene);
        assert!(!fixture.button().controlled_by_item);
        assert_eq!(fixture.controller.active_role(), Some(RendererRole::Button));

        fixture.tick(&mut item, &HighlightState::none());
        assert!(fixture.button().controlled_by_item);

        fixture.controller.set_enabled(false);
        item.label = "Changed".to_string();
        fixture.tick(&mut item, &HighlightState::none());
        assert!(!fixture.button().controlled_by_item);
        assert_eq!(fixture.button().canvas.label_text, "Hold");
    }

    #[test]
    fn test_missing_node_is_reported() {
        let mut fixture = Fixture::new();
        let node = fixture.controller.node();
        fixture.scene.destroy(node);

        let result = fixture.controller.update(
            &mut fixture.scene,
            &mut ItemData::plain("x"),
            &HighlightState::none(),
            &SelectionState::default(),
        );
        assert_eq!(result, Err(ControllerError::MissingNode(node)));
    }
}
