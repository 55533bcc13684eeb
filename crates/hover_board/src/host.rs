//! Renderer host - owns the scene and drives controllers once per frame
//!
//! The host stands in for the engine's per-frame callback: input code
//! writes highlight/selection snapshots for each item, then calls
//! [`RendererHost::tick`], which runs every controller in insertion order.

use log::{debug, warn};
use slotmap::{new_key_type, SlotMap};

use crate::config::RendererConfig;
use crate::foundation::math::{Transform, Vec3};
use crate::items::ItemData;
use crate::renderers::{ActiveRenderer, ControllerError, RectangleButton, RectangleController, RectangleSlider, RendererController};
use crate::scene::{NodeKey, RendererScene, SceneError};
use crate::state::{HighlightState, SelectionState};

new_key_type! {
    /// Handle to an item bound in a [`RendererHost`]
    pub struct ItemKey;
}

/// Host errors
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum HostError {
    /// Item key is not bound in this host
    #[error("Unknown item")]
    UnknownItem,

    /// Controller failure
    #[error("Controller error: {0}")]
    Controller(#[from] ControllerError),

    /// Scene failure
    #[error("Scene error: {0}")]
    Scene(#[from] SceneError),
}

/// An item with its controller and per-frame state
#[derive(Debug, Clone)]
pub struct ItemEntry {
    /// Controller bound to the item
    pub controller: RectangleController,
    /// Item data
    pub item: ItemData,
    /// Highlight snapshot for the next tick
    pub highlight: HighlightState,
    /// Selection snapshot for the next tick
    pub selection: SelectionState,
}

/// Owns the renderer scene and every bound item
#[derive(Debug)]
pub struct RendererHost {
    config: RendererConfig,
    scene: RendererScene,
    root: NodeKey,
    entries: SlotMap<ItemKey, ItemEntry>,
    order: Vec<ItemKey>,
    frame: u64,
}

impl RendererHost {
    /// Create a host with an empty scene
    pub fn new(config: RendererConfig) -> Self {
        let mut scene = RendererScene::new();
        let root = scene.spawn_root("Board");

        Self {
            config,
            scene,
            root,
            entries: SlotMap::with_key(),
            order: Vec::new(),
            frame: 0,
        }
    }

    /// Bind an item under the board root
    pub fn add_item(&mut self, item: ItemData) -> Result<ItemKey, HostError> {
        self.add_item_at(item, Transform::identity())
    }

    /// Bind an item with a transform relative to the board root
    pub fn add_item_at(&mut self, item: ItemData, transform: Transform) -> Result<ItemKey, HostError> {
        let node = self.scene.spawn_empty(self.root, item.label.clone())?;
        if let Some(node) = self.scene.node_mut(node) {
            node.transform = transform;
        }

        debug!("Binding item '{}' ({:?})", item.label, item.item_type());
        let key = self.entries.insert(ItemEntry {
            controller: RectangleController::new(node, self.config.clone()),
            item,
            highlight: HighlightState::none(),
            selection: SelectionState::default(),
        });
        self.order.push(key);

        Ok(key)
    }

    /// Unbind an item and destroy its renderers
    pub fn remove_item(&mut self, key: ItemKey) -> Option<ItemData> {
        let entry = self.entries.remove(key)?;
        self.order.retain(|&k| k != key);
        self.scene.destroy(entry.controller.node());
        Some(entry.item)
    }

    /// Run one frame for every bound item
    ///
    /// A failing controller does not stop the others; failures are logged
    /// and returned with the item they belong to.
    pub fn tick(&mut self) -> Vec<(ItemKey, ControllerError)> {
        self.frame += 1;
        let mut failures = Vec::new();

        for &key in &self.order {
            let Some(entry) = self.entries.get_mut(key) else {
                continue;
            };

            let ItemEntry { controller, item, highlight, selection } = entry;
            if let Err(err) = controller.update(&mut self.scene, item, highlight, selection) {
                warn!("Frame {}: controller for '{}' failed: {err}", self.frame, item.label);
                failures.push((key, err));
            }
        }

        failures
    }

    /// Number of ticks run so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Bound entry
    pub fn entry(&self, key: ItemKey) -> Option<&ItemEntry> {
        self.entries.get(key)
    }

    /// Bound item
    pub fn item(&self, key: ItemKey) -> Option<&ItemData> {
        self.entries.get(key).map(|entry| &entry.item)
    }

    /// Mutable bound item
    pub fn item_mut(&mut self, key: ItemKey) -> Option<&mut ItemData> {
        self.entries.get_mut(key).map(|entry| &mut entry.item)
    }

    /// Highlight snapshot used by the next tick
    pub fn highlight_mut(&mut self, key: ItemKey) -> Option<&mut HighlightState> {
        self.entries.get_mut(key).map(|entry| &mut entry.highlight)
    }

    /// Selection snapshot used by the next tick
    pub fn selection_mut(&mut self, key: ItemKey) -> Option<&mut SelectionState> {
        self.entries.get_mut(key).map(|entry| &mut entry.selection)
    }

    /// Controller bound to an item
    pub fn controller(&self, key: ItemKey) -> Option<&RectangleController> {
        self.entries.get(key).map(|entry| &entry.controller)
    }

    /// Mutable controller bound to an item
    pub fn controller_mut(&mut self, key: ItemKey) -> Option<&mut RectangleController> {
        self.entries.get_mut(key).map(|entry| &mut entry.controller)
    }

    /// Button renderer currently driven for an item
    pub fn button_for(&self, key: ItemKey) -> Option<&RectangleButton> {
        match self.controller(key)?.active_renderer() {
            ActiveRenderer::Button(node) => self.scene.button(node),
            _ => None,
        }
    }

    /// Slider renderer currently driven for an item
    pub fn slider_for(&self, key: ItemKey) -> Option<&RectangleSlider> {
        match self.controller(key)?.active_renderer() {
            ActiveRenderer::Slider(node) => self.scene.slider(node),
            _ => None,
        }
    }

    /// Nearest point on an item's active renderer to a world-space point
    pub fn nearest_world_position(&self, key: ItemKey, from: Vec3) -> Result<Vec3, HostError> {
        let controller = self.controller(key).ok_or(HostError::UnknownItem)?;
        Ok(controller.nearest_world_position(&self.scene, from)?)
    }

    /// Release an item's renderer for manual editing
    pub fn release_control(&mut self, key: ItemKey) -> Result<(), HostError> {
        let entry = self.entries.get_mut(key).ok_or(HostError::UnknownItem)?;
        entry.controller.release_control_of_renderer(&mut self.scene);
        Ok(())
    }

    /// The renderer scene
    pub fn scene(&self) -> &RendererScene {
        &self.scene
    }

    /// Mutable renderer scene
    pub fn scene_mut(&mut self) -> &mut RendererScene {
        &mut self.scene
    }

    /// Root node every item is parented under
    pub fn root(&self) -> NodeKey {
        self.root
    }

    /// Number of bound items
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no items are bound
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
