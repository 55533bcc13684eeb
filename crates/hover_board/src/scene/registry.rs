//! Slotmap-backed scene nodes with a renderer role index

use std::collections::HashMap;

use log::debug;
use slotmap::{new_key_type, SlotMap};

use crate::foundation::math::{Mat4, Transform};
use crate::renderers::{RectangleButton, RectangleSlider};

new_key_type! {
    /// Handle to a node in a [`RendererScene`]
    pub struct NodeKey;
}

/// Renderer role a child node can fill for its parent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RendererRole {
    /// Rectangle button renderer
    Button,
    /// Rectangle slider renderer
    Slider,
}

/// Component attached to a scene node
#[derive(Debug, Clone)]
pub enum SceneComponent {
    /// Grouping node without a renderer
    Empty,
    /// Rectangle button renderer
    Button(Box<RectangleButton>),
    /// Rectangle slider renderer
    Slider(Box<RectangleSlider>),
}

impl SceneComponent {
    /// Role this component fills, if it is a renderer
    pub fn role(&self) -> Option<RendererRole> {
        match self {
            Self::Empty => None,
            Self::Button(_) => Some(RendererRole::Button),
            Self::Slider(_) => Some(RendererRole::Slider),
        }
    }
}

/// A node in the scene
#[derive(Debug, Clone)]
pub struct SceneNode {
    /// Display name
    pub name: String,
    /// Transform relative to the parent
    pub transform: Transform,
    /// Attached component
    pub component: SceneComponent,
    parent: Option<NodeKey>,
    children: Vec<NodeKey>,
}

impl SceneNode {
    /// Parent node, if any
    pub fn parent(&self) -> Option<NodeKey> {
        self.parent
    }

    /// Immediate children in creation order
    pub fn children(&self) -> &[NodeKey] {
        &self.children
    }
}

/// Scene errors
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// Node does not exist
    #[error("Scene node not found: {0:?}")]
    NodeNotFound(NodeKey),

    /// Requested parent does not exist
    #[error("Parent node not found: {0:?}")]
    ParentNotFound(NodeKey),

    /// Reparenting would make a node its own ancestor
    #[error("Node {child:?} cannot be parented under its descendant {parent:?}")]
    CyclicParent {
        /// Node being moved
        child: NodeKey,
        /// Requested parent
        parent: NodeKey,
    },
}

/// Owning node table for renderer objects
#[derive(Debug, Default)]
pub struct RendererScene {
    nodes: SlotMap<NodeKey, SceneNode>,
    role_index: HashMap<(NodeKey, RendererRole), NodeKey>,
}

impl RendererScene {
    /// Create an empty scene
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a top-level node without a component
    pub fn spawn_root(&mut self, name: impl Into<String>) -> NodeKey {
        self.nodes.insert(SceneNode {
            name: name.into(),
            transform: Transform::identity(),
            component: SceneComponent::Empty,
            parent: None,
            children: Vec::new(),
        })
    }

    /// Add an empty child node
    pub fn spawn_empty(&mut self, parent: NodeKey, name: impl Into<String>) -> Result<NodeKey, SceneError> {
        self.spawn_child(parent, name.into(), SceneComponent::Empty)
    }

    /// Add a renderer child node and register it under its role
    pub fn spawn_renderer(
        &mut self,
        parent: NodeKey,
        name: impl Into<String>,
        component: SceneComponent,
    ) -> Result<NodeKey, SceneError> {
        self.spawn_child(parent, name.into(), component)
    }

    /// Destroy a node and everything below it
    ///
    /// Returns false if the node did not exist.
    pub fn destroy(&mut self, key: NodeKey) -> bool {
        let Some(parent) = self.nodes.get(key).map(SceneNode::parent) else {
            return false;
        };

        if let Some(parent) = parent {
            if let Some(parent_node) = self.nodes.get_mut(parent) {
                parent_node.children.retain(|&child| child != key);
            }
        }

        let mut pending = vec![key];
        while let Some(current) = pending.pop() {
            if let Some(node) = self.nodes.remove(current) {
                debug!("Destroyed scene node '{}'", node.name);
                pending.extend(node.children);
                if let (Some(parent), Some(role)) = (node.parent, node.component.role()) {
                    self.unregister_role(parent, role, current);
                }
            }
        }

        true
    }

    /// Move a node under a new parent, keeping the role index in step
    pub fn set_parent(&mut self, child: NodeKey, parent: NodeKey) -> Result<(), SceneError> {
        if !self.nodes.contains_key(child) {
            return Err(SceneError::NodeNotFound(child));
        }
        if !self.nodes.contains_key(parent) {
            return Err(SceneError::ParentNotFound(parent));
        }
        if self.is_ancestor_or_self(child, parent) {
            return Err(SceneError::CyclicParent { child, parent });
        }

        let (old_parent, role) = {
            let node = &self.nodes[child];
            (node.parent, node.component.role())
        };

        if let Some(old_parent) = old_parent {
            if let Some(old_node) = self.nodes.get_mut(old_parent) {
                old_node.children.retain(|&c| c != child);
            }
            if let Some(role) = role {
                self.unregister_role(old_parent, role, child);
            }
        }

        self.nodes[child].parent = Some(parent);
        self.nodes[parent].children.push(child);
        if let Some(role) = role {
            self.role_index.entry((parent, role)).or_insert(child);
        }

        Ok(())
    }

    /// Renderer child of `parent` filling `role`, if one exists
    pub fn find_child_with_role(&self, parent: NodeKey, role: RendererRole) -> Option<NodeKey> {
        self.role_index
            .get(&(parent, role))
            .copied()
            .filter(|key| self.nodes.contains_key(*key))
    }

    /// Node by key
    pub fn node(&self, key: NodeKey) -> Option<&SceneNode> {
        self.nodes.get(key)
    }

    /// Mutable node by key
    pub fn node_mut(&mut self, key: NodeKey) -> Option<&mut SceneNode> {
        self.nodes.get_mut(key)
    }

    /// Button renderer attached to a node
    pub fn button(&self, key: NodeKey) -> Option<&RectangleButton> {
        match &self.nodes.get(key)?.component {
            SceneComponent::Button(button) => Some(button),
            _ => None,
        }
    }

    /// Mutable button renderer attached to a node
    pub fn button_mut(&mut self, key: NodeKey) -> Option<&mut RectangleButton> {
        match &mut self.nodes.get_mut(key)?.component {
            SceneComponent::Button(button) => Some(button),
            _ => None,
        }
    }

    /// Slider renderer attached to a node
    pub fn slider(&self, key: NodeKey) -> Option<&RectangleSlider> {
        match &self.nodes.get(key)?.component {
            SceneComponent::Slider(slider) => Some(slider),
            _ => None,
        }
    }

    /// Mutable slider renderer attached to a node
    pub fn slider_mut(&mut self, key: NodeKey) -> Option<&mut RectangleSlider> {
        match &mut self.nodes.get_mut(key)?.component {
            SceneComponent::Slider(slider) => Some(slider),
            _ => None,
        }
    }

    /// Local-to-world matrix composed up the parent chain
    pub fn world_matrix(&self, key: NodeKey) -> Option<Mat4> {
        let mut node = self.nodes.get(key)?;
        let mut matrix = node.transform.to_matrix();

        while let Some(parent) = node.parent {
            node = self.nodes.get(parent)?;
            matrix = node.transform.to_matrix() * matrix;
        }

        Some(matrix)
    }

    /// Whether a node exists
    pub fn contains(&self, key: NodeKey) -> bool {
        self.nodes.contains_key(key)
    }

    /// Number of live nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the scene has no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn spawn_child(&mut self, parent: NodeKey, name: String, component: SceneComponent) -> Result<NodeKey, SceneError> {
        if !self.nodes.contains_key(parent) {
            return Err(SceneError::ParentNotFound(parent));
        }

        let role = component.role();
        debug!("Spawning scene node '{name}' ({role:?})");

        let key = self.nodes.insert(SceneNode {
            name,
            transform: Transform::identity(),
            component,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent].children.push(key);

        if let Some(role) = role {
            self.role_index.entry((parent, role)).or_insert(key);
        }

        Ok(key)
    }

    fn unregister_role(&mut self, parent: NodeKey, role: RendererRole, removed: NodeKey) {
        if self.role_index.get(&(parent, role)) != Some(&removed) {
            return;
        }
        self.role_index.remove(&(parent, role));

        // Another child may still fill the role.
        let replacement = self.nodes.get(parent).and_then(|node| {
            node.children
                .iter()
                .copied()
                .find(|&child| child != removed && self.nodes.get(child).and_then(|c| c.component.role()) == Some(role))
        });
        if let Some(replacement) = replacement {
            self.role_index.insert((parent, role), replacement);
        }
    }

    fn is_ancestor_or_self(&self, ancestor: NodeKey, mut key: NodeKey) -> bool {
        loop {
            if key == ancestor {
                return true;
            }
            match self.nodes.get(key).and_then(SceneNode::parent) {
                Some(parent) => key = parent,
                None => return false,
            }
        }
    }
}
