use nalgebra::Matrix4;
use slotmap::SlotMap;

use crate::types::{NodeId, NodeSnapshot, SceneError, SceneNode, Transform};

/// Arena-based node hierarchy for one loaded model.
///
/// Every scene has a synthetic root node standing for the whole model, so
/// whole-body scaling has a single node to write to regardless of how many
/// top-level nodes the asset declares.
#[derive(Debug, Clone)]
pub struct Scene {
    nodes: SlotMap<NodeId, SceneNode>,
    root: NodeId,
}

impl Scene {
    /// Name given to the synthetic whole-model root.
    pub const ROOT_NAME: &'static str = "model_root";

    pub fn new() -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(SceneNode {
            name: Some(Self::ROOT_NAME.to_string()),
            transform: Transform::IDENTITY,
            parent: None,
            children: Vec::new(),
        });
        Self { nodes, root }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Attach a new node as the last child of `parent`.
    pub fn add_node(
        &mut self,
        parent: NodeId,
        name: Option<String>,
        transform: Transform,
    ) -> Result<NodeId, SceneError> {
        if !self.nodes.contains_key(parent) {
            return Err(SceneError::NodeNotFound { id: parent });
        }
        let id = self.nodes.insert(SceneNode {
            name,
            transform,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent].children.push(id);
        Ok(id)
    }

    pub fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(id)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut SceneNode> {
        self.nodes.get_mut(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Depth-first pre-order walk from the root, children in declaration order.
    pub fn traverse(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            order.push(id);
            if let Some(node) = self.nodes.get(id) {
                stack.extend(node.children.iter().rev().copied());
            }
        }
        order
    }

    /// First node in pre-order whose name equals `name`.
    pub fn find_by_name(&self, name: &str) -> Option<NodeId> {
        self.traverse()
            .into_iter()
            .find(|&id| self.nodes[id].name.as_deref() == Some(name))
    }

    /// Product of local matrices from the root down to `id`.
    pub fn world_matrix(&self, id: NodeId) -> Option<Matrix4<f64>> {
        let mut node = self.nodes.get(id)?;
        let mut world = node.transform.to_matrix();
        while let Some(parent) = node.parent {
            node = self.nodes.get(parent)?;
            world = node.transform.to_matrix() * world;
        }
        Some(world)
    }

    /// Current transforms of every node, in pre-order.
    ///
    /// World matrices are accumulated top-down so each node is visited once.
    pub fn snapshot(&self) -> Vec<NodeSnapshot> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![(self.root, Matrix4::<f64>::identity())];
        while let Some((id, parent_world)) = stack.pop() {
            let node = &self.nodes[id];
            let world = parent_world * node.transform.to_matrix();
            let mut cols = [0.0f32; 16];
            for (dst, src) in cols.iter_mut().zip(world.iter()) {
                *dst = *src as f32;
            }
            out.push(NodeSnapshot {
                name: node.name.clone(),
                scale: node.transform.scale,
                world: cols,
            });
            stack.extend(node.children.iter().rev().map(|&c| (c, world)));
        }
        out
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
