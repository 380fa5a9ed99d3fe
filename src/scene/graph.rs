use std::fmt;

use crate::core::frame_buffer::FrameBuffer;
use crate::core::geometry::{Dimensions, Rectangle};
use crate::error::SceneError;
use crate::scene::damage::DamageTracker;
use crate::traits::{Paintable, SceneRenderer};

type SceneResult<T> = std::result::Result<T, SceneError>;

/// Index of a node in the scene arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

enum NodeKind {
    Group { children: Vec<NodeId> },
    Drawable(Box<dyn Paintable>),
}

struct Node {
    kind: NodeKind,
    x: i32,
    y: i32,
    hidden: bool,
    parent: Option<NodeId>,
}

/// Arena of groups and drawables that paints itself and tracks damage.
///
/// Nodes are never freed: detaching a node keeps its id valid so it can be
/// appended again later. Children paint in insertion order, later ones on top,
/// and inherit the accumulated offset of their ancestors.
pub struct SceneGraph {
    nodes: Vec<Node>,
    damage: DamageTracker,
    shown: Option<NodeId>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            damage: DamageTracker::default(),
            shown: None,
        }
    }

    /// Number of nodes ever created
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Create a detached group
    pub fn add_group(&mut self, x: i32, y: i32) -> NodeId {
        self.push(NodeKind::Group { children: Vec::new() }, x, y)
    }

    /// Create a detached drawable
    pub fn add_drawable<P: Paintable + 'static>(&mut self, paintable: P, x: i32, y: i32) -> NodeId {
        self.push(NodeKind::Drawable(Box::new(paintable)), x, y)
    }

    /// Attach `child` as the topmost child of `parent`
    pub fn append(&mut self, parent: NodeId, child: NodeId) -> SceneResult<()> {
        self.check(child)?;
        match self.check(parent)?.kind {
            NodeKind::Group { .. } => {}
            NodeKind::Drawable(_) => return Err(SceneError::NotAGroup(parent.0)),
        }
        if self.nodes[child.0].parent.is_some() {
            return Err(SceneError::AlreadyAttached(child.0));
        }
        if self.ancestors_or_self(parent).any(|id| id == child) {
            return Err(SceneError::Cycle {
                parent: parent.0,
                child: child.0,
            });
        }

        if let NodeKind::Group { children } = &mut self.nodes[parent.0].kind {
            children.push(child);
        }
        self.nodes[child.0].parent = Some(parent);

        let after = self.screen_bounds(child);
        self.mark(after);
        Ok(())
    }

    /// Remove `node` from its parent; a no-op for detached nodes
    pub fn detach(&mut self, node: NodeId) -> SceneResult<()> {
        let Some(parent) = self.check(node)?.parent else {
            return Ok(());
        };

        let before = self.screen_bounds(node);
        if let NodeKind::Group { children } = &mut self.nodes[parent.0].kind {
            children.retain(|c| *c != node);
        }
        self.nodes[node.0].parent = None;
        self.mark(before);
        Ok(())
    }

    pub fn set_position(&mut self, node: NodeId, x: i32, y: i32) -> SceneResult<()> {
        if self.position(node) == Some((x, y)) {
            return Ok(());
        }
        self.edit(node, |n| {
            n.x = x;
            n.y = y;
        })
    }

    pub fn set_hidden(&mut self, node: NodeId, hidden: bool) -> SceneResult<()> {
        if self.check(node)?.hidden == hidden {
            return Ok(());
        }
        self.edit(node, |n| n.hidden = hidden)
    }

    /// Swap the paintable of a drawable node
    pub fn replace_drawable<P: Paintable + 'static>(
        &mut self,
        node: NodeId,
        paintable: P,
    ) -> SceneResult<()> {
        if let NodeKind::Group { .. } = self.check(node)?.kind {
            return Err(SceneError::NotADrawable(node.0));
        }
        self.edit(node, |n| n.kind = NodeKind::Drawable(Box::new(paintable)))
    }

    /// Damage the node's current area without changing it
    pub fn invalidate(&mut self, node: NodeId) -> SceneResult<()> {
        self.check(node)?;
        let area = self.screen_bounds(node);
        self.mark(area);
        Ok(())
    }

    pub fn position(&self, node: NodeId) -> Option<(i32, i32)> {
        self.nodes.get(node.0).map(|n| (n.x, n.y))
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node.0).and_then(|n| n.parent)
    }

    pub fn is_hidden(&self, node: NodeId) -> Option<bool> {
        self.nodes.get(node.0).map(|n| n.hidden)
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        match self.nodes.get(node.0).map(|n| &n.kind) {
            Some(NodeKind::Group { children }) => children,
            _ => &[],
        }
    }

    /// Root painted by the last render pass
    pub fn shown(&self) -> Option<NodeId> {
        self.shown
    }

    /// On-screen area covered by `node` under the shown root, `None` if
    /// it is hidden, detached from the shown root, or entirely off-screen
    pub fn screen_bounds(&self, node: NodeId) -> Option<Rectangle> {
        let target = self.nodes.get(node.0)?;
        if target.hidden {
            return None;
        }

        let (mut ox, mut oy) = (0i64, 0i64);
        let mut top = node;
        let mut next = target.parent;
        while let Some(id) = next {
            let ancestor = &self.nodes[id.0];
            if ancestor.hidden {
                return None;
            }
            ox += ancestor.x as i64;
            oy += ancestor.y as i64;
            top = id;
            next = ancestor.parent;
        }

        if self.shown != Some(top) {
            return None;
        }
        self.subtree_bounds(node, ox, oy)
    }

    fn subtree_bounds(&self, node: NodeId, ox: i64, oy: i64) -> Option<Rectangle> {
        let screen = self.damage.screen();
        let mut bounds: Option<Rectangle> = None;
        let mut stack = vec![(node, ox, oy)];

        while let Some((id, ox, oy)) = stack.pop() {
            let current = &self.nodes[id.0];
            if current.hidden {
                continue;
            }
            let (nx, ny) = (ox + current.x as i64, oy + current.y as i64);

            match &current.kind {
                NodeKind::Drawable(paintable) => {
                    let (w, h) = paintable.size();
                    if let Some(area) = Rectangle::clipped(nx, ny, w, h, screen) {
                        bounds = Some(bounds.map_or(area, |b| b.union(&area)));
                    }
                }
                NodeKind::Group { children } => {
                    stack.extend(children.iter().map(|c| (*c, nx, ny)));
                }
            }
        }

        bounds
    }

    fn push(&mut self, kind: NodeKind, x: i32, y: i32) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            kind,
            x,
            y,
            hidden: false,
            parent: None,
        });
        id
    }

    fn check(&self, node: NodeId) -> SceneResult<&Node> {
        self.nodes
            .get(node.0)
            .ok_or(SceneError::UnknownNode(node.0))
    }

    fn ancestors_or_self(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(Some(node), move |id| self.nodes[id.0].parent)
    }

    fn edit<F: FnOnce(&mut Node)>(&mut self, node: NodeId, apply: F) -> SceneResult<()> {
        self.check(node)?;
        let before = self.screen_bounds(node);
        apply(&mut self.nodes[node.0]);
        let after = self.screen_bounds(node);

        self.mark(before);
        self.mark(after);
        Ok(())
    }

    fn mark(&mut self, area: Option<Rectangle>) {
        if let Some(area) = area {
            self.damage.mark_dirty(area);
        }
    }
}

impl Default for SceneGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneRenderer for SceneGraph {
    type Root = NodeId;

    fn render_into(&mut self, buffer: &mut FrameBuffer, root: &NodeId) {
        let dims = buffer.dimensions();
        if dims != self.damage.screen() {
            self.damage.resize(dims);
        }
        if self.shown != Some(*root) {
            self.shown = Some(*root);
            self.damage.mark_full_repaint();
        }

        let clip = dims.full_area();
        let mut stack = vec![(*root, 0i64, 0i64)];

        while let Some((id, ox, oy)) = stack.pop() {
            let Some(node) = self.nodes.get(id.0) else {
                continue;
            };
            if node.hidden {
                continue;
            }
            let origin = (ox + node.x as i64, oy + node.y as i64);

            match &node.kind {
                NodeKind::Drawable(paintable) => paintable.render_into(buffer, origin, &clip),
                // Reversed so the first child pops, and paints, first
                NodeKind::Group { children } => {
                    stack.extend(children.iter().rev().map(|c| (*c, origin.0, origin.1)));
                }
            }
        }
    }

    fn get_refresh_areas(&mut self) -> Vec<Rectangle> {
        self.damage.take()
    }

    fn resize(&mut self, dims: Dimensions) {
        self.damage.resize(dims);
    }
}
