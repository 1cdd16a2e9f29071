//! Spatial layout engine.
//!
//! Turns a forest into per-node 3-D geometry for an external renderer, in
//! two passes: a bottom-up measure pass sizing every subtree, then a
//! top-down placement pass assigning absolute world positions. Both passes
//! are pure functions of the tree and the layout parameters; the whole
//! layout is recomputed on every call, never maintained incrementally.
//!
//! Coordinate conventions: x runs along the root row, y is up, z is toward
//! the viewer. Positions are box centers in absolute world coordinates.

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;

use crate::domain::forest::Forest;
use crate::domain::node::{Node, NodeId};

/// Fixed design parameters for the scene. All lengths are scene units.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutParams {
    /// Thickness of container walls and the bottom plate.
    pub wall_thickness: f32,
    /// Height of the labeled header bar on containers.
    pub header_height: f32,
    /// Horizontal and vertical padding between walls and content.
    pub inner_padding: f32,
    /// Vertical gap between stacked siblings inside a container.
    pub child_gap: f32,
    /// Horizontal gap between root nodes laid out side by side.
    pub sibling_spacing: f32,
    pub leaf_width: f32,
    pub leaf_height: f32,
    pub block_depth: f32,
    /// Extra leaf height when the node carries text content.
    pub text_height: f32,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            wall_thickness: 0.06,
            header_height: 0.3,
            inner_padding: 0.1,
            child_gap: 0.08,
            sibling_spacing: 0.15,
            leaf_width: 0.8,
            leaf_height: 0.35,
            block_depth: 0.3,
            text_height: 0.25,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2}, {:.2})", self.x, self.y, self.z)
    }
}

/// Computed geometry for one node: center position, box size (w, h, d) and
/// nesting depth (roots are 0). Depth is presentation metadata, e.g. for
/// staggered entry animation; it never feeds back into the layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeGeometry {
    pub position: Vec3,
    pub size: Vec3,
    pub depth: usize,
}

/// Lay out a whole forest: roots side by side along x, centered as a group
/// at the origin, children stacked inside their parents.
pub fn layout_forest(forest: &Forest, params: &LayoutParams) -> BTreeMap<NodeId, NodeGeometry> {
    layout_roots(forest.roots(), params)
}

/// Lay out a single tree, centered at the origin.
pub fn layout_tree(root: &Node, params: &LayoutParams) -> BTreeMap<NodeId, NodeGeometry> {
    layout_roots(std::slice::from_ref(root), params)
}

fn layout_roots(roots: &[Node], params: &LayoutParams) -> BTreeMap<NodeId, NodeGeometry> {
    let mut geometry = BTreeMap::new();
    if roots.is_empty() {
        return geometry;
    }

    let sizes: Vec<NodeSize> = roots.iter().map(|root| measure(root, params)).collect();
    let total_width = sizes.iter().map(|size| size.width).sum::<f32>()
        + roots.len().saturating_sub(1) as f32 * params.sibling_spacing;

    let mut x_off = -total_width / 2.0;
    for (root, size) in roots.iter().zip(&sizes) {
        let center = Vec3::new(x_off + size.width / 2.0, 0.0, 0.0);
        place(root, *size, center, 0, params, &mut geometry);
        x_off += size.width + params.sibling_spacing;
    }

    geometry
}

#[derive(Debug, Clone, Copy)]
struct NodeSize {
    width: f32,
    height: f32,
    depth: f32,
}

/// Bottom-up measure pass. Leaves get the fixed block footprint, taller
/// when they carry text. A parent wraps its stacked children: wide enough
/// for the widest child plus padding and walls, tall enough for the header,
/// all children with gaps, padding and the bottom plate.
fn measure(node: &Node, params: &LayoutParams) -> NodeSize {
    if node.children.is_empty() {
        let height = if node.text.is_some() {
            params.leaf_height + params.text_height
        } else {
            params.leaf_height
        };
        return NodeSize {
            width: params.leaf_width,
            height,
            depth: params.block_depth,
        };
    }

    let child_sizes: Vec<NodeSize> = node
        .children
        .iter()
        .map(|child| measure(child, params))
        .collect();
    let max_child_width = child_sizes.iter().map(|s| s.width).fold(0.0, f32::max);
    let max_child_depth = child_sizes.iter().map(|s| s.depth).fold(0.0, f32::max);
    let total_child_height = child_sizes.iter().map(|s| s.height).sum::<f32>()
        + child_sizes.len().saturating_sub(1) as f32 * params.child_gap;

    let interior_width = max_child_width + 2.0 * params.inner_padding;
    let interior_height = params.header_height + total_child_height + 2.0 * params.inner_padding;

    NodeSize {
        width: params
            .leaf_width
            .max(interior_width + 2.0 * params.wall_thickness),
        height: interior_height + params.wall_thickness,
        depth: params
            .block_depth
            .max(max_child_depth + params.wall_thickness),
    }
}

/// Top-down placement pass. Children stack downward from just below the
/// header, each centered on the parent's x axis and sitting half a wall in
/// front of the parent's center.
fn place(
    node: &Node,
    size: NodeSize,
    center: Vec3,
    depth: usize,
    params: &LayoutParams,
    geometry: &mut BTreeMap<NodeId, NodeGeometry>,
) {
    geometry.insert(
        node.id,
        NodeGeometry {
            position: center,
            size: Vec3::new(size.width, size.height, size.depth),
            depth,
        },
    );

    if node.children.is_empty() {
        return;
    }

    let mut y_off = size.height / 2.0 - params.header_height - params.inner_padding;
    for child in &node.children {
        let child_size = measure(child, params);
        y_off -= child_size.height / 2.0;
        let child_center = Vec3::new(
            center.x,
            center.y + y_off,
            center.z + params.wall_thickness / 2.0,
        );
        place(child, child_size, child_center, depth + 1, params, geometry);
        y_off -= child_size.height / 2.0 + params.child_gap;
    }
}
