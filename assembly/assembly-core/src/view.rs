//! Read-only interface for the presentation layer.
//!
//! The viewer consumes a finished assembly through [`Assembly::resolve`],
//! which yields every part with its absolute pose and the absolute frames
//! of its declared mates. The `Display` impl produces an indented textual
//! dump for diagnostics.

use std::fmt;

use assembly_types::{Color, Mate, Pose, Shape, DEFAULT_COLOR_HEX};

use crate::assembly::Assembly;
use crate::node::AssemblyNode;
use crate::registry::MateRegistry;

/// A mate resolved to its absolute frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedMate<'a> {
    /// The registered mate name.
    pub name: &'a str,
    /// The mate re-expressed in the world frame.
    pub mate: Mate,
}

/// One part of the assembly with everything the renderer needs.
#[derive(Debug, Clone)]
pub struct ResolvedPart<'a, S> {
    /// Node name.
    pub name: &'a str,
    /// Depth in the tree; the root is 0.
    pub depth: usize,
    /// Absolute pose: composition of all poses from the root down.
    pub pose: Pose,
    /// The node's geometry, post-relocation. The renderer applies `pose`.
    pub shape: Option<&'a S>,
    /// Display color, if assigned.
    pub color: Option<Color>,
    /// Mates declared on this node, in registration order, with absolute
    /// frames.
    pub mates: Vec<ResolvedMate<'a>>,
}

impl<S> ResolvedPart<'_, S> {
    /// Hex color string for the renderer; parts without a color fall back
    /// to a neutral gray.
    #[must_use]
    pub fn color_hex(&self) -> String {
        self.color
            .as_ref()
            .map_or_else(|| DEFAULT_COLOR_HEX.to_string(), Color::to_hex)
    }
}

impl<S: Shape> Assembly<S> {
    /// Walk the tree depth-first, yielding every part with its absolute
    /// pose and resolved mate frames.
    #[must_use]
    pub fn resolve(&self) -> Vec<ResolvedPart<'_, S>> {
        let mut parts = Vec::new();
        resolve_into(self.root(), self.mates(), Pose::identity(), 0, &mut parts);
        parts
    }
}

fn resolve_into<'a, S: Shape>(
    node: &'a AssemblyNode<S>,
    registry: &'a MateRegistry,
    parent_pose: Pose,
    depth: usize,
    out: &mut Vec<ResolvedPart<'a, S>>,
) {
    let pose = parent_pose.compose(&node.pose);

    let mates = node
        .mate_names()
        .iter()
        .filter_map(|name| {
            registry.get(name).map(|entry| ResolvedMate {
                name: name.as_str(),
                mate: entry.mate.moved(&pose),
            })
        })
        .collect();

    out.push(ResolvedPart {
        name: &node.name,
        depth,
        pose,
        shape: node.shape.as_ref(),
        color: node.color,
        mates,
    });

    for child in &node.children {
        resolve_into(child, registry, pose, depth + 1, out);
    }
}

impl<S: Shape> fmt::Display for Assembly<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        dump_node(f, self.root(), "")
    }
}

fn dump_node<S: Shape>(
    f: &mut fmt::Formatter<'_>,
    node: &AssemblyNode<S>,
    indent: &str,
) -> fmt::Result {
    let shape = if node.shape.is_some() { "shape" } else { "-" };
    writeln!(f, "{indent}Assembly({}: {shape})", node.name)?;
    if !node.mate_names().is_empty() {
        writeln!(f, "{indent}  mates={:?}", node.mate_names())?;
    }
    for child in &node.children {
        dump_node(f, child, &format!("{indent}  "))?;
    }
    Ok(())
}
