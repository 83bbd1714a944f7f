//! AccessKit export of synthesized regions.
//!
//! Regions become children of a single container node representing the text
//! block. Node identity is derived from the region's source range, so a
//! region keeps its node across resynthesis as long as its range is
//! unchanged.
//!
//! # Example
//!
//! ```
//! use accesskit::NodeId;
//! use horizon_text_regions::{AccessibilityRegion, Rect, RegionTraits};
//! use horizon_text_regions::node::build_tree_update;
//!
//! let regions = vec![AccessibilityRegion {
//!     frame: Rect::new(0.0, 0.0, 80.0, 20.0),
//!     label: "Sign in".into(),
//!     hint: None,
//!     traits: RegionTraits::BUTTON,
//!     source_range: 0..7,
//! }];
//!
//! let update = build_tree_update(NodeId(1), Some("Login prompt"), &regions, None);
//! assert_eq!(update.nodes.len(), 2);
//! assert_eq!(update.focus, NodeId(1));
//! ```

use accesskit::{Action, Node, NodeId, Role, Tree, TreeUpdate};

use crate::geometry::Rect;
use crate::synthesize::AccessibilityRegion;

/// Node id of `region` within the container identified by `base`.
///
/// Regions with distinct source ranges get distinct ids as long as both
/// offsets stay below 2^32 and `base` leaves room above it; the container's
/// own id is never reused.
pub fn region_node_id(base: NodeId, region: &AccessibilityRegion) -> NodeId {
    let start = region.source_range.start as u64;
    let end = region.source_range.end as u64;
    let key = (start << 32) ^ end;
    NodeId(base.0.wrapping_add(1).wrapping_add(key))
}

fn to_accesskit_rect(rect: &Rect) -> accesskit::Rect {
    accesskit::Rect {
        x0: rect.left() as f64,
        y0: rect.top() as f64,
        x1: rect.right() as f64,
        y1: rect.bottom() as f64,
    }
}

impl AccessibilityRegion {
    /// Build an AccessKit node describing this region.
    pub fn to_accesskit_node(&self) -> Node {
        let role = self
            .traits
            .primary_role()
            .map_or(Role::Label, |role| role.to_accesskit_role());
        let mut node = Node::new(role);

        node.set_bounds(to_accesskit_rect(&self.frame));
        node.set_label(self.label.clone());

        if let Some(hint) = &self.hint {
            node.set_description(hint.clone());
        }

        if self.is_actionable() {
            node.add_action(Action::Click);
        }
        node.add_action(Action::Focus);

        node
    }
}

/// Build a full tree update for a text block and its regions.
///
/// The container node gets `container_id` and lists the regions as children
/// in reading order. `focus` defaults to the container.
pub fn build_tree_update(
    container_id: NodeId,
    container_label: Option<&str>,
    regions: &[AccessibilityRegion],
    focus: Option<NodeId>,
) -> TreeUpdate {
    let mut nodes = Vec::with_capacity(regions.len() + 1);
    let mut children = Vec::with_capacity(regions.len());

    for region in regions {
        let id = region_node_id(container_id, region);
        children.push(id);
        nodes.push((id, region.to_accesskit_node()));
    }

    let mut container = Node::new(Role::Paragraph);
    if let Some(label) = container_label {
        container.set_label(label);
    }
    if let Some(bounds) = Rect::bounding(regions.iter().map(|region| &region.frame)) {
        container.set_bounds(to_accesskit_rect(&bounds));
    }
    container.set_children(children);
    nodes.insert(0, (container_id, container));

    TreeUpdate {
        nodes,
        tree: Some(Tree::new(container_id)),
        focus: focus.unwrap_or(container_id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::role::RegionTraits;

    fn region(label: &str, traits: RegionTraits, range: std::ops::Range<usize>) -> AccessibilityRegion {
        AccessibilityRegion {
            frame: Rect::new(range.start as f32 * 10.0, 0.0, 10.0, 20.0),
            label: label.into(),
            hint: None,
            traits,
            source_range: range,
        }
    }

    #[test]
    fn test_region_node() {
        let mut link = region("Docs", RegionTraits::LINK, 4..8);
        link.hint = Some("Opens documentation".into());

        let node = link.to_accesskit_node();
        assert_eq!(node.role(), Role::Link);
        assert_eq!(node.label(), Some("Docs"));
        assert_eq!(node.description(), Some("Opens documentation"));
        assert!(node.supports_action(Action::Click));

        let bounds = node.bounds().unwrap();
        assert_eq!(bounds.x0, 40.0);
        assert_eq!(bounds.x1, 50.0);
    }

    #[test]
    fn test_static_text_node() {
        let node = region("Hello", RegionTraits::STATIC_TEXT, 0..5).to_accesskit_node();
        assert_eq!(node.role(), Role::Label);
        assert!(!node.supports_action(Action::Click));
    }

    #[test]
    fn test_node_ids_are_distinct() {
        let base = NodeId(100);
        let whole = region("Tap here", RegionTraits::STATIC_TEXT, 0..8);
        let link = region("Tap", RegionTraits::LINK, 0..3);
        let other = region("here", RegionTraits::LINK, 4..8);

        let ids = [
            region_node_id(base, &whole),
            region_node_id(base, &link),
            region_node_id(base, &other),
        ];
        assert_ne!(ids[0], ids[1]);
        assert_ne!(ids[1], ids[2]);
        assert_ne!(ids[0], ids[2]);
        assert!(ids.iter().all(|id| *id != base));
    }

    #[test]
    fn test_node_ids_for_large_offsets() {
        let base = NodeId(0);
        let high = (1usize << 31) + 5;
        let ids = [
            region_node_id(base, &region("a", RegionTraits::LINK, 0..high)),
            region_node_id(base, &region("b", RegionTraits::LINK, high..high + 1)),
            region_node_id(base, &region("c", RegionTraits::LINK, 1..high)),
        ];
        assert_ne!(ids[0], ids[1]);
        assert_ne!(ids[0], ids[2]);
        assert_ne!(ids[1], ids[2]);
    }

    #[test]
    fn test_tree_update_order() {
        let regions = vec![
            region("See", RegionTraits::STATIC_TEXT, 0..4),
            region("docs", RegionTraits::LINK, 4..8),
        ];
        let update = build_tree_update(NodeId(1), Some("Help"), &regions, None);

        assert_eq!(update.nodes.len(), 3);
        let (container_id, container) = &update.nodes[0];
        assert_eq!(*container_id, NodeId(1));
        assert_eq!(container.label(), Some("Help"));
        assert_eq!(
            container.children(),
            &[
                region_node_id(NodeId(1), &regions[0]),
                region_node_id(NodeId(1), &regions[1])
            ]
        );
        assert_eq!(update.tree.map(|tree| tree.root), Some(NodeId(1)));
    }
}
