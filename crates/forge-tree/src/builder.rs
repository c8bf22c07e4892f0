//! The component tree arena and its builder.

use std::collections::{HashMap, HashSet};

use forge_core::{ComponentId, ComponentRecord};
use smallvec::SmallVec;

use crate::normalize;
use crate::warning::TreeWarning;

/// Index of a node within a [`ComponentTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

/// A node in the derived forest.
#[derive(Debug, Clone)]
pub struct TreeNode {
    /// The record this node was built from (`children` field cleared).
    pub record: ComponentRecord,
    /// Parent node, `None` for roots.
    pub parent: Option<NodeId>,
    /// Child nodes in the order their records referenced this parent.
    pub children: Vec<NodeId>,
}

/// A forest of component nodes derived from a flat record list.
///
/// Nodes are stored in input order in an arena; `roots` preserves the relative
/// order of the input list. Structural anomalies encountered during the build
/// are collected as [`TreeWarning`]s — building never fails.
#[derive(Debug, Clone, Default)]
pub struct ComponentTree {
    nodes: Vec<TreeNode>,
    roots: Vec<NodeId>,
    warnings: Vec<TreeWarning>,
}

impl ComponentTree {
    /// Build the forest from a flat record list.
    ///
    /// Records are attached to their `parent_id` in input order. A record
    /// whose parent is missing, or whose attachment would close a cycle,
    /// becomes a root and produces a warning. Pre-nested input is normalized
    /// first. Caller-owned records are never mutated.
    pub fn build(records: &[ComponentRecord]) -> ComponentTree {
        let records = normalize::flatten(records);

        let mut nodes: Vec<TreeNode> = records
            .into_iter()
            .map(|mut record| {
                record.children = Vec::new();
                TreeNode {
                    record,
                    parent: None,
                    children: Vec::new(),
                }
            })
            .collect();

        // Id lookup; a duplicate id (an input-invariant violation) keeps the
        // later registration.
        let mut index: HashMap<ComponentId, usize> = HashMap::with_capacity(nodes.len());
        for (i, node) in nodes.iter().enumerate() {
            index.insert(node.record.id.clone(), i);
        }

        let mut roots = Vec::new();
        let mut warnings = Vec::new();
        let mut walk = CycleWalk::default();

        for i in 0..nodes.len() {
            let parent_id = nodes[i].record.parent_id.clone();
            let Some(parent_id) = parent_id else {
                roots.push(NodeId(i));
                continue;
            };

            match index.get(&parent_id) {
                Some(&parent_index) => {
                    if walk.detects_cycle(i, &nodes, &index) {
                        warnings.push(TreeWarning::CycleDetected {
                            id: nodes[i].record.id.clone(),
                        });
                        roots.push(NodeId(i));
                    } else {
                        nodes[parent_index].children.push(NodeId(i));
                        nodes[i].parent = Some(NodeId(parent_index));
                    }
                }
                None => {
                    warnings.push(TreeWarning::ParentNotFound {
                        id: nodes[i].record.id.clone(),
                        parent_id,
                    });
                    roots.push(NodeId(i));
                }
            }
        }

        ComponentTree {
            nodes,
            roots,
            warnings,
        }
    }

    /// Root nodes in input order.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Get a node by id.
    pub fn get(&self, id: NodeId) -> Option<&TreeNode> {
        self.nodes.get(id.0)
    }

    /// Children of a node.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = &TreeNode> {
        self.nodes
            .get(id.0)
            .into_iter()
            .flat_map(|n| n.children.iter())
            .filter_map(|child| self.nodes.get(child.0))
    }

    /// Warnings collected during the build.
    pub fn warnings(&self) -> &[TreeWarning] {
        &self.warnings
    }

    /// Iterate over all nodes in input order.
    pub fn nodes(&self) -> impl Iterator<Item = &TreeNode> {
        self.nodes.iter()
    }

    /// Number of nodes in the forest.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the forest is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Ancestor-walk cycle detection state.
///
/// Walks `parent_id` links with an explicit on-path buffer instead of call
/// recursion. Nodes proven acyclic are memoized; nodes seen on a detected
/// cycle path stay poisoned, so every member of a cycle falls back to root
/// (each with its own warning) rather than only the record processed first.
#[derive(Default)]
struct CycleWalk {
    acyclic: HashSet<usize>,
    cyclic: HashSet<usize>,
}

impl CycleWalk {
    fn detects_cycle(
        &mut self,
        start: usize,
        nodes: &[TreeNode],
        index: &HashMap<ComponentId, usize>,
    ) -> bool {
        let mut path: SmallVec<[usize; 8]> = SmallVec::new();
        let mut current = start;

        loop {
            if self.cyclic.contains(&current) || path.contains(&current) {
                self.cyclic.insert(current);
                self.cyclic.extend(path);
                return true;
            }
            if self.acyclic.contains(&current) {
                break;
            }
            path.push(current);

            match nodes[current]
                .record
                .parent_id
                .as_ref()
                .and_then(|p| index.get(p))
            {
                Some(&parent) => current = parent,
                None => break,
            }
        }

        self.acyclic.extend(path);
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(tree: &ComponentTree, nodes: &[NodeId]) -> Vec<String> {
        nodes
            .iter()
            .map(|&n| tree.get(n).unwrap().record.id.to_string())
            .collect()
    }

    #[test]
    fn test_empty_input() {
        let tree = ComponentTree::build(&[]);
        assert!(tree.is_empty());
        assert!(tree.roots().is_empty());
        assert!(tree.warnings().is_empty());
    }

    #[test]
    fn test_root_with_two_children() {
        let records = vec![
            ComponentRecord::new("root-1", "div").with_style("display", "flex"),
            ComponentRecord::new("child-1", "text")
                .with_parent("root-1")
                .with_prop("children", "A"),
            ComponentRecord::new("child-2", "button")
                .with_parent("root-1")
                .with_prop("children", "Click"),
        ];

        let tree = ComponentTree::build(&records);
        assert!(tree.warnings().is_empty());
        assert_eq!(ids(&tree, tree.roots()), ["root-1"]);

        let root = tree.get(tree.roots()[0]).unwrap();
        assert_eq!(ids(&tree, &root.children), ["child-1", "child-2"]);
        for &child in &root.children {
            assert_eq!(tree.get(child).unwrap().parent, Some(tree.roots()[0]));
        }
    }

    #[test]
    fn test_three_level_chain() {
        let records = vec![
            ComponentRecord::new("root", "div"),
            ComponentRecord::new("middle", "div").with_parent("root"),
            ComponentRecord::new("leaf", "text").with_parent("middle"),
        ];

        let tree = ComponentTree::build(&records);
        assert_eq!(tree.roots().len(), 1);
        let root = tree.get(tree.roots()[0]).unwrap();
        let middle = tree.get(root.children[0]).unwrap();
        assert_eq!(middle.record.id.as_str(), "middle");
        let leaf = tree.get(middle.children[0]).unwrap();
        assert_eq!(leaf.record.id.as_str(), "leaf");
        assert!(leaf.children.is_empty());
    }

    #[test]
    fn test_multiple_roots_keep_input_order() {
        let records = vec![
            ComponentRecord::new("b", "div"),
            ComponentRecord::new("a", "div"),
            ComponentRecord::new("c", "div"),
        ];
        let tree = ComponentTree::build(&records);
        assert_eq!(ids(&tree, tree.roots()), ["b", "a", "c"]);
    }

    #[test]
    fn test_orphan_becomes_root_with_warning() {
        let records = vec![ComponentRecord::new("orphan", "text")
            .with_parent("missing-parent")
            .with_prop("children", "Lost")];

        let tree = ComponentTree::build(&records);
        assert_eq!(ids(&tree, tree.roots()), ["orphan"]);
        assert_eq!(tree.warnings().len(), 1);
        assert_eq!(
            tree.warnings()[0].to_string(),
            "Parent missing-parent not found for component orphan, attaching to root"
        );
    }

    #[test]
    fn test_two_node_cycle_breaks_to_roots() {
        let records = vec![
            ComponentRecord::new("a", "div").with_parent("b"),
            ComponentRecord::new("b", "div").with_parent("a"),
        ];

        let tree = ComponentTree::build(&records);
        // No data loss: both nodes present, both at root level.
        assert_eq!(tree.len(), 2);
        assert_eq!(ids(&tree, tree.roots()), ["a", "b"]);
        assert!(!tree.warnings().is_empty());
        assert!(tree
            .warnings()
            .iter()
            .any(|w| w.to_string().contains("Cycle detected")));
    }

    #[test]
    fn test_self_reference_is_a_cycle() {
        let records = vec![ComponentRecord::new("selfie", "div").with_parent("selfie")];

        let tree = ComponentTree::build(&records);
        assert_eq!(ids(&tree, tree.roots()), ["selfie"]);
        assert_eq!(
            tree.warnings(),
            &[TreeWarning::CycleDetected {
                id: "selfie".into()
            }]
        );
    }

    #[test]
    fn test_chain_into_cycle_falls_back_to_root() {
        // c -> a -> b -> a: the cycle poisons the whole walk, so c detaches too.
        let records = vec![
            ComponentRecord::new("c", "text").with_parent("a"),
            ComponentRecord::new("a", "div").with_parent("b"),
            ComponentRecord::new("b", "div").with_parent("a"),
        ];

        let tree = ComponentTree::build(&records);
        assert_eq!(tree.len(), 3);
        assert_eq!(ids(&tree, tree.roots()), ["c", "a", "b"]);
        assert_eq!(tree.warnings().len(), 3);
    }

    #[test]
    fn test_deep_chain_does_not_overflow() {
        // Parent chains walk iteratively, so depth is bounded by memory only.
        let mut records = vec![ComponentRecord::new("n0", "div")];
        for i in 1..2000 {
            records.push(
                ComponentRecord::new(format!("n{i}"), "div").with_parent(format!("n{}", i - 1)),
            );
        }

        let tree = ComponentTree::build(&records);
        assert_eq!(tree.roots().len(), 1);
        assert!(tree.warnings().is_empty());
    }

    #[test]
    fn test_pre_nested_input_matches_flat_equivalent() {
        let nested = vec![ComponentRecord::new("root", "div")
            .with_child(ComponentRecord::new("child", "text").with_prop("children", "A"))];
        let flat = vec![
            ComponentRecord::new("root", "div"),
            ComponentRecord::new("child", "text")
                .with_parent("root")
                .with_prop("children", "A"),
        ];

        let from_nested = ComponentTree::build(&nested);
        let from_flat = ComponentTree::build(&flat);

        assert_eq!(from_nested.roots().len(), from_flat.roots().len());
        let a = from_nested.get(from_nested.roots()[0]).unwrap();
        let b = from_flat.get(from_flat.roots()[0]).unwrap();
        assert_eq!(ids(&from_nested, &a.children), ids(&from_flat, &b.children));
    }
}
