//! The document: the flat record collection and its mutations.

use forge_canvas::{clamp_size, Bounds, DEFAULT_MIN_SIZE};
use forge_core::{ComponentId, ComponentRecord, Point, PropMap, Size, StyleMap};

use crate::error::DocumentError;
use crate::library::LibraryComponent;

/// Direction for layer reordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerDirection {
    /// Towards the front (earlier in the list).
    Up,
    /// Towards the back (later in the list).
    Down,
}

/// A design document: the ordered, flat component collection the rest of the
/// engine consumes.
///
/// List order is significant twice over: root siblings emit in insertion
/// order, and hit-testing treats later records as closer to the front.
#[derive(Debug, Clone, Default)]
pub struct Document {
    components: Vec<ComponentRecord>,
    next_id: u64,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// The flat record list, in insertion order.
    pub fn records(&self) -> &[ComponentRecord] {
        &self.components
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Whether the document has no components.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Look up a component by id.
    pub fn get(&self, id: &ComponentId) -> Option<&ComponentRecord> {
        self.components.iter().find(|c| &c.id == id)
    }

    /// Remove every component.
    pub fn clear(&mut self) {
        self.components.clear();
    }

    /// Instantiate a library entry at `position` (default 100,100) and return
    /// the new component's id.
    ///
    /// The parent link is recorded as-is; a dangling parent surfaces later as
    /// a tree warning rather than failing the placement.
    pub fn add_from_library(
        &mut self,
        item: &LibraryComponent,
        position: Option<Point>,
        parent: Option<ComponentId>,
    ) -> ComponentId {
        let id = self.generate_id(&item.kind);
        let mut record = ComponentRecord::new(id.clone(), item.kind.clone())
            .with_name(item.name.clone())
            .with_category(item.category.clone());
        record.props = item.default_props.clone();
        record.styles = item.default_styles.clone();
        record.position = Some(position.unwrap_or(Point::new(100.0, 100.0)));
        record.size = Some(Size::new(200.0, 100.0));
        record.parent_id = parent;

        self.components.push(record);
        id
    }

    /// Insert an externally built record as-is.
    pub fn insert(&mut self, record: ComponentRecord) {
        self.components.push(record);
    }

    /// Remove a component; its children are reparented to the removed
    /// component's parent so no descendants are orphaned.
    pub fn remove(&mut self, id: &ComponentId) -> Result<(), DocumentError> {
        let index = self.index_of(id)?;
        let removed = self.components.remove(index);
        for component in &mut self.components {
            if component.parent_id.as_ref() == Some(id) {
                component.parent_id = removed.parent_id.clone();
            }
        }
        Ok(())
    }

    /// Remove a component together with all of its descendants.
    pub fn remove_subtree(&mut self, id: &ComponentId) -> Result<(), DocumentError> {
        self.index_of(id)?;

        let mut doomed = vec![id.clone()];
        let mut cursor = 0;
        while cursor < doomed.len() {
            let parent = doomed[cursor].clone();
            for component in &self.components {
                if component.parent_id.as_ref() == Some(&parent) {
                    doomed.push(component.id.clone());
                }
            }
            cursor += 1;
        }

        self.components.retain(|c| !doomed.contains(&c.id));
        Ok(())
    }

    /// Change a component's display name.
    pub fn rename(&mut self, id: &ComponentId, name: impl Into<String>) -> Result<(), DocumentError> {
        self.get_mut(id)?.name = name.into();
        Ok(())
    }

    /// Merge prop updates into a component.
    pub fn update_props(&mut self, id: &ComponentId, updates: PropMap) -> Result<(), DocumentError> {
        self.get_mut(id)?.props.extend(updates);
        Ok(())
    }

    /// Merge style updates into a component.
    pub fn update_styles(&mut self, id: &ComponentId, updates: StyleMap) -> Result<(), DocumentError> {
        self.get_mut(id)?.styles.extend(updates);
        Ok(())
    }

    /// Move a component to a new canvas position.
    pub fn move_to(&mut self, id: &ComponentId, position: Point) -> Result<(), DocumentError> {
        self.get_mut(id)?.position = Some(position);
        Ok(())
    }

    /// Resize a component, clamped to the minimum component size.
    pub fn resize(&mut self, id: &ComponentId, size: Size) -> Result<(), DocumentError> {
        self.get_mut(id)?.size = Some(clamp_size(size, DEFAULT_MIN_SIZE));
        Ok(())
    }

    /// Move a component one step towards the front or back of the layer
    /// order. Already at the edge is a no-op.
    pub fn move_in_layer(
        &mut self,
        id: &ComponentId,
        direction: LayerDirection,
    ) -> Result<(), DocumentError> {
        let index = self.index_of(id)?;
        let target = match direction {
            LayerDirection::Up => index.saturating_sub(1),
            LayerDirection::Down => (index + 1).min(self.components.len() - 1),
        };
        if target != index {
            self.components.swap(index, target);
        }
        Ok(())
    }

    /// Reparent a component, or detach it to the root level with `None`.
    ///
    /// Rejects attachments that would make the component its own ancestor.
    pub fn set_parent(
        &mut self,
        id: &ComponentId,
        parent: Option<ComponentId>,
    ) -> Result<(), DocumentError> {
        self.index_of(id)?;

        if let Some(parent_id) = &parent {
            if self.get(parent_id).is_none() {
                return Err(DocumentError::UnknownParent(parent_id.clone()));
            }
            if self.is_same_or_descendant(parent_id, id) {
                return Err(DocumentError::WouldCreateCycle {
                    id: id.clone(),
                    parent: parent_id.clone(),
                });
            }
        }

        self.get_mut(id)?.parent_id = parent;
        Ok(())
    }

    /// Group components under a new `div` container sized to their combined
    /// bounds. Returns the group's id.
    pub fn group(
        &mut self,
        member_ids: &[ComponentId],
        name: impl Into<String>,
    ) -> Result<ComponentId, DocumentError> {
        if member_ids.is_empty() {
            return Err(DocumentError::EmptyGroup);
        }
        for member in member_ids {
            self.index_of(member)?;
        }

        let bounds = member_ids
            .iter()
            .filter_map(|member| self.get(member))
            .filter_map(|record| Some(Bounds::from_parts(record.position?, record.size?)))
            .reduce(|a, b| a.union(&b));

        let group_id = self.generate_id("group");
        let mut group = ComponentRecord::new(group_id.clone(), "div")
            .with_name(name)
            .with_category("layout");
        if let Some(bounds) = bounds {
            group.position = Some(bounds.origin());
            group.size = Some(bounds.size());
        }
        self.components.push(group);

        for member in member_ids {
            if let Ok(record) = self.get_mut(member) {
                record.parent_id = Some(group_id.clone());
            }
        }

        Ok(group_id)
    }

    /// Dissolve a group: members inherit the group's parent and the group
    /// record is removed.
    pub fn ungroup(&mut self, group_id: &ComponentId) -> Result<(), DocumentError> {
        self.remove(group_id)
    }

    /// The topmost component whose bounds contain `point` (later records are
    /// in front of earlier ones). Components without geometry are skipped.
    pub fn component_at(&self, point: Point) -> Option<&ComponentRecord> {
        self.components.iter().rev().find(|record| {
            match (record.position, record.size) {
                (Some(position), Some(size)) => {
                    Bounds::from_parts(position, size).contains(point)
                }
                _ => false,
            }
        })
    }

    fn generate_id(&mut self, prefix: &str) -> ComponentId {
        self.next_id += 1;
        ComponentId::from(format!("{}-{}", prefix, self.next_id))
    }

    fn index_of(&self, id: &ComponentId) -> Result<usize, DocumentError> {
        self.components
            .iter()
            .position(|c| &c.id == id)
            .ok_or_else(|| DocumentError::UnknownComponent(id.clone()))
    }

    fn get_mut(&mut self, id: &ComponentId) -> Result<&mut ComponentRecord, DocumentError> {
        self.components
            .iter_mut()
            .find(|c| &c.id == id)
            .ok_or_else(|| DocumentError::UnknownComponent(id.clone()))
    }

    /// Whether `candidate` is `ancestor` itself or one of its descendants.
    fn is_same_or_descendant(&self, candidate: &ComponentId, ancestor: &ComponentId) -> bool {
        let mut current = Some(candidate.clone());
        let mut hops = 0;
        while let Some(id) = current {
            if &id == ancestor {
                return true;
            }
            // Parent chains are acyclic by construction, but stay bounded
            // against malformed imports.
            hops += 1;
            if hops > self.components.len() {
                return false;
            }
            current = self.get(&id).and_then(|c| c.parent_id.clone());
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::ComponentLibrary;

    fn record(id: &str, kind: &str, x: f64, y: f64) -> ComponentRecord {
        ComponentRecord::new(id, kind)
            .with_position(x, y)
            .with_size(100.0, 100.0)
    }

    #[test]
    fn test_add_from_library_applies_defaults() {
        let library = ComponentLibrary::standard();
        let mut doc = Document::new();
        let id = doc.add_from_library(library.get("button").unwrap(), None, None);

        let button = doc.get(&id).unwrap();
        assert_eq!(button.kind, "button");
        assert_eq!(button.name, "Button");
        assert_eq!(button.props.get("children"), Some(&"Button".into()));
        assert_eq!(button.styles.get("backgroundColor"), Some(&"#3b82f6".into()));
        assert_eq!(button.position, Some(Point::new(100.0, 100.0)));
        assert_eq!(button.size, Some(Size::new(200.0, 100.0)));
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let library = ComponentLibrary::standard();
        let mut doc = Document::new();
        let a = doc.add_from_library(library.get("text").unwrap(), None, None);
        let b = doc.add_from_library(library.get("text").unwrap(), None, None);
        assert_ne!(a, b);
    }

    #[test]
    fn test_group_and_ungroup_round_trip() {
        let mut doc = Document::new();
        doc.insert(record("comp1", "div", 0.0, 0.0));
        doc.insert(record("comp2", "text", 100.0, 100.0));
        doc.insert(record("comp3", "button", 200.0, 200.0));

        let group_id = doc
            .group(&["comp1".into(), "comp2".into()], "Test Group")
            .unwrap();

        let group = doc.get(&group_id).unwrap();
        assert_eq!(group.name, "Test Group");
        assert_eq!(group.kind, "div");
        // Group bounds cover both members.
        assert_eq!(group.position, Some(Point::new(0.0, 0.0)));
        assert_eq!(group.size, Some(Size::new(200.0, 200.0)));

        assert_eq!(doc.get(&"comp1".into()).unwrap().parent_id, Some(group_id.clone()));
        assert_eq!(doc.get(&"comp2".into()).unwrap().parent_id, Some(group_id.clone()));
        assert_eq!(doc.get(&"comp3".into()).unwrap().parent_id, None);

        doc.ungroup(&group_id).unwrap();
        assert!(doc.get(&group_id).is_none());
        assert_eq!(doc.get(&"comp1".into()).unwrap().parent_id, None);
        assert_eq!(doc.get(&"comp2".into()).unwrap().parent_id, None);
    }

    #[test]
    fn test_group_of_nothing_is_rejected() {
        let mut doc = Document::new();
        assert_eq!(doc.group(&[], "Empty"), Err(DocumentError::EmptyGroup));
    }

    #[test]
    fn test_set_parent_and_detach() {
        let mut doc = Document::new();
        doc.insert(record("comp1", "div", 0.0, 0.0));
        doc.insert(record("comp2", "text", 100.0, 100.0));

        doc.set_parent(&"comp2".into(), Some("comp1".into())).unwrap();
        assert_eq!(doc.get(&"comp2".into()).unwrap().parent_id, Some("comp1".into()));

        doc.set_parent(&"comp2".into(), None).unwrap();
        assert_eq!(doc.get(&"comp2".into()).unwrap().parent_id, None);
    }

    #[test]
    fn test_set_parent_rejects_cycles() {
        let mut doc = Document::new();
        doc.insert(record("a", "div", 0.0, 0.0));
        doc.insert(record("b", "div", 0.0, 0.0));
        doc.insert(record("c", "div", 0.0, 0.0));
        doc.set_parent(&"b".into(), Some("a".into())).unwrap();
        doc.set_parent(&"c".into(), Some("b".into())).unwrap();

        assert_eq!(
            doc.set_parent(&"a".into(), Some("c".into())),
            Err(DocumentError::WouldCreateCycle {
                id: "a".into(),
                parent: "c".into(),
            })
        );
        assert_eq!(
            doc.set_parent(&"a".into(), Some("a".into())),
            Err(DocumentError::WouldCreateCycle {
                id: "a".into(),
                parent: "a".into(),
            })
        );
    }

    #[test]
    fn test_set_parent_unknown_targets() {
        let mut doc = Document::new();
        doc.insert(record("a", "div", 0.0, 0.0));
        assert_eq!(
            doc.set_parent(&"missing".into(), None),
            Err(DocumentError::UnknownComponent("missing".into()))
        );
        assert_eq!(
            doc.set_parent(&"a".into(), Some("missing".into())),
            Err(DocumentError::UnknownParent("missing".into()))
        );
    }

    #[test]
    fn test_remove_reparents_children() {
        let mut doc = Document::new();
        doc.insert(record("root", "div", 0.0, 0.0));
        doc.insert(record("mid", "div", 0.0, 0.0).with_parent("root"));
        doc.insert(record("leaf", "text", 0.0, 0.0).with_parent("mid"));

        doc.remove(&"mid".into()).unwrap();
        assert!(doc.get(&"mid".into()).is_none());
        assert_eq!(doc.get(&"leaf".into()).unwrap().parent_id, Some("root".into()));
    }

    #[test]
    fn test_remove_subtree_deletes_descendants() {
        let mut doc = Document::new();
        doc.insert(record("root", "div", 0.0, 0.0));
        doc.insert(record("mid", "div", 0.0, 0.0).with_parent("root"));
        doc.insert(record("leaf", "text", 0.0, 0.0).with_parent("mid"));
        doc.insert(record("other", "text", 0.0, 0.0));

        doc.remove_subtree(&"mid".into()).unwrap();
        assert!(doc.get(&"mid".into()).is_none());
        assert!(doc.get(&"leaf".into()).is_none());
        assert!(doc.get(&"other".into()).is_some());
    }

    #[test]
    fn test_resize_clamps_to_minimum() {
        let mut doc = Document::new();
        doc.insert(record("a", "div", 0.0, 0.0));
        doc.resize(&"a".into(), Size::new(5.0, 5.0)).unwrap();
        assert_eq!(doc.get(&"a".into()).unwrap().size, Some(Size::new(20.0, 20.0)));

        doc.resize(&"a".into(), Size::new(300.0, 150.0)).unwrap();
        assert_eq!(doc.get(&"a".into()).unwrap().size, Some(Size::new(300.0, 150.0)));
    }

    #[test]
    fn test_move_in_layer() {
        let mut doc = Document::new();
        doc.insert(record("a", "div", 0.0, 0.0));
        doc.insert(record("b", "div", 0.0, 0.0));
        doc.insert(record("c", "div", 0.0, 0.0));

        doc.move_in_layer(&"c".into(), LayerDirection::Up).unwrap();
        let order: Vec<_> = doc.records().iter().map(|r| r.id.as_str().to_string()).collect();
        assert_eq!(order, ["a", "c", "b"]);

        // Already at the front edge: no-op.
        doc.move_in_layer(&"a".into(), LayerDirection::Up).unwrap();
        let order: Vec<_> = doc.records().iter().map(|r| r.id.as_str().to_string()).collect();
        assert_eq!(order, ["a", "c", "b"]);
    }

    #[test]
    fn test_component_at_prefers_later_records() {
        let mut doc = Document::new();
        doc.insert(record("under", "div", 0.0, 0.0));
        doc.insert(record("over", "card", 50.0, 50.0));

        let hit = doc.component_at(Point::new(75.0, 75.0)).unwrap();
        assert_eq!(hit.id.as_str(), "over");

        let hit = doc.component_at(Point::new(10.0, 10.0)).unwrap();
        assert_eq!(hit.id.as_str(), "under");

        assert!(doc.component_at(Point::new(500.0, 500.0)).is_none());
    }
}
