//! Normalization of pre-nested input.
//!
//! Some callers hand over records that already nest their descendants in the
//! `children` field instead of (or in addition to) linking through
//! `parent_id`. The canonical representation is the flat list; this module
//! converts at the boundary so the builder only ever sees one shape.

use forge_core::{ComponentId, ComponentRecord};

/// Flatten any pre-nested `children` arrays into a single flat list.
///
/// Nested records are appended directly after their container in depth-first
/// order, with `parent_id` set to the enclosing record's id unless they
/// already carry an explicit link. Input without nesting is returned as an
/// unchanged copy.
pub fn flatten(records: &[ComponentRecord]) -> Vec<ComponentRecord> {
    if records.iter().all(|r| r.children.is_empty()) {
        return records.to_vec();
    }

    let mut flat = Vec::with_capacity(records.len());
    for record in records {
        push_subtree(record, None, &mut flat);
    }
    flat
}

fn push_subtree(
    record: &ComponentRecord,
    enclosing: Option<&ComponentId>,
    out: &mut Vec<ComponentRecord>,
) {
    let mut flat = record.clone();
    let children = std::mem::take(&mut flat.children);

    if flat.parent_id.is_none() {
        flat.parent_id = enclosing.cloned();
    }

    let id = flat.id.clone();
    out.push(flat);

    for child in &children {
        push_subtree(child, Some(&id), out);
    }
}
