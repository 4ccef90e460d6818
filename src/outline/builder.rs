use super::types::{Heading, OutlineNode};

/// Build the nested outline forest from headings in document order.
///
/// The forest mirrors the heading hierarchy: a node's children are the
/// contiguous run of strictly deeper headings that follow it, up to the
/// next heading at the node's own level or shallower. Headings without an
/// id are left out without closing the surrounding scope. Skipped ranks
/// (an `<h2>` followed directly by an `<h4>`) still nest a single step;
/// the tree depth follows the distinct level transitions actually seen,
/// not the numeric gap.
pub fn build_outline(headings: &[Heading]) -> Vec<OutlineNode> {
    let mut forest = Vec::new();
    build_level(headings, 0, &mut forest);
    forest
}

/// Recursive descent over the flat heading sequence.
///
/// The anchor level for this scope is the level of the heading at the
/// entry cursor. Returns the cursor position of the first heading that
/// belongs to a shallower scope, for the caller to reinterpret.
fn build_level(headings: &[Heading], mut i: usize, out: &mut Vec<OutlineNode>) -> usize {
    let anchor_level = match headings.get(i) {
        Some(h) => h.level,
        None => return i,
    };
    // Index of the most recent sibling opened at this scope, if any
    let mut current: Option<usize> = None;

    while let Some(h) = headings.get(i) {
        let id = match h.id.as_deref() {
            Some(id) => id,
            None => {
                i += 1;
                continue;
            }
        };
        if h.level == anchor_level {
            out.push(OutlineNode::new(display_label(&h.text), id));
            current = Some(out.len() - 1);
            i += 1;
        } else if h.level > anchor_level {
            let mut nested = Vec::new();
            i = build_level(headings, i, &mut nested);
            match current {
                Some(idx) => out[idx].children.append(&mut nested),
                // Deeper heading before any sibling existed at this scope
                // (reachable through id-less skips): promote the subtree
                // rather than dereference an absent parent.
                None => out.append(&mut nested),
            }
        } else {
            return i;
        }
    }
    i
}

/// Build the flat (legacy) outline: one unnested entry per identified
/// heading, labelled by its id, in input order.
pub fn build_flat_outline(headings: &[Heading]) -> Vec<OutlineNode> {
    headings
        .iter()
        .filter_map(|h| h.id.as_deref())
        .map(|id| OutlineNode::new(id.to_string(), id))
        .collect()
}

/// Breadcrumb-style headings ("Chapter 1 / Section A") keep only the
/// final segment as the label.
fn display_label(text: &str) -> String {
    text.split(" / ").last().unwrap_or(text).to_string()
}
