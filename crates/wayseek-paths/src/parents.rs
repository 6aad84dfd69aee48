use std::collections::HashMap;

use crate::path::Path;
use crate::traits::Node;

/// Maps each discovered node to the node that first discovered it.
/// The search origin maps to `None`.
pub type ParentMap<N> = HashMap<N, Option<N>>;

/// Walk parent links back from `goal` to the origin and return the path in
/// origin-to-goal order, both endpoints included.
///
/// `goal` must have been recorded in `parents`. A node without an entry is
/// treated as the origin.
pub fn reconstruct<N: Node>(goal: &N, parents: &ParentMap<N>) -> Path<N> {
    debug_assert!(parents.contains_key(goal), "goal {goal:?} was never discovered");
    let mut nodes = Vec::new();
    let mut cur = Some(goal.clone());
    while let Some(node) = cur {
        cur = parents.get(&node).cloned().flatten();
        nodes.push(node);
    }
    nodes.reverse();
    Path::from(nodes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayseek_core::Label;

    #[test]
    fn walks_back_to_origin() {
        let mut parents = ParentMap::new();
        parents.insert(Label::new("A"), None);
        parents.insert(Label::new("B"), Some(Label::new("A")));
        parents.insert(Label::new("C"), Some(Label::new("B")));
        parents.insert(Label::new("D"), Some(Label::new("B")));
        parents.insert(Label::new("E"), Some(Label::new("C")));

        let path = reconstruct(&Label::new("E"), &parents);
        let names: Vec<&str> = path.iter().map(Label::as_str).collect();
        assert_eq!(names, ["A", "B", "C", "E"]);
    }

    #[test]
    fn origin_alone() {
        let mut parents = ParentMap::new();
        parents.insert(7, None);
        assert_eq!(reconstruct(&7, &parents).as_slice(), &[7]);
    }
}
