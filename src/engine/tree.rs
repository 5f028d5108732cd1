use crate::amazons::action::Action;

/// One node of the persistent search tree. The root has no action; every
/// other node's action is the move that would be applied to its parent's
/// board to reach it. Children are created lazily the first time a node is
/// expanded and owned by value in a contiguous vector, so the tree only ever
/// grows downward — no cycles, no shared references, mirroring the way the
/// fast board owns its own derived state.
#[derive(Clone, Debug, Default)]
pub struct SearchNode {
    pub action: Option<Action>,
    pub score: Option<i32>,
    /// Which child produced `score` on the most recent `alpha_beta` pass.
    /// Reading this off the root after a pass is more robust than re-deriving
    /// it by scanning for a child whose score happens to match, since move
    /// ordering and null-window re-searches can leave unrelated children
    /// holding a stale score from an earlier iteration.
    pub best_action: Option<Action>,
    pub children: Vec<SearchNode>,
}

impl SearchNode {
    pub fn root() -> SearchNode {
        SearchNode { action: None, score: None, best_action: None, children: Vec::new() }
    }

    pub fn for_action(action: Action) -> SearchNode {
        SearchNode { action: Some(action), score: None, best_action: None, children: Vec::new() }
    }

    pub fn is_expanded(&self) -> bool {
        !self.children.is_empty()
    }

    /// Re-roots the tree at the child reached by playing `action`, discarding
    /// every sibling along with their subtrees. Falls back to a fresh,
    /// unexpanded node when the action isn't among the already-materialised
    /// children (the position hasn't been searched deeply enough yet to know
    /// about it), so a turn the engine didn't anticipate never panics.
    pub fn descend(&mut self, action: Action) -> SearchNode {
        if let Some(idx) = self.children.iter().position(|child| child.action == Some(action)) {
            self.children.swap_remove(idx)
        } else {
            SearchNode::for_action(action)
        }
    }

    /// Sorts children by cached score for move ordering: best-first for the
    /// side about to choose among them, with unexplored (`None`) children
    /// sorted first since they're the most informative to visit next.
    pub fn order_children(&mut self, maximizing: bool) {
        self.children.sort_by(|a, b| {
            let key = |node: &SearchNode, maximizing: bool| match node.score {
                None => if maximizing { i32::MAX } else { i32::MIN },
                Some(s) => s,
            };
            let (ka, kb) = (key(a, maximizing), key(b, maximizing));
            if maximizing { kb.cmp(&ka) } else { ka.cmp(&kb) }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amazons::position::Position;

    fn dummy_action(tag: &str) -> Action {
        let p: Position = tag.parse().unwrap();
        Action::new(p, p, p, 0)
    }

    #[test]
    fn descend_into_known_child_preserves_its_subtree() {
        let mut root = SearchNode::root();
        let mut known = SearchNode::for_action(dummy_action("a1"));
        known.children.push(SearchNode::for_action(dummy_action("b2")));
        root.children.push(known);
        root.children.push(SearchNode::for_action(dummy_action("c3")));

        let child = root.descend(dummy_action("a1"));
        assert_eq!(child.children.len(), 1);
    }

    #[test]
    fn descend_into_unknown_action_yields_fresh_node() {
        let mut root = SearchNode::root();
        root.children.push(SearchNode::for_action(dummy_action("a1")));

        let child = root.descend(dummy_action("z9"));
        assert!(child.children.is_empty());
        assert_eq!(child.action, Some(dummy_action("z9")));
    }

    #[test]
    fn order_children_sorts_best_first_when_maximizing() {
        let mut root = SearchNode::root();
        for (tag, score) in [("a1", 3), ("b2", 7), ("c3", 1)] {
            let mut node = SearchNode::for_action(dummy_action(tag));
            node.score = Some(score);
            root.children.push(node);
        }
        root.order_children(true);
        let scores: Vec<i32> = root.children.iter().map(|c| c.score.unwrap()).collect();
        assert_eq!(scores, vec![7, 3, 1]);
    }

    #[test]
    fn order_children_puts_unexplored_first() {
        let mut root = SearchNode::root();
        let mut explored = SearchNode::for_action(dummy_action("a1"));
        explored.score = Some(5);
        root.children.push(explored);
        root.children.push(SearchNode::for_action(dummy_action("b2")));
        root.order_children(true);
        assert_eq!(root.children[0].score, None);
    }
}
