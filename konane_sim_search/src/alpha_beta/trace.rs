use std::fmt::Debug;

use atree::{Arena, Token};

use super::Bounds;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeKind {
    /// Appended but not resolved yet.
    Unresolved,
    Terminal,
    /// Scored by the heuristic: depth limit reached or no move available.
    Cutoff,
    Interior {
        maximizing: bool,
        /// Expansion stopped before the last child.
        pruned: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceNode<A> {
    /// `None` for the root.
    pub action: Option<A>,
    pub remaining_depth: u8,
    pub kind: NodeKind,
    pub bounds: Bounds,
}

impl<A> TraceNode<A> {
    #[inline]
    pub fn new(action: Option<A>, remaining_depth: u8) -> Self {
        Self {
            action,
            remaining_depth,
            kind: NodeKind::Unresolved,
            bounds: Bounds::FULL,
        }
    }
}

/// Record of every node visited by one alpha-beta decision.
///
/// Nodes live in an arena and refer to their parent by token.
pub struct SearchTrace<A> {
    pub tree: Arena<TraceNode<A>>,
    pub root: Token,
}

impl<A> SearchTrace<A> {
    pub fn new(remaining_depth: u8) -> Self {
        let (tree, root) = Arena::with_data(TraceNode::new(None, remaining_depth));
        Self { tree, root }
    }

    #[inline]
    pub fn append(&mut self, parent: Token, action: A, remaining_depth: u8) -> Token {
        parent.append(&mut self.tree, TraceNode::new(Some(action), remaining_depth))
    }

    #[inline]
    pub fn resolve(&mut self, token: Token, kind: NodeKind, bounds: Bounds) {
        if let Some(node) = self.tree.get_mut(token) {
            node.data.kind = kind;
            node.data.bounds = bounds;
        }
    }

    #[inline]
    pub fn get(&self, token: Token) -> Option<&TraceNode<A>> {
        self.tree.get(token).map(|n| &n.data)
    }

    pub fn children(&self, token: Token) -> Vec<Token> {
        self.tree
            .get(token)
            .map(|n| n.children_tokens(&self.tree).collect())
            .unwrap_or_default()
    }

    /// Calls `f` on every node below and including `token`, parents first.
    pub fn walk<F: FnMut(Token, &TraceNode<A>)>(&self, token: Token, f: &mut F) {
        let Some(node) = self.tree.get(token) else {
            return;
        };
        f(token, &node.data);
        for child in node.children_tokens(&self.tree) {
            self.walk(child, f);
        }
    }

    /// Number of recorded nodes including the root.
    pub fn node_count(&self) -> usize {
        let mut n = 0;
        self.walk(self.root, &mut |_, _| n += 1);
        n
    }
}

impl<A: Debug> SearchTrace<A> {
    fn describe(node: &TraceNode<A>) -> String {
        let action_part = match &node.action {
            Some(action) => format!("{action:?}"),
            None => "[Root]".to_string(),
        };
        let Bounds { alpha, beta } = node.bounds;
        format!(
            "{action_part} [{alpha:.4}, {beta:.4}] {:?}, remaining={}",
            node.kind, node.remaining_depth
        )
    }

    pub fn print_tree(&self, token: Token, depth: u8, max_depth: u8) {
        if depth > max_depth {
            return;
        }

        let Some(node) = self.tree.get(token) else {
            return;
        };

        let indent = "  ".repeat(depth as usize);
        println!("{indent}- {}", Self::describe(&node.data));
        for child in node.children_tokens(&self.tree) {
            self.print_tree(child, depth + 1, max_depth);
        }
    }
}

impl<A: Debug> Debug for SearchTrace<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchTrace")
            .field("root", &self.get(self.root))
            .field("node_count", &self.node_count())
            .finish()
    }
}
