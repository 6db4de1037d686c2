use std::rc::Rc;

use konane_sim::data_structures::ActionList;
use konane_sim::types::PlayerId;

use crate::*;




pub mod prop_tests;

/// Explicit game tree. Leaf values are from Black's point of view.
#[derive(Debug, Clone, PartialEq)]
pub enum TreeSpec {
    Leaf(Eval),
    Won(PlayerId),
    Node(Vec<TreeSpec>),
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TreeError {
    #[error("no child {0}")]
    NoSuchChild(u8),
    #[error("advance rejected")]
    Rejected,
}

/// Position inside a [`TreeSpec`]. Black moves at even depths.
#[derive(Debug, Clone)]
pub struct TreeGame {
    root: Rc<TreeSpec>,
    path: Vec<u8>,
    reject_advance: bool,
}

impl TreeGame {
    pub fn new(spec: TreeSpec) -> Self {
        Self {
            root: Rc::new(spec),
            path: vec![],
            reject_advance: false,
        }
    }

    pub fn rejecting(spec: TreeSpec) -> Self {
        Self {
            reject_advance: true,
            ..Self::new(spec)
        }
    }

    fn current(&self) -> &TreeSpec {
        let mut node = self.root.as_ref();
        for i in &self.path {
            let TreeSpec::Node(children) = node else {
                panic!("path leads through a leaf");
            };
            node = &children[*i as usize];
        }
        node
    }
}

impl Game for TreeGame {
    type Action = u8;
    type Actions = ActionList<u8>;
    type Error = TreeError;

    fn winner(&self) -> Option<PlayerId> {
        match self.current() {
            TreeSpec::Won(p) => Some(*p),
            _ => None,
        }
    }

    fn to_move(&self) -> PlayerId {
        PlayerId::for_turn(self.path.len() as u16)
    }

    fn actions(&self) -> ActionList<u8> {
        match self.current() {
            TreeSpec::Node(children) => (0..children.len() as u8).collect(),
            _ => ActionList::new(),
        }
    }

    fn advance(&mut self, action: u8) -> Result<(), TreeError> {
        if self.reject_advance {
            return Err(TreeError::Rejected);
        }
        match self.current() {
            TreeSpec::Node(children) if (action as usize) < children.len() => {
                self.path.push(action);
                Ok(())
            }
            _ => Err(TreeError::NoSuchChild(action)),
        }
    }

    fn eval(&self, player_id: PlayerId) -> Eval {
        let value = match self.current() {
            TreeSpec::Leaf(v) => *v,
            _ => 0.0,
        };
        player_id.select((value, -value))
    }
}

pub fn leaves(values: &[Eval]) -> TreeSpec {
    TreeSpec::Node(values.iter().copied().map(TreeSpec::Leaf).collect())
}

/// Three plies, Black to move at the root. Backed up root value 0.5 through child 0.
///
/// Alpha-beta skips the second leaf of child 0's second reply and the whole second reply of child 1.
pub fn three_ply_tree() -> TreeSpec {
    TreeSpec::Node(vec![
        TreeSpec::Node(vec![leaves(&[0.3, 0.5]), leaves(&[0.6, 0.9])]),
        TreeSpec::Node(vec![leaves(&[0.1, 0.2]), leaves(&[0.0, 0.7])]),
        TreeSpec::Node(vec![leaves(&[0.8, 0.4]), leaves(&[0.2, 0.1])]),
    ])
}

/// Alpha-beta sentinels mapped onto the minimax terminal scores.
pub fn as_minimax_score(eval: Eval) -> Eval {
    if eval >= MAX_VALUE {
        MINIMAX_WIN
    } else if eval <= MIN_VALUE {
        MINIMAX_LOSS
    } else {
        eval
    }
}
