use crate::konane::Move;

pub type ActionList<T> = smallvec::SmallVec<[T; 16]>;

/// Konane has at most a few dozen jumps available in practical positions.
pub type MoveList = ActionList<Move>;

#[macro_export]
macro_rules! action_list {
    () => {
        $crate::smallvec::SmallVec::<[_; 16]>::new()
    };
    ($($e : expr),+ $(,)?) => {
        $crate::smallvec::smallvec![$($e),+]
    }
}
