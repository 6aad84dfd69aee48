use std::fmt::Debug;
use std::hash::Hash;

/// A search-space location.
///
/// Blanket-implemented for every `Clone + Eq + Hash + Debug` type. The
/// searches never look inside a node; `Debug` is only used for trace logs.
pub trait Node: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> Node for T {}

/// Neighbor enumeration for a search space.
pub trait Pather<N> {
    /// Append the neighbors of `node` into `buf`, in exploration order.
    /// The caller clears `buf` before calling.
    ///
    /// A node the pather knows nothing about has no neighbors.
    fn neighbors(&self, node: &N, buf: &mut Vec<N>);
}

impl<N, P: Pather<N> + ?Sized> Pather<N> for &P {
    #[inline]
    fn neighbors(&self, node: &N, buf: &mut Vec<N>) {
        (**self).neighbors(node, buf)
    }
}

/// Adapts a closure into a [`Pather`].
///
/// ```
/// use wayseek_paths::{FnPather, bfs};
///
/// // A line 0 - 1 - 2 - ... - 9.
/// let line = FnPather(|&n: &i32, buf: &mut Vec<i32>| {
///     buf.extend([n - 1, n + 1].into_iter().filter(|m| (0..10).contains(m)));
/// });
/// assert_eq!(bfs(&line, &2, &5).moves(), Some(3));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct FnPather<F>(pub F);

impl<N, F: Fn(&N, &mut Vec<N>)> Pather<N> for FnPather<F> {
    #[inline]
    fn neighbors(&self, node: &N, buf: &mut Vec<N>) {
        (self.0)(node, buf)
    }
}
