/// Direction of an edge relative to one of its endpoints.
///
/// Traversing a graph in the [`Incoming`] direction is the same as traversing
/// its transpose in the [`Outgoing`] direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Follow edges from their source to their destination.
    Outgoing,
    /// Follow edges from their destination back to their source.
    Incoming,
}

pub use Direction::*;

impl Direction {
    #[inline]
    pub fn index(&self) -> usize {
        match self {
            Direction::Outgoing => 0,
            Direction::Incoming => 1,
        }
    }
}
