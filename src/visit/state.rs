use std::ops::Index;

use crate::core::VertexId;

use super::Time;

/// Traversal color of a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// Not discovered yet.
    #[default]
    Unvisited,
    /// Discovered, but some of its descendants are still being processed.
    InProgress,
    /// The vertex and all its descendants have been processed.
    Finished,
}

/// Per-traversal attributes of a single vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VertexState {
    pub color: Color,
    pub predecessor: Option<VertexId>,
    pub discovered: Option<Time>,
    pub finished: Option<Time>,
}

/// Table of [`VertexState`]s indexed by [`VertexId`].
///
/// Colors only ever move forward: `Unvisited` → `InProgress` → `Finished`.
#[derive(Debug, Clone)]
pub struct VertexStates {
    states: Vec<VertexState>,
}

impl VertexStates {
    /// Creates a table with all vertices unvisited.
    pub fn new(vertex_bound: usize) -> Self {
        Self {
            states: vec![VertexState::default(); vertex_bound],
        }
    }

    pub fn get(&self, id: VertexId) -> Option<&VertexState> {
        self.states.get(id.as_usize())
    }

    pub fn color(&self, id: VertexId) -> Color {
        self.states[id.as_usize()].color
    }

    pub fn is_unvisited(&self, id: VertexId) -> bool {
        self.color(id) == Color::Unvisited
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (VertexId, &VertexState)> + '_ {
        self.states
            .iter()
            .enumerate()
            .map(|(index, state)| (VertexId::from_usize(index), state))
    }

    pub(crate) fn open(&mut self, id: VertexId, predecessor: Option<VertexId>, time: Time) {
        let state = &mut self.states[id.as_usize()];
        debug_assert_eq!(state.color, Color::Unvisited);

        state.color = Color::InProgress;
        state.predecessor = predecessor;
        state.discovered = Some(time);
    }

    pub(crate) fn close(&mut self, id: VertexId, time: Time) {
        let state = &mut self.states[id.as_usize()];
        debug_assert_eq!(state.color, Color::InProgress);

        state.color = Color::Finished;
        state.finished = Some(time);
    }
}

impl Index<VertexId> for VertexStates {
    type Output = VertexState;

    fn index(&self, id: VertexId) -> &Self::Output {
        &self.states[id.as_usize()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transitions() {
        let v = VertexId::from_usize(1);
        let u = VertexId::from_usize(0);
        let mut states = VertexStates::new(2);

        assert!(states.is_unvisited(v));
        assert_eq!(states[v], VertexState::default());

        states.open(v, Some(u), Time(3));
        assert_eq!(states.color(v), Color::InProgress);
        assert_eq!(states[v].predecessor, Some(u));
        assert_eq!(states[v].discovered, Some(Time(3)));
        assert_eq!(states[v].finished, None);

        states.close(v, Time(4));
        assert_eq!(states.color(v), Color::Finished);
        assert_eq!(states[v].finished, Some(Time(4)));

        assert!(states.is_unvisited(u));
        assert_eq!(states.get(VertexId::from_usize(2)), None);
    }
}
