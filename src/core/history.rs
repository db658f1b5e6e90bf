use crate::core::models::GameState;

/// An immutable copy of a [`GameState`] taken before a move was attempted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot(GameState);

impl Snapshot {
    pub fn of(state: &GameState) -> Snapshot {
        Snapshot(state.clone())
    }

    pub fn state(&self) -> &GameState {
        &self.0
    }

    pub fn into_state(self) -> GameState {
        self.0
    }
}

impl From<GameState> for Snapshot {
    fn from(state: GameState) -> Snapshot {
        Snapshot(state)
    }
}

/// Last-in-first-out stack of snapshots used for undo.
#[derive(Clone, Debug, Default)]
pub struct MovementHistory {
    snapshots: Vec<Snapshot>,
}

impl MovementHistory {
    pub fn new() -> MovementHistory {
        MovementHistory::default()
    }

    /// Rebuilds a history from snapshots ordered oldest first.
    pub fn from_snapshots(snapshots: Vec<Snapshot>) -> MovementHistory {
        MovementHistory { snapshots }
    }

    pub fn record(&mut self, state: &GameState) {
        self.push(Snapshot::of(state));
    }

    pub fn push(&mut self, snapshot: Snapshot) {
        self.snapshots.push(snapshot);
        tracing::debug!(depth = self.snapshots.len(), "Snapshot pushed to history");
    }

    /// Pops the most recent snapshot. The caller installs it.
    pub fn undo(&mut self) -> Option<Snapshot> {
        let popped = self.snapshots.pop();
        match &popped {
            Some(_) => tracing::debug!(depth = self.snapshots.len(), "Snapshot popped from history"),
            None => tracing::warn!("Attempted to pop from empty history"),
        }
        popped
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
        tracing::debug!("Movement history cleared");
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Snapshot> {
        self.snapshots.iter()
    }
}
