use thiserror::Error;

use super::machine::StateId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidStateIdError {
    pub state_id: StateId,
    pub state_count: usize,
}

impl std::fmt::Display for InvalidStateIdError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "state {} does not exist (automaton has {} states)",
            self.state_id, self.state_count
        )
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutomatonError {
    #[error("Invalid from state ID: {0}")]
    InvalidFromStateId(InvalidStateIdError),
    #[error("Invalid to state ID: {0}")]
    InvalidToStateId(InvalidStateIdError),
}
