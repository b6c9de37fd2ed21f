use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum ActionResult {
    Accepted,
    Rejected(ActionError),
}

impl ActionResult {
    pub fn is_accepted(&self) -> bool {
        matches!(self, ActionResult::Accepted)
    }

    /// Extract the rejection reason if present.
    pub fn error(&self) -> Option<&ActionError> {
        match self {
            ActionResult::Rejected(e) => Some(e),
            ActionResult::Accepted => None,
        }
    }
}

/// Every rejection leaves grid, heat, and budget exactly as they were.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum ActionError {
    OutOfBounds,
    CellOccupied,
    CellEmpty,
    InsufficientFunds,
    InvalidParameter(String),
}
