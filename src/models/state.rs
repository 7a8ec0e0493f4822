//! Display state of one result container.

use crate::models::outcome::OperationOutcome;

/// What the result container currently shows.
///
/// One value per pipeline controller; only `dispatch` transitions it. `Loading`
/// never survives a dispatch — every run ends in `Success` or `Error`.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayState {
    Idle,
    Loading,
    Success(OperationOutcome),
    Error(String),
}

impl DisplayState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, DisplayState::Success(_) | DisplayState::Error(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_success_and_error_are_terminal() {
        assert!(!DisplayState::Idle.is_terminal());
        assert!(!DisplayState::Loading.is_terminal());
        assert!(DisplayState::Error("x".into()).is_terminal());
        let outcome = OperationOutcome {
            original_size: 1,
            compressed_size: 1,
            download_url: "/d/x".into(),
            message: None,
        };
        assert!(DisplayState::Success(outcome).is_terminal());
    }
}
