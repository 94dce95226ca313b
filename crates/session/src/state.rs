//! The presentation-state machine.

use serde::{Deserialize, Serialize};

/// Presentation state of one dashboard session.
///
/// `Loading` is true exactly while a synthesis or regeneration call is
/// outstanding; `Display` implies a record is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// No record yet; the intake form is shown.
    Intake,
    /// A submission or regeneration is in flight.
    Loading,
    /// A record is present and not loading.
    Display,
}

impl SessionState {
    /// Whether the lifecycle permits moving to `target`.
    ///
    /// `Loading -> Intake` covers a failed first submission falling
    /// back to the form; `Display -> Intake` is the external
    /// "New Analysis" reset.
    pub fn can_transition_to(self, target: Self) -> bool {
        use SessionState::{Display, Intake, Loading};
        matches!(
            (self, target),
            (Intake, Loading)
                | (Loading, Display)
                | (Loading, Intake)
                | (Display, Loading)
                | (Display, Intake)
        )
    }

    /// Whether a call is outstanding.
    pub fn is_loading(self) -> bool {
        self == Self::Loading
    }
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Intake => "intake",
            Self::Loading => "loading",
            Self::Display => "display",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle_transitions() {
        assert!(SessionState::Intake.can_transition_to(SessionState::Loading));
        assert!(SessionState::Loading.can_transition_to(SessionState::Display));
        assert!(SessionState::Display.can_transition_to(SessionState::Loading));
        assert!(SessionState::Display.can_transition_to(SessionState::Intake));
        assert!(SessionState::Loading.can_transition_to(SessionState::Intake));
    }

    #[test]
    fn test_forbidden_transitions() {
        assert!(!SessionState::Intake.can_transition_to(SessionState::Display));
        assert!(!SessionState::Intake.can_transition_to(SessionState::Intake));
        assert!(!SessionState::Loading.can_transition_to(SessionState::Loading));
        assert!(!SessionState::Display.can_transition_to(SessionState::Display));
    }

    #[test]
    fn test_is_loading() {
        assert!(SessionState::Loading.is_loading());
        assert!(!SessionState::Intake.is_loading());
        assert!(!SessionState::Display.is_loading());
    }
}
