//! BootstrapPhase - lifecycle of a session from start request to dispatch.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Bootstrap lifecycle.
///
/// ```text
/// Idle -> Connecting -> AwaitingParticipant -> Greeted -> Active
/// ```
///
/// Strictly linear; `Active` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BootstrapPhase {
    #[default]
    Idle,
    Connecting,
    AwaitingParticipant,
    Greeted,
    Active,
}

impl BootstrapPhase {
    /// True once intents may be dispatched.
    pub fn accepts_intents(&self) -> bool {
        matches!(self, BootstrapPhase::Active)
    }
}

impl StateMachine for BootstrapPhase {
    fn can_transition_to(&self, target: &Self) -> bool {
        use BootstrapPhase::*;
        matches!(
            (self, target),
            (Idle, Connecting)
                | (Connecting, AwaitingParticipant)
                | (AwaitingParticipant, Greeted)
                | (Greeted, Active)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use BootstrapPhase::*;
        match self {
            Idle => vec![Connecting],
            Connecting => vec![AwaitingParticipant],
            AwaitingParticipant => vec![Greeted],
            Greeted => vec![Active],
            Active => vec![],
        }
    }
}

impl fmt::Display for BootstrapPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BootstrapPhase::Idle => "idle",
            BootstrapPhase::Connecting => "connecting",
            BootstrapPhase::AwaitingParticipant => "awaiting_participant",
            BootstrapPhase::Greeted => "greeted",
            BootstrapPhase::Active => "active",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use BootstrapPhase::*;

    const ALL: [BootstrapPhase; 5] = [Idle, Connecting, AwaitingParticipant, Greeted, Active];

    #[test]
    fn default_is_idle() {
        assert_eq!(BootstrapPhase::default(), Idle);
    }

    #[test]
    fn happy_path_walks_every_phase() {
        let mut phase = Idle;
        for next in [Connecting, AwaitingParticipant, Greeted, Active] {
            phase = phase.transition_to(next).unwrap();
        }
        assert_eq!(phase, Active);
        assert!(phase.is_terminal());
    }

    #[test]
    fn phases_cannot_be_skipped() {
        assert!(Idle.transition_to(AwaitingParticipant).is_err());
        assert!(Connecting.transition_to(Greeted).is_err());
        assert!(AwaitingParticipant.transition_to(Active).is_err());
    }

    #[test]
    fn no_backward_transitions() {
        assert!(Active.transition_to(Idle).is_err());
        assert!(Greeted.transition_to(AwaitingParticipant).is_err());
    }

    #[test]
    fn each_phase_has_at_most_one_successor() {
        for phase in ALL {
            assert!(phase.valid_transitions().len() <= 1, "{:?} branches", phase);
        }
    }

    #[test]
    fn can_transition_to_is_consistent_with_valid_transitions() {
        for phase in ALL {
            for target in ALL {
                assert_eq!(
                    phase.can_transition_to(&target),
                    phase.valid_transitions().contains(&target),
                    "{:?} -> {:?}",
                    phase,
                    target
                );
            }
        }
    }

    #[test]
    fn only_active_accepts_intents() {
        let accepting: Vec<_> = ALL.iter().filter(|p| p.accepts_intents()).collect();
        assert_eq!(accepting, vec![&Active]);
    }
}
