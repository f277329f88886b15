use super::model::MeasureState;
use crate::markers::MarkerId;

/// Outcome of feeding one right-click (or deletion side effect) into the
/// measurement machine. `Completed` only names the pair; resolving the
/// pair to positions and producing a line is the dispatcher's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureTransition {
    /// First pick armed; awaiting a second marker.
    Armed { first: MarkerId },
    /// Right-clicking the pending marker again cancelled the measurement.
    Cancelled { first: MarkerId },
    /// A distinct second marker completed the pair.
    Completed { first: MarkerId, second: MarkerId },
}

/// Two-phase picker turning a pair of marker right-clicks into a
/// completed measurement.
#[derive(Debug, Default)]
pub struct MeasureMachine {
    state: MeasureState,
}

impl MeasureMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> MeasureState {
        self.state
    }

    pub fn pending_first(&self) -> Option<MarkerId> {
        self.state.pending_first()
    }

    /// Advances the machine for a right-click on marker `id`. Every
    /// right-click is a valid input in every state, so this is total.
    pub fn right_click(&mut self, id: MarkerId) -> MeasureTransition {
        let transition = match self.state {
            MeasureState::Idle => MeasureTransition::Armed { first: id },
            MeasureState::AwaitingSecond { first } if first == id => {
                MeasureTransition::Cancelled { first }
            }
            MeasureState::AwaitingSecond { first } => MeasureTransition::Completed {
                first,
                second: id,
            },
        };
        self.state = match transition {
            MeasureTransition::Armed { first } => MeasureState::AwaitingSecond { first },
            MeasureTransition::Cancelled { .. } | MeasureTransition::Completed { .. } => {
                MeasureState::Idle
            }
        };
        tracing::debug!(id, next = ?self.state, "measurement transition");
        transition
    }

    /// Side effect of marker deletion: a pending first-pick referencing the
    /// deleted marker resets the machine to idle.
    pub fn marker_deleted(&mut self, id: MarkerId) {
        if self.state.pending_first() == Some(id) {
            tracing::debug!(id, "pending measurement cleared by marker deletion");
            self.state = MeasureState::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_right_click_arms_the_machine() {
        let mut machine = MeasureMachine::new();
        assert_eq!(machine.state(), MeasureState::Idle);
        assert_eq!(machine.right_click(0), MeasureTransition::Armed { first: 0 });
        assert_eq!(machine.state(), MeasureState::AwaitingSecond { first: 0 });
        assert_eq!(machine.pending_first(), Some(0));
    }

    #[test]
    fn right_clicking_the_pending_marker_cancels() {
        let mut machine = MeasureMachine::new();
        machine.right_click(4);
        assert_eq!(
            machine.right_click(4),
            MeasureTransition::Cancelled { first: 4 }
        );
        assert_eq!(machine.state(), MeasureState::Idle);
    }

    #[test]
    fn a_distinct_second_marker_completes_and_returns_to_idle() {
        let mut machine = MeasureMachine::new();
        machine.right_click(0);
        assert_eq!(
            machine.right_click(1),
            MeasureTransition::Completed {
                first: 0,
                second: 1
            }
        );
        assert_eq!(machine.state(), MeasureState::Idle);
        assert_eq!(machine.pending_first(), None);
    }

    #[test]
    fn completion_rearms_cleanly_for_the_next_measurement() {
        let mut machine = MeasureMachine::new();
        machine.right_click(0);
        machine.right_click(1);
        assert_eq!(machine.right_click(2), MeasureTransition::Armed { first: 2 });
    }

    #[test]
    fn deleting_the_pending_marker_resets_to_idle() {
        let mut machine = MeasureMachine::new();
        machine.right_click(7);
        machine.marker_deleted(7);
        assert_eq!(machine.state(), MeasureState::Idle);
    }

    #[test]
    fn deleting_an_unrelated_marker_keeps_the_pending_pick() {
        let mut machine = MeasureMachine::new();
        machine.right_click(7);
        machine.marker_deleted(8);
        assert_eq!(machine.state(), MeasureState::AwaitingSecond { first: 7 });
    }
}
