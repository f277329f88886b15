use crate::markers::MarkerId;

/// Measurement interaction state. At most one measurement is in flight;
/// a second one cannot start before the first resolves because every
/// transition out of `AwaitingSecond` lands back in `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MeasureState {
    #[default]
    Idle,
    AwaitingSecond {
        first: MarkerId,
    },
}

impl MeasureState {
    /// The pending first-pick id, if a measurement is in flight.
    pub const fn pending_first(self) -> Option<MarkerId> {
        match self {
            Self::Idle => None,
            Self::AwaitingSecond { first } => Some(first),
        }
    }
}
