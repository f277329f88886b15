pub mod machine;
pub mod model;

pub use machine::{MeasureMachine, MeasureTransition};
pub use model::MeasureState;
