//! Wizard state machine.
//!
//! An ordered sequence of data-collection steps with per-step validation
//! gates. The machine owns exactly one mutable cursor and one
//! accumulating record; collaborators read the record and append to it
//! through typed operations, never through shared mutable references.
//! The terminal step validates the finished record, dispatches it, and
//! aggregates the outcomes into a decision.

pub mod error;
pub mod machine;
pub mod render;
pub mod step;

pub use error::WizardError;
pub use machine::WizardMachine;
pub use render::RenderState;
pub use step::Step;
