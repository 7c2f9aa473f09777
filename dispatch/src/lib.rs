//! Verification dispatcher.
//!
//! Decides which provider calls a record requires (a pure presence test
//! per category), issues them concurrently through the signing gateway,
//! and collects the outcomes behind a join barrier. One call's failure
//! never cancels or short-circuits the others.

pub mod dispatcher;
pub mod payload;

pub use dispatcher::Dispatcher;
pub use payload::{applicable_calls, DEFAULT_COUNTRY};
