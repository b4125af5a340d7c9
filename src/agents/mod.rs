//! Agent states and the handoff dispatcher.
//!
//! Three personas take the conversation in turn: intake collects the user's
//! name and age, parental consent gates minors, and customer service answers
//! informational queries. Transitions are explicit [`Handoff`] values
//! consumed by a single [`AgentDispatcher`] that owns the active-state slot.

pub mod customer_service;
pub mod dispatcher;
pub mod handoff;
pub mod intake;
pub mod parental_consent;

pub use customer_service::CustomerServiceAgent;
pub use dispatcher::{AgentDispatcher, AgentUpdate};
pub use handoff::{AgentKind, Handoff};
pub use intake::IntakeAgent;
pub use parental_consent::ParentalConsentAgent;
