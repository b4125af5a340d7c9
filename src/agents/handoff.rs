//! Agent state identifiers and the explicit handoff result.

use strum::{Display, EnumString};

/// The three conversational personas. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum AgentKind {
    Intake,
    ParentalConsent,
    CustomerService,
}

/// Result of a transition-evaluating update operation.
///
/// A transition replaces the active state; the prior state is discarded, not
/// stacked. The dispatcher is the only consumer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handoff {
    /// Keep the current state active.
    Stay,
    /// Replace the active state.
    To(AgentKind),
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn agent_kind_round_trips_through_strings() {
        assert_eq!(AgentKind::Intake.to_string(), "intake");
        assert_eq!(
            AgentKind::ParentalConsent.to_string(),
            "parental_consent"
        );
        assert_eq!(
            AgentKind::from_str("customer_service").unwrap(),
            AgentKind::CustomerService
        );
    }
}
