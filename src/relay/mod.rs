//! Trigger relays.
//!
//! Stateless adapters between a renderer's input events and the
//! [`SelectionActions`](crate::SelectionActions) of a selection:
//! - [`BulkSelectButton`]: per-row checkbox, selects or deselects one item
//! - [`BulkToggleButton`]: "select all" control, applies one state to every item

mod bulk_select;
mod bulk_toggle;

pub use bulk_select::BulkSelectButton;
pub use bulk_toggle::BulkToggleButton;

/// A checkbox interaction as delivered by the host.
pub trait CheckInteraction {
    /// State of the checkbox after the interaction.
    fn is_checked(&self) -> bool;

    /// Keep the event from reaching enclosing elements.
    fn stop_propagation(&mut self);

    /// Cancel the host's default handling of the event.
    fn prevent_default(&mut self);
}

/// Plain [`CheckInteraction`] that records what was suppressed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckboxEvent {
    pub checked: bool,
    pub propagation_stopped: bool,
    pub default_prevented: bool,
}

impl CheckboxEvent {
    pub fn new(checked: bool) -> Self {
        Self {
            checked,
            ..Self::default()
        }
    }
}

impl CheckInteraction for CheckboxEvent {
    fn is_checked(&self) -> bool {
        self.checked
    }

    fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    fn prevent_default(&mut self) {
        self.default_prevented = true;
    }
}

/// How much of a checkbox event a relay swallows.
///
/// Hosts differ in whether the raw click must be suppressed, so this is
/// chosen per relay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suppression {
    /// Stop the event from bubbling to enclosing elements.
    pub stop_propagation: bool,
    /// Cancel the host's default action.
    pub prevent_default: bool,
}

impl Suppression {
    /// Leave the event untouched.
    pub const NONE: Self = Self {
        stop_propagation: false,
        prevent_default: false,
    };

    /// Stop bubbling only.
    pub const STOP_PROPAGATION: Self = Self {
        stop_propagation: true,
        prevent_default: false,
    };

    /// Cancel the default action only.
    pub const PREVENT_DEFAULT: Self = Self {
        stop_propagation: false,
        prevent_default: true,
    };

    /// Stop bubbling and cancel the default action.
    pub const ALL: Self = Self {
        stop_propagation: true,
        prevent_default: true,
    };

    pub fn with_stop_propagation(mut self) -> Self {
        self.stop_propagation = true;
        self
    }

    pub fn with_prevent_default(mut self) -> Self {
        self.prevent_default = true;
        self
    }

    pub(crate) fn apply<E: CheckInteraction + ?Sized>(&self, event: &mut E) {
        if self.stop_propagation {
            event.stop_propagation();
        }
        if self.prevent_default {
            event.prevent_default();
        }
    }
}

impl Default for Suppression {
    fn default() -> Self {
        Self::STOP_PROPAGATION
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suppression_applies_requested_flags() {
        let mut event = CheckboxEvent::new(true);
        Suppression::NONE.apply(&mut event);
        assert_eq!(event, CheckboxEvent::new(true));

        Suppression::default().apply(&mut event);
        assert!(event.propagation_stopped);
        assert!(!event.default_prevented);

        let mut event = CheckboxEvent::new(false);
        Suppression::NONE.with_prevent_default().apply(&mut event);
        assert!(event.default_prevented);
        assert!(!event.propagation_stopped);
    }
}
