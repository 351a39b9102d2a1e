/// Resolved activation state of a runtime instance. An instance is
/// undetermined only until [`InstanceSelector::should_start`] resolves;
/// the value it returns is terminal.
///
/// [`InstanceSelector::should_start`]: crate::selector::InstanceSelector::should_start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstanceState {
    Active,
    Inactive,
}

/// The identity of one running copy of the runtime, among possibly
/// several co-installed variants.
///
/// Constructed once at process start by the selector and passed by
/// reference to dependents; there is no ambient "active" global.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeInstance {
    origin: String,
    state: InstanceState,
}

impl RuntimeInstance {
    pub(crate) fn active(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            state: InstanceState::Active,
        }
    }

    pub(crate) fn inactive(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            state: InstanceState::Inactive,
        }
    }

    /// The variant hosting this instance.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn state(&self) -> InstanceState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == InstanceState::Active
    }
}
