use serde::{Deserialize, Serialize};

pub type SinkId = String;
pub type ActivityId = String;

/// A discovered receiver device.
///
/// Owned by the discovery backend; consumers hold only the latest
/// reported snapshot per id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sink {
    pub id: SinkId,
    pub name: String,
    /// Reachability metadata reported by the backend. Shape is
    /// backend-defined.
    #[serde(default)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Sink {
    pub fn new(id: impl Into<SinkId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            extra: serde_json::Map::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityState {
    Launching,
    Active,
    Terminated,
}

/// An active casting session bound to one sink.
///
/// An activity always references a sink that was at some point reported
/// via the discovery callbacks; the sink may have since been removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: ActivityId,
    pub sink_id: SinkId,
    pub state: ActivityState,
}

impl Activity {
    pub fn new(id: impl Into<ActivityId>, sink_id: impl Into<SinkId>) -> Self {
        Self {
            id: id.into(),
            sink_id: sink_id.into(),
            state: ActivityState::Launching,
        }
    }

    pub fn with_state(mut self, state: ActivityState) -> Self {
        self.state = state;
        self
    }
}
