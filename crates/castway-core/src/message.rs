/// Payload of a [`RouteMessage`]: exactly one of text or raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Text(String),
    Binary(Vec<u8>),
}

/// A message exchanged over a route, pairing the route identifier with a
/// text or binary payload.
///
/// Immutable after construction; equality is structural. Instances are
/// passed by value across the transport boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMessage {
    route_id: String,
    payload: Payload,
}

impl RouteMessage {
    pub fn text(route_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            route_id: route_id.into(),
            payload: Payload::Text(text.into()),
        }
    }

    pub fn binary(route_id: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            route_id: route_id.into(),
            payload: Payload::Binary(bytes.into()),
        }
    }

    pub fn route_id(&self) -> &str {
        &self.route_id
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// True iff the payload is raw bytes rather than text.
    pub fn is_binary(&self) -> bool {
        matches!(self.payload, Payload::Binary(_))
    }

    /// Character count of a text payload; 0 for binary.
    ///
    /// Counts characters, not bytes.
    pub fn string_len(&self) -> usize {
        match &self.payload {
            Payload::Text(text) => text.chars().count(),
            Payload::Binary(_) => 0,
        }
    }
}
