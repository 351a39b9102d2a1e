use serde::{Deserialize, Serialize};

use castway_core::codec;
use castway_core::{Payload, RouteMessage};

use crate::error::TransportError;

/// Wire form of a route message for channels that cannot carry raw
/// bytes. The `kind` tag preserves the text/binary distinction across
/// the hop; binary payloads use the URL-safe alphabet because envelopes
/// may end up embedded in URLs.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum Envelope {
    Text { route_id: String, data: String },
    Binary { route_id: String, data: String },
}

/// Serialize a route message into its text envelope.
pub fn seal(message: &RouteMessage) -> Result<String, TransportError> {
    let envelope = match message.payload() {
        Payload::Text(text) => Envelope::Text {
            route_id: message.route_id().to_string(),
            data: text.clone(),
        },
        Payload::Binary(bytes) => Envelope::Binary {
            route_id: message.route_id().to_string(),
            data: codec::encode(bytes, true),
        },
    };
    Ok(serde_json::to_string(&envelope)?)
}

/// Reconstruct a route message from its text envelope, restoring the
/// original payload variant.
pub fn open(text: &str) -> Result<RouteMessage, TransportError> {
    let envelope: Envelope = serde_json::from_str(text)?;
    match envelope {
        Envelope::Text { route_id, data } => Ok(RouteMessage::text(route_id, data)),
        Envelope::Binary { route_id, data } => {
            let bytes = codec::decode(&data)?;
            Ok(RouteMessage::binary(route_id, bytes))
        }
    }
}
