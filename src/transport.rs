use thiserror::Error;

use crate::{
    encoder::{WireDictionary, WIRE_PAYLOAD_LIMIT},
    info, DEBUG_NAME,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("payload of {size} bytes exceeds the {limit}-byte transport ceiling")]
    PayloadTooLarge { size: usize, limit: usize },
    #[error("transport rejected the message: {0}")]
    Rejected(String),
}

/// Delivery seam toward the watch. The host's async send-with-callbacks
/// collapses into one explicit success/failure branch per message; callers
/// sequence the locale message strictly behind a successful primary send.
pub trait MessageTransport {
    fn send(&mut self, message: &WireDictionary) -> Result<(), TransportError>;
}

/// Host-process transport: emits each message as one JSON line on stdout
/// for the surrounding companion runtime to forward. Enforces the payload
/// ceiling the real radio link imposes.
#[derive(Debug, Default)]
pub struct StdoutTransport;

impl StdoutTransport {
    pub fn new() -> Self {
        Self
    }
}

impl MessageTransport for StdoutTransport {
    fn send(&mut self, message: &WireDictionary) -> Result<(), TransportError> {
        let size = message.encoded_size();
        if size > WIRE_PAYLOAD_LIMIT {
            return Err(TransportError::PayloadTooLarge {
                size,
                limit: WIRE_PAYLOAD_LIMIT,
            });
        }

        let line = serde_json::to_string(message)
            .map_err(|e| TransportError::Rejected(e.to_string()))?;
        println!("{line}");

        info!(
            "[{}][SEND] Delivered {} entries ({size} bytes)",
            DEBUG_NAME,
            message.len()
        );
        Ok(())
    }
}
