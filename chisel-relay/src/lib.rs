//! OSC relay wire protocol and WebSocket client.
//!
//! The relay is an external collaborator process that forwards OSC messages
//! to and from a pair of UDP ports. Block code never touches the socket
//! directly; it goes through the [`PortRelay`] capability trait, so tests
//! can substitute a recording stub for the live connection.

mod client;
mod protocol;

pub use client::{RelayClient, RelayConfig, RelayError};
pub use protocol::{RelayCommand, ValueBatch};

/// Capability seam between extension blocks and the relay connection.
///
/// All methods are fire-and-forget from the caller's perspective: block
/// execution is synchronous and must not block on the socket.
pub trait PortRelay: Send + Sync {
    /// Re-point the relay's OSC receive socket.
    fn set_receive_port(&self, port: u16);

    /// Re-point the relay's OSC send socket.
    fn set_send_port(&self, port: u16);

    /// Push one value to an OSC address.
    fn push(&self, address: &str, value: &str);

    /// Snapshot of the most recent inbound frame.
    fn latest(&self) -> ValueBatch;
}
