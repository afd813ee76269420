//! Wire format of the OSC relay collaborator.
//!
//! The relay speaks comma-separated text frames over a single WebSocket:
//!
//! - `r_port,<port>` / `s_port,<port>` reconfigure the relay's UDP ports;
//! - `<address>,<value>` pushes one OSC value out;
//! - inbound frames are flat `address,value[,address,value...]` lists of the
//!   values the relay most recently received.

/// A frame sent from the client to the relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayCommand {
    /// Point the relay's OSC receive socket at the given port.
    ReceivePort(u16),
    /// Point the relay's OSC send socket at the given port.
    SendPort(u16),
    /// Push one value to the given OSC address.
    Send {
        /// Slash-delimited OSC address path.
        address: String,
        /// Payload, already stringified by the cast layer.
        value: String,
    },
}

impl RelayCommand {
    /// Encode the frame as relay wire text.
    #[must_use]
    pub fn encode(&self) -> String {
        match self {
            Self::ReceivePort(port) => format!("r_port,{port}"),
            Self::SendPort(port) => format!("s_port,{port}"),
            Self::Send { address, value } => format!("{address},{value}"),
        }
    }
}

/// The address/value pairs carried by one inbound relay frame.
///
/// Only the most recent frame matters to the polling block, so this is a
/// snapshot type: cheap to clone, queried by address.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueBatch {
    pairs: Vec<(String, String)>,
}

impl ValueBatch {
    /// Parse a flat `address,value[,address,value...]` frame.
    ///
    /// A trailing field without a partner (malformed frame) is dropped.
    #[must_use]
    pub fn parse(frame: &str) -> Self {
        let mut pairs = Vec::new();
        let mut fields = frame.split(',');
        while let (Some(address), Some(value)) = (fields.next(), fields.next()) {
            pairs.push((address.to_string(), value.to_string()));
        }
        Self { pairs }
    }

    /// The value paired with `address`, if the frame carried one.
    ///
    /// When an address repeats within a frame the first pair wins.
    #[must_use]
    pub fn lookup(&self, address: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(a, _)| a == address)
            .map(|(_, v)| v.as_str())
    }

    /// Whether the frame carried no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
