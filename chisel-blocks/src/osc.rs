//! The OSC extension: value push and poll blocks bridged to the relay.

use std::sync::Arc;

use anyhow::anyhow;
use chisel_ext::{
    Arguments, BlockSpec, Extension, ExtensionError, ExtensionInfo, Value, svg_data_uri,
};
use chisel_relay::PortRelay;
use parking_lot::Mutex;
use rustc_hash::FxHashMap;

use crate::icon::ICON_SVG;

/// Default OSC receive port, matching the relay's startup configuration.
const DEFAULT_RECEIVE_PORT: u16 = 4444;
/// Default OSC send port, matching the relay's startup configuration.
const DEFAULT_SEND_PORT: u16 = 4445;

/// The ports the extension last announced to the relay.
#[derive(Debug, Clone, Copy)]
struct PortState {
    receive: u16,
    send: u16,
}

/// OSC bridge blocks.
///
/// `oscReceive` polls the latest inbound relay frame for an address;
/// `oscSender` pushes a value out. A port argument is only re-announced to
/// the relay when it differs from the last announced value, so scripts that
/// poll in a tight loop do not flood the relay with reconfigurations.
pub struct OscExtension {
    relay: Arc<dyn PortRelay>,
    ports: Mutex<PortState>,
}

impl OscExtension {
    /// Create the extension on top of an established relay connection.
    pub fn new(relay: Arc<dyn PortRelay>) -> Self {
        Self {
            relay,
            ports: Mutex::new(PortState {
                receive: DEFAULT_RECEIVE_PORT,
                send: DEFAULT_SEND_PORT,
            }),
        }
    }

    fn port_argument(args: &Arguments) -> Result<u16, ExtensionError> {
        let raw = args.number("PORT")?;
        if raw.is_finite() && (1.0..=f64::from(u16::MAX)).contains(&raw) {
            Ok(raw as u16)
        } else {
            Err(ExtensionError::Other(anyhow!("OSC port {raw} out of range")))
        }
    }

    fn receive(&self, args: &Arguments) -> Result<Value, ExtensionError> {
        let port = Self::port_argument(args)?;
        {
            let mut ports = self.ports.lock();
            if ports.receive != port {
                self.relay.set_receive_port(port);
                ports.receive = port;
            }
        }

        let address = args.string("ADDRESS")?;
        match self.relay.latest().lookup(&address) {
            Some(value) => Ok(Value::Text(value.to_string())),
            None => Ok(Value::ZERO),
        }
    }

    fn send(&self, args: &Arguments) -> Result<Value, ExtensionError> {
        let port = Self::port_argument(args)?;
        {
            let mut ports = self.ports.lock();
            if ports.send != port {
                self.relay.set_send_port(port);
                ports.send = port;
            }
        }

        let address = args.string("ADDRESS")?;
        let value = args.string("VALUE")?;
        log::debug!("osc push {address} = {value}");
        self.relay.push(&address, &value);
        Ok(Value::ZERO)
    }
}

impl Extension for OscExtension {
    fn info(&self) -> ExtensionInfo {
        let icon = svg_data_uri(ICON_SVG);

        ExtensionInfo {
            id: "OSC".to_string(),
            name: "OSC".to_string(),
            block_icon_uri: icon.clone(),
            menu_icon_uri: icon,
            blocks: vec![
                BlockSpec::reporter("oscReceive", "OSCReceiver Port[PORT] Address[ADDRESS]")
                    .number_arg("PORT", f64::from(DEFAULT_RECEIVE_PORT))
                    .string_arg("ADDRESS", "/test"),
                BlockSpec::command(
                    "oscSender",
                    "OSCSender Port[PORT] Address[ADDRESS] Value[VALUE]",
                )
                .number_arg("PORT", f64::from(DEFAULT_SEND_PORT))
                .string_arg("ADDRESS", "/test")
                .string_arg("VALUE", "0"),
            ],
            menus: FxHashMap::default(),
        }
    }

    fn execute(&self, opcode: &str, args: &Arguments) -> Result<Value, ExtensionError> {
        match opcode {
            "oscReceive" => self.receive(args),
            "oscSender" => self.send(args),
            other => Err(ExtensionError::UnknownOpcode(other.to_string())),
        }
    }
}
