//! The extension pack itself: noise blocks and OSC bridge blocks.
//!
//! Both extensions implement [`chisel_ext::Extension`]; a host registers
//! them via `info()` and dispatches block runs to `execute()`.

mod icon;
mod noise;
mod osc;

pub use noise::NoiseExtension;
pub use osc::OscExtension;
