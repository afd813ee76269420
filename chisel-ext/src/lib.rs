//! Extension-support layer for the block runtime.
//!
//! Everything a host-loaded extension needs to describe itself and receive
//! block invocations: registration metadata ([`ExtensionInfo`]), the
//! [`Extension`] trait, the dynamic [`Value`] type, and the cast layer that
//! coerces arguments before they reach extension internals.

pub mod cast;
mod extension;
mod icon;
mod info;
mod value;

pub use cast::CastError;
pub use extension::{Arguments, Extension, ExtensionError};
pub use icon::svg_data_uri;
pub use info::{ArgumentSpec, ArgumentType, BlockSpec, BlockType, ExtensionInfo, MenuItem};
pub use value::Value;
