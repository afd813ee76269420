//! The trait extensions implement and the argument bundle blocks receive.

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::cast::{self, CastError};
use crate::info::ExtensionInfo;
use crate::value::Value;

/// An error surfaced to the host from a block invocation.
#[derive(Debug, Error)]
pub enum ExtensionError {
    /// An argument could not be coerced to the type the block needs.
    #[error(transparent)]
    Cast(#[from] CastError),
    /// The host asked for an argument the invocation did not carry.
    #[error("block argument {0} was not provided")]
    MissingArgument(String),
    /// The host dispatched an opcode this extension does not declare.
    #[error("unknown opcode {0}")]
    UnknownOpcode(String),
    /// Anything else a block failed on.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Named argument values for one block invocation.
///
/// This is the numeric/text argument source the host fills in (defaults
/// already applied) before dispatching to [`Extension::execute`]. The typed
/// getters run the cast layer, so extension code never sees raw values.
#[derive(Debug, Clone, Default)]
pub struct Arguments {
    values: FxHashMap<String, Value>,
}

impl Arguments {
    /// An empty argument bundle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an argument, replacing any previous value.
    #[must_use]
    pub fn with(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.values.insert(name.to_string(), value.into());
        self
    }

    /// Raw access to an argument value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// The argument coerced to a number.
    pub fn number(&self, name: &str) -> Result<f64, ExtensionError> {
        let value = self
            .get(name)
            .ok_or_else(|| ExtensionError::MissingArgument(name.to_string()))?;
        Ok(cast::to_number(value)?)
    }

    /// The argument coerced to text.
    pub fn string(&self, name: &str) -> Result<String, ExtensionError> {
        let value = self
            .get(name)
            .ok_or_else(|| ExtensionError::MissingArgument(name.to_string()))?;
        Ok(cast::to_string(value))
    }
}

/// A host-loaded block extension.
///
/// The host instantiates the extension once, calls [`Extension::info`] to
/// register its blocks, then calls [`Extension::execute`] per block run.
/// `execute` takes `&self`: extensions own their mutable state behind locks
/// because hosts may invoke blocks from more than one thread.
pub trait Extension: Send + Sync {
    /// Registration metadata for this extension.
    fn info(&self) -> ExtensionInfo;

    /// Run the block identified by `opcode` with the given arguments.
    fn execute(&self, opcode: &str, args: &Arguments) -> Result<Value, ExtensionError>;
}
