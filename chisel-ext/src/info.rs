//! Block metadata the host ingests when an extension registers.
//!
//! The shapes mirror the registration payload of the block runtime's
//! `getInfo` contract: an extension id, icons, a list of block specs with
//! typed arguments, and named menus for dropdown arguments.

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::value::Value;

/// How a block participates in a script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockType {
    /// Executes for its side effect and reports nothing.
    Command,
    /// Reports a value into the surrounding expression.
    Reporter,
}

/// The declared type of a block argument slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArgumentType {
    /// Coerced to `f64` before execution.
    Number,
    /// Passed through as text.
    String,
}

/// One argument slot of a block.
#[derive(Debug, Clone, Serialize)]
pub struct ArgumentSpec {
    /// Declared argument type.
    #[serde(rename = "type")]
    pub arg_type: ArgumentType,
    /// Value used when the user leaves the slot untouched.
    #[serde(rename = "defaultValue")]
    pub default: Value,
    /// Name of the menu backing this slot, if it is a dropdown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu: Option<String>,
}

/// One entry of a dropdown menu.
#[derive(Debug, Clone, Serialize)]
pub struct MenuItem {
    /// Value delivered to the block when selected.
    pub value: String,
    /// Label shown to the user.
    pub text: String,
}

impl MenuItem {
    /// Menu item whose label equals its value.
    #[must_use]
    pub fn plain(value: &str) -> Self {
        Self {
            value: value.to_string(),
            text: value.to_string(),
        }
    }
}

/// Metadata for a single block.
#[derive(Debug, Clone, Serialize)]
pub struct BlockSpec {
    /// Opcode the host dispatches on.
    pub opcode: String,
    /// Command or reporter.
    #[serde(rename = "blockType")]
    pub block_type: BlockType,
    /// Display text with `[NAME]` argument placeholders.
    pub text: String,
    /// Argument slots keyed by placeholder name.
    pub arguments: FxHashMap<String, ArgumentSpec>,
}

impl BlockSpec {
    /// A reporter block with no arguments yet.
    #[must_use]
    pub fn reporter(opcode: &str, text: &str) -> Self {
        Self::new(opcode, BlockType::Reporter, text)
    }

    /// A command block with no arguments yet.
    #[must_use]
    pub fn command(opcode: &str, text: &str) -> Self {
        Self::new(opcode, BlockType::Command, text)
    }

    fn new(opcode: &str, block_type: BlockType, text: &str) -> Self {
        Self {
            opcode: opcode.to_string(),
            block_type,
            text: text.to_string(),
            arguments: FxHashMap::default(),
        }
    }

    /// Add a numeric argument slot.
    #[must_use]
    pub fn number_arg(mut self, name: &str, default: f64) -> Self {
        self.arguments.insert(
            name.to_string(),
            ArgumentSpec {
                arg_type: ArgumentType::Number,
                default: Value::Number(default),
                menu: None,
            },
        );
        self
    }

    /// Add a text argument slot.
    #[must_use]
    pub fn string_arg(mut self, name: &str, default: &str) -> Self {
        self.arguments.insert(
            name.to_string(),
            ArgumentSpec {
                arg_type: ArgumentType::String,
                default: Value::Text(default.to_string()),
                menu: None,
            },
        );
        self
    }

    /// Add a dropdown argument slot backed by the named menu.
    #[must_use]
    pub fn menu_arg(mut self, name: &str, menu: &str, default: &str) -> Self {
        self.arguments.insert(
            name.to_string(),
            ArgumentSpec {
                arg_type: ArgumentType::String,
                default: Value::Text(default.to_string()),
                menu: Some(menu.to_string()),
            },
        );
        self
    }
}

/// Registration payload for a whole extension.
#[derive(Debug, Clone, Serialize)]
pub struct ExtensionInfo {
    /// Stable extension id.
    pub id: String,
    /// Display name in the block palette.
    pub name: String,
    /// Data URI of the icon shown on each block.
    #[serde(rename = "blockIconURI")]
    pub block_icon_uri: String,
    /// Data URI of the icon shown in the category menu.
    #[serde(rename = "menuIconURI")]
    pub menu_icon_uri: String,
    /// The extension's blocks, in palette order.
    pub blocks: Vec<BlockSpec>,
    /// Dropdown menus keyed by name.
    #[serde(skip_serializing_if = "FxHashMap::is_empty")]
    pub menus: FxHashMap<String, Vec<MenuItem>>,
}
