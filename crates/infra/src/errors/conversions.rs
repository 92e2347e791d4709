//! Conversions from external infrastructure errors into domain errors.

use std::io::{Error as IoError, ErrorKind};

use menuslot_domain::MenuSlotError;
use serde_json::Error as JsonError;
use toml::de::Error as TomlError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub MenuSlotError);

impl From<InfraError> for MenuSlotError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<MenuSlotError> for InfraError {
    fn from(value: MenuSlotError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoMenuSlotError {
    fn into_menuslot(self) -> MenuSlotError;
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → MenuSlotError */
/* -------------------------------------------------------------------------- */

impl IntoMenuSlotError for IoError {
    fn into_menuslot(self) -> MenuSlotError {
        match self.kind() {
            ErrorKind::NotFound => MenuSlotError::NotFound(format!("rule source not found: {self}")),
            ErrorKind::PermissionDenied => {
                MenuSlotError::Repository(format!("rule source not readable: {self}"))
            }
            ErrorKind::InvalidData => {
                MenuSlotError::Repository(format!("rule source is not valid UTF-8: {self}"))
            }
            _ => MenuSlotError::Repository(format!("rule source I/O failure: {self}")),
        }
    }
}

impl From<IoError> for InfraError {
    fn from(value: IoError) -> Self {
        InfraError(value.into_menuslot())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → MenuSlotError */
/* -------------------------------------------------------------------------- */

impl IntoMenuSlotError for JsonError {
    fn into_menuslot(self) -> MenuSlotError {
        use serde_json::error::Category;

        match self.classify() {
            Category::Io => MenuSlotError::Repository(format!("failed to read JSON: {self}")),
            Category::Syntax | Category::Eof => {
                MenuSlotError::Repository(format!("malformed JSON rule document: {self}"))
            }
            Category::Data => {
                MenuSlotError::InvalidInput(format!("invalid rule record: {self}"))
            }
        }
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        InfraError(value.into_menuslot())
    }
}

/* -------------------------------------------------------------------------- */
/* toml::de::Error → MenuSlotError */
/* -------------------------------------------------------------------------- */

impl IntoMenuSlotError for TomlError {
    fn into_menuslot(self) -> MenuSlotError {
        MenuSlotError::InvalidInput(format!("invalid TOML rule document: {}", self.message()))
    }
}

impl From<TomlError> for InfraError {
    fn from(value: TomlError) -> Self {
        InfraError(value.into_menuslot())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
