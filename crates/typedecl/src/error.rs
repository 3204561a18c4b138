//! Errors raised by registration and synthesis

use thiserror::Error;

use crate::ty::{ClassId, Primitive, TemplateId};

/// Errors that can occur while registering names or synthesizing declarations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DeclError {
    /// Synthesis reached a primitive with no registered spelling
    #[error("unregistered primitive type: {0:?}")]
    UnregisteredPrimitive(Primitive),

    /// Synthesis reached a class with no registered name
    #[error("unregistered class: {0}")]
    UnregisteredClass(ClassId),

    /// Synthesis reached a template with no registered name
    #[error("unregistered template: {0}")]
    UnregisteredTemplate(TemplateId),

    /// The same identity was registered twice with different names
    #[error("conflicting registration for {key}: already registered as \"{existing}\", cannot register as \"{requested}\"")]
    ConflictingRegistration {
        /// The identity being registered
        key: String,
        /// The name already on record
        existing: String,
        /// The name the second registration asked for
        requested: String,
    },
}
