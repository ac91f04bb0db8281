//! Errors raised by the sheet model
//!
//! Most sheet edits never fail: unparsable user input is coerced to a
//! documented fallback instead. `DomainError` covers the remaining cases,
//! where a caller hands the model something it cannot represent.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Input the sheet cannot act on, such as a malformed console command
    #[error("Validation failed: {0}")]
    Validation(String),

    /// No sheet entry answers to this id or position
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Text that names no ability, coin, class or id
    #[error("Parse error: {0}")]
    Parse(String),

    /// Identity fields are locked against edits
    #[error("Field is locked: {0}")]
    Locked(&'static str),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// `entity_type` is a short noun such as `"item"`.
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Used by the `FromStr` impls of `Ability`, `Coin`, `CharacterClass`
    /// and the id types.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    pub fn locked(field: &'static str) -> Self {
        Self::Locked(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message() {
        let err = DomainError::validation("item name cannot be empty");
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(err.to_string(), "Validation failed: item name cannot be empty");
    }

    #[test]
    fn not_found_names_the_entity() {
        let err = DomainError::not_found("item", "3");
        assert_eq!(err.to_string(), "Entity not found: item with id 3");
    }

    #[test]
    fn parse_message() {
        let err = DomainError::parse("Unknown class: Necromancer");
        assert_eq!(err.to_string(), "Parse error: Unknown class: Necromancer");
    }

    #[test]
    fn locked_names_the_field() {
        let err = DomainError::locked("name");
        assert_eq!(err, DomainError::Locked("name"));
        assert_eq!(err.to_string(), "Field is locked: name");
    }
}
