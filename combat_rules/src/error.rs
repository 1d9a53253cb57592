//! Validation errors raised by the rules layer.
//!
//! Anticipated failures such as running out of mana or a full inventory are not
//! errors; those are reported through `bool` and `Option` return values.

/// Errors raised when a caller supplies a value the rules cannot accept.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RulesError {
    /// A delta (damage, healing, mana, arrows) was negative.
    #[error("{what} cannot be negative (got {value})")]
    NegativeAmount {
        /// Which quantity was being changed.
        what: &'static str,
        value: i32,
    },

    /// Armor must stay a percentage.
    #[error("armor must be between 0 and {max} (got {value})")]
    ArmorOutOfRange { value: i32, max: i32 },

    /// Names must contain at least one non-whitespace character.
    #[error("name cannot be empty")]
    EmptyName,
}

/// Convenience alias for results in this crate.
pub type RulesResult<T> = Result<T, RulesError>;

impl RulesError {
    /// Reject `value` if it is negative.
    pub(crate) fn check_non_negative(what: &'static str, value: i32) -> RulesResult<i32> {
        if value < 0 {
            Err(RulesError::NegativeAmount { what, value })
        } else {
            Ok(value)
        }
    }

    /// Reject `name` if it is blank.
    pub(crate) fn check_name(name: String) -> RulesResult<String> {
        if name.trim().is_empty() {
            Err(RulesError::EmptyName)
        } else {
            Ok(name)
        }
    }
}
