//! Event types for communication between UI and core.
//!
//! The UI translates taps into [`Interaction`]s, which the
//! [`crate::SelectionController`] turns into [`SelectionEvent`]s for the
//! host. Outside-tap dismissal carries no payload and is reported
//! separately from selection.

/// A discrete user action on the picker.
///
/// Interactions flow **UI → Core**.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interaction {
    /// A character in a category was tapped.
    SelectCharacter(String),
    /// The clear button was tapped.
    Clear,
    /// The backdrop outside the picker was tapped.
    PressOutside,
}

/// The outcome of one selection interaction.
///
/// Events flow **Core → Host**, exactly one per interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent {
    /// The user picked this character.
    Character(String),
    /// The user cleared their selection.
    Cleared,
}

impl SelectionEvent {
    /// The picked character, or `None` for [`SelectionEvent::Cleared`].
    pub fn character(&self) -> Option<&str> {
        match self {
            Self::Character(c) => Some(c),
            Self::Cleared => None,
        }
    }
}
