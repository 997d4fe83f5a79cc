// ABOUTME: Type definitions for settings values
// ABOUTME: Tri-state boolean for settings the user has not decided yet

/// A boolean setting that can also be undecided.
///
/// Kept as its own type so "the user never answered" cannot be silently
/// read as `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tristate {
    /// No decision recorded
    #[default]
    Unset,
    True,
    False,
}

impl Tristate {
    /// `None` when unset, otherwise the decided value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Tristate::Unset => None,
            Tristate::True => Some(true),
            Tristate::False => Some(false),
        }
    }
}

impl From<bool> for Tristate {
    fn from(value: bool) -> Self {
        if value {
            Tristate::True
        } else {
            Tristate::False
        }
    }
}

impl From<Option<bool>> for Tristate {
    fn from(value: Option<bool>) -> Self {
        value.map_or(Tristate::Unset, Tristate::from)
    }
}

impl From<Tristate> for Option<bool> {
    fn from(value: Tristate) -> Self {
        value.as_bool()
    }
}
