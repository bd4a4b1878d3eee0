use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Number of the physical card handed to a member.
/// Any number from [CardNumber::UNASSIGNED] upwards means no card has been handed out.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
#[serde(transparent)]
pub struct CardNumber(u32);

impl CardNumber {
    pub const UNASSIGNED: CardNumber = CardNumber(999);
    /// Card numbers are written on 4 digits at most.
    pub const MAX: CardNumber = CardNumber(9999);

    pub fn new(number: u32) -> Self {
        Self(number)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// The card number, if a physical card has been assigned.
    pub fn assigned(&self) -> Option<u32> {
        if *self < Self::UNASSIGNED {
            Some(self.0)
        } else {
            None
        }
    }
}

impl Default for CardNumber {
    fn default() -> Self {
        Self::UNASSIGNED
    }
}

impl From<u32> for CardNumber {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl Display for CardNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use crate::card_number::CardNumber;
    use parameterized::{ide, parameterized};

    ide!();

    #[parameterized(
        number = {0, 5, 998, 999, 1000, 9999},
        expected_result = {Some(0), Some(5), Some(998), None, None, None}
    )]
    fn should_get_assigned_number(number: u32, expected_result: Option<u32>) {
        assert_eq!(expected_result, CardNumber::new(number).assigned());
    }

    #[test]
    fn should_be_unassigned_by_default() {
        assert_eq!(CardNumber::UNASSIGNED, CardNumber::default());
        assert_eq!(None, CardNumber::default().assigned());
    }

    #[test]
    fn should_display_raw_number() {
        assert_eq!("999", CardNumber::default().to_string());
        assert_eq!("42", CardNumber::new(42).to_string());
    }
}
