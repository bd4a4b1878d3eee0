use crate::card_number::CardNumber;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// A [Member] is a membership entry as it is stored.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct Member {
    id: i32,
    first_name: String,
    last_name: String,
    current_membership: bool,
    card_number: CardNumber,
    email: Option<String>,
    address: Option<String>,
    phone_number: Option<String>,
}

impl Member {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i32,
        first_name: String,
        last_name: String,
        current_membership: bool,
        card_number: CardNumber,
        email: Option<String>,
        address: Option<String>,
        phone_number: Option<String>,
    ) -> Self {
        Self {
            id,
            first_name,
            last_name,
            current_membership,
            card_number,
            email,
            address,
            phone_number,
        }
    }

    /// First name and last name, as they have been typed.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Members are displayed as `First Last`, in title case.
impl Display for Member {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", title_case(&self.full_name()))
    }
}

/// Uppercase the first letter of each word, lowercase the others.
/// A word starts after any character which is not a letter.
fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut previous_is_letter = false;
    for c in text.chars() {
        if previous_is_letter {
            result.extend(c.to_lowercase());
        } else {
            result.extend(c.to_uppercase());
        }
        previous_is_letter = c.is_alphabetic();
    }

    result
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;
    use parameterized::{ide, parameterized};

    ide!();

    pub fn jane_doe() -> Member {
        Member {
            id: 1,
            first_name: "Jane".to_owned(),
            last_name: "Doe".to_owned(),
            current_membership: true,
            card_number: CardNumber::new(5),
            email: Some("jane.doe@email.com".to_owned()),
            address: Some("1 Main Street".to_owned()),
            phone_number: Some("+33 6 12 34 56 78".to_owned()),
        }
    }

    pub fn bob_roe() -> Member {
        Member {
            id: 2,
            first_name: "Bob".to_owned(),
            last_name: "Roe".to_owned(),
            current_membership: false,
            card_number: CardNumber::UNASSIGNED,
            email: None,
            address: None,
            phone_number: None,
        }
    }

    /// A member whose card has been suspended, as the membership isn't current anymore.
    pub fn jon_snow() -> Member {
        Member {
            id: 3,
            first_name: "Jon".to_owned(),
            last_name: "Snow".to_owned(),
            current_membership: false,
            card_number: CardNumber::new(42),
            email: Some("jon.snow@email.com".to_owned()),
            address: None,
            phone_number: None,
        }
    }

    #[test]
    fn should_get_full_name() {
        assert_eq!("Jane Doe", jane_doe().full_name());
    }

    #[parameterized(
        first_name = {"jane", "JANE", "mary-jane", "o'hara"},
        last_name = {"doe", "DOE", "van der berg", "scarlett"},
        expected_result = {"Jane Doe", "Jane Doe", "Mary-Jane Van Der Berg", "O'Hara Scarlett"}
    )]
    fn should_display_member_in_title_case(
        first_name: &str,
        last_name: &str,
        expected_result: &str,
    ) {
        let member = Member {
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
            ..jane_doe()
        };
        assert_eq!(expected_result, member.to_string());
    }
}
