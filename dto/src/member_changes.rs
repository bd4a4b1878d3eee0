use crate::card_number::CardNumber;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const NAME_MAX_LENGTH: usize = 255;
const EMAIL_MAX_LENGTH: usize = 255;
const ADDRESS_MAX_LENGTH: usize = 255;
const PHONE_NUMBER_MAX_LENGTH: usize = 25;

#[derive(Debug, Error, PartialEq)]
pub enum InvalidMemberError {
    #[error("The field is required [field: {0}]")]
    MissingField(&'static str),
    #[error("The field is too long [field: {0}, max length: {1}]")]
    TooLong(&'static str, usize),
    #[error("The email address is malformed [email: {0}]")]
    MalformedEmail(String),
    #[error("The card number has more than 4 digits [card number: {0}]")]
    CardNumberTooLarge(CardNumber),
}

/// Values submitted when creating or editing a member.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Clone)]
pub struct MemberChanges {
    first_name: String,
    last_name: String,
    #[serde(default)]
    current_membership: bool,
    #[serde(default)]
    card_number: CardNumber,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    address: Option<String>,
    #[serde(default)]
    phone_number: Option<String>,
}

impl MemberChanges {
    pub fn new(
        first_name: String,
        last_name: String,
        current_membership: bool,
        card_number: CardNumber,
        email: Option<String>,
        address: Option<String>,
        phone_number: Option<String>,
    ) -> Self {
        Self {
            first_name,
            last_name,
            current_membership,
            card_number,
            email,
            address,
            phone_number,
        }
    }

    /// Blank optional values are stored as missing ones.
    pub fn normalized(self) -> Self {
        Self {
            first_name: self.first_name.trim().to_owned(),
            last_name: self.last_name.trim().to_owned(),
            email: blank_to_none(self.email),
            address: blank_to_none(self.address),
            phone_number: blank_to_none(self.phone_number),
            ..self
        }
    }

    pub fn validate(&self) -> Result<(), InvalidMemberError> {
        check_required("first_name", &self.first_name)?;
        check_required("last_name", &self.last_name)?;
        check_length("first_name", &self.first_name, NAME_MAX_LENGTH)?;
        check_length("last_name", &self.last_name, NAME_MAX_LENGTH)?;
        if let Some(email) = &self.email {
            check_length("email", email, EMAIL_MAX_LENGTH)?;
            if !is_email_like(email) {
                return Err(InvalidMemberError::MalformedEmail(email.clone()));
            }
        }
        if let Some(address) = &self.address {
            check_length("address", address, ADDRESS_MAX_LENGTH)?;
        }
        if let Some(phone_number) = &self.phone_number {
            check_length("phone_number", phone_number, PHONE_NUMBER_MAX_LENGTH)?;
        }
        if self.card_number > CardNumber::MAX {
            return Err(InvalidMemberError::CardNumberTooLarge(self.card_number));
        }

        Ok(())
    }
}

fn blank_to_none(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

fn check_required(field: &'static str, value: &str) -> Result<(), InvalidMemberError> {
    if value.trim().is_empty() {
        Err(InvalidMemberError::MissingField(field))
    } else {
        Ok(())
    }
}

fn check_length(field: &'static str, value: &str, max: usize) -> Result<(), InvalidMemberError> {
    if value.chars().count() > max {
        Err(InvalidMemberError::TooLong(field, max))
    } else {
        Ok(())
    }
}

fn is_email_like(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.contains('@'),
        None => false,
    }
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;
    use parameterized::{ide, parameterized};

    ide!();

    pub fn jane_doe_changes() -> MemberChanges {
        MemberChanges::new(
            "Jane".to_owned(),
            "Doe".to_owned(),
            true,
            CardNumber::new(5),
            Some("jane.doe@email.com".to_owned()),
            Some("1 Main Street".to_owned()),
            Some("+33 6 12 34 56 78".to_owned()),
        )
    }

    #[test]
    fn should_validate_member() {
        assert_eq!(Ok(()), jane_doe_changes().validate());
    }

    #[parameterized(
        first_name = {"", "  ", "Jane", "Jane"},
        last_name = {"Doe", "Doe", "", " "},
        expected_field = {"first_name", "first_name", "last_name", "last_name"}
    )]
    fn should_reject_missing_names(
        first_name: &str,
        last_name: &str,
        expected_field: &'static str,
    ) {
        let changes = MemberChanges {
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
            ..jane_doe_changes()
        };
        assert_eq!(
            Err(InvalidMemberError::MissingField(expected_field)),
            changes.validate()
        );
    }

    #[parameterized(
        email = {"jane.doe", "@email.com", "jane@email", "jane@doe@email.com"}
    )]
    fn should_reject_malformed_email(email: &str) {
        let changes = MemberChanges {
            email: Some(email.to_owned()),
            ..jane_doe_changes()
        };
        assert_eq!(
            Err(InvalidMemberError::MalformedEmail(email.to_owned())),
            changes.validate()
        );
    }

    #[test]
    fn should_reject_too_long_phone_number() {
        let changes = MemberChanges {
            phone_number: Some("0".repeat(26)),
            ..jane_doe_changes()
        };
        assert_eq!(
            Err(InvalidMemberError::TooLong("phone_number", 25)),
            changes.validate()
        );
    }

    #[test]
    fn should_reject_card_number_with_5_digits() {
        let changes = MemberChanges {
            card_number: CardNumber::new(10000),
            ..jane_doe_changes()
        };
        assert_eq!(
            Err(InvalidMemberError::CardNumberTooLarge(CardNumber::new(10000))),
            changes.validate()
        );
    }

    #[test]
    fn should_normalize_blank_values() {
        let changes = MemberChanges {
            first_name: " Jane ".to_owned(),
            email: Some("  ".to_owned()),
            address: Some("".to_owned()),
            phone_number: None,
            ..jane_doe_changes()
        }
        .normalized();

        assert_eq!("Jane", changes.first_name());
        assert_eq!(&None, changes.email());
        assert_eq!(&None, changes.address());
        assert_eq!(&None, changes.phone_number());
    }
}
