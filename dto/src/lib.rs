pub mod card_number;
pub mod member;
pub mod member_changes;
