//! Value Objects - Immutable, self-validating domain primitives

mod cpf;
mod customer_id;
mod email;
mod name;
mod phone;

pub use cpf::{CPF_LENGTH, Cpf};
pub use customer_id::CustomerId;
pub use email::Email;
pub use name::Name;
pub use phone::{PHONE_DIGITS, Phone};
