//! Customer aggregate
//!
//! A customer can only be built from already-validated value objects, so an
//! instance is valid by construction. There are no mutators: a changed
//! customer is a new instance.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::value_objects::{Cpf, CustomerId, Email, Name, Phone};

/// A registered (or about to be registered) customer
///
/// Equality compares name, CPF, email and phone. The identifier is ignored,
/// so a freshly created customer equals its persisted counterpart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    id: CustomerId,
    name: Name,
    cpf: Cpf,
    email: Email,
    phone: Phone,
}

impl Customer {
    /// Create a new customer with a freshly generated identifier
    #[must_use]
    pub fn create(name: Name, cpf: Cpf, email: Email, phone: Phone) -> Self {
        Self::reconstitute(CustomerId::generate(), name, cpf, email, phone)
    }

    /// Rebuild a customer that already has an identity, e.g. from storage
    #[must_use]
    pub const fn reconstitute(
        id: CustomerId,
        name: Name,
        cpf: Cpf,
        email: Email,
        phone: Phone,
    ) -> Self {
        Self {
            id,
            name,
            cpf,
            email,
            phone,
        }
    }

    pub const fn id(&self) -> CustomerId {
        self.id
    }

    pub const fn name(&self) -> &Name {
        &self.name
    }

    pub const fn cpf(&self) -> &Cpf {
        &self.cpf
    }

    pub const fn email(&self) -> &Email {
        &self.email
    }

    pub const fn phone(&self) -> &Phone {
        &self.phone
    }
}

impl PartialEq for Customer {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.cpf == other.cpf
            && self.email == other.email
            && self.phone == other.phone
    }
}

impl Eq for Customer {}

impl Hash for Customer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.cpf.hash(state);
        self.email.hash(state);
        self.phone.hash(state);
    }
}
