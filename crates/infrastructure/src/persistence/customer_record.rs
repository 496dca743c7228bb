//! Persisted representation of a customer

use std::{
    fmt,
    hash::{Hash, Hasher},
};

use domain::masking::{mask_cpf, mask_email, mask_phone};

/// One row of the `customers` table
///
/// Two records are the same record when they share an identifier, whatever
/// the other columns hold.
#[derive(Clone, sqlx::FromRow)]
pub struct CustomerRecord {
    pub id: String,
    pub cpf: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl CustomerRecord {
    pub fn new(
        id: impl Into<String>,
        cpf: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            cpf: cpf.into(),
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }
}

impl PartialEq for CustomerRecord {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for CustomerRecord {}

impl Hash for CustomerRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for CustomerRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomerRecord")
            .field("id", &self.id)
            .field("cpf", &mask_cpf(&self.cpf))
            .field("name", &self.name)
            .field("email", &mask_email(&self.email))
            .field("phone", &mask_phone(&self.phone))
            .finish()
    }
}
