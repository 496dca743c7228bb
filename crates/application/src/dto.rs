//! Input data for the use cases, as raw unvalidated strings

use std::fmt;

use domain::masking::{mask_cpf, mask_email, mask_phone};

/// Raw registration input
#[derive(Clone, PartialEq, Eq)]
pub struct CreateCustomerDto {
    pub name: String,
    pub cpf: String,
    pub email: String,
    pub phone: String,
}

impl CreateCustomerDto {
    pub fn new(
        name: impl Into<String>,
        cpf: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            cpf: cpf.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }
}

impl fmt::Debug for CreateCustomerDto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateCustomerDto")
            .field("name", &self.name)
            .field("cpf", &mask_cpf(&self.cpf))
            .field("email", &mask_email(&self.email))
            .field("phone", &mask_phone(&self.phone))
            .finish()
    }
}
