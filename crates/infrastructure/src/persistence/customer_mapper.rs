//! Conversion between the `Customer` entity and its stored row

use application::error::PersistenceError;
use domain::{Cpf, Customer, CustomerId, DomainError, Email, Name, Phone};

use super::CustomerRecord;

/// Flatten a customer into a row
pub fn to_record(customer: &Customer) -> CustomerRecord {
    CustomerRecord::new(
        customer.id().to_string(),
        customer.cpf().as_str(),
        customer.name().as_str(),
        customer.email().as_str(),
        customer.phone().as_str(),
    )
}

/// Rebuild a customer from a row
///
/// Every column goes back through its value-object rule; a row that no
/// longer satisfies one is reported as corrupt rather than trusted.
pub fn to_domain(record: CustomerRecord) -> Result<Customer, PersistenceError> {
    let corrupt = |e: DomainError| {
        PersistenceError::CorruptRecord(format!("customer {}: {e}", record.id))
    };

    let id = CustomerId::parse(&record.id).map_err(corrupt)?;
    let name = Name::new(record.name.as_str()).map_err(corrupt)?;
    let cpf = Cpf::new(record.cpf.as_str()).map_err(corrupt)?;
    let email = Email::new(record.email.as_str()).map_err(corrupt)?;
    let phone = Phone::new(record.phone.as_str()).map_err(corrupt)?;

    Ok(Customer::reconstitute(id, name, cpf, email, phone))
}
