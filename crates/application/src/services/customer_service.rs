//! Customer Service - registration and lookup use cases

use std::{fmt, sync::Arc};

use domain::{Cpf, Customer, DomainError, Email, Name, Phone, masking::mask_cpf};
use tracing::{debug, info, instrument, warn};

use crate::{dto::CreateCustomerDto, error::ApplicationError, ports::CustomerRepository};

/// Steps of the registration flow, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationStage {
    /// Building value objects from the raw input
    Validating,
    /// Asking the repository whether CPF, email or phone is taken
    CheckingConflict,
    /// Writing the new customer
    Persisting,
}

impl fmt::Display for RegistrationStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validating => write!(f, "validating"),
            Self::CheckingConflict => write!(f, "checking_conflict"),
            Self::Persisting => write!(f, "persisting"),
        }
    }
}

/// Service for registering and looking up customers
pub struct CustomerService {
    repository: Arc<dyn CustomerRepository>,
}

impl fmt::Debug for CustomerService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomerService").finish_non_exhaustive()
    }
}

impl CustomerService {
    /// Create a new customer service
    pub fn new(repository: Arc<dyn CustomerRepository>) -> Self {
        Self { repository }
    }

    /// Register a new customer
    ///
    /// Validation stops at the first invalid field (name, CPF, email, phone,
    /// in that order). A customer sharing the CPF, email or phone of an
    /// existing one is a conflict, whether the pre-flight check catches it or
    /// the storage constraint does.
    #[instrument(skip(self, input))]
    pub async fn register(&self, input: CreateCustomerDto) -> Result<Customer, ApplicationError> {
        debug!(stage = %RegistrationStage::Validating, "Registering customer");
        let name = Name::new(input.name)?;
        let cpf = Cpf::new(input.cpf)?;
        let email = Email::new(input.email)?;
        let phone = Phone::new(input.phone)?;

        debug!(
            stage = %RegistrationStage::CheckingConflict,
            cpf = %cpf.masked(),
            email = %email.masked(),
            phone = %phone.masked(),
            "Input validated"
        );
        let taken = self
            .repository
            .exists(cpf.as_str(), email.as_str(), phone.as_str())
            .await?;
        if taken {
            warn!(cpf = %cpf.masked(), "Customer already registered");
            return Err(ApplicationError::registration_conflict());
        }

        let customer = Customer::create(name, cpf, email, phone);
        debug!(
            stage = %RegistrationStage::Persisting,
            customer_id = %customer.id(),
            "No conflict found"
        );

        match self.repository.save(&customer).await {
            Ok(saved) => {
                info!(customer_id = %saved.id(), "Customer registered");
                Ok(saved)
            },
            Err(e) if e.is_unique_violation() => {
                warn!(
                    customer_id = %customer.id(),
                    error = %e,
                    "Storage rejected duplicate customer after pre-flight check"
                );
                Err(ApplicationError::registration_conflict())
            },
            Err(e) => Err(e),
        }
    }

    /// Find a customer by CPF
    ///
    /// A missing or blank CPF is a validation error; there is no
    /// "list everything" fallback.
    #[instrument(skip(self, cpf), fields(cpf = ?cpf.map(mask_cpf)))]
    pub async fn find_by_cpf(&self, cpf: Option<&str>) -> Result<Customer, ApplicationError> {
        let cpf = cpf
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(|| DomainError::missing_field("cpf"))?;

        let customer = self
            .repository
            .find_by_cpf(cpf)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Customer", mask_cpf(cpf)))?;

        debug!(customer_id = %customer.id(), "Customer found");
        Ok(customer)
    }
}
