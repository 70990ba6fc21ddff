//! CA/Browser Forum Baseline Requirements.

use crate::lint::LintDescriptor;
use crate::registry::{RegistryBuilder, RegistryError};

mod locality_name;
mod organizational_unit;
mod root_ca_key_usage;
mod sub_ca_eku;

pub(super) fn register(builder: &mut RegistryBuilder) -> Result<(), RegistryError> {
    builder
        .register(LintDescriptor::new(
            root_ca_key_usage::META,
            root_ca_key_usage::RootCaKeyUsageCritical,
        ))?
        .register(LintDescriptor::new(sub_ca_eku::META, sub_ca_eku::SubCaEkuMissing))?
        .register(LintDescriptor::new(
            locality_name::META,
            locality_name::SubCertLocalityName,
        ))?
        .register(LintDescriptor::new(
            organizational_unit::META,
            organizational_unit::SubjectOrganizationalUnit,
        ))?;
    Ok(())
}
