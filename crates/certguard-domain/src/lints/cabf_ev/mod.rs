//! CA/Browser Forum EV Guidelines.

use crate::lint::LintDescriptor;
use crate::registry::{RegistryBuilder, RegistryError};

mod orgid;

pub(super) fn register(builder: &mut RegistryBuilder) -> Result<(), RegistryError> {
    builder.register(LintDescriptor::new(orgid::META, orgid::EvOrgId))?;
    Ok(())
}
