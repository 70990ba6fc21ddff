//! Mozilla Root Store Policy.

use crate::lint::LintDescriptor;
use crate::registry::{RegistryBuilder, RegistryError};

mod ecdsa_pub_key;
mod ecdsa_signature;

pub(super) fn register(builder: &mut RegistryBuilder) -> Result<(), RegistryError> {
    builder
        .register(LintDescriptor::new(
            ecdsa_pub_key::META,
            ecdsa_pub_key::EcdsaPubKeyEncoding,
        ))?
        .register(LintDescriptor::new(
            ecdsa_signature::META,
            ecdsa_signature::EcdsaSignatureEncoding,
        ))?;
    Ok(())
}
