//! RFC 5280 and its algorithm companions (RFC 3279, RFC 4055, RFC 6818).

use crate::lint::LintDescriptor;
use crate::registry::{RegistryBuilder, RegistryError};

mod explicit_text;
mod rsa_params;

pub(super) fn register(builder: &mut RegistryBuilder) -> Result<(), RegistryError> {
    builder
        .register(LintDescriptor::new(
            rsa_params::SPKI_META,
            rsa_params::SpkiRsaEncryptionNull,
        ))?
        .register(LintDescriptor::new(
            rsa_params::TBS_SIGNATURE_META,
            rsa_params::TbsSignatureRsaNull,
        ))?
        .register(LintDescriptor::new(
            explicit_text::META,
            explicit_text::ExplicitTextNotUtf8,
        ))?;
    Ok(())
}
