//! ETSI ESI qualified-certificate profiles (EN 319 412-1, EN 319 412-5, TS 119 495).

use crate::lint::LintDescriptor;
use crate::registry::{RegistryBuilder, RegistryError};

mod orgid;
mod psd2_ncaid;
mod qclimitvalue;
mod qcsscd;
mod qctype;

pub(super) fn register(builder: &mut RegistryBuilder) -> Result<(), RegistryError> {
    builder
        .register(LintDescriptor::new(orgid::META, orgid::EvOrgIdEtsi))?
        .register(LintDescriptor::new(qcsscd::META, qcsscd::QcSscdValid))?
        .register(LintDescriptor::new(qctype::VALID_META, qctype::QcTypeValid))?
        .register(LintDescriptor::new(qctype::WEB_META, qctype::QcTypeWeb))?
        .register(LintDescriptor::new(
            qclimitvalue::META,
            qclimitvalue::QcLimitValueValid,
        ))?
        .register(LintDescriptor::new(psd2_ncaid::META, psd2_ncaid::Psd2NcaIdFormat))?;
    Ok(())
}
