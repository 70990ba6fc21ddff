//! Built-in lint catalog.
//!
//! Each source family lives in its own feature-gated module and registers its lints
//! through [`register_all`]. Every lint is a unit struct plus a `LintMeta` constant.

use crate::registry::{Registry, RegistryBuilder, RegistryError};

#[cfg(feature = "lints-cabf-br")]
mod cabf_br;
#[cfg(feature = "lints-cabf-ev")]
mod cabf_ev;
#[cfg(feature = "lints-etsi")]
mod etsi;
#[cfg(feature = "lints-mozilla")]
mod mozilla;
#[cfg(feature = "lints-rfc")]
mod rfc;

#[cfg(any(feature = "lints-cabf-ev", feature = "lints-etsi"))]
mod util;


/// Register every compiled-in lint.
#[cfg_attr(
    not(any(
        feature = "lints-cabf-br",
        feature = "lints-cabf-ev",
        feature = "lints-etsi",
        feature = "lints-mozilla",
        feature = "lints-rfc"
    )),
    allow(unused_variables)
)]
pub fn register_all(builder: &mut RegistryBuilder) -> Result<(), RegistryError> {
    #[cfg(feature = "lints-cabf-br")]
    cabf_br::register(builder)?;
    #[cfg(feature = "lints-cabf-ev")]
    cabf_ev::register(builder)?;
    #[cfg(feature = "lints-etsi")]
    etsi::register(builder)?;
    #[cfg(feature = "lints-mozilla")]
    mozilla::register(builder)?;
    #[cfg(feature = "lints-rfc")]
    rfc::register(builder)?;
    Ok(())
}

/// The frozen registry holding the full built-in catalog.
pub fn builtin_registry() -> Result<Registry, RegistryError> {
    let mut builder = RegistryBuilder::new();
    register_all(&mut builder)?;
    Ok(builder.build())
}
