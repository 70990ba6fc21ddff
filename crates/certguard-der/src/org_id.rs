//! `subject:organizationIdentifier` syntax.
//!
//! Registration-reference form (EV Guidelines 9.2.8, ETSI EN 319 412-1 5.1.4):
//!
//! ```text
//! SSS CC [+SP] - reference      e.g. NTRGB-12345678, NTRUS+CA-C1234567, VATDE-123456789
//! ```
//!
//! The ETSI profile additionally allows the `LEI` scheme and the national form
//! `CC:reference` for schemes defined by a member state.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrgIdProfile {
    /// CA/Browser Forum EV Guidelines: NTR, VAT, PSD.
    Cabf,
    /// ETSI EN 319 412-1: the CABF schemes plus LEI and the `CC:` national form.
    Etsi,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrgId {
    /// Three-letter scheme, or empty for the national `CC:` form.
    pub scheme: String,
    pub country: String,
    pub state: Option<String>,
    pub reference: String,
}

impl fmt::Display for OrgId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.scheme.is_empty() {
            return write!(f, "{}:{}", self.country, self.reference);
        }
        write!(f, "{}{}", self.scheme, self.country)?;
        if let Some(state) = &self.state {
            write!(f, "+{state}")?;
        }
        write!(f, "-{}", self.reference)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrgIdError {
    #[error("subject:organizationIdentifier is empty")]
    Empty,

    #[error("subject:organizationIdentifier {0:?} is too short to hold scheme and country")]
    TooShort(String),

    #[error("subject:organizationIdentifier uses unknown registration scheme {0:?}")]
    UnknownScheme(String),

    #[error("subject:organizationIdentifier has invalid country code {0:?}")]
    InvalidCountry(String),

    #[error("subject:organizationIdentifier: state or province qualifier is only allowed with NTR, found with {0}")]
    StateNotAllowed(String),

    #[error("subject:organizationIdentifier has invalid state or province {0:?}")]
    InvalidState(String),

    #[error("subject:organizationIdentifier is missing '-' before the registration reference")]
    MissingSeparator,

    #[error("subject:organizationIdentifier has an empty registration reference")]
    EmptyReference,

    #[error("subject:organizationIdentifier has an invalid LEI {0:?}")]
    InvalidLei(String),
}

const CABF_SCHEMES: [&str; 3] = ["NTR", "VAT", "PSD"];

pub fn parse_org_id(value: &str, profile: OrgIdProfile) -> Result<OrgId, OrgIdError> {
    if value.is_empty() {
        return Err(OrgIdError::Empty);
    }

    if profile == OrgIdProfile::Etsi
        && let Some((country, reference)) = value.split_once(':')
        && country.len() == 2
    {
        check_country(country)?;
        if reference.is_empty() {
            return Err(OrgIdError::EmptyReference);
        }
        return Ok(OrgId {
            scheme: String::new(),
            country: country.to_string(),
            state: None,
            reference: reference.to_string(),
        });
    }

    let (scheme, rest) = value
        .split_at_checked(3)
        .ok_or_else(|| OrgIdError::TooShort(value.to_string()))?;
    let (country, rest) = rest
        .split_at_checked(2)
        .ok_or_else(|| OrgIdError::TooShort(value.to_string()))?;

    let known = CABF_SCHEMES.contains(&scheme) || (profile == OrgIdProfile::Etsi && scheme == "LEI");
    if !known {
        return Err(OrgIdError::UnknownScheme(scheme.to_string()));
    }
    check_country(country)?;

    let (state, rest) = match rest.strip_prefix('+') {
        Some(after) => {
            if scheme != "NTR" {
                return Err(OrgIdError::StateNotAllowed(scheme.to_string()));
            }
            let (state, rest) = after.split_once('-').ok_or(OrgIdError::MissingSeparator)?;
            if !is_upper_alpha(state, 2) {
                return Err(OrgIdError::InvalidState(state.to_string()));
            }
            (Some(state.to_string()), rest)
        }
        None => (
            None,
            rest.strip_prefix('-').ok_or(OrgIdError::MissingSeparator)?,
        ),
    };
    if rest.is_empty() {
        return Err(OrgIdError::EmptyReference);
    }
    if scheme == "LEI" && !(rest.len() == 20 && rest.bytes().all(|b| b.is_ascii_digit() || b.is_ascii_uppercase())) {
        return Err(OrgIdError::InvalidLei(rest.to_string()));
    }

    Ok(OrgId {
        scheme: scheme.to_string(),
        country: country.to_string(),
        state,
        reference: rest.to_string(),
    })
}

fn check_country(country: &str) -> Result<(), OrgIdError> {
    if is_upper_alpha(country, 2) {
        Ok(())
    } else {
        Err(OrgIdError::InvalidCountry(country.to_string()))
    }
}

fn is_upper_alpha(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_uppercase())
}
