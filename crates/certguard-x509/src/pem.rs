use x509_parser::pem::Pem;

const CERTIFICATE_LABELS: [&str; 3] = ["CERTIFICATE", "TRUSTED CERTIFICATE", "X509 CERTIFICATE"];

/// Input starts with a PEM armor line (leading whitespace ignored).
pub fn is_pem(input: &[u8]) -> bool {
    input
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .and_then(|start| input.get(start..))
        .is_some_and(|rest| rest.starts_with(b"-----BEGIN"))
}

/// DER bodies of every certificate block in a PEM bundle. Other block types are skipped.
pub fn split_pem(input: &[u8]) -> anyhow::Result<Vec<Vec<u8>>> {
    let mut certs = Vec::new();
    for block in Pem::iter_from_buffer(input) {
        match block {
            Ok(pem) => {
                if CERTIFICATE_LABELS.contains(&pem.label.as_str()) {
                    certs.push(pem.contents);
                } else {
                    tracing::debug!(label = %pem.label, "skipping non-certificate PEM block");
                }
            }
            // Trailing garbage after at least one good block ends the bundle.
            Err(_) if !certs.is_empty() => break,
            Err(e) => anyhow::bail!("failed to parse PEM: {e}"),
        }
    }
    if certs.is_empty() {
        anyhow::bail!("no CERTIFICATE blocks found in PEM input");
    }
    Ok(certs)
}
