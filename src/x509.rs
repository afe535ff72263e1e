use alloc::string::{String, ToString};

use der::Decode;
use x509_cert::Certificate;
use x509_cert::name::Name;

use crate::certificate::CertificateDecoder;

/// Longest rendered distinguished name accepted by [`X509Decoder`].
pub const MAX_DN_LEN: usize = 255;

/// [`CertificateDecoder`] backed by the `x509-cert` crate.
///
/// Names are rendered in RFC 4514 form, e.g. `CN=example.com`. A name
/// longer than [`MAX_DN_LEN`] bytes counts as unavailable.
#[derive(Debug, Clone, Copy, Default)]
pub struct X509Decoder;

impl X509Decoder {
	/// Create a decoder.
	#[must_use]
	pub fn new() -> Self {
		Self
	}
}

impl CertificateDecoder for X509Decoder {
	type Certificate = Certificate;

	fn decode(&self, der: &[u8]) -> Option<Certificate> {
		Certificate::from_der(der).ok()
	}

	fn subject_dn(&self, cert: &Certificate) -> Option<String> {
		render_name(&cert.tbs_certificate.subject)
	}

	fn issuer_dn(&self, cert: &Certificate) -> Option<String> {
		render_name(&cert.tbs_certificate.issuer)
	}
}

fn render_name(name: &Name) -> Option<String> {
	let dn = name.to_string();
	(dn.len() <= MAX_DN_LEN).then_some(dn)
}
