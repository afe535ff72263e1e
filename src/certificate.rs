use alloc::string::String;
use core::iter::FusedIterator;

use crate::ConnectionState;
use crate::Error;
use crate::diagnostic::{Diagnostic, DiagnosticSink};
use crate::reader::Reader;

/// Size of the big-endian length prefix in front of the chain and in front
/// of every certificate.
pub const CHAIN_LENGTH_PREFIX: usize = 3;

/// Backend that turns DER bytes into a certificate and reads its names.
///
/// The decoded certificate is owned by the caller for the duration of one
/// chain entry and released through its `Drop` impl before the next entry
/// is decoded.
pub trait CertificateDecoder {
	/// Decoded certificate.
	type Certificate;

	/// Decode one DER-encoded certificate, or `None` if it is malformed.
	fn decode(&self, der: &[u8]) -> Option<Self::Certificate>;

	/// Render the subject distinguished name.
	fn subject_dn(&self, cert: &Self::Certificate) -> Option<String>;

	/// Render the issuer distinguished name.
	fn issuer_dn(&self, cert: &Self::Certificate) -> Option<String>;
}

impl<D: CertificateDecoder + ?Sized> CertificateDecoder for &D {
	type Certificate = D::Certificate;

	fn decode(&self, der: &[u8]) -> Option<Self::Certificate> {
		(**self).decode(der)
	}

	fn subject_dn(&self, cert: &Self::Certificate) -> Option<String> {
		(**self).subject_dn(cert)
	}

	fn issuer_dn(&self, cert: &Self::Certificate) -> Option<String> {
		(**self).issuer_dn(cert)
	}
}

/// Iterator over the DER entries of a Certificate handshake body.
///
/// Yields each certificate's bytes in chain order. An entry whose length
/// prefix does not fit in what is left of the declared chain length yields
/// [`Error::Malformed`] and ends the iteration.
#[derive(Debug, Clone)]
pub struct CertificateEntries<'a> {
	reader: Reader<'a>,
	failed: bool,
}

impl<'a> CertificateEntries<'a> {
	/// Frame a Certificate handshake body.
	///
	/// `input` starts at the 3-byte chain length.
	///
	/// # Errors
	///
	/// Returns [`Error::Incomplete`] when the input is shorter than the
	/// chain length prefix or than the length it declares.
	pub fn new(input: &'a [u8]) -> Result<Self, Error> {
		let mut r = Reader::new(input);
		let chain_len = r
			.read_u24("certificate chain length")
			.map_err(|_| Error::Incomplete {
				need: CHAIN_LENGTH_PREFIX,
				have: input.len(),
			})? as usize;
		let chain = r
			.read_bytes(chain_len, "certificate chain")
			.map_err(|_| Error::Incomplete {
				need: chain_len + CHAIN_LENGTH_PREFIX,
				have: input.len(),
			})?;
		Ok(Self {
			reader: Reader::new(chain),
			failed: false,
		})
	}

	/// Bytes of the handshake body covered by the chain, prefix included.
	#[must_use]
	pub fn message_len(&self) -> usize {
		CHAIN_LENGTH_PREFIX + self.reader.position() + self.reader.remaining()
	}

	fn next_entry(&mut self) -> Result<&'a [u8], Error> {
		let offset = CHAIN_LENGTH_PREFIX + self.reader.position();
		let remaining = self.reader.remaining();
		let malformed = |declared| Error::Malformed {
			offset,
			declared,
			remaining,
		};

		if remaining < CHAIN_LENGTH_PREFIX {
			return Err(malformed(CHAIN_LENGTH_PREFIX));
		}
		let cert_len = self.reader.read_u24("certificate length")? as usize;
		let declared = cert_len + CHAIN_LENGTH_PREFIX;
		if remaining.checked_sub(declared).is_none() {
			return Err(malformed(declared));
		}
		self.reader.read_bytes(cert_len, "certificate")
	}
}

impl<'a> Iterator for CertificateEntries<'a> {
	type Item = Result<&'a [u8], Error>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.failed || self.reader.remaining() == 0 {
			return None;
		}
		let entry = self.next_entry();
		self.failed = entry.is_err();
		Some(entry)
	}
}

impl FusedIterator for CertificateEntries<'_> {}

/// Decode a server Certificate handshake body into the connection state.
///
/// Every certificate in the chain is decoded and has its subject and
/// issuer extracted, but only the first certificate's names are stored,
/// and only into slots that are still empty. A certificate that fails to
/// decode, or whose names cannot be extracted, is reported to `sink` and
/// skipped; it still counts as the first certificate if it is one.
///
/// The chain framing is checked before any certificate is decoded, so an
/// error result never leaves `state` partially updated.
///
/// Returns the number of bytes of `input` the chain occupies.
///
/// # Errors
///
/// Returns [`Error::Incomplete`] when the chain is not fully captured, and
/// [`Error::Malformed`] when a certificate length overruns the declared
/// chain length.
pub fn decode_server_certificate_chain<D, S>(
	state: &mut ConnectionState,
	input: &[u8],
	decoder: &D,
	mut sink: S,
) -> Result<usize, Error>
where
	D: CertificateDecoder + ?Sized,
	S: DiagnosticSink,
{
	let entries = CertificateEntries::new(input)?;
	if let Some(err) = entries.clone().find_map(Result::err) {
		sink.report(Diagnostic::MalformedChain(err.clone()));
		return Err(err);
	}

	let parsed = entries.message_len();
	for (index, der) in entries.flatten().enumerate() {
		decode_entry(state, decoder, &mut sink, index, der);
	}
	Ok(parsed)
}

fn decode_entry<D, S>(
	state: &mut ConnectionState,
	decoder: &D,
	sink: &mut S,
	index: usize,
	der: &[u8],
) where
	D: CertificateDecoder + ?Sized,
	S: DiagnosticSink,
{
	let Some(cert) = decoder.decode(der) else {
		sink.report(Diagnostic::CertificateDecodeFailed { index });
		return;
	};

	let subject = decoder.subject_dn(&cert);
	if subject.is_none() {
		sink.report(Diagnostic::SubjectUnavailable { index });
	}
	let issuer = decoder.issuer_dn(&cert);
	if issuer.is_none() {
		sink.report(Diagnostic::IssuerUnavailable { index });
	}
	drop(cert);

	if index == 0 {
		if state.first_cert_subject.is_none() {
			state.first_cert_subject = subject;
		}
		if state.first_cert_issuer.is_none() {
			state.first_cert_issuer = issuer;
		}
	}
}
