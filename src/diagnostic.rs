use alloc::vec::Vec;
use core::fmt;

use crate::Error;

/// A non-fatal condition met while walking a certificate chain.
///
/// None of these abort decoding on their own except
/// [`Diagnostic::MalformedChain`], which accompanies an
/// [`Error::Malformed`] result.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Diagnostic {
	/// The DER decoder rejected the certificate at `index`.
	CertificateDecodeFailed {
		/// Position of the certificate in the chain.
		index: usize,
	},
	/// The subject DN of the certificate at `index` could not be extracted.
	SubjectUnavailable {
		/// Position of the certificate in the chain.
		index: usize,
	},
	/// The issuer DN of the certificate at `index` could not be extracted.
	IssuerUnavailable {
		/// Position of the certificate in the chain.
		index: usize,
	},
	/// The chain framing is inconsistent; the walk was abandoned.
	MalformedChain(Error),
}

impl fmt::Display for Diagnostic {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CertificateDecodeFailed { index } => {
				write!(f, "decoding ASN.1 structure for X509 certificate {index} failed")
			}
			Self::SubjectUnavailable { index } => {
				write!(f, "X509: could not get subject of certificate {index}")
			}
			Self::IssuerUnavailable { index } => {
				write!(f, "X509: could not get issuer of certificate {index}")
			}
			Self::MalformedChain(err) => write!(f, "{err}"),
		}
	}
}

/// Receiver for [`Diagnostic`] events raised during decoding.
///
/// Keeps reporting out of the decoding control flow, so decoders can be
/// driven without any logging backend.
pub trait DiagnosticSink {
	/// Record one event.
	fn report(&mut self, event: Diagnostic);
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
	fn report(&mut self, event: Diagnostic) {
		(**self).report(event);
	}
}

/// Collects events in order.
impl DiagnosticSink for Vec<Diagnostic> {
	fn report(&mut self, event: Diagnostic) {
		self.push(event);
	}
}

/// Forwards every event to the [`log`] facade as a warning.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
	fn report(&mut self, event: Diagnostic) {
		log::warn!(target: crate::LOG_TARGET, "{event}");
	}
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
	fn report(&mut self, _event: Diagnostic) {}
}
