//! Passive decoder for TLS ServerHello and Certificate handshake messages.
//!
//! Built for traffic observed on the wire: input may be partially
//! captured, malformed or hostile. Every field read is bounds-checked
//! against the handshake body handed in by the caller, and nothing is read
//! past it.
//!
//! - [`decode_server_hello`] records the negotiated version, cipher suite
//!   and compression method.
//! - [`decode_server_certificate_chain`] walks the certificate list and
//!   records the first certificate's subject and issuer names, using a
//!   pluggable [`CertificateDecoder`]. With the `x509` feature,
//!   `X509Decoder` provides one built on `x509-cert`.
//!
//! Results are written into a caller-owned [`ConnectionState`]. Partial
//! input is reported through recoverable errors (see
//! [`Error::is_recoverable`]); per-certificate problems go to a
//! [`DiagnosticSink`] and do not abort the chain walk.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod certificate;
mod diagnostic;
mod error;
mod reader;
mod server_hello;
mod state;
#[cfg(feature = "x509")]
mod x509;

pub use crate::certificate::{
	CHAIN_LENGTH_PREFIX, CertificateDecoder, CertificateEntries, decode_server_certificate_chain,
};
pub use crate::diagnostic::{Diagnostic, DiagnosticSink, LogSink, NullSink};
pub use crate::error::Error;
pub use crate::server_hello::{
	SERVER_HELLO_MIN_LEN, ServerHello, decode_server_hello, parse_server_hello,
};
pub use crate::state::ConnectionState;
#[cfg(feature = "x509")]
pub use crate::x509::{MAX_DN_LEN, X509Decoder};

/// `log` target used for every record emitted by this crate.
pub const LOG_TARGET: &str = "tls_handshake_decode";
