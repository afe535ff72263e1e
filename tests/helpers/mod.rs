#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use tls_handshake_decode::CertificateDecoder;

/// Build a ServerHello body (no handshake header).
pub(crate) fn server_hello(
	version: u16,
	session_id: &[u8],
	cipher_suite: u16,
	compression: u8,
	extensions: &[u8],
) -> Vec<u8> {
	let mut body = Vec::new();
	push_u16(&mut body, version);
	body.extend_from_slice(&[0x5A; 32]); // random
	body.push(session_id.len() as u8);
	body.extend_from_slice(session_id);
	push_u16(&mut body, cipher_suite);
	body.push(compression);
	body.extend_from_slice(extensions);
	body
}

/// TLS 1.2 ServerHello selecting ECDHE-RSA-AES128-GCM-SHA256 with a
/// renegotiation_info extension, padded past the 40-byte floor.
pub(crate) fn tls12_server_hello() -> Vec<u8> {
	let extensions = [0x00, 0x05, 0xff, 0x01, 0x00, 0x01, 0x00];
	server_hello(0x0303, &[], 0xC02F, 0x00, &extensions)
}

/// Build a Certificate body: 3-byte chain length followed by
/// length-prefixed entries.
pub(crate) fn certificate_chain(entries: &[&[u8]]) -> Vec<u8> {
	let mut list = Vec::new();
	for der in entries {
		push_u24(&mut list, der.len() as u32);
		list.extend_from_slice(der);
	}
	let mut msg = Vec::new();
	push_u24(&mut msg, list.len() as u32);
	msg.extend_from_slice(&list);
	msg
}

pub(crate) fn push_u16(buf: &mut Vec<u8>, val: u16) {
	buf.push((val >> 8) as u8);
	buf.push(val as u8);
}

pub(crate) fn push_u24(buf: &mut Vec<u8>, val: u32) {
	buf.push((val >> 16) as u8);
	buf.push((val >> 8) as u8);
	buf.push(val as u8);
}

/// Encode a fake certificate understood by [`FakeDecoder`].
///
/// An empty subject or issuer makes that name unavailable.
pub(crate) fn fake_cert(subject: &str, issuer: &str) -> Vec<u8> {
	format!("CERT|{subject}|{issuer}").into_bytes()
}

/// Decoder for [`fake_cert`] blobs that tracks how many decoded
/// certificates are alive.
#[derive(Debug, Default)]
pub(crate) struct FakeDecoder {
	live: Rc<Cell<usize>>,
	peak: Cell<usize>,
	decoded: Cell<usize>,
	extracted: Cell<usize>,
}

impl FakeDecoder {
	pub(crate) fn live(&self) -> usize {
		self.live.get()
	}

	pub(crate) fn peak(&self) -> usize {
		self.peak.get()
	}

	pub(crate) fn decoded(&self) -> usize {
		self.decoded.get()
	}

	/// Number of subject and issuer extraction attempts.
	pub(crate) fn extracted(&self) -> usize {
		self.extracted.get()
	}
}

#[derive(Debug)]
pub(crate) struct FakeCert {
	subject: String,
	issuer: String,
	live: Rc<Cell<usize>>,
}

impl Drop for FakeCert {
	fn drop(&mut self) {
		self.live.set(self.live.get() - 1);
	}
}

impl CertificateDecoder for FakeDecoder {
	type Certificate = FakeCert;

	fn decode(&self, der: &[u8]) -> Option<FakeCert> {
		let text = std::str::from_utf8(der).ok()?;
		let mut parts = text.split('|');
		if parts.next()? != "CERT" {
			return None;
		}
		let subject = parts.next()?.to_owned();
		let issuer = parts.next()?.to_owned();

		self.decoded.set(self.decoded.get() + 1);
		self.live.set(self.live.get() + 1);
		self.peak.set(self.peak.get().max(self.live.get()));
		Some(FakeCert {
			subject,
			issuer,
			live: Rc::clone(&self.live),
		})
	}

	fn subject_dn(&self, cert: &FakeCert) -> Option<String> {
		self.extracted.set(self.extracted.get() + 1);
		(!cert.subject.is_empty()).then(|| cert.subject.clone())
	}

	fn issuer_dn(&self, cert: &FakeCert) -> Option<String> {
		self.extracted.set(self.extracted.get() + 1);
		(!cert.issuer.is_empty()).then(|| cert.issuer.clone())
	}
}
