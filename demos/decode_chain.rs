#![allow(missing_docs)]

use std::env;
use std::fs;

use tls_handshake_decode::{
	ConnectionState, Diagnostic, X509Decoder, decode_server_certificate_chain,
};

/// Decode a chain built from DER files given on the command line, leaf first.
fn main() {
	let paths: Vec<String> = env::args().skip(1).collect();
	if paths.is_empty() {
		eprintln!("usage: decode_chain <leaf.der> [intermediate.der ...]");
		return;
	}

	let mut list = Vec::new();
	for path in &paths {
		match fs::read(path) {
			Ok(der) => {
				list.extend_from_slice(&(der.len() as u32).to_be_bytes()[1..]);
				list.extend_from_slice(&der);
			}
			Err(e) => {
				eprintln!("{path}: {e}");
				return;
			}
		}
	}
	let mut msg = (list.len() as u32).to_be_bytes()[1..].to_vec();
	msg.extend_from_slice(&list);

	let mut state = ConnectionState::new();
	let mut events: Vec<Diagnostic> = Vec::new();
	match decode_server_certificate_chain(&mut state, &msg, &X509Decoder, &mut events) {
		Ok(parsed) => println!("Parsed {parsed} bytes"),
		Err(e) => eprintln!("Decode error: {e}"),
	}
	for event in &events {
		println!("warning: {event}");
	}
	println!("Subject: {}", state.first_cert_subject.as_deref().unwrap_or("-"));
	println!("Issuer: {}", state.first_cert_issuer.as_deref().unwrap_or("-"));
}
