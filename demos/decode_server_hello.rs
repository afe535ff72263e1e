#![allow(missing_docs)]

use tls_handshake_decode::{ConnectionState, decode_server_hello, parse_server_hello};

fn main() {
	let body = build_sample_body();
	let mut state = ConnectionState::with_message_length(body.len() as u32);

	match decode_server_hello(&mut state, &body) {
		Ok(consumed) => {
			println!("Message length: {consumed}");
			println!("Version: {:#06x}", state.negotiated_version);
			println!("Cipher suite: {:#06x}", state.cipher_suite);
			println!("Compression: {}", state.compression_method);
		}
		Err(e) if e.is_recoverable() => eprintln!("Need more data: {e}"),
		Err(e) => eprintln!("Decode error: {e}"),
	}

	if let Ok(hello) = parse_server_hello(&body) {
		println!(
			"Session ID ({} bytes): {:02x?}",
			hello.session_id.len(),
			hello.session_id
		);
		println!("Extension bytes: {}", hello.extensions.len());
	}

	// A capture cut short in the middle of the random.
	let mut state = ConnectionState::new();
	if let Err(e) = decode_server_hello(&mut state, &body[..20]) {
		println!("Partial capture: {e} (recoverable: {})", e.is_recoverable());
	}
}

fn build_sample_body() -> Vec<u8> {
	let mut body = Vec::new();
	body.extend_from_slice(&[0x03, 0x03]);
	body.extend_from_slice(&[0x42; 32]);
	body.push(0x08);
	body.extend_from_slice(&[0xAB; 8]);
	body.extend_from_slice(&[0xC0, 0x2F]); // TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256
	body.push(0x00);
	// extended_master_secret + renegotiation_info
	body.extend_from_slice(&[0x00, 0x09, 0x00, 0x17, 0x00, 0x00, 0xFF, 0x01, 0x00, 0x01, 0x00]);
	body
}
