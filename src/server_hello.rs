use crate::ConnectionState;
use crate::Error;
use crate::reader::Reader;

/// Smallest ServerHello body the decoder will look at.
///
/// Covers version, random, session-id length, cipher suite and compression
/// method with room to spare; shorter input is reported as truncated
/// without reading any field.
pub const SERVER_HELLO_MIN_LEN: usize = 40;

/// A ServerHello body holding zero-copy references into the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerHello<'a> {
	/// Protocol version selected by the server.
	pub version: u16,
	/// 32-byte server random.
	pub random: &'a [u8],
	/// Session ID echoed or assigned by the server (may be empty).
	pub session_id: &'a [u8],
	/// Selected cipher suite.
	pub cipher_suite: u16,
	/// Selected compression method.
	pub compression_method: u8,
	/// Trailing bytes after the compression method, left unparsed.
	pub extensions: &'a [u8],
}

/// Parse a ServerHello handshake body.
///
/// The input starts at the protocol version, after the handshake header
/// has been stripped by the caller. Extension bytes are kept raw.
///
/// # Errors
///
/// Returns [`Error::Truncated`] when the input is shorter than
/// [`SERVER_HELLO_MIN_LEN`] or a field runs past the end of the input.
///
/// ```
/// let mut body = vec![0x03, 0x03];
/// body.extend_from_slice(&[0u8; 32]);
/// body.extend_from_slice(&[0x00, 0xC0, 0x2F, 0x00]);
/// body.extend_from_slice(&[0x00, 0x00]);
/// let hello = tls_handshake_decode::parse_server_hello(&body).unwrap();
/// assert_eq!(hello.cipher_suite, 0xC02F);
/// ```
pub fn parse_server_hello(input: &[u8]) -> Result<ServerHello<'_>, Error> {
	if input.len() < SERVER_HELLO_MIN_LEN {
		return Err(Error::Truncated {
			field: "server hello",
		});
	}
	let mut r = Reader::new(input);

	let version = r.read_u16("server version")?;
	let random = r.read_bytes(32, "server random")?;

	let sid_len = r.read_u8("session ID length")? as usize;
	let session_id = r.read_bytes(sid_len, "session ID")?;

	let cipher_suite = r.read_u16("cipher suite")?;
	let compression_method = r.read_u8("compression method")?;

	Ok(ServerHello {
		version,
		random,
		session_id,
		cipher_suite,
		compression_method,
		extensions: r.rest(),
	})
}

/// Decode a ServerHello body into the connection state.
///
/// On success the negotiated version, cipher suite and compression method
/// are written to `state`, and the handshake message length already
/// recorded in `state.message_length` is returned unchanged for the
/// caller's dispatcher. On error `state` is left untouched.
///
/// # Errors
///
/// Returns [`Error::Truncated`] when the body is too short to hold every
/// field. This is a "wait for more data" condition, not a malformed
/// message.
///
/// ```
/// use tls_handshake_decode::{ConnectionState, decode_server_hello};
///
/// let mut body = vec![0x03, 0x03];
/// body.extend_from_slice(&[0u8; 32]);
/// body.extend_from_slice(&[0x00, 0xC0, 0x2F, 0x00, 0x00, 0x00]);
///
/// let mut state = ConnectionState::with_message_length(body.len() as u32);
/// let consumed = decode_server_hello(&mut state, &body).unwrap();
/// assert_eq!(consumed, 40);
/// assert_eq!(state.negotiated_version, 0x0303);
/// ```
pub fn decode_server_hello(state: &mut ConnectionState, input: &[u8]) -> Result<u32, Error> {
	let hello = parse_server_hello(input)?;

	state.negotiated_version = hello.version;
	state.cipher_suite = hello.cipher_suite;
	state.compression_method = hello.compression_method;

	log::debug!(
		target: crate::LOG_TARGET,
		"TLS Handshake Version {:#06x} Cipher {:#06x} Compression {}",
		hello.version,
		hello.cipher_suite,
		hello.compression_method
	);

	Ok(state.message_length)
}
