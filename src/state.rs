use alloc::string::String;

/// Per-connection handshake state written by the decoders.
///
/// The record is owned by the connection-processing pipeline. Decoding
/// functions take it by `&mut`, so a single connection's state is never
/// mutated by two decode calls at once; callers that share states across
/// threads must keep per-connection access serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionState {
	/// Protocol version selected by the server in its ServerHello.
	pub negotiated_version: u16,
	/// Cipher suite selected by the server.
	pub cipher_suite: u16,
	/// Compression method selected by the server.
	pub compression_method: u8,
	/// Length of the current handshake message, recorded by the stage
	/// that framed it.
	pub message_length: u32,
	/// Subject DN of the first certificate in the server's chain.
	pub first_cert_subject: Option<String>,
	/// Issuer DN of the first certificate in the server's chain.
	pub first_cert_issuer: Option<String>,
}

impl ConnectionState {
	/// Create an empty state for a new connection.
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Create a state whose current handshake message is `message_length`
	/// bytes long.
	#[must_use]
	pub fn with_message_length(message_length: u32) -> Self {
		Self {
			message_length,
			..Self::default()
		}
	}
}
