/// Errors produced while decoding ServerHello and Certificate messages.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
	/// A field runs past the end of the message; more bytes are needed
	/// before the message can be decoded.
	#[error("truncated {field}")]
	Truncated {
		/// Name of the truncated field.
		field: &'static str,
	},

	/// The certificate chain is shorter than its own declared length.
	///
	/// This is the normal state of a partially captured message.
	#[error("incomplete certificate chain: need {need} bytes, have {have}")]
	Incomplete {
		/// Bytes the message declares.
		need: usize,
		/// Bytes actually available.
		have: usize,
	},

	/// A certificate length is inconsistent with the chain length that
	/// contains it.
	#[error(
		"malformed certificate chain at offset {offset}: entry needs {declared} bytes, {remaining} left"
	)]
	Malformed {
		/// Offset of the offending length prefix from the start of the message.
		offset: usize,
		/// Bytes the entry claims, including its 3-byte length prefix.
		declared: usize,
		/// Bytes left in the declared chain length.
		remaining: usize,
	},
}

impl Error {
	/// Whether the condition may clear once more captured data arrives.
	///
	/// Recoverable errors are a "come back later" signal, not a defect in
	/// the peer's message.
	#[must_use]
	pub fn is_recoverable(&self) -> bool {
		matches!(self, Self::Truncated { .. } | Self::Incomplete { .. })
	}
}
