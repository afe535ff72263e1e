use crate::Error;

/// Forward-only cursor over an untrusted handshake body.
///
/// Every read is checked against the bytes left in the slice; a short read
/// yields [`Error::Truncated`] and leaves the position unchanged.
#[derive(Debug, Clone)]
pub(crate) struct Reader<'a> {
	data: &'a [u8],
	pos: usize,
}

impl<'a> Reader<'a> {
	pub(crate) fn new(data: &'a [u8]) -> Self {
		Self { data, pos: 0 }
	}

	pub(crate) fn remaining(&self) -> usize {
		self.data.len() - self.pos
	}

	pub(crate) fn position(&self) -> usize {
		self.pos
	}

	/// Bytes not consumed yet.
	pub(crate) fn rest(&self) -> &'a [u8] {
		&self.data[self.pos..]
	}

	pub(crate) fn read_u8(&mut self, field: &'static str) -> Result<u8, Error> {
		let [val] = self.take::<1>(field)?;
		Ok(val)
	}

	pub(crate) fn read_u16(&mut self, field: &'static str) -> Result<u16, Error> {
		Ok(u16::from_be_bytes(self.take::<2>(field)?))
	}

	pub(crate) fn read_u24(&mut self, field: &'static str) -> Result<u32, Error> {
		let [hi, mid, lo] = self.take::<3>(field)?;
		Ok(u32::from_be_bytes([0, hi, mid, lo]))
	}

	pub(crate) fn read_bytes(&mut self, n: usize, field: &'static str) -> Result<&'a [u8], Error> {
		if self.remaining() < n {
			return Err(Error::Truncated { field });
		}
		let slice = &self.data[self.pos..self.pos + n];
		self.pos += n;
		Ok(slice)
	}

	fn take<const N: usize>(&mut self, field: &'static str) -> Result<[u8; N], Error> {
		let mut out = [0u8; N];
		out.copy_from_slice(self.read_bytes(N, field)?);
		Ok(out)
	}
}
