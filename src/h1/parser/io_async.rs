use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use super::{Block, ParseError, Step};
use crate::headers::HeaderMap;

impl HeaderMap {
    /// Read header block from a tokio buffered reader.
    ///
    /// This is the async counterpart of [`read_from`][HeaderMap::read_from] with the same
    /// semantic.
    ///
    /// # Errors
    ///
    /// See [`read_from`][HeaderMap::read_from].
    pub async fn read_from_async<R>(&mut self, reader: &mut R) -> Result<(), ParseError>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut block = Block::default();
        let mut buf = Vec::with_capacity(64);

        loop {
            buf.clear();
            reader.read_until(b'\n', &mut buf).await?;

            let Some((b'\n', line)) = buf.split_last() else {
                return Err(ParseError::Truncated);
            };

            if block.line(self, line)? == Step::End {
                return Ok(());
            }
        }
    }
}
