//! The byte stream handle held by a decoder.

/// A decoder's stream, either owned or borrowed from the caller.
///
/// The variant is the ownership flag: only an [`Input::Owned`] stream is
/// released when the decoder is disposed or dropped. A borrowed stream
/// stays with the caller, positioned after the last field read.
#[derive(Debug)]
pub enum Input<'a, R> {
    Owned(R),
    Borrowed(&'a mut R),
}

impl<R> Input<'_, R> {
    pub fn get_mut(&mut self) -> &mut R {
        match self {
            Input::Owned(reader) => reader,
            Input::Borrowed(reader) => reader,
        }
    }
}
