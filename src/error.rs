/// Name of one of the supported encodings, carried on an error purely for
/// `trace!`-level diagnostics — never matched on by callers.
pub type EncodingName = &'static str;

/// Failure of a single encode or decode step inside the repair search.
///
/// Never crosses the crate's public boundary: a search that cannot find an
/// improving step returns the input unchanged rather than propagating this
/// type. It exists so the search loop can log *why* a candidate step was
/// rejected instead of only *that* it was.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CodecError {
    /// A codepoint has no representation in the target encoding.
    #[error("{encoding} cannot represent {at:?}")]
    Unrepresentable { encoding: EncodingName, at: char },
    /// A byte (or byte sequence) is not valid input for the source encoding.
    #[error("{encoding} rejected byte {at:#04x}")]
    InvalidSequence { encoding: EncodingName, at: u8 },
}

impl CodecError {
    pub(crate) fn unrepresentable(encoding: EncodingName, at: char) -> Self {
        CodecError::Unrepresentable { encoding, at }
    }

    pub(crate) fn invalid_sequence(encoding: EncodingName, at: u8) -> Self {
        CodecError::InvalidSequence { encoding, at }
    }
}

pub(crate) type Result<T> = std::result::Result<T, CodecError>;
