//! Error type for the `.xp` loader. All variants are handled by the caller
//! swallowing the error and leaving the console otherwise unaffected --
//! nothing here is meant to propagate past `printXP`.

#[derive(thiserror::Error, Debug)]
pub enum XpError {
    #[error("stream too short to contain a gzip header and trailer")]
    TooShort,
    #[error("bad gzip magic bytes")]
    BadMagic,
    #[error("unsupported gzip compression method")]
    UnsupportedMethod,
    #[error("gzip header flags expected to be zero, found {0:#x}")]
    UnsupportedFlags(u8),
    #[error("raw DEFLATE decompression failed: {0}")]
    Inflate(#[from] std::io::Error),
    #[error("payload truncated while parsing layer {0}")]
    TruncatedPayload(i32),
    #[error("layer count {0} out of the valid 1..=9 range")]
    BadLayerCount(i32),
}
