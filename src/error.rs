/// Failure of a single SMBus transaction.
///
/// Every fault below the transport (device missing, NACK, timeout, the bus
/// device node failing to open) collapses into this one kind. The message is
/// kept for logging only.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SmbusError {
    #[error("SMBus transaction failed: {0}")]
    TransportFailure(String),
}

/// Failure to read and decode one battery register.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReadError {
    #[error(transparent)]
    Smbus(#[from] SmbusError),
    /// The length byte of a string register is outside `1..=31`.
    #[error("string length {0} out of range, expected 1..=31")]
    InvalidLength(u8),
}
