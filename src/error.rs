use thiserror::Error;

/// One variant per fallible step of the delivery transaction, each carrying
/// the OS error code reported by the console subsystem at that step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeliveryError {
    #[error("Failed to open process. Error code: {0}")]
    ProcessOpenFailed(u32),
    #[error("Failed to attach to console. Error code: {0}")]
    ConsoleAttachFailed(u32),
    #[error("Failed to disable Ctrl-C handling. Error code: {0}")]
    SuppressionFailed(u32),
    #[error("Failed to send Ctrl-C event. Error code: {0}")]
    SignalFailed(u32),
    #[error("Failed to send Ctrl-C event without console attach. Error code: {0}")]
    FallbackSignalFailed(u32),
}
