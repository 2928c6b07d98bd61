use alloy::{
    providers::PendingTransactionError,
    transports::{RpcError, TransportErrorKind},
};

#[derive(Debug, thiserror::Error)]
pub enum BlockchainError {
    #[error("Provider unavailable: {0}")]
    ProviderUnavailable(String),

    #[error("No account available from provider")]
    NoAccount,

    #[error("Conversion error: {0}")]
    ConversionError(String),

    #[error("RPC error: {0}")]
    RPCError(#[from] RpcError<TransportErrorKind>),

    #[error("Pending transaction error: {0}")]
    PendingTxError(#[from] PendingTransactionError),

    #[error("Transaction failed: {0}")]
    TransactionFailed(String),
}
