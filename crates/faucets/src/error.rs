#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Faucet {0} not found")]
    FaucetNotFound(u32),

    #[error("Invalid catalog {path}: {source}")]
    InvalidCatalog {
        path: String,
        #[source]
        source: faucets_core::catalog::CatalogError,
    },

    #[error("Unknown logo kind: {0}. Valid kinds: chain, asset")]
    UnknownLogoKind(String),
}
