//! Error types for parcelpack.

use thiserror::Error;

/// Result type alias for parcelpack operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during shipment packing.
///
/// Both variants are input-validation failures: they are raised synchronously
/// before or during packing and are never transient, so no retry applies.
#[derive(Debug, Error)]
pub enum Error {
    /// A single unit of a line item exceeds the per-box weight ceiling, so it
    /// can never fit in any box regardless of packing strategy.
    #[error("one unit weighs {grams}g which exceeds the maximum package weight of {max_grams}g")]
    OverweightItem {
        /// Weight of one unit of the offending item, in grams.
        grams: f64,
        /// The per-box weight ceiling, in grams.
        max_grams: f64,
    },

    /// Aggregate demand would require more packages than the safety threshold
    /// allows. Guards against unbounded loops from pathological input.
    #[error("packing would require at least {required} packages, exceeding the limit of {threshold}")]
    ExcessPackageQuantity {
        /// Lower bound on the number of packages the input would require.
        required: u64,
        /// The package-count safety threshold.
        threshold: u64,
    },
}
