//! The three cognitive-load components.
//!
//! Each component gathers its raw features from the text and parsed document,
//! normalises them onto `[0, 1]` and blends them with fixed weights.

pub mod extraneous;
pub mod germane;
pub mod intrinsic;

pub use extraneous::ExtraneousFeatures;
pub use germane::GermaneFeatures;
pub use intrinsic::IntrinsicFeatures;

/// A feature set that can be reduced to a single load score.
pub trait LoadComponent {
    /// Weighted blend of the normalised features, within `[0, 1]`.
    fn score(&self) -> f64;

    /// Copy with diagnostic values rounded for presentation.
    #[must_use]
    fn rounded(&self) -> Self;
}

#[expect(clippy::cast_precision_loss, reason = "feature counts within f64 range")]
pub(crate) fn count_as_f64(count: usize) -> f64 {
    count as f64
}
