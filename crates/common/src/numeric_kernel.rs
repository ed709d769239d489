use super::error::Error;

/// A cycle is profitable only when its compounded rate is strictly above this.
pub const PROFIT_THRESHOLD: f64 = 1.0;

/// Converts a magnitude pair into the directed rate `to_weight / from_weight`.
///
/// # Errors
/// Returns `Error::InvalidWeights` unless both magnitudes are finite and strictly positive.
pub fn exchange_rate(from_weight: f64, to_weight: f64) -> Result<f64, Error> {
    let valid = |w: f64| w.is_finite() && w > 0.0;
    if !valid(from_weight) || !valid(to_weight) {
        return Err(Error::InvalidWeights {
            from_weight,
            to_weight,
        });
    }

    Ok(to_weight / from_weight)
}

/// Multiplies rates left to right, starting from 1.0.
///
/// The association order is fixed so that a product recomputed from a report
/// matches the one computed during search exactly.
pub fn compound_rate<I>(rates: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    rates.into_iter().fold(1.0, |acc, rate| acc * rate)
}

/// Strict comparison against [`PROFIT_THRESHOLD`].
pub fn is_profitable(product: f64) -> bool {
    product > PROFIT_THRESHOLD
}
