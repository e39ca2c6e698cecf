//! Normalisation of raw features onto `[0, 1]`.
//!
//! `Norm` implements the three saturating maps the component scores use:
//! - [`Norm::Capped`] divides by a saturation point.
//! - [`Norm::Scaled`] multiplies by a gain.
//! - [`Norm::Inverse`] maps a range linearly so that low values score high.
//!
//! Every strategy clamps its output to `[0, 1]`. Invalid parameters or
//! non-finite inputs produce `0.0`, meaning "no signal".

/// Strategy for normalising a raw feature value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Norm {
    /// `min(value / cap, 1)`. Requires a finite, positive `cap`.
    Capped { cap: f64 },
    /// `min(value * factor, 1)`. Requires a finite, non-negative `factor`.
    Scaled { factor: f64 },
    /// `1 - clamp((value - floor) / span, 0, 1)`. Requires a finite, positive
    /// `span`.
    Inverse { floor: f64, span: f64 },
}

impl Norm {
    /// Apply the normalisation strategy to a raw value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cognitive_load::normalise::Norm;
    ///
    /// assert_eq!(Norm::Capped { cap: 10.0 }.apply(5.0), 0.5);
    /// assert_eq!(Norm::Capped { cap: 10.0 }.apply(50.0), 1.0);
    /// assert_eq!(Norm::Inverse { floor: 1.0, span: 6.0 }.apply(7.0), 0.0);
    /// ```
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "linear scaling")]
    pub fn apply(self, value: f64) -> f64 {
        if !value.is_finite() {
            return 0.0;
        }
        let scaled = match self {
            Self::Capped { cap } if cap.is_finite() && cap > 0.0 => value / cap,
            Self::Scaled { factor } if factor.is_finite() && factor >= 0.0 => value * factor,
            Self::Inverse { floor, span } if floor.is_finite() && span.is_finite() && span > 0.0 => {
                1.0 - ((value - floor) / span).clamp(0.0, 1.0)
            }
            _ => 0.0,
        };
        scaled.clamp(0.0, 1.0)
    }
}

/// Round `value` to `places` decimal digits for presentation.
///
/// # Examples
///
/// ```rust
/// use cognitive_load::normalise::round_to;
///
/// assert_eq!(round_to(0.123_456, 3), 0.123);
/// ```
#[must_use]
#[expect(clippy::float_arithmetic, reason = "decimal rounding")]
pub fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}
