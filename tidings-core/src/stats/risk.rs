use super::{ensure_finite, mean, sample_std};
use crate::{PricePoint, TidingsError};

/// The defined per-point changes of a price series.
#[must_use]
pub fn daily_returns(points: &[PricePoint]) -> Vec<f64> {
    points.iter().filter_map(|p| p.pct_change).collect()
}

/// Sample standard deviation of the last `window` returns, scaled by `sqrt(window)`.
///
/// # Errors
/// `InvalidArgument` for a window below 2, `InsufficientData` when fewer than
/// `window` returns are available and `InvalidInput` for non-finite returns.
#[allow(clippy::cast_precision_loss)]
pub fn annualized_volatility(returns: &[f64], window: usize) -> Result<f64, TidingsError> {
    if window < 2 {
        return Err(TidingsError::invalid_arg(format!(
            "volatility window must be at least 2, got {window}"
        )));
    }
    if returns.len() < window {
        return Err(TidingsError::insufficient(window, returns.len()));
    }
    let tail = &returns[returns.len() - window..];
    ensure_finite(tail, "annualized_volatility")?;
    let std = sample_std(tail).ok_or(TidingsError::insufficient(2, tail.len()))?;
    Ok(std * (window as f64).sqrt())
}

/// Annualized Sharpe ratio: `sqrt(periods) * mean(excess) / std(excess)`.
///
/// Excess returns subtract `risk_free_rate / periods` from each return.
///
/// # Errors
/// `InvalidArgument` for zero `periods`, `InsufficientData` below two returns,
/// and `InvalidInput` for non-finite returns or excess returns without dispersion.
#[allow(clippy::cast_precision_loss)]
pub fn sharpe_ratio(returns: &[f64], risk_free_rate: f64, periods: u32) -> Result<f64, TidingsError> {
    if periods == 0 {
        return Err(TidingsError::invalid_arg("periods per year must be positive"));
    }
    if returns.len() < 2 {
        return Err(TidingsError::insufficient(2, returns.len()));
    }
    ensure_finite(returns, "sharpe_ratio")?;
    let per_period = risk_free_rate / f64::from(periods);
    let excess: Vec<f64> = returns.iter().map(|r| r - per_period).collect();
    let std = sample_std(&excess).unwrap_or(0.0);
    if std == 0.0 {
        return Err(TidingsError::invalid_input(
            "excess returns have zero standard deviation",
        ));
    }
    Ok(f64::from(periods).sqrt() * mean(&excess) / std)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volatility_uses_trailing_window() {
        let r = [100.0, 0.01, -0.01, 0.01, -0.01];
        let v = annualized_volatility(&r, 4).unwrap();
        let expected = (0.0004_f64 / 3.0).sqrt() * 2.0;
        assert!((v - expected).abs() < 1e-12);
        assert!(matches!(
            annualized_volatility(&r, 6),
            Err(TidingsError::InsufficientData { needed: 6, got: 5 })
        ));
    }

    #[test]
    fn sharpe_rejects_flat_returns() {
        assert!(matches!(
            sharpe_ratio(&[0.01, 0.01, 0.01], 0.0, 252),
            Err(TidingsError::InvalidInput(_))
        ));
        let s = sharpe_ratio(&[0.02, 0.0], 0.0, 1).unwrap();
        assert!((s - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12);
    }
}
