use tidings_core::PriceBar;

use super::aug;

const TRADING_DAYS: [u32; 10] = [1, 2, 3, 4, 7, 8, 9, 10, 11, 14];

pub fn by_ticker(t: &str) -> Option<Vec<PriceBar>> {
    match t {
        "AAPL" => Some(build(
            [
                195.61, 192.58, 191.17, 181.99, 178.85, 179.80, 177.45, 177.97, 177.79, 179.46,
            ],
            // dividend-adjusted series
            Some(0.995),
        )),
        "MSFT" => Some(build(
            [
                336.34, 326.66, 326.66, 327.78, 330.11, 326.05, 322.23, 322.93, 321.01, 324.04,
            ],
            None,
        )),
        "TSLA" => Some(build(
            [
                261.07, 254.11, 259.32, 253.86, 251.45, 249.70, 242.19, 245.34, 242.65, 239.76,
            ],
            None,
        )),
        _ => None,
    }
}

fn build(closes: [f64; 10], adjust: Option<f64>) -> Vec<PriceBar> {
    TRADING_DAYS
        .iter()
        .zip(closes)
        .map(|(&day, close)| {
            let bar = PriceBar::new(aug(day), close);
            match adjust {
                Some(f) => bar.with_adjusted(close * f),
                None => bar,
            }
        })
        .collect()
}
