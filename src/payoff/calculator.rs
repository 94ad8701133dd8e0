//! Gain at expiry for a long call and for a long stock position
//!
//! Both functions map each hypothetical price to a gain per unit of the
//! underlying. Inputs are not validated; non-finite values propagate.

/// Gain values, positionally paired with the prices they were computed from
pub type PayoffSeries = Vec<f64>;

/// Gain of a purchased call option at each price in `prices`.
///
/// Below the strike the option expires worthless and the whole premium is
/// lost. At or above the strike the gain is intrinsic value minus premium.
pub fn option_gain(strike_price: f64, contract_price: f64, prices: &[f64]) -> PayoffSeries {
    prices
        .iter()
        .map(|&p| {
            if p < strike_price {
                -contract_price
            } else {
                (p - strike_price) - contract_price
            }
        })
        .collect()
}

/// Gain of owning one unit of stock bought at `current_price`
pub fn owning_stock_gain(current_price: f64, prices: &[f64]) -> PayoffSeries {
    prices.iter().map(|&p| p - current_price).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_gain_below_strike() {
        let gains = option_gain(16.0, 4.0, &[0.0, 5.0, 15.999]);
        assert!(gains.iter().all(|&g| g == -4.0));
    }

    #[test]
    fn test_option_gain_above_strike() {
        let gains = option_gain(16.0, 4.0, &[16.0, 20.0, 30.5]);
        assert_eq!(gains, vec![-4.0, 0.0, 10.5]);
    }

    #[test]
    fn test_option_gain_continuous_at_strike() {
        let strike = 16.0;
        let premium = 4.0;
        let below = option_gain(strike, premium, &[strike - 1e-9])[0];
        let at = option_gain(strike, premium, &[strike])[0];

        // Strike itself takes the intrinsic branch, which is zero there
        assert_eq!(at, -premium);
        assert!((below - at).abs() < 1e-12);
    }

    #[test]
    fn test_option_gain_worthless_at_zero() {
        for (strike, premium) in [(16.0, 4.0), (1.0, 0.25), (250.0, 12.0)] {
            assert_eq!(option_gain(strike, premium, &[0.0]), vec![-premium]);
        }
    }

    #[test]
    fn test_owning_stock_gain() {
        let gains = owning_stock_gain(19.25, &[0.0, 19.25, 40.0]);
        assert_eq!(gains, vec![-19.25, 0.0, 20.75]);
    }

    #[test]
    fn test_scenario_at_current_price() {
        let p = [19.25];
        let option = option_gain(16.0, 4.0, &p);
        let stock = owning_stock_gain(19.25, &p);

        assert!((option[0] - (-0.75)).abs() < 1e-12);
        assert_eq!(stock[0], 0.0);
    }

    #[test]
    fn test_lengths_preserved() {
        for n in [0usize, 1, 7, 200] {
            let prices: Vec<f64> = (0..n).map(|i| i as f64 * 0.5).collect();
            assert_eq!(option_gain(10.0, 1.0, &prices).len(), n);
            assert_eq!(owning_stock_gain(10.0, &prices).len(), n);
        }
    }

    #[test]
    fn test_order_preserved_for_unsorted_prices() {
        let prices = [30.0, 0.0, 20.0];
        assert_eq!(option_gain(16.0, 4.0, &prices), vec![10.0, -4.0, 0.0]);
        assert_eq!(owning_stock_gain(10.0, &prices), vec![20.0, -10.0, 10.0]);
    }

    #[test]
    fn test_non_finite_propagates() {
        let gains = option_gain(16.0, 4.0, &[f64::NAN, f64::INFINITY]);
        // NaN fails the `<` comparison and lands in the intrinsic branch
        assert!(gains[0].is_nan());
        assert_eq!(gains[1], f64::INFINITY);

        let stock = owning_stock_gain(f64::NAN, &[1.0]);
        assert!(stock[0].is_nan());
    }
}
