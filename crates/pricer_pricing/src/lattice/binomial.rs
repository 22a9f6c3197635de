//! Cox-Ross-Rubinstein binomial tree for European options.
//!
//! References: Cox, Ross & Rubinstein (1979); Hull (11th ed.) Ch. 13.
//!
//! ## Parameterisation
//!
//! ```text
//! dt = T / N
//! u  = exp(σ√dt),  d = 1 / u
//! q  = (exp(r·dt) - d) / (u - d)
//! ```
//!
//! ## Algorithm
//!
//! 1. Build the forward price lattice: node(0,0) = S, node(i,0) = node(i-1,0)·u
//!    and node(i,j) = node(i-1,j-1)·d for j ≥ 1.
//! 2. Terminal payoff at step N.
//! 3. Backward induction V(i,j) = e^(-r·dt)·[q·V(i+1,j) + (1-q)·V(i+1,j+1)].
//!
//! European exercise only. Cost is O(N²) time and O(N²/2) memory.

use pricer_models::instruments::LatticeConfig;
use tracing::{debug, trace};

/// Per-step tree parameters derived from a [`LatticeConfig`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LatticeParameters {
    /// Step length in years (dt).
    pub dt: f64,
    /// Up factor (u).
    pub up: f64,
    /// Down factor (d = 1/u).
    pub down: f64,
    /// Risk-neutral up probability (q).
    pub probability: f64,
    /// One-step discount factor e^(-r·dt).
    pub discount: f64,
}

impl LatticeParameters {
    /// Derives the CRR parameters for `config`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pricer_models::instruments::{LatticeConfig, PricingRequest};
    /// use pricer_pricing::lattice::LatticeParameters;
    ///
    /// let params = LatticeParameters::from_config(&LatticeConfig::new(PricingRequest::default(), 100));
    /// assert!((params.up * params.down - 1.0).abs() < 1e-15);
    /// assert!(params.probability > 0.0 && params.probability < 1.0);
    /// ```
    pub fn from_config(config: &LatticeConfig) -> Self {
        let request = &config.request;
        let dt = request.expiry / config.steps as f64;
        let up = (request.volatility * dt.sqrt()).exp();
        let down = 1.0 / up;
        let probability = ((request.rate * dt).exp() - down) / (up - down);
        let discount = (-request.rate * dt).exp();

        Self {
            dt,
            up,
            down,
            probability,
            discount,
        }
    }
}

/// Forward price lattice with triangular storage.
///
/// Row `i` holds the `i + 1` underlying prices reachable after `i` steps,
/// ordered by number of down-moves.
#[derive(Clone, Debug, PartialEq)]
pub struct PriceLattice {
    steps: usize,
    nodes: Vec<f64>,
}

impl PriceLattice {
    /// Builds the lattice from `spot` by repeated multiplication.
    ///
    /// Every node is produced by the same recurrence a dense
    /// `(N+1)×(N+1)` array would use, so node values are identical.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pricer_pricing::lattice::PriceLattice;
    ///
    /// let lattice = PriceLattice::build(100.0, 1.1, 1.0 / 1.1, 2);
    /// assert_eq!(lattice.node(0, 0), 100.0);
    /// assert!((lattice.node(2, 0) - 121.0).abs() < 1e-12);
    /// assert!((lattice.node(2, 1) - 100.0).abs() < 1e-12);
    /// assert_eq!(lattice.terminal().len(), 3);
    /// ```
    pub fn build(spot: f64, up: f64, down: f64, steps: usize) -> Self {
        let mut nodes = Vec::with_capacity(Self::triangle(steps + 1));
        nodes.push(spot);

        for step in 1..=steps {
            let previous = Self::triangle(step - 1);
            nodes.push(nodes[previous] * up);
            for down_moves in 1..=step {
                let parent = nodes[previous + down_moves - 1];
                nodes.push(parent * down);
            }
        }

        Self { steps, nodes }
    }

    /// Number of time steps (N).
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Underlying price after `step` steps with `down_moves` down-moves.
    ///
    /// # Panics
    ///
    /// Panics if `step > steps()` or `down_moves > step`.
    #[inline]
    pub fn node(&self, step: usize, down_moves: usize) -> f64 {
        assert!(
            step <= self.steps && down_moves <= step,
            "lattice node ({}, {}) outside triangle of {} steps",
            step,
            down_moves,
            self.steps
        );
        self.nodes[Self::triangle(step) + down_moves]
    }

    /// Prices at the final step, ordered by number of down-moves.
    #[inline]
    pub fn terminal(&self) -> &[f64] {
        &self.nodes[Self::triangle(self.steps)..]
    }

    /// Number of nodes in rows `0..rows`.
    #[inline]
    fn triangle(rows: usize) -> usize {
        rows * (rows + 1) / 2
    }
}

/// Prices a European option on a CRR binomial tree.
///
/// `config.steps == 0` is a precondition violation: the step length is
/// infinite and the result is not meaningful.
///
/// # Examples
///
/// ```rust
/// use pricer_models::instruments::{LatticeConfig, PricingRequest};
/// use pricer_pricing::lattice::binomial::price;
///
/// let value = price(&LatticeConfig::new(PricingRequest::default(), 100));
/// assert!((value - 10.45).abs() < 0.05);
/// ```
pub fn price(config: &LatticeConfig) -> f64 {
    let request = &config.request;
    let params = LatticeParameters::from_config(config);

    trace!(
        steps = config.steps,
        up = params.up,
        down = params.down,
        probability = params.probability,
        "binomial tree parameters"
    );

    let lattice = PriceLattice::build(request.spot, params.up, params.down, config.steps);

    // Terminal payoffs, then roll back one step at a time. Entry j of the
    // rolling buffer is overwritten only after entries j and j+1 are read.
    let mut values: Vec<f64> = lattice
        .terminal()
        .iter()
        .map(|&s| request.option_type.intrinsic(s, request.strike))
        .collect();

    let q = params.probability;
    for step in (0..config.steps).rev() {
        for j in 0..=step {
            values[j] = params.discount * (q * values[j] + (1.0 - q) * values[j + 1]);
        }
    }

    let value = values[0];
    debug!(
        strike = request.strike,
        option_type = %request.option_type,
        steps = config.steps,
        price = value,
        "binomial price"
    );
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytical::black_scholes;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use pricer_core::types::OptionType;
    use pricer_models::instruments::PricingRequest;
    use proptest::prelude::*;

    fn atm(option_type: OptionType) -> PricingRequest {
        PricingRequest::new(100.0, 100.0, 1.0, 0.05, 0.2, option_type)
    }

    #[test]
    fn test_parameters() {
        let params = LatticeParameters::from_config(&LatticeConfig::new(atm(OptionType::Call), 4));
        assert_relative_eq!(params.dt, 0.25);
        assert_relative_eq!(params.up, (0.2_f64 * 0.5).exp(), epsilon = 1e-15);
        assert_relative_eq!(params.down, 1.0 / params.up, epsilon = 1e-15);
        assert_relative_eq!(params.discount, (-0.0125_f64).exp(), epsilon = 1e-15);
        assert!(params.probability > 0.0 && params.probability < 1.0);
    }

    #[test]
    fn test_lattice_shape() {
        let lattice = PriceLattice::build(100.0, 1.2, 1.0 / 1.2, 5);
        assert_eq!(lattice.steps(), 5);
        assert_eq!(lattice.terminal().len(), 6);
        for step in 0..=5 {
            for j in 0..=step {
                let expected = 100.0 * 1.2_f64.powi((step - j) as i32) / 1.2_f64.powi(j as i32);
                assert_relative_eq!(lattice.node(step, j), expected, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_lattice_zero_steps() {
        let lattice = PriceLattice::build(42.0, 1.1, 0.9, 0);
        assert_eq!(lattice.terminal(), &[42.0]);
    }

    #[test]
    #[should_panic(expected = "outside triangle")]
    fn test_lattice_node_out_of_range() {
        let lattice = PriceLattice::build(100.0, 1.1, 0.9, 2);
        lattice.node(1, 2);
    }

    #[test]
    fn test_single_step_matches_one_period_formula() {
        let request = atm(OptionType::Call);
        let config = LatticeConfig::new(request, 1);
        let p = LatticeParameters::from_config(&config);

        let up_payoff = (100.0 * p.up - 100.0_f64).max(0.0);
        let down_payoff = (100.0 * p.down - 100.0_f64).max(0.0);
        let expected = p.discount * (p.probability * up_payoff + (1.0 - p.probability) * down_payoff);

        assert_relative_eq!(price(&config), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_atm_call_default_steps() {
        let value = price(&LatticeConfig::new(atm(OptionType::Call), 100));
        assert_abs_diff_eq!(value, 10.45, epsilon = 0.05);
    }

    #[test]
    fn test_atm_put_default_steps() {
        let value = price(&LatticeConfig::new(atm(OptionType::Put), 100));
        assert_abs_diff_eq!(value, 5.57, epsilon = 0.05);
    }

    #[test]
    fn test_converges_to_closed_form() {
        for option_type in [OptionType::Call, OptionType::Put] {
            let request = atm(option_type);
            let tree = price(&LatticeConfig::new(request, 1000));
            assert_abs_diff_eq!(tree, black_scholes::price(&request), epsilon = 1e-2);
        }
    }

    #[test]
    fn test_put_call_parity_on_tree() {
        // Holds exactly on a European tree because q is risk-neutral
        let call = price(&LatticeConfig::new(atm(OptionType::Call), 250));
        let put = price(&LatticeConfig::new(atm(OptionType::Put), 250));
        assert_abs_diff_eq!(call - put, 100.0 - 100.0 * (-0.05_f64).exp(), epsilon = 1e-9);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_tree_close_to_closed_form(
            spot in 50.0f64..150.0,
            strike in 50.0f64..150.0,
            expiry in 0.1f64..2.0,
            rate in 0.0f64..0.1,
            volatility in 0.1f64..0.5,
        ) {
            let call = PricingRequest::new(spot, strike, expiry, rate, volatility, OptionType::Call);
            let steps = 500;
            let tree = price(&LatticeConfig::new(call, steps));
            let analytic = black_scholes::price(&call);
            // CRR error is O(1/N) with a constant of order S·σ·√T
            let tolerance = spot * volatility * expiry.sqrt() / steps as f64;
            prop_assert!((tree - analytic).abs() < tolerance, "tree={} analytic={}", tree, analytic);
        }
    }
}
