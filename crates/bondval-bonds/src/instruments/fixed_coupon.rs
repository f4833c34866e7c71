//! Fixed-coupon bond.

use std::fmt;

use crate::cashflows::{CashFlow, CashFlowSchedule};
use crate::error::{BondError, BondResult};
use crate::pricing::{self, YieldResult, YieldSolver};
use crate::risk::{self, BondAnalytics};
use crate::types::BondTerms;

/// A vanilla bond paying a fixed coupon at a regular frequency.
///
/// The bond is immutable: the cash flow schedule is built once at
/// construction and every analytic combines it with a caller-supplied
/// yield. A `Bond` can be shared across threads without locking.
///
/// # Example
///
/// ```rust
/// use bondval_bonds::Bond;
///
/// let bond = Bond::new(1000.0, 0.06, 5.0, 2).unwrap();
///
/// let price = bond.price(0.03);
/// assert!((price - 1138.33).abs() < 0.005);
///
/// let ytm = bond.compute_ytm(price).unwrap();
/// assert!((ytm - 0.03).abs() < 1e-5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Bond {
    terms: BondTerms,
    schedule: CashFlowSchedule,
}

impl Bond {
    /// Creates a bond from its contractual terms.
    ///
    /// # Errors
    ///
    /// Returns [`BondError::InvalidArgument`] when `coupon_frequency` is zero,
    /// when any other term is outside its domain, or when the maturity is
    /// shorter than one coupon period.
    pub fn new(
        face_value: f64,
        coupon_rate: f64,
        maturity: f64,
        coupon_frequency: u32,
    ) -> BondResult<Self> {
        Self::from_terms(BondTerms::new(
            face_value,
            coupon_rate,
            maturity,
            coupon_frequency,
        ))
    }

    /// Creates a bond from a validated set of terms.
    pub fn from_terms(terms: BondTerms) -> BondResult<Self> {
        terms.validate()?;
        let schedule = CashFlowSchedule::build(&terms);
        Ok(Self { terms, schedule })
    }

    /// Returns a builder.
    #[must_use]
    pub fn builder() -> BondBuilder {
        BondBuilder::default()
    }

    /// Contractual terms.
    pub fn terms(&self) -> &BondTerms {
        &self.terms
    }

    /// Principal repaid at maturity.
    pub fn face_value(&self) -> f64 {
        self.terms.face_value
    }

    /// Annual coupon rate as a decimal.
    pub fn coupon_rate(&self) -> f64 {
        self.terms.coupon_rate
    }

    /// Years to the final payment.
    pub fn maturity(&self) -> f64 {
        self.terms.maturity
    }

    /// Payments per year.
    pub fn coupon_frequency(&self) -> u32 {
        self.terms.coupon_frequency
    }

    /// Number of payment dates.
    pub fn periods(&self) -> u32 {
        self.terms.periods()
    }

    /// Coupon paid each period, excluding principal.
    pub fn coupon_amount(&self) -> f64 {
        self.terms.coupon_amount()
    }

    /// The cash flow schedule.
    pub fn schedule(&self) -> &CashFlowSchedule {
        &self.schedule
    }

    /// Cash flows in payment order.
    pub fn cash_flows(&self) -> &[CashFlow] {
        self.schedule.flows()
    }

    /// Payment times in years.
    pub fn times(&self) -> Vec<f64> {
        self.schedule.times()
    }

    /// Payment amounts.
    pub fn amounts(&self) -> Vec<f64> {
        self.schedule.amounts()
    }

    /// Price at a flat annual yield compounded `coupon_frequency` times a year.
    pub fn price(&self, yield_rate: f64) -> f64 {
        pricing::present_value(&self.schedule, yield_rate)
    }

    /// Present value of each cash flow.
    pub fn present_values(&self, yield_rate: f64) -> Vec<f64> {
        pricing::present_values(&self.schedule, yield_rate)
    }

    /// Macaulay duration in years.
    pub fn macaulay_duration(&self, yield_rate: f64) -> f64 {
        risk::macaulay_duration(&self.schedule, yield_rate)
    }

    /// Modified duration in years.
    pub fn modified_duration(&self, yield_rate: f64) -> f64 {
        risk::modified_duration(&self.schedule, yield_rate)
    }

    /// Convexity.
    pub fn convexity(&self, yield_rate: f64) -> f64 {
        risk::convexity(&self.schedule, yield_rate)
    }

    /// Dollar value of one basis point.
    pub fn dv01(&self, yield_rate: f64) -> f64 {
        risk::dv01_from_duration(self.modified_duration(yield_rate), self.price(yield_rate))
    }

    /// Estimated price change for a yield move of `yield_change`, using
    /// modified duration and convexity.
    pub fn price_change_estimate(&self, yield_rate: f64, yield_change: f64) -> f64 {
        risk::price_change_with_convexity(
            self.modified_duration(yield_rate),
            self.convexity(yield_rate),
            self.price(yield_rate),
            yield_change,
        )
    }

    /// Price and all sensitivities at one yield.
    pub fn analytics(&self, yield_rate: f64) -> BondAnalytics {
        let price = self.price(yield_rate);
        let modified_duration = self.modified_duration(yield_rate);
        BondAnalytics {
            yield_rate,
            price,
            macaulay_duration: self.macaulay_duration(yield_rate),
            modified_duration,
            convexity: self.convexity(yield_rate),
            dv01: risk::dv01_from_duration(modified_duration, price),
        }
    }

    /// Yield to maturity implied by `market_price`, with the default solver
    /// (Brent on `[0.0001, 1.0]`, tolerance 1e-6, 100 iterations).
    ///
    /// # Errors
    ///
    /// Returns [`BondError::ConvergenceFailure`] when no yield in the bracket
    /// reprices the bond, or the iteration budget runs out.
    pub fn compute_ytm(&self, market_price: f64) -> BondResult<f64> {
        self.solve_ytm(market_price, &YieldSolver::new())
            .map(|result| result.yield_value)
    }

    /// Yield to maturity with explicit solver parameters.
    ///
    /// `initial_guess` is accepted for signature compatibility with
    /// Newton-style solvers; the bracketed search ignores it.
    pub fn compute_ytm_with(
        &self,
        market_price: f64,
        initial_guess: f64,
        tolerance: f64,
        max_iterations: u32,
    ) -> BondResult<f64> {
        let solver = YieldSolver::new()
            .with_initial_guess(initial_guess)
            .with_tolerance(tolerance)
            .with_max_iterations(max_iterations);
        self.solve_ytm(market_price, &solver)
            .map(|result| result.yield_value)
    }

    /// Yield to maturity with full solver diagnostics.
    pub fn solve_ytm(&self, market_price: f64, solver: &YieldSolver) -> BondResult<YieldResult> {
        solver.solve(self, market_price)
    }
}

impl TryFrom<BondTerms> for Bond {
    type Error = BondError;

    fn try_from(terms: BondTerms) -> BondResult<Self> {
        Self::from_terms(terms)
    }
}

impl fmt::Display for Bond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.terms)
    }
}

/// Builder for [`Bond`].
///
/// `coupon_frequency` defaults to annual; every other term is required.
#[derive(Debug, Clone, Default)]
pub struct BondBuilder {
    face_value: Option<f64>,
    coupon_rate: Option<f64>,
    maturity: Option<f64>,
    coupon_frequency: Option<u32>,
}

impl BondBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the face value.
    #[must_use]
    pub fn face_value(mut self, face_value: f64) -> Self {
        self.face_value = Some(face_value);
        self
    }

    /// Sets the coupon rate as a decimal (0.05 for 5%).
    #[must_use]
    pub fn coupon_rate(mut self, rate: f64) -> Self {
        self.coupon_rate = Some(rate);
        self
    }

    /// Sets the coupon rate as a percentage (5.0 for 5%).
    #[must_use]
    pub fn coupon_percent(mut self, percent: f64) -> Self {
        self.coupon_rate = Some(percent / 100.0);
        self
    }

    /// Sets the maturity in years.
    #[must_use]
    pub fn maturity(mut self, years: f64) -> Self {
        self.maturity = Some(years);
        self
    }

    /// Sets the number of coupon payments per year.
    #[must_use]
    pub fn coupon_frequency(mut self, frequency: u32) -> Self {
        self.coupon_frequency = Some(frequency);
        self
    }

    /// Builds the bond.
    ///
    /// # Errors
    ///
    /// Returns an error if a required term is missing or invalid.
    pub fn build(self) -> BondResult<Bond> {
        let face_value = self.face_value.ok_or_else(|| missing("face_value"))?;
        let coupon_rate = self.coupon_rate.ok_or_else(|| missing("coupon_rate"))?;
        let maturity = self.maturity.ok_or_else(|| missing("maturity"))?;
        let coupon_frequency = self.coupon_frequency.unwrap_or(1);

        Bond::new(face_value, coupon_rate, maturity, coupon_frequency)
    }
}

fn missing(field: &str) -> BondError {
    BondError::invalid_argument(format!("missing required field: {field}"))
}
