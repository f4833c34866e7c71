//! CLI command implementations.

pub mod cashflows;
pub mod price;
pub mod reprice;
pub mod ytm;

// Re-export submodules for convenience
pub use cashflows::CashflowsArgs;
pub use price::PriceArgs;
pub use reprice::RepriceArgs;
pub use ytm::YtmArgs;

use std::path::{Path, PathBuf};

use bondval_bonds::types::BondTerms;
use bondval_bonds::Bond;
use clap::Args;

use crate::error::{CliError, CliResult};
use crate::output::KeyValue;

/// Bond terms, given as flags or loaded from a JSON file.
///
/// The flag defaults describe a 6% five-year semi-annual bond with a face
/// value of 1000.
#[derive(Args, Debug, Clone)]
pub struct TermsArgs {
    /// JSON file with `face_value`, `coupon_rate`, `maturity`, `coupon_frequency`
    #[arg(long, value_name = "FILE", conflicts_with_all = ["face", "coupon", "maturity", "frequency"])]
    pub terms: Option<PathBuf>,

    /// Face value
    #[arg(long, default_value = "1000")]
    pub face: f64,

    /// Annual coupon rate as a decimal (0.06 for 6%)
    #[arg(long, default_value = "0.06")]
    pub coupon: f64,

    /// Years to maturity
    #[arg(long, default_value = "5")]
    pub maturity: f64,

    /// Coupon payments per year: 1=Annual, 2=SemiAnnual, 4=Quarterly, 12=Monthly
    #[arg(long, default_value = "2")]
    pub frequency: u32,
}

impl TermsArgs {
    /// Resolves the terms from the file or the flags.
    pub fn resolve(&self) -> CliResult<BondTerms> {
        match &self.terms {
            Some(path) => load_terms(path),
            None => Ok(BondTerms::new(
                self.face,
                self.coupon,
                self.maturity,
                self.frequency,
            )),
        }
    }

    /// Builds the bond, validating its terms.
    pub fn bond(&self) -> CliResult<Bond> {
        let terms = self.resolve()?;
        tracing::debug!("bond terms: {terms}");
        Ok(Bond::try_from(terms)?)
    }
}

/// Reads bond terms from a JSON file.
pub fn load_terms(path: &Path) -> CliResult<BondTerms> {
    let content = std::fs::read_to_string(path).map_err(|source| CliError::TermsFile {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| CliError::TermsFormat {
        path: path.to_path_buf(),
        source,
    })
}

/// Table rows describing a bond's terms.
pub fn terms_rows(bond: &Bond) -> Vec<KeyValue> {
    vec![
        KeyValue::from_f64("Face Value", bond.face_value(), 2),
        KeyValue::from_percent("Coupon Rate", bond.coupon_rate()),
        KeyValue::new("Maturity", format!("{}y", bond.maturity())),
        KeyValue::new("Frequency", format!("{}x/year", bond.coupon_frequency())),
        KeyValue::new("Periods", bond.periods().to_string()),
    ]
}

/// Validates a yield value.
pub fn validate_yield(yield_value: f64) -> CliResult<f64> {
    if !yield_value.is_finite() || yield_value <= -1.0 || yield_value > 10.0 {
        return Err(CliError::InvalidYield(yield_value));
    }
    Ok(yield_value)
}

/// Validates a price value.
pub fn validate_price(price: f64) -> CliResult<f64> {
    if !price.is_finite() || price <= 0.0 {
        return Err(CliError::InvalidPrice(price));
    }
    Ok(price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn flags(face: f64, coupon: f64, maturity: f64, frequency: u32) -> TermsArgs {
        TermsArgs {
            terms: None,
            face,
            coupon,
            maturity,
            frequency,
        }
    }

    #[test]
    fn test_terms_from_flags() {
        let terms = flags(950.0, 0.05, 5.0, 1).resolve().unwrap();
        assert_eq!(terms, BondTerms::new(950.0, 0.05, 5.0, 1));
    }

    #[test]
    fn test_invalid_flags_rejected_at_bond() {
        let err = flags(1000.0, 0.06, 5.0, 0).bond().unwrap_err();
        assert!(matches!(err, CliError::Bond(_)));
    }

    #[test]
    fn test_terms_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"face_value": 1000.0, "coupon_rate": 0.08, "maturity": 4.0, "coupon_frequency": 1}}"#
        )
        .unwrap();

        let args = TermsArgs {
            terms: Some(file.path().to_path_buf()),
            ..flags(1.0, 0.0, 1.0, 1)
        };
        assert_eq!(args.resolve().unwrap(), BondTerms::new(1000.0, 0.08, 4.0, 1));
    }

    #[test]
    fn test_missing_terms_file() {
        let err = load_terms(Path::new("/nonexistent/bond.json")).unwrap_err();
        assert!(matches!(err, CliError::TermsFile { .. }));
    }

    #[test]
    fn test_validation() {
        assert!(validate_yield(0.03).is_ok());
        assert!(validate_yield(-0.005).is_ok());
        assert!(validate_yield(-1.0).is_err());
        assert!(validate_yield(f64::NAN).is_err());
        assert!(validate_price(1100.0).is_ok());
        assert!(validate_price(0.0).is_err());
    }
}
