//!
//! The reduction of benchmark targets of one run.
//!

///
/// The reduction of benchmark targets of one run.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Reduction {
    #[default]
    /// The arithmetic mean.
    Mean,
    /// The median.
    Median,
    /// The minimum.
    Min,
    /// The maximum.
    Max,
    /// The sum.
    Sum,
    /// The geometric mean. Only meaningful for positive targets.
    GeometricMean,
}

impl Reduction {
    ///
    /// Reduces the targets to a single value. Returns zero if there are no targets.
    ///
    pub fn apply(&self, targets: &[f64]) -> f64 {
        if targets.is_empty() {
            return 0.0;
        }
        let count = targets.len() as f64;

        match self {
            Self::Mean => targets.iter().sum::<f64>() / count,
            Self::Median => {
                let mut sorted = targets.to_vec();
                sorted.sort_by(f64::total_cmp);
                let middle = sorted.len() / 2;
                if sorted.len() % 2 == 0 {
                    (sorted[middle - 1] + sorted[middle]) / 2.0
                } else {
                    sorted[middle]
                }
            }
            Self::Min => targets.iter().copied().fold(f64::INFINITY, f64::min),
            Self::Max => targets.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            Self::Sum => targets.iter().sum(),
            Self::GeometricMean => {
                (targets.iter().map(|target| target.ln()).sum::<f64>() / count).exp()
            }
        }
    }
}

impl std::str::FromStr for Reduction {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.to_lowercase().as_str() {
            "mean" => Ok(Self::Mean),
            "median" => Ok(Self::Median),
            "min" => Ok(Self::Min),
            "max" => Ok(Self::Max),
            "sum" => Ok(Self::Sum),
            "geometric-mean" => Ok(Self::GeometricMean),
            string => anyhow::bail!(
                "Unknown reduction `{string}`. Supported reductions: {}",
                [
                    Self::Mean,
                    Self::Median,
                    Self::Min,
                    Self::Max,
                    Self::Sum,
                    Self::GeometricMean
                ]
                .iter()
                .map(|element| element.to_string())
                .collect::<Vec<String>>()
                .join(", ")
            ),
        }
    }
}

impl std::fmt::Display for Reduction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mean => write!(f, "mean"),
            Self::Median => write!(f, "median"),
            Self::Min => write!(f, "min"),
            Self::Max => write!(f, "max"),
            Self::Sum => write!(f, "sum"),
            Self::GeometricMean => write!(f, "geometric-mean"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::Reduction;

    #[test]
    fn reductions() {
        let targets = [4.0, 1.0, 16.0];

        assert_eq!(Reduction::Mean.apply(&targets), 7.0);
        assert_eq!(Reduction::Median.apply(&targets), 4.0);
        assert_eq!(Reduction::Median.apply(&[1.0, 2.0, 3.0, 10.0]), 2.5);
        assert_eq!(Reduction::Min.apply(&targets), 1.0);
        assert_eq!(Reduction::Max.apply(&targets), 16.0);
        assert_eq!(Reduction::Sum.apply(&targets), 21.0);
        assert!((Reduction::GeometricMean.apply(&targets) - 4.0).abs() < 1e-9);
    }

    #[test]
    fn empty_is_zero() {
        assert_eq!(Reduction::Max.apply(&[]), 0.0);
        assert_eq!(Reduction::GeometricMean.apply(&[]), 0.0);
    }

    #[test]
    fn parsing() {
        assert_eq!(
            Reduction::from_str("Geometric-Mean").expect("Valid"),
            Reduction::GeometricMean
        );
        assert!(Reduction::from_str("mode").is_err());
    }
}
