use serde::Serialize;

/// Tie conventions of percentile-of-score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PercentileKind {
    /// Midpoint of `strict` and `weak`.
    #[default]
    Mean,
    /// Average rank of the score among ties.
    Rank,
    /// Share of values `<= score`.
    Weak,
    /// Share of values `< score`.
    Strict,
}

impl PercentileKind {
    pub fn name(self) -> &'static str {
        match self {
            PercentileKind::Mean => "mean",
            PercentileKind::Rank => "rank",
            PercentileKind::Weak => "weak",
            PercentileKind::Strict => "strict",
        }
    }
}

pub fn percentile_rank(distribution: &[f64], score: f64) -> f64 {
    percentile_rank_with(distribution, score, PercentileKind::Mean)
}

pub fn percentile_rank_with(distribution: &[f64], score: f64, kind: PercentileKind) -> f64 {
    if distribution.is_empty() {
        return 0.0;
    }
    let n = distribution.len() as f64;
    let mut below = 0usize;
    let mut equal = 0usize;
    for &v in distribution {
        if v < score {
            below += 1;
        } else if v == score {
            equal += 1;
        }
    }
    let left = below as f64;
    let right = (below + equal) as f64;
    match kind {
        PercentileKind::Mean => 100.0 * (left + 0.5 * equal as f64) / n,
        PercentileKind::Strict => 100.0 * left / n,
        PercentileKind::Weak => 100.0 * right / n,
        PercentileKind::Rank => {
            let bump = if equal > 0 { 1.0 } else { 0.0 };
            (left + right + bump) * 50.0 / n
        }
    }
}

pub fn average_score(distribution: &[f64]) -> f64 {
    if distribution.is_empty() {
        return 0.0;
    }
    let sum: f64 = distribution.iter().sum();
    sum / distribution.len() as f64
}

#[cfg(test)]
#[path = "../../tests/src_inline/aggregate/stats.rs"]
mod tests;
