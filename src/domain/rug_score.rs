//! Rug Pull Scorer
//!
//! Scores rug pull risk from a token's liquidity, trading volume, and holder
//! count. Rules are additive: every rule that applies fires, and the total
//! score decides the risk level.

use num_format::{Locale, ToFormattedString};
use serde::{Deserialize, Serialize};

/// Default minimum liquidity in USD before the low-liquidity rule fires
pub const DEFAULT_MIN_LIQUIDITY_USD: f64 = 5_000.0;

/// Default volume-to-liquidity multiple that flags a possible pump & dump
pub const DEFAULT_VOLUME_LIQUIDITY_RATIO: f64 = 10.0;

/// Default minimum holder count before the centralization rule fires
pub const DEFAULT_MIN_HOLDER_COUNT: u64 = 50;

/// Score contributed by the low-liquidity rule
pub const LOW_LIQUIDITY_SEVERITY: u32 = 3;

/// Score contributed by the volume-vs-liquidity rule
pub const VOLUME_SPIKE_SEVERITY: u32 = 3;

/// Score contributed by the low-holder-count rule
pub const LOW_HOLDERS_SEVERITY: u32 = 2;

/// Token metrics used for rug pull scoring
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TokenMetrics {
    /// Pooled liquidity in USD
    pub liquidity: f64,
    /// Trading volume over the last 24h in USD
    pub volume_24h: f64,
    /// Number of distinct holders
    pub holders: u64,
}

/// Risk level derived from the accumulated score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Classify a score: >= 5 is High, >= 3 is Medium, anything below is Low
    pub fn from_score(score: u32) -> Self {
        if score >= 5 {
            RiskLevel::High
        } else if score >= 3 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

/// Individual risk factor identified during scoring
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskFactor {
    /// Short name of the rule that fired
    pub name: String,
    /// Score contribution
    pub severity: u32,
    /// User-facing Markdown line
    pub message: String,
}

/// Scoring result with the triggered factors in rule order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Accumulated score across all triggered rules
    pub score: u32,
    /// Level classification of the score
    pub level: RiskLevel,
    /// Triggered factors, in fixed rule order
    pub factors: Vec<RiskFactor>,
}

impl RiskAssessment {
    /// Render the Markdown summary: a level banner followed by the triggered
    /// reason lines. A Low result renders the banner alone, even when a rule
    /// fired (a single low-severity factor does not reach Medium).
    pub fn summary(&self) -> String {
        let reasons: Vec<&str> = self.factors.iter().map(|f| f.message.as_str()).collect();
        match self.level {
            RiskLevel::High => format!("🚨 **High Rug Risk!** 🚨\n{}", reasons.join("\n")),
            RiskLevel::Medium => {
                format!("⚠️ **Medium Rug Risk.** Caution advised.\n{}", reasons.join("\n"))
            }
            RiskLevel::Low => "✅ **Low Rug Risk** - No major red flags detected.".to_string(),
        }
    }
}

/// Configuration for rug pull scoring
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RugScorer {
    /// Liquidity below this triggers the low-liquidity rule (default: $5,000)
    pub min_liquidity_usd: f64,
    /// Volume above liquidity times this ratio triggers the pump & dump rule (default: 10x)
    pub volume_liquidity_ratio: f64,
    /// Holder count below this triggers the centralization rule (default: 50)
    pub min_holder_count: u64,
}

impl Default for RugScorer {
    fn default() -> Self {
        Self {
            min_liquidity_usd: DEFAULT_MIN_LIQUIDITY_USD,
            volume_liquidity_ratio: DEFAULT_VOLUME_LIQUIDITY_RATIO,
            min_holder_count: DEFAULT_MIN_HOLDER_COUNT,
        }
    }
}

impl RugScorer {
    /// Create a scorer with default thresholds
    pub fn new() -> Self {
        Self::default()
    }

    /// Score a token's metrics
    pub fn assess(&self, metrics: &TokenMetrics) -> RiskAssessment {
        let mut factors = Vec::new();
        let mut score: u32 = 0;

        if metrics.liquidity < self.min_liquidity_usd {
            factors.push(RiskFactor {
                name: "Low liquidity".to_string(),
                severity: LOW_LIQUIDITY_SEVERITY,
                message: format!(
                    "🔴 **Very Low Liquidity (<${})** - High rug risk.",
                    (self.min_liquidity_usd as u64).to_formatted_string(&Locale::en)
                ),
            });
            score += LOW_LIQUIDITY_SEVERITY;
        }

        // Multiplying instead of dividing keeps liquidity == 0 well-defined:
        // any positive volume against zero liquidity triggers the rule.
        if metrics.volume_24h > metrics.liquidity * self.volume_liquidity_ratio {
            factors.push(RiskFactor {
                name: "Volume spike".to_string(),
                severity: VOLUME_SPIKE_SEVERITY,
                message: "🔶 **High Trading Volume vs. Low Liquidity** - Possible pump & dump."
                    .to_string(),
            });
            score += VOLUME_SPIKE_SEVERITY;
        }

        if metrics.holders < self.min_holder_count {
            factors.push(RiskFactor {
                name: "Low holder count".to_string(),
                severity: LOW_HOLDERS_SEVERITY,
                message: format!(
                    "🟠 **Low Number of Holders (<{})** - Risk of centralization.",
                    self.min_holder_count
                ),
            });
            score += LOW_HOLDERS_SEVERITY;
        }

        RiskAssessment {
            score,
            level: RiskLevel::from_score(score),
            factors,
        }
    }
}
