//! Report generation for sizing results.

use rust_decimal::Decimal;
use serde::Serialize;
use sizing_core::format::{format_amount, format_eur, format_eur_signed, format_percent, format_percent_signed};
use sizing_core::{Grade, GradeProfile, GradeTable, MultiplierTable, SizingMethod, TradeDistribution};

use crate::{Comparison, Recommendation};

const RULE: &str = "═══════════════════════════════════════════════════════════\n";
const THIN_RULE: &str = "───────────────────────────────────────────────────────────\n";

/// Position size for a single calculator input.
#[derive(Debug, Clone, Serialize)]
pub struct SizeReport {
    pub account_value: Decimal,
    pub risk_percent: Decimal,
    pub recommendation: Recommendation,
    pub profile: GradeProfile,
}

impl SizeReport {
    pub fn new(
        account_value: Decimal,
        risk_percent: Decimal,
        recommendation: Recommendation,
        grades: &GradeTable,
    ) -> Self {
        let profile = grades.profile(recommendation.grade).clone();
        Self {
            account_value,
            risk_percent,
            recommendation,
            profile,
        }
    }

    /// Generate a text summary.
    pub fn summary(&self) -> String {
        let rec = &self.recommendation;
        let mut s = String::new();

        s.push_str(RULE);
        s.push_str(&format!("  {} POSITION SIZE\n", self.profile.name.to_uppercase()));
        s.push_str(RULE);
        s.push('\n');

        s.push_str("INPUT\n");
        s.push_str(THIN_RULE);
        s.push_str(&format!(
            "  Account Value:       {}\n",
            format_amount(self.account_value)
        ));
        s.push_str(&format!("  Base Risk (D-Trade): {}%\n", self.risk_percent.normalize()));
        s.push_str(&format!(
            "  Sizing Method:       {}\n",
            rec.method.display_name()
        ));
        s.push('\n');

        s.push_str("RECOMMENDED RISK\n");
        s.push_str(THIN_RULE);
        s.push_str(&format!(
            "  Risk Amount:         {}\n",
            format_eur(rec.risk_amount)
        ));
        s.push_str(&format!(
            "  Share of Account:    {} of account\n",
            format_percent(rec.pct_of_account)
        ));
        s.push_str(&format!(
            "  Base Risk x Mult.:   {} x {}\n",
            format_eur(rec.base_risk),
            rec.multiplier.normalize()
        ));
        s.push('\n');

        s.push_str("GRADE PROFILE\n");
        s.push_str(THIN_RULE);
        s.push_str(&format!("  Win Rate:            {}%\n", self.profile.win_rate.normalize()));
        s.push_str(&format!("  Risk/Reward:         {}\n", self.profile.risk_reward()));
        s.push_str(&format!("  Expected Value:      {:.2}\n", self.profile.ev));
        s.push_str(&format!("  Frequency:           {}\n", self.profile.frequency));
        s.push_str(&format!("  Description:         {}\n", self.profile.description));
        s.push_str(&format!("  Examples:            {}\n", self.profile.examples));
        s.push('\n');

        s.push_str(RULE);
        s
    }

    /// Export to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Comparison of all sizing methods.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub comparison: Comparison,
}

impl ComparisonReport {
    pub fn new(comparison: Comparison) -> Self {
        Self { comparison }
    }

    /// Generate a text summary.
    pub fn summary(&self) -> String {
        let c = &self.comparison;
        let dist = &c.distribution;
        let mut s = String::new();

        s.push_str(RULE);
        s.push_str("              SIZING METHOD COMPARISON                      \n");
        s.push_str(RULE);
        s.push('\n');

        s.push_str("ASSUMPTIONS\n");
        s.push_str(THIN_RULE);
        s.push_str(&format!(
            "  Trades per Year:     {} ({}x A, {}x B, {}x C, {}x D)\n",
            dist.total(),
            dist.count(Grade::A),
            dist.count(Grade::B),
            dist.count(Grade::C),
            dist.count(Grade::D)
        ));
        s.push_str(&format!("  Account Value:       {}\n", format_amount(c.account_value)));
        s.push_str(&format!("  Base Risk (D-Trade): {}%\n", c.risk_percent.normalize()));
        s.push('\n');

        s.push_str("RESULTS\n");
        s.push_str(THIN_RULE);
        for outcome in c.iter() {
            s.push_str(&format!(
                "  {:<20} {:>16}  {:>10}\n",
                format!("{}:", outcome.method.display_name()),
                format_eur_signed(outcome.total_pl),
                format_percent_signed(outcome.performance_pct)
            ));
        }
        s.push('\n');

        let best = c.outcome(c.best());
        s.push_str("KEY INSIGHTS\n");
        s.push_str(THIN_RULE);
        s.push_str(&format!("  Best Method:         {}\n", best.method.display_name()));
        if let Some(share) = best.share_of_pl(Grade::A) {
            s.push_str(&format!(
                "  A-Trade Share:       {} of P&L from {} of trades\n",
                format_percent(share),
                format_percent(dist.share_pct(Grade::A))
            ));
        }
        let equal = c.outcome(SizingMethod::Equal);
        s.push_str(&format!(
            "  Equal vs Best:       {} vs {}\n",
            format_eur_signed(equal.total_pl),
            format_eur_signed(best.total_pl)
        ));
        s.push('\n');

        s.push_str(RULE);
        s
    }

    /// Export to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Export to CSV, one row per method with per-grade contributions.
    pub fn to_csv(&self) -> Result<String, csv::Error> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(["method", "total_pl", "performance_pct", "a_pl", "b_pl", "c_pl", "d_pl"])?;

        for outcome in self.comparison.iter() {
            let mut record = vec![
                outcome.method.as_str().to_string(),
                outcome.total_pl.round_dp(2).to_string(),
                outcome.performance_pct.round_dp(2).to_string(),
            ];
            record.extend(outcome.contributions.iter().map(|(_, pl)| pl.round_dp(2).to_string()));
            writer.write_record(&record)?;
        }

        let bytes = writer.into_inner().map_err(|e| e.into_error())?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// Reference of all grades and multipliers.
#[derive(Debug, Clone, Serialize)]
pub struct GradeReport {
    pub grades: GradeTable,
    pub multipliers: MultiplierTable,
    pub distribution: TradeDistribution,
}

impl GradeReport {
    pub fn new(grades: GradeTable, multipliers: MultiplierTable, distribution: TradeDistribution) -> Self {
        Self {
            grades,
            multipliers,
            distribution,
        }
    }

    /// Generate a text summary.
    pub fn summary(&self) -> String {
        let mut s = String::new();

        s.push_str(RULE);
        s.push_str("                     TRADE GRADES                           \n");
        s.push_str(RULE);
        s.push('\n');

        for (grade, profile) in self.grades.iter() {
            s.push_str(&format!("{} ({})\n", profile.name, profile.color));
            s.push_str(THIN_RULE);
            s.push_str(&format!("  Win Rate:            {}%\n", profile.win_rate.normalize()));
            s.push_str(&format!("  R:R:                 {}\n", profile.risk_reward()));
            s.push_str(&format!("  EV:                  {:.2}\n", profile.ev));
            s.push_str(&format!("  Frequency:           {}\n", profile.frequency));
            s.push_str(&format!(
                "  Trades per Year:     {}\n",
                self.distribution.count(grade)
            ));
            s.push_str(&format!("  {}\n", profile.description));
            s.push_str(&format!("  e.g. {}\n", profile.examples));
            s.push('\n');
        }

        s.push_str("MULTIPLIERS\n");
        s.push_str(THIN_RULE);
        s.push_str(&format!("  {:<20} {:>5} {:>5} {:>5} {:>5}\n", "", "A", "B", "C", "D"));
        for method in SizingMethod::all() {
            let row = self.multipliers.row(*method);
            s.push_str(&format!(
                "  {:<20} {:>5} {:>5} {:>5} {:>5}\n",
                method.display_name(),
                format!("{}x", row.a.normalize()),
                format!("{}x", row.b.normalize()),
                format!("{}x", row.c.normalize()),
                format!("{}x", row.d.normalize())
            ));
        }
        s.push('\n');

        s.push_str(RULE);
        s
    }

    /// Export to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
