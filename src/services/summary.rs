//! Cross-ticker summary: P&L table with a TOTAL row, win ratios, averages

use serde::Serialize;

use crate::common::math::round_to;
use crate::models::result::AnalysisRecord;

pub const TOTAL_LABEL: &str = "TOTAL";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub stock: String,
    pub value_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    /// Per-stock total return, followed by a single TOTAL row
    pub pnl: Vec<SummaryRow>,
    pub win_ratios: Vec<SummaryRow>,
    pub average_return_pct: f64,
    pub average_accuracy_pct: f64,
}

impl RunSummary {
    /// Summarise records; any record already labelled TOTAL is ignored so
    /// the total is never counted twice
    pub fn from_records(records: &[AnalysisRecord]) -> Self {
        let stocks: Vec<&AnalysisRecord> = records
            .iter()
            .filter(|r| r.stock != TOTAL_LABEL)
            .collect();

        let mut pnl: Vec<SummaryRow> = stocks
            .iter()
            .map(|r| SummaryRow {
                stock: r.stock.clone(),
                value_pct: r.total_return_pct,
            })
            .collect();
        let total: f64 = pnl.iter().map(|row| row.value_pct).sum();
        pnl.push(SummaryRow {
            stock: TOTAL_LABEL.to_string(),
            value_pct: round_to(total, 2),
        });

        let win_ratios = stocks
            .iter()
            .map(|r| SummaryRow {
                stock: r.stock.clone(),
                value_pct: r.win_ratio_pct,
            })
            .collect();

        let mean = |f: fn(&AnalysisRecord) -> f64| {
            if stocks.is_empty() {
                0.0
            } else {
                round_to(stocks.iter().map(|r| f(r)).sum::<f64>() / stocks.len() as f64, 2)
            }
        };

        Self {
            pnl,
            win_ratios,
            average_return_pct: mean(|r| r.total_return_pct),
            average_accuracy_pct: mean(|r| r.accuracy_pct),
        }
    }

    pub fn total_return_pct(&self) -> f64 {
        self.pnl
            .last()
            .map(|row| row.value_pct)
            .unwrap_or(0.0)
    }
}
