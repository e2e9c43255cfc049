//! Price board for the prices module and the six-month history series.

use serde::{Deserialize, Serialize};

use super::base::KnowledgeBase;
use super::crop::PriceTrend;
use super::display::format_inr;

const MONTHS: [&str; 6] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];

const HISTORY: [(&str, &str, [u32; 6]); 3] = [
    ("rice", "Rice (₹/quintal)", [2800, 2820, 2850, 2900, 2880, 2850]),
    ("wheat", "Wheat (₹/quintal)", [2100, 2120, 2150, 2180, 2160, 2150]),
    ("cotton", "Cotton (₹/quintal)", [6500, 6550, 6600, 6650, 6700, 6700]),
];

/// One month of a history series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricePoint {
    pub month: String,
    pub price: u32,
}

/// Price history for one crop, as consumed by the charting collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceSeries {
    pub crop_id: String,
    pub label: String,
    pub points: Vec<PricePoint>,
}

/// Current price line for one crop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRow {
    pub crop_id: String,
    pub local_name: String,
    pub price: String,
    pub change: String,
    pub trend: PriceTrend,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBoard {
    pub title: String,
    pub rows: Vec<PriceRow>,
    pub history: Vec<PriceSeries>,
}

impl PriceBoard {
    pub fn build(kb: &KnowledgeBase) -> Self {
        let rows = kb
            .iter()
            .map(|(id, record)| PriceRow {
                crop_id: id.to_string(),
                local_name: record.name_hindi.clone(),
                price: format_inr(record.market_price.current),
                change: record.market_price.change.clone(),
                trend: record.market_price.trend(),
            })
            .collect();

        Self {
            title: "Crop Price Trends (Last 6 Months)".to_string(),
            rows,
            history: price_history(),
        }
    }
}

/// The fixed six-month series for rice, wheat and cotton.
pub fn price_history() -> Vec<PriceSeries> {
    HISTORY
        .iter()
        .map(|(id, label, prices)| PriceSeries {
            crop_id: id.to_string(),
            label: label.to_string(),
            points: MONTHS
                .iter()
                .zip(prices.iter())
                .map(|(month, price)| PricePoint {
                    month: month.to_string(),
                    price: *price,
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_lists_every_crop() {
        let board = PriceBoard::build(&KnowledgeBase::fallback());
        let ids: Vec<&str> = board.rows.iter().map(|r| r.crop_id.as_str()).collect();
        assert_eq!(ids, vec!["cotton", "rice", "wheat"]);
    }

    #[test]
    fn cotton_row_is_formatted() {
        let board = PriceBoard::build(&KnowledgeBase::fallback());
        let cotton = &board.rows[0];
        assert_eq!(cotton.price, "₹6,700");
        assert_eq!(cotton.trend, PriceTrend::Positive);
    }

    #[test]
    fn history_has_six_months_per_series() {
        let history = price_history();
        assert_eq!(history.len(), 3);
        for series in &history {
            assert_eq!(series.points.len(), 6);
            assert_eq!(series.points[0].month, "Jan");
        }
        assert_eq!(history[1].points[5].price, 2150);
    }
}
