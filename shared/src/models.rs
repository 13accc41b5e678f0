use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Quote payload served by `/api/stock/{symbol}`. The symbol itself is not
/// part of the body; callers carry it alongside.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stock {
    pub name: String,
    pub price: f64,
    pub change: f64,
}

/// Chart ranges offered by the price history endpoint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Timeframe {
    #[serde(rename = "5m")]
    Minute5,
    #[serde(rename = "1w")]
    Week1,
    #[serde(rename = "1m")]
    Month1,
}

impl Timeframe {
    /// Wire value used in the `timeframe` query parameter.
    pub fn as_query(&self) -> &'static str {
        match self {
            Timeframe::Minute5 => "5m",
            Timeframe::Week1 => "1w",
            Timeframe::Month1 => "1m",
        }
    }
}

impl Default for Timeframe {
    fn default() -> Self {
        // The server falls back to the one-month range when no timeframe is given.
        Timeframe::Month1
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceHistory {
    pub data: Vec<f64>,
    pub timeframe: Timeframe,
}

/// One position in the portfolio, with the server-computed valuation fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    pub symbol: String,
    pub shares: u32,
    pub avg_price: f64,
    pub current_price: f64,
    pub position_value: f64,
    pub gain_loss: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TradeSide {
    #[serde(rename = "BUY")]
    Buy,
    #[serde(rename = "SELL")]
    Sell,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "transaction_id")]
    pub id: String,
    pub symbol: String,
    #[serde(rename = "type")]
    pub side: TradeSide,
    pub quantity: u32,
    pub price: f64,
    pub total: f64,
    pub timestamp: DateTime<Utc>,
}

/// Aggregate view of a set of holdings, for the dashboard summary cards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PortfolioTotals {
    pub total_value: f64,
    pub total_gain_loss: f64,
    pub total_gain_loss_percent: f64,
}

impl PortfolioTotals {
    /// Sum position values against cost basis (`avg_price * shares`). The
    /// percentage is zero when the cost basis is zero.
    pub fn from_holdings(holdings: &[Holding]) -> Self {
        let mut total_value = 0.0;
        let mut total_cost = 0.0;
        for holding in holdings {
            total_value += holding.position_value;
            total_cost += holding.avg_price * f64::from(holding.shares);
        }

        let total_gain_loss = total_value - total_cost;
        let total_gain_loss_percent = if total_cost > 0.0 {
            total_gain_loss / total_cost * 100.0
        } else {
            0.0
        };

        Self {
            total_value,
            total_gain_loss,
            total_gain_loss_percent,
        }
    }
}
