/// Sector bucket for holdings without a classification
pub const UNKNOWN_SECTOR: &str = "Unknown";

/// Decimal places for displayed currency figures
pub const CURRENCY_DECIMALS: u32 = 2;

/// Decimal places for percentage shares
pub const PERCENT_DECIMALS: u32 = 2;

/// Exchange whose symbols carry delivery-volume sub-detail
pub const DELIVERY_EXCHANGE: &str = "NSE";

/// Sector palette, assigned by descending-value rank and recycled
pub const CHART_PALETTE: [&str; 10] = [
    "#4385be", "#da702c", "#879a39", "#8b7ec8", "#d14d41", "#3aa99f", "#c437c2", "#d0a215",
    "#66800b", "#878580",
];

/// Bar color for non-negative P&L
pub const GAIN_COLOR: &str = "#879a39";

/// Bar color for negative P&L
pub const LOSS_COLOR: &str = "#d14d41";

/// Series color for invested value in the comparison chart
pub const INVESTED_SERIES_COLOR: &str = "#8b7ec8";

/// Series color for current value in the comparison chart
pub const CURRENT_SERIES_COLOR: &str = "#4385be";
