/// How many incomes and expenses are pulled for the recent-transactions feed.
pub const RECENT_PER_KIND: usize = 5;

/// Maximum length of the merged recent-transactions list.
pub const RECENT_TRANSACTIONS_LIMIT: usize = 10;

/// Decimal places used for percentage figures on the dashboard.
pub const PERCENT_DECIMALS: u32 = 1;
