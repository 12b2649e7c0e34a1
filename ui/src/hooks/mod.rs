// Reusable hooks shared across screens.

pub mod use_pool_query;
pub mod use_pool_transfers;
pub mod use_tokens;
