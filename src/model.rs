mod api_error;
pub use api_error::ApiError;
mod api_result;
pub use api_result::ApiResult;
mod id;
pub use id::Id;
mod quote;
pub use quote::{Quote, QuoteEnvelope};
mod quote_record;
pub use quote_record::QuoteRecord;
