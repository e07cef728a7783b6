pub mod consumer_price;
pub mod create;
pub mod delete;
pub mod get_all;
pub mod get_by_id;
pub mod patch;
pub mod search;
pub mod update;
pub mod update_name;

// Re-export handler functions for use in routing
pub use consumer_price::consumer_price;
pub use create::create;
pub use delete::delete;
pub use get_all::get_all;
pub use get_by_id::get_by_id;
pub use patch::patch;
pub use search::search;
pub use update::update;
pub use update_name::update_name;

use crate::error::ApiError;

/// Path ids arrive as raw strings; the original API answers a plain 400
/// rather than the framework's default rejection for non-numeric ids.
pub(crate) fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::bad_request("invalid id"))
}
