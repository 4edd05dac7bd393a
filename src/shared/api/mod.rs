mod json_config;
mod response;

pub use json_config::{custom_json_config, INVALID_PAYLOAD_MESSAGE};
pub use response::{ApiResponse, ResponseStatus};
