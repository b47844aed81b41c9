//! Unified error handling for Hanami.
//!
//! - **Error Categories**: classification used to pick a recovery hint
//! - **Domain-specific Errors**: network and validation errors
//! - **Unified Error Type**: `HanamiError` consolidates them
//! - **Error Context**: operation/component metadata for the log
//! - **Result Type Alias**: `HanamiResult<T>`
//!
//! Every service and form follows the same pattern: a failure is turned into
//! a human-readable message with [`describe`], stored in the component's
//! error slot, and the loading flag is reset regardless of outcome.
//!
//! | Category | Description | Retryable |
//! |----------|-------------|-----------|
//! | Network | Connection, timeout | Yes |
//! | Server | Backend errors (5xx) | Yes |
//! | Client | Undecodable payloads | No |
//! | User | Form validation | No |
//! | Configuration | Bad environment values | No |

mod category;
mod context;
mod hanami_error;
mod network;
mod result;
mod validation;

pub use category::ErrorCategory;
pub use context::ErrorContext;
pub use hanami_error::HanamiError;
pub use network::NetworkError;
pub use result::{HanamiResult, ResultExt};
pub use validation::ValidationError;

/// Convert an error into the message shown in a form or list banner.
///
/// Falls back to `fallback` when the error carries no message of its own.
pub fn describe(err: &HanamiError, fallback: &str) -> String {
    let message = err.user_message();
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}
