//! Root module for the validation system.
//! Exposes the public API for input validation.

mod file;
mod resource;
mod text;

// Re-export commonly used types and functions
pub use file::{
    validate_file_extension, validate_file_size, validate_mime_type, validate_no_html_frame,
};
pub use resource::{
    validate_email, validate_external_resource_value, validate_http_url, validate_url,
    ResourceKind, ResourceName, ResourceValueKind,
};
pub use text::{validate_no_control_chars, RegexStringValidator, RegexValidator};
