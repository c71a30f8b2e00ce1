//! Field-level and upload validators for web form handling.
//!
//! Every validator here is an independent, stateless predicate: it either
//! returns normally or rejects the input with a [`ValidationError`]
//! carrying the message to surface next to the offending field. Validators
//! never mutate their input beyond advancing an upload's read position;
//! callers rewind between validators that read the same stream.
//!
//! ```
//! use formvet::{validate_no_control_chars, RegexStringValidator};
//!
//! assert!(validate_no_control_chars("a plain string").is_ok());
//! assert!(RegexStringValidator::new().validate("^draft-.*$").is_ok());
//! ```

pub mod error;
pub mod filesize;
pub mod mime;
pub mod settings;
pub mod upload;
pub mod validation;

pub use error::ValidationError;
pub use settings::Settings;
pub use upload::Upload;
pub use validation::{
    validate_email, validate_external_resource_value, validate_file_extension,
    validate_file_size, validate_http_url, validate_mime_type, validate_no_control_chars,
    validate_no_html_frame, validate_url, RegexStringValidator, RegexValidator, ResourceKind,
    ResourceName, ResourceValueKind,
};
