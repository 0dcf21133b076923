//! Form validation.
//!
//! A fluent API for checking record fields against declarative rules. Every
//! rule of every field runs in one pass; each failing field reports its
//! first violation.
//!
//! # Example
//!
//! ```
//! use gobarber_lib::validation::Validator;
//!
//! let result = Validator::new()
//!     .field("name", "")
//!         .required("Name is required")
//!     .field("email", "not-an-email")
//!         .required("E-mail is required")
//!         .email("Enter a valid e-mail")
//!     .validate();
//!
//! assert!(result.is_invalid());
//! assert_eq!(result.errors().len(), 2);
//! ```

mod error_map;
mod result;
mod validatable;
mod validator;

pub use error_map::FieldErrorMap;
pub use result::{FieldError, ValidationResult};
pub use validatable::Validatable;
pub use validator::{FieldBuilder, Validator};
