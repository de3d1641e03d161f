//! # register-form
//!
//! A registration form with inline field validation.
//!
//! The form holds the current value of each field and a per-field validation
//! state (`Untouched`, `Valid` or `Invalid(message)`). Each edit stores the new
//! value and immediately re-checks that one field against its rule. Submission
//! is gated on the required fields being filled, and the outcome is delivered
//! through a [`Notifier`].
//!
//! ```rust
//! use register_form::{Field, RecordingNotifier, RegisterForm};
//!
//! let mut form = RegisterForm::new();
//! form.change(Field::Name, "Ada");
//! assert!(form.state(Field::Name).is_invalid());
//!
//! form.change(Field::Name, "Ada Lovelace");
//! form.change(Field::LastName, "King");
//! form.change(Field::Email, "ada@example.com");
//! form.change(Field::Password, "Abcdef1!");
//! form.change(Field::RepeatPassword, "Abcdef1!");
//!
//! let mut notifier = RecordingNotifier::new();
//! assert!(form.submit(&mut notifier));
//! assert_eq!(notifier.last(), Some("Form submitted successfully!"));
//! ```
//!
//! ## Fields
//!
//! | name          | required | rule                                    |
//! |---------------|----------|-----------------------------------------|
//! | `name`        | yes      | letters/spaces, 4-20 chars              |
//! | `lname`       | yes      | letters/spaces, 4-20 chars              |
//! | `age`         | no       | none                                    |
//! | `email`       | yes      | none                                    |
//! | `phone`       | no       | none                                    |
//! | `username`    | no       | none                                    |
//! | `password`    | yes      | 8+ chars, lower, upper, digit, symbol   |
//! | `repPassword` | yes      | equals `password`                       |

pub mod config;
pub mod error;
pub mod field;
pub mod form;
pub mod notify;
pub mod render;
pub mod rules;
pub mod state;

pub use config::FormConfig;
pub use error::{FormError, SubmitError};
pub use field::Field;
pub use form::{FieldView, RegisterForm};
pub use notify::{Acknowledgment, Notifier, RecordingNotifier, TracingNotifier};
pub use rules::{rule_for, Rule};
pub use state::{FieldErrors, FieldState, FormValues, Presentation};
