#![cfg_attr(test, allow(clippy::unwrap_used))]

mod sensitive;

pub mod config;
pub mod forms;
pub mod strength;
pub mod submission;
pub mod telemetry;
pub mod util;
pub mod validation;

pub use forms::{validate, validate_with, Field, FormInput, FormKind};
pub use sensitive::Sensitive;
pub use strength::{evaluate_strength, Category, Strength, Tone};
pub use submission::{submit, Accepted};
pub use validation::PasswordPolicy;
pub use validator::{Validate, ValidationErrors};
