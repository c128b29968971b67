//! AdvService: advertisement CRUD plus request validation.

mod crud;
mod validation;
pub use crud::AdvService;
pub use validation::{CreateAdv, FieldViolation, PatchAdv, RequestValidator, ValidationError};
