//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - Joined row variants where a listing needs denormalized fields
//! - `Deserialize` create/update DTOs (with `validator` rules on the
//!   fields a submission cannot omit)

pub mod campaign;
pub mod contact;
pub mod invoice;
pub mod message;
pub mod package;
pub mod profile;
pub mod project;
pub mod site_setting;
pub mod status;
pub mod template;
pub mod template_category;
pub mod template_order;
