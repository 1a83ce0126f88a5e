//! Application services orchestrating the domain over the ports.

mod posts;
mod validation;

pub use posts::{CoverImageUpload, NewPostInput, PostAdminService, UpdatePostInput};
