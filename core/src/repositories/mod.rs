pub mod user;

pub use user::{MockUserDirectory, UserDirectoryTrait};
