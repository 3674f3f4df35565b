pub mod batch_loader;
pub mod profile_loader;
