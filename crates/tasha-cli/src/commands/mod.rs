pub mod new;
pub mod version;
