// Role matching: skill-overlap scoring and the /analyze endpoint.

pub mod handlers;
pub mod matcher;
pub mod scoring;

pub use matcher::RoleMatcher;
