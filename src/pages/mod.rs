//! Page components for routing

mod portfolio;

pub use portfolio::{Portfolio, ProjectLink};
