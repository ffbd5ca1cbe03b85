pub mod error;
pub mod languages;
pub mod model;
pub mod traits;
