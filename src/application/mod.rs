pub mod autocomplete;
pub mod chart_specs;
pub mod submission;

pub use autocomplete::*;
pub use chart_specs::*;
pub use submission::*;
