pub mod artifact;
pub mod conversion;
pub mod definition;
pub mod rules;

pub use artifact::*;
pub use conversion::*;
pub use definition::*;
pub use rules::*;
