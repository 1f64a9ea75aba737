pub mod parameter;
pub mod part;
pub mod scale;

pub use parameter::*;
pub use part::*;
pub use scale::*;
