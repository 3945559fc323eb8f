pub mod journey;
pub mod products;
pub mod serve;

pub use journey::journey;
pub use products::products;
pub use serve::serve;
