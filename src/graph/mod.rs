mod concrete;
mod contract;
mod masked;
mod reversed;

pub use concrete::Graph;
pub use contract::GraphContract;
pub use masked::MaskedView;
pub use reversed::ReversedView;
