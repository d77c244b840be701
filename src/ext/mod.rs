mod hashset;

pub use hashset::HashSetExt;
