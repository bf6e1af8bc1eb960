pub mod aggregate;

pub use aggregate::Member;
