pub mod aggregate;

pub use aggregate::AbsenceRecord;
