pub mod a001_absences;
