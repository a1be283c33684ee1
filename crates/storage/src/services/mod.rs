pub mod athletes;
pub mod meets;
pub mod records;
