pub mod athlete;
pub mod meet;
pub mod result;
