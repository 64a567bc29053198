pub mod animal;
pub mod breeding;
