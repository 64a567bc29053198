pub mod breeding;
