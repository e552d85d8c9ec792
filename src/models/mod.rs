pub mod review;
pub mod status;
