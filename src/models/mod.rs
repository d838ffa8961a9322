pub mod reading;
pub mod status;
