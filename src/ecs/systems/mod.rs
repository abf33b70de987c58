pub mod demographics;
pub mod elections;
pub mod shocks;
pub mod transition;
