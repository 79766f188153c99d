pub mod classic;
pub mod gradient;
