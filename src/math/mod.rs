pub mod gamma;
pub mod normal;
