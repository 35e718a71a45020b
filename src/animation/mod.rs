pub mod interp;
pub mod ops;
pub mod rng;
pub mod spring;
