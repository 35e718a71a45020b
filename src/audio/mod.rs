pub mod gain;
