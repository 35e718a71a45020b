pub mod background;
pub mod intro;
pub mod outro;
pub mod particles;
pub mod showcase;
