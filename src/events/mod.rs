pub mod keyboard;
pub mod pointer;

pub use keyboard::wire_mode_keys;
pub use pointer::PointerListener;
