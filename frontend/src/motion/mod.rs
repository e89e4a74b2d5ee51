pub mod hooks;
pub mod observer;
pub mod reveal;
pub mod scroll;
