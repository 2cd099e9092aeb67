pub mod pointer;

pub use pointer::pointer_handler;
