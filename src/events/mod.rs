pub mod nav;
pub mod pointer;
pub mod scroll;
