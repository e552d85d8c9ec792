pub mod panic_hook;
pub mod scroll;
