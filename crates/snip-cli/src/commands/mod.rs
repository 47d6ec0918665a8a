//! Command implementations for snip-cli

pub mod delete;
pub mod extract;
pub mod insert;
pub mod list;
pub mod rename;
pub mod show;

pub use delete::run_delete;
pub use extract::run_extract;
pub use insert::run_insert;
pub use list::run_list;
pub use rename::run_rename;
pub use show::run_show;
