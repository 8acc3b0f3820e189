pub mod check;
pub mod init;
pub mod rules;

pub use check::run_check;
pub use init::{generate_config_template, run_init, run_init_impl};
pub use rules::{format_rules, run_rules};
