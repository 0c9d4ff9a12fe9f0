pub mod check;
pub mod init_config;
pub mod preview;
pub mod run;
