mod skip_list_config;

pub use skip_list_config::*;
