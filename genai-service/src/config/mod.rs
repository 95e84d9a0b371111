pub mod default_config;
pub mod gen_ai_config;
