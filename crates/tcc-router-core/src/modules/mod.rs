pub mod config;
pub mod logger;

pub use config::{
    load_config, save_config, ConfigSource, EnvConfigSource, MapConfigSource, LOADBALANCE_KEY,
    PARTICIPANT_AFFINITY_KEY,
};
pub use logger::init_logging;
