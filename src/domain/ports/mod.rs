mod id_generator_port;
mod preference_store_port;

pub use id_generator_port::IdGenerator;
pub use preference_store_port::PreferenceStorePort;
