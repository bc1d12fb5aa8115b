pub mod cataas_network;
pub mod reqwest_client;
pub mod transport;
pub mod types;
