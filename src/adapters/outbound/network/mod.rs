/// Network adapters for the monitoring server HTTP API
mod admin_server_client;

pub use admin_server_client::AdminServerClient;
