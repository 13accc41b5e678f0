// Clients for the backends the front end talks to.

pub mod api_client;

pub use api_client::ApiClient;
