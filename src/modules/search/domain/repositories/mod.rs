pub mod http_transport;

pub use http_transport::HttpTransport;
#[cfg(test)]
pub use http_transport::MockHttpTransport;
