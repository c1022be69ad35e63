//! Country directory outbound adapter.
//!
//! A thin reqwest implementation of the `CountryDirectory` port.

mod dto;
mod http_source;

pub use http_source::CountryDirectoryHttpSource;
