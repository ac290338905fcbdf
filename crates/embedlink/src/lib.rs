//! Top-level facade crate for embedlink.
//!
//! Re-exports the protocol core and the host runtime so users can depend on a single crate.

pub mod core {
    pub use embedlink_core::*;
}

pub mod host {
    pub use embedlink_host::*;
}
