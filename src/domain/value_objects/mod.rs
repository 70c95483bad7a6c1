//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod package;
mod proxy;
mod topology;

pub use package::{PackageKind, PackageMap};
pub use proxy::ProxySettings;
pub use topology::TopologyMode;
