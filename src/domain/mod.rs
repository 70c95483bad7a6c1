//! Domain Layer
//!
//! Pure deployment logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Core domain entities (ServerDescriptor, PackageInfo, Task, GeneratedFile)
//! - `value_objects/` - Immutable value types (TopologyMode, PackageKind, PackageMap)
//! - `services/` - Generation services (inventory, task lists, playbooks, dispatch plan)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - Downloads, remote copies and the automation engine
//!    all go through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
