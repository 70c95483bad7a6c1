//! Domain Entities
//!
//! - `ServerDescriptor` - A host address plus SSH credentials
//! - `PackageInfo` - A prepared installable package
//! - `Task` - One declarative unit of remote work
//! - `GeneratedFile` - A rendered artifact ready to be written

mod generated_file;
mod package_info;
mod server;
mod task;

pub use generated_file::GeneratedFile;
pub use package_info::PackageInfo;
pub use server::{ServerDescriptor, ServerRole};
pub use task::{Guard, Operation, Task};
