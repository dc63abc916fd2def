pub mod disposition;
pub mod task;

pub use disposition::Disposition;
pub use task::TaskDescriptor;
