//! Build invoker adapters.

mod scripted;
mod system;

pub use scripted::ScriptedInvoker;
pub use system::ProcessInvoker;
