//! Simulated Ctrl-C delivery for Windows processes.
//!
//! Windows has no direct equivalent of `kill(pid, SIGINT)`: console
//! interrupt events are broadcast to every process sharing a console, and a
//! process can be attached to at most one console at a time. [`deliver`]
//! works around both constraints with a single attach/signal/detach
//! transaction: attach to the target's console, suppress the caller's own
//! Ctrl-C handling, broadcast the event to the shared console, wait briefly
//! for the target to exit, then restore the caller's console state.
//!
//! The transaction itself ([`deliver_with`]) is written against the
//! [`ConsoleOps`] capability trait, so it compiles and tests on any host;
//! only [`WindowsConsole`] and the convenience entry points are
//! Windows-only.

mod console;
mod deliver;
mod error;
#[cfg(windows)]
mod forward;
mod log;

pub use console::ConsoleOps;
#[cfg(windows)]
pub use console::WindowsConsole;
#[cfg(windows)]
pub use deliver::{deliver, deliver_with_timeout};
pub use deliver::{deliver_with, Delivery, DEFAULT_EXIT_TIMEOUT};
pub use error::DeliveryError;
#[cfg(windows)]
pub use forward::forward_ctrl_c_to;
