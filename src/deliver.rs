use std::time::Duration;

use crate::console::ConsoleOps;
use crate::error::DeliveryError;
use crate::log::debug;

/// How long to wait for the target to exit after the Ctrl-C was broadcast.
/// Expiry is not a failure; the target is free to handle the interrupt and
/// keep running.
pub const DEFAULT_EXIT_TIMEOUT: Duration = Duration::from_millis(2000);

// AttachConsole failure classes with a known meaning: ERROR_ACCESS_DENIED
// means the calling process already has a console, ERROR_INVALID_HANDLE means
// the target has none to attach to. Both fall back to a direct send; any
// other code is terminal.
const ERROR_ACCESS_DENIED: u32 = 5;
const ERROR_INVALID_HANDLE: u32 = 6;

/// Outcome of a successful delivery. `target_exited` is false when the
/// target was still running once the exit timeout elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delivery {
    pub target_exited: bool,
}

/// Send a simulated Ctrl-C to `pid` and wait up to [`DEFAULT_EXIT_TIMEOUT`]
/// for it to exit.
#[cfg(windows)]
pub fn deliver(pid: u32) -> Result<Delivery, DeliveryError> {
    deliver_with(&mut crate::console::WindowsConsole, pid, DEFAULT_EXIT_TIMEOUT)
}

/// Like [`deliver`], with a caller-chosen exit wait bound.
#[cfg(windows)]
pub fn deliver_with_timeout(pid: u32, exit_timeout: Duration) -> Result<Delivery, DeliveryError> {
    deliver_with(&mut crate::console::WindowsConsole, pid, exit_timeout)
}

/// The attach/signal/detach transaction, expressed against [`ConsoleOps`] so
/// it can run against a fake console in tests.
///
/// Console attachment and Ctrl-C suppression are process-global state, so two
/// concurrent calls from the same process race each other's restore step;
/// callers must serialize invocations. Whatever the outcome, the calling
/// process's console attachment and suppression flag are restored before
/// returning, and the process handle is closed.
pub fn deliver_with<C: ConsoleOps>(
    ops: &mut C,
    pid: u32,
    exit_timeout: Duration,
) -> Result<Delivery, DeliveryError> {
    let Some(handle) = ops.open_process(pid) else {
        return Err(DeliveryError::ProcessOpenFailed(ops.last_error()));
    };

    if !ops.attach_console(pid) {
        let code = ops.last_error();
        let result = match code {
            ERROR_ACCESS_DENIED | ERROR_INVALID_HANDLE => {
                // No shared console to broadcast on; address the event to the
                // target's own process group instead.
                debug!(
                    "Attach to console of pid {} failed with code {}, sending Ctrl-C directly",
                    pid, code
                );
                if ops.generate_ctrl_c(pid) {
                    Ok(Delivery {
                        target_exited: false,
                    })
                } else {
                    Err(DeliveryError::FallbackSignalFailed(ops.last_error()))
                }
            }
            _ => Err(DeliveryError::ConsoleAttachFailed(code)),
        };
        ops.close_handle(handle);
        return result;
    }

    // The caller now shares the target's console. Every exit path below must
    // detach again, or the caller keeps the target's console identity.
    if !ops.set_ctrl_handler_suppressed(true) {
        let code = ops.last_error();
        ops.free_console();
        ops.close_handle(handle);
        return Err(DeliveryError::SuppressionFailed(code));
    }

    // Group 0: all processes on the shared console, target included. The
    // caller is protected by the suppression flag set above.
    if !ops.generate_ctrl_c(0) {
        let code = ops.last_error();
        ops.set_ctrl_handler_suppressed(false);
        ops.free_console();
        ops.close_handle(handle);
        return Err(DeliveryError::SignalFailed(code));
    }

    let target_exited = ops.wait_for_exit(&handle, exit_timeout);
    if !target_exited {
        debug!(
            "pid {} still running {:?} after Ctrl-C was sent",
            pid, exit_timeout
        );
    }

    ops.set_ctrl_handler_suppressed(false);
    ops.free_console();
    ops.close_handle(handle);

    Ok(Delivery { target_exited })
}
