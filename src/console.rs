use std::time::Duration;

/// The console and process operations the delivery state machine runs
/// against. On Windows this is backed by the Win32 console subsystem; tests
/// substitute a recording fake with scripted return codes.
///
/// The boolean-returning operations mirror the Win32 calling convention:
/// `false` means the call failed and `last_error` returns the code.
pub trait ConsoleOps {
    type Handle;

    /// Open a handle to `pid` with synchronize and terminate rights.
    fn open_process(&mut self, pid: u32) -> Option<Self::Handle>;

    /// Attach the calling process to the console of `pid`. The calling
    /// process can be attached to at most one console at a time.
    fn attach_console(&mut self, pid: u32) -> bool;

    /// Toggle the flag that makes the OS ignore Ctrl-C events addressed to
    /// the calling process.
    fn set_ctrl_handler_suppressed(&mut self, suppressed: bool) -> bool;

    /// Broadcast a Ctrl-C event to `process_group`. Group id 0 means every
    /// process sharing the calling process's current console.
    fn generate_ctrl_c(&mut self, process_group: u32) -> bool;

    /// Wait for the process behind `handle` to terminate. Returns true if it
    /// exited before `timeout` elapsed.
    fn wait_for_exit(&mut self, handle: &Self::Handle, timeout: Duration) -> bool;

    /// Detach the calling process from its current console.
    fn free_console(&mut self) -> bool;

    fn close_handle(&mut self, handle: Self::Handle);

    /// The OS error code of the most recent failed operation.
    fn last_error(&mut self) -> u32;
}

// WaitForSingleObject takes a u32 millisecond count; clamp rather than wrap
// when a caller passes a timeout past ~49.7 days.
#[cfg(any(windows, test))]
fn wait_timeout_ms(timeout: Duration) -> u32 {
    u32::try_from(timeout.as_millis()).unwrap_or(u32::MAX)
}

#[cfg(windows)]
pub use real::WindowsConsole;

#[cfg(windows)]
mod real {
    use std::time::Duration;

    use windows::Win32::Foundation::{
        CloseHandle, GetLastError, HANDLE, WAIT_OBJECT_0,
    };
    use windows::Win32::System::Console::{
        AttachConsole, FreeConsole, GenerateConsoleCtrlEvent, SetConsoleCtrlHandler, CTRL_C_EVENT,
    };
    use windows::Win32::System::Threading::{
        OpenProcess, WaitForSingleObject, PROCESS_SYNCHRONIZE, PROCESS_TERMINATE,
    };

    use super::ConsoleOps;
    use crate::log::debug;

    /// Console capability backed by the Win32 console subsystem.
    pub struct WindowsConsole;

    impl ConsoleOps for WindowsConsole {
        type Handle = HANDLE;

        fn open_process(&mut self, pid: u32) -> Option<HANDLE> {
            unsafe { OpenProcess(PROCESS_SYNCHRONIZE | PROCESS_TERMINATE, false, pid) }.ok()
        }

        fn attach_console(&mut self, pid: u32) -> bool {
            unsafe { AttachConsole(pid) }.is_ok()
        }

        fn set_ctrl_handler_suppressed(&mut self, suppressed: bool) -> bool {
            unsafe { SetConsoleCtrlHandler(None, suppressed) }.is_ok()
        }

        fn generate_ctrl_c(&mut self, process_group: u32) -> bool {
            unsafe { GenerateConsoleCtrlEvent(CTRL_C_EVENT, process_group) }.is_ok()
        }

        fn wait_for_exit(&mut self, handle: &HANDLE, timeout: Duration) -> bool {
            let wait = unsafe { WaitForSingleObject(*handle, super::wait_timeout_ms(timeout)) };
            wait == WAIT_OBJECT_0
        }

        fn free_console(&mut self) -> bool {
            unsafe { FreeConsole() }.is_ok()
        }

        fn close_handle(&mut self, handle: HANDLE) {
            if let Err(e) = unsafe { CloseHandle(handle) } {
                debug!("Failed to close process handle: {:?}", e);
            }
        }

        fn last_error(&mut self) -> u32 {
            unsafe { GetLastError() }.0
        }
    }
}
