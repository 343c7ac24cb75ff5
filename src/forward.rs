use crossbeam::channel::{bounded, select, Receiver, Sender};
use lazy_static::lazy_static;
use windows::Win32::Foundation::BOOL;
use windows::Win32::System::Console::{
    SetConsoleCtrlHandler, CTRL_BREAK_EVENT, CTRL_CLOSE_EVENT, CTRL_C_EVENT, CTRL_LOGOFF_EVENT,
    CTRL_SHUTDOWN_EVENT,
};

use crate::deliver::deliver;
use crate::log::debug;

#[derive(Debug)]
enum Signal {
    CtrlC,
}

lazy_static! {
    static ref _C: (Sender<Signal>, Receiver<Signal>) = bounded(100);
    static ref SEND: Sender<Signal> = _C.0.clone();
    static ref RECEIVE: Receiver<Signal> = _C.1.clone();
}

extern "system" fn console_ctrl_handler(ctrl_type: u32) -> BOOL {
    match ctrl_type {
        CTRL_C_EVENT | CTRL_BREAK_EVENT | CTRL_CLOSE_EVENT | CTRL_SHUTDOWN_EVENT
        | CTRL_LOGOFF_EVENT => {
            debug!("Control event received: {}", ctrl_type);
            SEND.send(Signal::CtrlC)
                .expect("Failed to send CtrlC signal");
            BOOL(1) // Indicate that the event has been handled
        }
        _ => BOOL(0), // Event has not been handled
    }
}

/// Install a console ctrl handler that forwards the next Ctrl-C style event
/// to `pid`. Delivery blocks for up to the exit timeout, so it runs on a
/// dedicated thread rather than inside the handler.
pub fn forward_ctrl_c_to(pid: u32) -> windows::core::Result<()> {
    unsafe {
        SetConsoleCtrlHandler(Some(console_ctrl_handler), true)?;
    }

    std::thread::spawn(move || {
        select! {
          recv(RECEIVE) -> msg => {
            if let Ok(signal) = msg {
              debug!("Received signal {:?}", signal);
              match deliver(pid) {
                Ok(delivery) => debug!(
                  "Forwarded Ctrl-C to pid {} (target exited: {})",
                  pid, delivery.target_exited
                ),
                Err(e) => debug!("Failed to forward Ctrl-C to pid {}: {}", pid, e),
              }
            } else {
              debug!("Receive error: {:?}", msg);
            }
          },
        }
    });

    Ok(())
}
