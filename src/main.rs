use eyre::Result;

#[cfg(windows)]
fn main() -> Result<()> {
    use eyre::{eyre, WrapErr};
    use std::process::exit;

    const EXIT_DELIVERY_FAILED: i32 = 11;

    let arg = std::env::args()
        .nth(1)
        .ok_or_else(|| eyre!("Usage: ctrlsend <pid>"))?;
    let pid: u32 = arg
        .parse()
        .wrap_err_with(|| format!("Invalid pid: {:?}", arg))?;

    match ctrlsend::deliver(pid) {
        Ok(delivery) => {
            if !delivery.target_exited {
                eprintln!(
                    "ctrlsend: pid {} still running {:?} after Ctrl-C",
                    pid,
                    ctrlsend::DEFAULT_EXIT_TIMEOUT
                );
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("ctrlsend: {}", e);
            exit(EXIT_DELIVERY_FAILED)
        }
    }
}

#[cfg(not(windows))]
fn main() -> Result<()> {
    Err(eyre::eyre!(
        "ctrlsend sends console Ctrl-C events and only runs on Windows"
    ))
}
