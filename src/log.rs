use lazy_static::lazy_static;
use std::env::var;

lazy_static! {
    pub static ref CTRLSEND_DEBUG: bool = var("CTRLSEND_DEBUG").is_ok();
}

macro_rules! debug {
  ($fmt:expr $(, $($arg:tt)*)?) => {
    if *$crate::log::CTRLSEND_DEBUG {
      eprintln!(concat!("[ctrlsend] debug: ", $fmt), $($($arg)*)?)
    }
  };
}
pub(crate) use debug;
