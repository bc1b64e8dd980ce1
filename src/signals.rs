//! Signal delivery as lightweight flags
//!
//! A background watcher thread turns SIGINT into a stop request and
//! SIGWINCH into a pending-resize marker. The thread only ever stores into
//! atomics; all panel state stays on the thread that runs the main loop,
//! which drains each flag with `swap(false)` so a given signal is acted on
//! exactly once.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[cfg(unix)]
use std::io;
#[cfg(unix)]
use std::thread::JoinHandle;

#[cfg(unix)]
use signal_hook::consts::signal::{SIGINT, SIGWINCH};
#[cfg(unix)]
use signal_hook::iterator::Signals;

/// Flags shared between the signal watcher and the main loop.
///
/// Cloning shares the underlying atomics.
#[derive(Debug, Clone, Default)]
pub struct SignalFlags {
    /// Graceful stop requested (SIGINT); equivalent to the quit key
    pub stop: Arc<AtomicBool>,

    /// Terminal resize pending (SIGWINCH); consumed by the main loop's
    /// resize path on platforms where the input backend does not
    /// synthesize a resize event
    pub resize: Arc<AtomicBool>,
}

/// Watcher thread translating process signals into [`SignalFlags`].
///
/// Dropping the watcher closes the signal iterator and joins the thread.
#[cfg(unix)]
#[derive(Debug)]
pub struct SignalWatcher {
    handle: signal_hook::iterator::Handle,
    thread: Option<JoinHandle<()>>,
}

#[cfg(unix)]
impl SignalWatcher {
    pub fn spawn(flags: SignalFlags) -> io::Result<Self> {
        let mut signals = Signals::new([SIGINT, SIGWINCH])?;
        let handle = signals.handle();
        let thread = std::thread::spawn(move || {
            use std::sync::atomic::Ordering;

            for signal in signals.forever() {
                match signal {
                    SIGINT => {
                        tracing::debug!("SIGINT received, requesting stop");
                        flags.stop.store(true, Ordering::SeqCst);
                    }
                    SIGWINCH => {
                        tracing::trace!("SIGWINCH received");
                        flags.resize.store(true, Ordering::SeqCst);
                    }
                    _ => {}
                }
            }
        });
        Ok(Self {
            handle,
            thread: Some(thread),
        })
    }
}

#[cfg(unix)]
impl Drop for SignalWatcher {
    fn drop(&mut self) {
        self.handle.close();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::Ordering;

    #[test]
    fn test_flags_start_clear() {
        let flags = SignalFlags::default();
        assert!(!flags.stop.load(Ordering::SeqCst));
        assert!(!flags.resize.load(Ordering::SeqCst));
    }

    #[test]
    fn test_flags_clone_shares_state() {
        let flags = SignalFlags::default();
        let shared = flags.clone();
        shared.resize.store(true, Ordering::SeqCst);
        assert!(flags.resize.swap(false, Ordering::SeqCst));
        assert!(!shared.resize.load(Ordering::SeqCst));
    }

    #[cfg(unix)]
    #[test]
    fn test_watcher_sets_resize_flag() {
        let flags = SignalFlags::default();
        let _watcher = SignalWatcher::spawn(flags.clone()).expect("spawn watcher");

        signal_hook::low_level::raise(SIGWINCH).expect("raise SIGWINCH");

        // The watcher thread needs a moment to observe the signal.
        for _ in 0..100 {
            if flags.resize.load(Ordering::SeqCst) {
                return;
            }
            std::thread::sleep(std::time::Duration::from_millis(10));
        }
        panic!("resize flag never set");
    }
}
