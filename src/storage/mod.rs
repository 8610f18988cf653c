//! File-backed collaborators of a game session

pub mod clock;
pub mod highscore;
pub mod session_log;

pub use clock::{Clock, FixedClock, SystemClock};
pub use highscore::{CATEGORY, HighScoreStore};
pub use session_log::SessionLog;

/// Run `action` under a `warn`-level subscriber and return everything it printed
#[cfg(test)]
pub(crate) fn warnings_emitted(action: impl FnOnce()) -> String {
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    let buffer = Arc::new(Mutex::new(Vec::new()));
    let writer = Captured(Arc::clone(&buffer));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("warn"))
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();

    tracing::subscriber::with_default(subscriber, action);

    let bytes = buffer.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}
