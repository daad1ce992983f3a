//! Toast Dispatch
//!
//! Fire-and-forget UI feedback channel. The session layer reports login and
//! logout outcomes here; access denials never toast (they redirect instead).

/// Toast severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastLevel {
    #[inline]
    pub const fn code(&self) -> &'static str {
        use ToastLevel::*;
        match self {
            Success => "success",
            Error => "error",
            Warning => "warning",
            Info => "info",
        }
    }
}

impl std::fmt::Display for ToastLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Sink for ephemeral user-facing messages.
pub trait ToastSink: Send + Sync {
    fn toast(&self, level: ToastLevel, message: &str);

    fn success(&self, message: &str) {
        self.toast(ToastLevel::Success, message);
    }

    fn error(&self, message: &str) {
        self.toast(ToastLevel::Error, message);
    }

    fn warning(&self, message: &str) {
        self.toast(ToastLevel::Warning, message);
    }

    fn info(&self, message: &str) {
        self.toast(ToastLevel::Info, message);
    }
}

/// Routes toasts to the tracing pipeline. The stand-in sink for headless
/// runs and anywhere no real UI channel is wired up.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingToasts;

impl ToastSink for TracingToasts {
    fn toast(&self, level: ToastLevel, message: &str) {
        match level {
            ToastLevel::Error => tracing::error!(target: "toast", "{message}"),
            ToastLevel::Warning => tracing::warn!(target: "toast", "{message}"),
            ToastLevel::Success | ToastLevel::Info => {
                tracing::info!(target: "toast", level = %level, "{message}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder {
        seen: Mutex<Vec<(ToastLevel, String)>>,
    }

    impl ToastSink for Recorder {
        fn toast(&self, level: ToastLevel, message: &str) {
            self.seen.lock().unwrap().push((level, message.to_string()));
        }
    }

    #[test]
    fn convenience_methods_carry_their_level() {
        let sink = Recorder::default();
        sink.success("a");
        sink.error("b");
        sink.warning("c");
        sink.info("d");

        let seen = sink.seen.lock().unwrap();
        assert_eq!(
            *seen,
            vec![
                (ToastLevel::Success, "a".to_string()),
                (ToastLevel::Error, "b".to_string()),
                (ToastLevel::Warning, "c".to_string()),
                (ToastLevel::Info, "d".to_string()),
            ]
        );
    }

    #[test]
    fn level_codes() {
        assert_eq!(ToastLevel::Success.code(), "success");
        assert_eq!(ToastLevel::Error.code(), "error");
        assert_eq!(ToastLevel::Warning.code(), "warning");
        assert_eq!(ToastLevel::Info.code(), "info");
    }
}
