//! Verbose transcript of each hashing step.

use std::io::{self, Write};

pub(crate) struct Transcript<W: Write = io::Stderr> {
    enabled: bool,
    started: bool,
    out: W,
}

impl Transcript {
    pub(crate) fn new(enabled: bool) -> Self {
        Self::with_writer(enabled, io::stderr())
    }
}

impl<W: Write> Transcript<W> {
    pub(crate) fn with_writer(enabled: bool, out: W) -> Self {
        Self {
            enabled,
            started: false,
            out,
        }
    }

    pub(crate) fn note(&mut self, message: impl AsRef<str>) {
        if !self.enabled {
            return;
        }
        self.start();
        let _ = writeln!(self.out, "- {}", message.as_ref());
    }

    pub(crate) fn block(&mut self, title: &str, content: &str) {
        if !self.enabled {
            return;
        }
        self.start();
        let _ = writeln!(self.out, "--- {title} ---");
        let _ = writeln!(self.out, "{content}");
        let _ = writeln!(self.out, "--- end {title} ---");
    }

    fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        let _ = writeln!(self.out, "transcript:");
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}
