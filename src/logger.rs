//! Hierarchical progress output.
//!
//! The pipeline reports progress as an outline on stdout: phase headers at
//! the top level, per-bundle entries nested below, per-file actions below
//! that. Levels deeper than the known prefixes reuse the deepest one.

/// Per-level line prefixes.
const PREFIXES: [&str; 3] = ["==> ", " -> ", "    "];

/// A write-only progress handle pinned to one nesting level.
#[derive(Debug, Clone, Copy, Default)]
pub struct Logger {
    level: usize,
}

impl Logger {
    /// Top-level logger.
    pub fn new() -> Self {
        Self { level: 0 }
    }

    /// A logger one nesting level deeper.
    pub fn sub(&self) -> Self {
        Self {
            level: self.level + 1,
        }
    }

    fn prefix(&self) -> &'static str {
        PREFIXES[self.level.min(PREFIXES.len() - 1)]
    }

    /// Print a progress line at this logger's level.
    pub fn info(&self, msg: impl AsRef<str>) {
        println!("{}{}", self.prefix(), msg.as_ref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sub_levels_stop_at_deepest_prefix() {
        let log = Logger::new();
        assert_eq!(log.prefix(), "==> ");
        assert_eq!(log.sub().prefix(), " -> ");
        assert_eq!(log.sub().sub().prefix(), "    ");
        // Nesting past the known prefixes keeps the deepest indentation.
        assert_eq!(log.sub().sub().sub().prefix(), "    ");
    }
}
