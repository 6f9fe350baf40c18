//! Output mode routing.

/// How command results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Machine-readable JSON only
    Json,
    /// `key=value` lines, stable for scripts
    #[default]
    Plain,
    /// Tables and colors for a terminal
    Pretty,
}

impl OutputMode {
    /// Resolve the mode from flags and the terminal.
    ///
    /// `--json` wins over everything. `--plain` and `TERM=dumb` force plain
    /// text, otherwise a TTY gets pretty output.
    pub fn resolve(json_flag: bool, plain_flag: bool, is_tty: bool, term_is_dumb: bool) -> Self {
        if json_flag {
            return Self::Json;
        }
        if plain_flag || term_is_dumb || !is_tty {
            return Self::Plain;
        }
        Self::Pretty
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    pub fn is_pretty(&self) -> bool {
        matches!(self, Self::Pretty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_exclusive() {
        assert_eq!(OutputMode::resolve(true, true, true, false), OutputMode::Json);
    }

    #[test]
    fn test_plain_flag_forces_plain() {
        assert_eq!(OutputMode::resolve(false, true, true, false), OutputMode::Plain);
    }

    #[test]
    fn test_term_dumb_forces_plain() {
        assert_eq!(OutputMode::resolve(false, false, true, true), OutputMode::Plain);
    }

    #[test]
    fn test_tty_gets_pretty() {
        assert_eq!(OutputMode::resolve(false, false, true, false), OutputMode::Pretty);
    }

    #[test]
    fn test_pipe_gets_plain() {
        assert_eq!(OutputMode::resolve(false, false, false, false), OutputMode::Plain);
    }
}
