//! picocom command-mode key sequences

/// A command-mode keystroke pair understood by picocom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlSequence {
    /// Soft-reset the attached device
    Reset,
    /// Make the terminal program exit
    Quit,
}

impl ControlSequence {
    /// Keys as typed with Ctrl held, for logs
    pub const fn keys(self) -> &'static str {
        match self {
            Self::Reset => "C-a C-p",
            Self::Quit => "C-a C-x",
        }
    }

    /// Bytes written to the program: Ctrl-A (picocom's escape) followed by
    /// Ctrl-P (pulse DTR) or Ctrl-X (exit)
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Reset => "\u{1}\u{10}",
            Self::Quit => "\u{1}\u{18}",
        }
    }
}
