use std::fmt;

/// Scanner state. `Comment` is exclusive: none of the default rules apply
/// while inside a braced comment.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Default,
    Comment,
}

impl Mode {
    /// Characters discarded without a token when found where a token would start.
    pub fn ignored(self) -> &'static str {
        match self {
            Mode::Default => " \r\t\n",
            Mode::Comment => "\r\t\n",
        }
    }

    pub fn ignores(self, c: char) -> bool {
        self.ignored().contains(c)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Mode::Default => write!(f, "default"),
            Mode::Comment => write!(f, "comment"),
        }
    }
}

/// Stack of active modes. The bottom entry is always `Mode::Default` and
/// cannot be popped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeStack(Vec<Mode>);

impl ModeStack {
    pub fn new() -> Self {
        ModeStack(vec![Mode::Default])
    }

    pub fn current(&self) -> Mode {
        self.0.last().copied().unwrap_or_default()
    }

    pub fn push(&mut self, mode: Mode) {
        self.0.push(mode);
    }

    /// Leaves the current mode. Returns `None` if only the bottom mode is left.
    pub fn pop(&mut self) -> Option<Mode> {
        if self.0.len() > 1 {
            self.0.pop()
        } else {
            None
        }
    }

    /// Number of modes pushed on top of the bottom one.
    pub fn depth(&self) -> usize {
        self.0.len() - 1
    }
}

impl Default for ModeStack {
    fn default() -> Self {
        ModeStack::new()
    }
}
