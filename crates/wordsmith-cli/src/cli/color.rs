//! Terminal styling for rendered command output.

use std::io::IsTerminal;

use clap::ValueEnum;

/// Value of `--color`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Resolve against stdout, where rendered tables are written.
    pub fn palette(self) -> Palette {
        match self {
            ColorChoice::Always => Palette::ANSI,
            ColorChoice::Never => Palette::PLAIN,
            ColorChoice::Auto if std::io::stdout().is_terminal() => Palette::ANSI,
            ColorChoice::Auto => Palette::PLAIN,
        }
    }
}

/// What a span of rendered output is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    /// Counter names, case identifiers.
    Label,
    /// Counts, converted samples.
    Value,
    /// Secondary text such as case labels.
    Muted,
}

impl Role {
    fn sgr(self) -> &'static str {
        match self {
            Role::Label => "\x1b[34m",
            Role::Value => "\x1b[32m",
            Role::Muted => "\x1b[2m",
        }
    }
}

const RESET: &str = "\x1b[0m";

/// Whether rendered spans carry ANSI escapes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub const PLAIN: Self = Self { enabled: false };
    pub const ANSI: Self = Self { enabled: true };

    /// `text` wrapped in the escape for `role`, or unchanged when plain.
    pub fn paint(self, role: Role, text: &str) -> String {
        if self.enabled {
            format!("{}{text}{RESET}", role.sgr())
        } else {
            text.to_string()
        }
    }
}
