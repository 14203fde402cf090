//! DOS-style command interpreter for the terminal prompt.

/// Prompt shown before every command line.
pub const PROMPT: &str = "C:\\>";
/// Version banner printed by `ver` and at startup.
pub const VERSION_BANNER: &str = "Microsoft Windows 95 [Version 4.00.950]";
/// Help line printed when the game starts.
pub const SNAKE_CONTROLS: &str = "Use Arrow Keys to move. Press SPACE to pause. Press Q to quit.";

/// Side effect a command asks the terminal to perform after printing its output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalAction {
    /// Reset the transcript to a bare prompt.
    ClearScreen,
    /// Start the Snake game.
    StartSnake,
    /// Close the hosting window.
    CloseWindow,
}

/// Result of running one command line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandOutcome {
    /// Lines to append after the echoed command.
    pub lines: Vec<String>,
    /// Follow-up the terminal must perform.
    pub action: Option<TerminalAction>,
}

impl CommandOutcome {
    fn print(lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            action: None,
        }
    }

    fn action(action: TerminalAction) -> Self {
        Self {
            lines: Vec::new(),
            action: Some(action),
        }
    }
}

/// Clock reading used by `date` and `time`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockReading {
    /// Calendar year.
    pub year: u32,
    /// Month, 1-based.
    pub month: u32,
    /// Day of month, 1-based.
    pub day: u32,
    /// Hour, 0-23.
    pub hour: u32,
    /// Minute.
    pub minute: u32,
    /// Second.
    pub second: u32,
}

impl ClockReading {
    /// Reads the host clock.
    pub fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            return Self {
                year: date.get_full_year(),
                month: date.get_month() + 1,
                day: date.get_date(),
                hour: date.get_hours(),
                minute: date.get_minutes(),
                second: date.get_seconds(),
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self {
                year: 1995,
                month: 8,
                day: 24,
                hour: 0,
                minute: 0,
                second: 0,
            }
        }
    }

    fn date_text(self) -> String {
        format!("{}/{}/{}", self.month, self.day, self.year)
    }

    fn time_text(self) -> String {
        let (hour, suffix) = match self.hour {
            0 => (12, "AM"),
            1..=11 => (self.hour, "AM"),
            12 => (12, "PM"),
            _ => (self.hour - 12, "PM"),
        };
        format!("{hour}:{:02}:{:02} {suffix}", self.minute, self.second)
    }
}

/// Lines the terminal shows when it first opens.
pub fn banner_lines() -> Vec<String> {
    vec![
        VERSION_BANNER.to_string(),
        "(C) Copyright Microsoft Corp 1981-1995.".to_string(),
        String::new(),
        PROMPT.to_string(),
    ]
}

/// Interprets one command line.
pub fn run_command(line: &str, clock: ClockReading) -> CommandOutcome {
    let trimmed = line.trim();
    let lowered = trimmed.to_lowercase();

    match lowered.as_str() {
        "help" => CommandOutcome::print([
            "Available commands:",
            "  help     - Display this help message",
            "  dir      - List directory contents",
            "  cls      - Clear screen",
            "  ver      - Display version information",
            "  date     - Display current date",
            "  time     - Display current time",
            "  echo     - Display text",
            "  about    - Display information",
            "  snake    - Play Snake game",
            "  exit     - Close terminal",
        ]),
        "dir" => CommandOutcome::print([
            " Volume in drive C is MS-DOS_6",
            " Volume Serial Number is 1E49-15E2",
            " Directory of C:\\",
            "",
            "WINDOWS          <DIR>        12-07-95  10:00a",
            "PROGRA~1         <DIR>        12-07-95  10:00a",
            "AUTOEXEC BAT         2,847  12-07-95  10:00a",
            "CONFIG  SYS         1,234  12-07-95  10:00a",
            "COMMAND COM        94,214  12-07-95  10:00a",
            "        5 file(s)      98,295 bytes",
            "        2 dir(s)  12,345,678 bytes free",
        ]),
        "ver" => CommandOutcome::print([VERSION_BANNER]),
        "date" => CommandOutcome::print([clock.date_text()]),
        "time" => CommandOutcome::print([clock.time_text()]),
        "about" => CommandOutcome::print([
            "+==============================================+",
            "|  RETRO95 DESKTOP                     v1.0.0  |",
            "+==============================================+",
            "|  A simulated desktop with draggable windows, |",
            "|  a taskbar, and a few toy applications.      |",
            "|  Type `snake` to play a game.                |",
            "+==============================================+",
        ]),
        "snake" => CommandOutcome {
            lines: vec![
                "Snake Game Started!".to_string(),
                SNAKE_CONTROLS.to_string(),
            ],
            action: Some(TerminalAction::StartSnake),
        },
        "cls" => CommandOutcome::action(TerminalAction::ClearScreen),
        "exit" => CommandOutcome::action(TerminalAction::CloseWindow),
        "" => CommandOutcome::default(),
        _ if lowered.starts_with("echo ") => CommandOutcome::print([&trimmed[5..]]),
        _ => CommandOutcome::print([
            format!("'{trimmed}' is not recognized as an internal or external command,"),
            "operable program or batch file. Enter help for a list of commands.".to_string(),
        ]),
    }
}
