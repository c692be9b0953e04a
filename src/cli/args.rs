use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use crate::config::ConfigOverrides;

#[derive(Parser)]
#[command(name = "pomo")]
#[command(about = "A Pomodoro session timer for the terminal")]
#[command(long_about = "pomo - A Pomodoro session timer for the terminal

Alternates work and break phases across a number of sessions, showing a
live progress bar and sending a desktop notification at every phase change.

QUICK START:
  pomo                          25/5 minute sessions, five times
  pomo -w 50 -b 10 -s 3         Longer sessions
  pomo -t \"Write report\"        Skip the title prompt
  pomo config                   Show the effective settings

KEYS:
  p / space    Pause or resume
  q / Esc      Quit

Defaults can be set in ~/.pomo/config.yaml; flags override the file.")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for the run summary and other command results
    #[arg(short, long, value_enum, default_value = "pretty", global = true)]
    pub output: OutputFormat,

    /// Increase log verbosity (-v, -vv, -vvv)
    ///
    /// Logs are written to ~/.pomo/pomo.log. RUST_LOG overrides this.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Read configuration from this file instead of ~/.pomo/config.yaml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub timer: TimerArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

/// Timer options shared by the default command and `start`.
#[derive(Args, Debug, Clone, Default)]
pub struct TimerArgs {
    /// Minutes of work per session
    #[arg(short, long = "work", value_name = "MINUTES", global = true)]
    pub work: Option<u32>,

    /// Minutes of break per session
    #[arg(short, long = "break", value_name = "MINUTES", global = true)]
    pub break_minutes: Option<u32>,

    /// Total number of sessions
    #[arg(short, long, value_name = "COUNT", global = true)]
    pub sessions: Option<u32>,

    /// Session title (skips the title prompt)
    #[arg(short, long, global = true)]
    pub title: Option<String>,

    /// Finish right after the last work phase instead of running its break
    #[arg(long, global = true)]
    pub skip_final_break: bool,

    /// Disable pause/resume
    #[arg(long, global = true)]
    pub no_pause: bool,

    /// Disable desktop notifications
    #[arg(long, global = true, env = "POMO_NO_NOTIFY")]
    pub no_notify: bool,
}

impl TimerArgs {
    /// Config values given on the command line.
    #[must_use]
    pub const fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            work_minutes: self.work,
            break_minutes: self.break_minutes,
            sessions: self.sessions,
            skip_final_break: self.skip_final_break,
            no_pause: self.no_pause,
            no_notify: self.no_notify,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the timer (the default when no command is given)
    ///
    /// Prompts for a session title unless --title is given, then alternates
    /// work and break phases until every session is done or you quit.
    ///
    /// # Examples
    ///
    ///   pomo start
    ///   pomo start -w 45 -b 15 -s 2 --skip-final-break
    #[command(alias = "s")]
    Start,

    /// Show the effective settings after merging the config file and flags
    ///
    /// # Examples
    ///
    ///   pomo config
    ///   pomo config -w 50 -o json
    Config,

    /// Generate shell completions
    ///
    /// # Examples
    ///
    ///   pomo completions zsh > ~/.zsh/completions/_pomo
    ///   source <(pomo completions bash)
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
