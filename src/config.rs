use crate::error::ConfigError;

pub const USAGE: &str = "\
usage: console_chess [--no-color] [--no-clear] [--help]

  --no-color   draw the board without ANSI colors (also set by NO_COLOR)
  --no-clear   keep previous frames instead of clearing the screen
  --help       print this message";

/// Console presentation switches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub color: bool,
    pub clear_screen: bool,
    pub help: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            color: true,
            clear_screen: true,
            help: false,
        }
    }
}

impl Config {
    pub fn from_args<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = Config::default();

        for arg in args {
            match arg.as_ref() {
                "--no-color" => config.color = false,
                "--no-clear" => config.clear_screen = false,
                "-h" | "--help" => config.help = true,
                other => return Err(ConfigError::UnknownFlag(other.to_string())),
            }
        }

        Ok(config)
    }

    /// Process arguments plus the `NO_COLOR` convention.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::from_args(std::env::args().skip(1))?;
        if std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            config.color = false;
        }
        Ok(config)
    }
}
