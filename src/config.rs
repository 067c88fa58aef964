use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub no_smooth: bool,
    pub smooth_ms: Option<u64>,
    pub idle_ms: Option<u64>,
    pub top_threshold: Option<usize>,
    pub sections: Option<usize>,
    pub log_file: Option<PathBuf>,
}

impl ConfigFlags {
    /// Merge `other` over `self`: booleans are OR'ed, options from `other` win.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            no_smooth: self.no_smooth || other.no_smooth,
            smooth_ms: other.smooth_ms.or(self.smooth_ms),
            idle_ms: other.idle_ms.or(self.idle_ms),
            top_threshold: other.top_threshold.or(self.top_threshold),
            sections: other.sections.or(self.sections),
            log_file: other.log_file.clone().or_else(|| self.log_file.clone()),
        }
    }

    /// Smooth scroll duration after applying `--no-smooth`.
    pub fn effective_smooth_ms(&self) -> Option<u64> {
        if self.no_smooth {
            Some(0)
        } else {
            self.smooth_ms
        }
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("landing").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("landing")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("landing").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(".config").join("landing").join("config");
        }
    }

    PathBuf::from(".landingrc")
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".landingrc")
}

/// Read flags from a config file. A missing file yields the defaults.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(|line| line.split_whitespace().map(ToOwned::to_owned))
        .collect::<Vec<_>>();
    Ok(parse_flag_tokens(&tokens))
}

/// Pick known flags out of a token list. Unknown tokens and unparsable
/// numbers are ignored.
pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i].as_str();
        if token == "--no-smooth" {
            flags.no_smooth = true;
            i += 1;
            continue;
        }

        let (name, inline) = match token.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (token, None),
        };
        let takes_value = matches!(
            name,
            "--smooth-ms" | "--idle-ms" | "--top-threshold" | "--sections" | "--log-file"
        );
        if !takes_value {
            i += 1;
            continue;
        }

        let value = match inline {
            Some(value) => Some(value),
            None => {
                let next = tokens.get(i + 1).map(String::as_str);
                if next.is_some() {
                    i += 1;
                }
                next
            }
        };
        if let Some(value) = value {
            match name {
                "--smooth-ms" => flags.smooth_ms = value.parse().ok(),
                "--idle-ms" => flags.idle_ms = value.parse().ok(),
                "--top-threshold" => flags.top_threshold = value.parse().ok(),
                "--sections" => flags.sections = value.parse().ok(),
                _ => flags.log_file = Some(PathBuf::from(value)),
            }
        }
        i += 1;
    }
    flags
}
