use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Path of the roster CSV file.
    pub roster: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    #[serde(default = "default_max_run_width")]
    pub max_run_width: usize,
}

fn default_separator_char() -> String {
    "-".to_string()
}
fn default_max_run_width() -> usize {
    40
}

impl Default for Config {
    fn default() -> Self {
        Self {
            roster: Self::roster_file().to_string_lossy().to_string(),
            separator_char: default_separator_char(),
            max_run_width: default_max_run_width(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("shiftroster")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".shiftroster")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("shiftroster.conf")
    }

    /// Return the full path of the preferences file (theme state etc.)
    pub fn prefs_file() -> PathBuf {
        Self::config_dir().join("prefs.yaml")
    }

    /// Return the default path of the roster CSV
    pub fn roster_file() -> PathBuf {
        Self::config_dir().join("shifts.csv")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).expect("❌ Failed to read configuration file");
            serde_yaml::from_str(&content).expect("❌ Failed to parse configuration file")
        } else {
            Config::default()
        }
    }

    /// Initialize configuration, preferences and a starter roster file
    pub fn init_all(custom_roster: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // Roster path: user provided or default
        let roster_path = if let Some(name) = custom_roster {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::roster_file()
        };

        let config = Config {
            roster: roster_path.to_string_lossy().to_string(),
            separator_char: default_separator_char(),
            max_run_width: default_max_run_width(),
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config).unwrap();
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Empty preferences file if not exists
        if !Self::prefs_file().exists() && !is_test {
            fs::File::create(Self::prefs_file())?;
        }

        // Starter roster with just the header row if not exists
        if !roster_path.exists() {
            let mut file = fs::File::create(&roster_path)?;
            file.write_all(b"Truck,Start,Driver,Run,Off,Shift,Date\n")?;
        }

        println!("✅ Roster:      {:?}", roster_path);

        Ok(())
    }
}
