use super::*;

impl IniConfig {
    /// Get a typed value using `section.key` notation.
    ///
    /// Automatically handles both `snake_case` and `kebab-case` key names.
    ///
    /// # Examples
    /// ```no_run
    /// # use ini_cfg::IniConfig;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// # let config = IniConfig::from_file("config.ini")?;
    /// let host: String = config.get("database.host")?;
    /// let port: u16 = config.get("database.port")?;
    /// let hosts: Vec<String> = config.get("database.replicas")?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    /// `MissingKey` if the path does not exist, `Type` if the value can't be
    /// converted to `T` (with the source line when the config came from text).
    pub fn get<T>(&self, path: &str) -> Result<T, IniError>
    where
        T: TryFrom<Value, Error = IniError>,
    {
        let value = self.get_value(path)?.clone();
        T::try_from(value).map_err(|e| enhance_error_with_line_info(e, path, &self.raw_content))
    }

    /// Get an optional typed value - returns `None` if the key doesn't exist.
    pub fn get_optional<T>(&self, path: &str) -> Result<Option<T>, IniError>
    where
        T: TryFrom<Value, Error = IniError>,
    {
        match self.get(path) {
            Ok(value) => Ok(Some(value)),
            Err(IniError::MissingKey { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Get a value with a fallback default.
    ///
    /// # Examples
    /// ```
    /// # use ini_cfg::IniConfig;
    /// let config: IniConfig = "[server]\ntimeout=60\n".parse().unwrap();
    /// assert_eq!(config.get_or("server.timeout", 30u64), 60);
    /// assert_eq!(config.get_or("server.debug", false), false);
    /// ```
    pub fn get_or<T>(&self, path: &str, default: T) -> T
    where
        T: TryFrom<Value, Error = IniError>,
    {
        self.get(path).unwrap_or(default)
    }

    /// Get the decoded `Value` behind `section.key`.
    ///
    /// Section names may themselves contain dots; every split point is
    /// tried from the left and the first section/key pair that exists wins.
    pub fn get_value(&self, path: &str) -> Result<&Value, IniError> {
        for (idx, _) in path.match_indices('.') {
            let (section, key) = (&path[..idx], &path[idx + 1..]);
            let Some(table) = self.document.section(section) else {
                continue;
            };

            for candidate in key_variants(key) {
                if let Some(value) = table.get(&candidate) {
                    return Ok(value);
                }
            }
        }

        Err(IniError::MissingKey {
            path: path.to_string(),
        })
    }

    /// Section names in document order.
    pub fn sections(&self) -> Vec<String> {
        self.document.sections.keys().cloned().collect()
    }

    /// Keys of one section in document order.
    pub fn keys(&self, section: &str) -> Result<Vec<String>, IniError> {
        self.document
            .section(section)
            .map(|s| s.keys().cloned().collect())
            .ok_or_else(|| IniError::MissingKey {
                path: section.to_string(),
            })
    }

    /// Check if a `section.key` path exists.
    pub fn has(&self, path: &str) -> bool {
        self.get_value(path).is_ok()
    }
}

/// The key as written, plus its snake_case and kebab-case spellings.
fn key_variants(key: &str) -> Vec<String> {
    let mut out = vec![key.to_string()];

    let snake = key.replace('-', "_");
    if snake != key {
        out.push(snake);
    }

    let kebab = key.replace('_', "-");
    if kebab != key {
        out.push(kebab);
    }

    out
}

/// Enhance type errors with line number information from the config text.
fn enhance_error_with_line_info(e: IniError, path: &str, raw_content: &str) -> IniError {
    match e {
        IniError::Type { message, hint, .. } => {
            let (line, snippet) = helpers::find_config_line(path, raw_content);
            if line > 0 {
                IniError::Type {
                    message: format!("{}\n  → {}", message, snippet),
                    line,
                    hint,
                }
            } else {
                IniError::Type { message, line: 0, hint }
            }
        }
        other => other,
    }
}
