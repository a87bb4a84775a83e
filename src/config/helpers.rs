/// Find the line that assigns `section.key` in raw INI text.
///
/// Returns the 1-based line number and the trimmed line, or `(0, ..)` when
/// the key can't be located.
pub(super) fn find_config_line(path: &str, raw_content: &str) -> (usize, String) {
    let mut section = String::new();

    for (idx, line) in raw_content.lines().enumerate() {
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with(';') || trimmed.starts_with('#') {
            continue;
        }

        if let Some(header) = trimmed.strip_prefix('[') {
            if let Some(end) = header.find(']') {
                section = header[..end].trim().to_string();
                continue;
            }
        }

        let Some((lhs, _)) = trimmed.split_once('=') else {
            continue;
        };
        let key = lhs.split('[').next().unwrap_or(lhs).trim();

        if format!("{}.{}", section, key) == path {
            return (idx + 1, trimmed.to_string());
        }
    }

    (0, "<key not found>".into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_config_line() {
        let raw = "; header\n[server]\nhost = \"a\"\nports[] = 1\n\n[client]\nhost = b\n";

        assert_eq!(find_config_line("server.host", raw), (3, "host = \"a\"".into()));
        assert_eq!(find_config_line("server.ports", raw).0, 4);
        assert_eq!(find_config_line("client.host", raw).0, 7);
        assert_eq!(find_config_line("client.port", raw).0, 0);
    }
}
