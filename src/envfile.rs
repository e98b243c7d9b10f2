use std::fs;

use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};

use crate::selection::Selection;

/// Generated `.env` content, rebuilt from scratch on every run.
///
/// The file is replaced wholesale when saved; manual edits from a previous
/// run do not survive.
#[derive(Debug)]
pub struct EnvFile {
    path: Utf8PathBuf,
    lines: Vec<Line>,
}

#[derive(Debug)]
enum Line {
    Entry { key: String, value: String },
    Blank,
}

impl EnvFile {
    pub fn new(path: &Utf8Path) -> Self {
        Self {
            path: path.to_owned(),
            lines: Vec::new(),
        }
    }

    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    pub fn push(&mut self, key: &str, value: &str) {
        self.lines.push(Line::Entry {
            key: key.to_owned(),
            value: value.to_owned(),
        });
    }

    pub fn push_blank(&mut self) {
        self.lines.push(Line::Blank);
    }

    pub fn render(&self) -> String {
        let mut buffer = String::new();
        for line in &self.lines {
            if let Line::Entry { key, value } = line {
                buffer.push_str(key);
                buffer.push('=');
                buffer.push_str(value);
            }
            buffer.push('\n');
        }
        buffer
    }

    /// Write the file, replacing any existing content.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| format!("creating directory {}", parent))?;
        }
        fs::write(&self.path, self.render()).with_context(|| format!("writing {}", self.path))
    }
}

/// Compose the environment file for a finished selection: the connection
/// string, the two auth keys, and a client-id/secret pair per provider.
pub fn compose(path: &Utf8Path, selection: &Selection) -> EnvFile {
    let mut env = EnvFile::new(path);
    env.push("DATABASE_URL", &format!("\"{}\"", selection.database_url));
    env.push("NEXTAUTH_URL", "http://localhost:3000");
    env.push("NEXTAUTH_SECRET", "secret_token");

    for provider in &selection.providers {
        let prefix = provider.env_prefix();
        env.push_blank();
        env.push(&format!("{prefix}_CLIENT_ID"), "");
        env.push(&format!("{prefix}_CLIENT_SECRET"), "");
    }

    env
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::CATALOG;
    use crate::selection::Database;

    fn selection(provider_names: &[&str]) -> Selection {
        Selection {
            database: Database::Postgres,
            database_url: "postgresql://user:pw@localhost:5432/app".to_owned(),
            providers: CATALOG
                .iter()
                .filter(|p| provider_names.contains(&p.name))
                .collect(),
        }
    }

    fn unique_temp_dir() -> Utf8PathBuf {
        use std::time::{SystemTime, UNIX_EPOCH};
        let mut dir = std::env::temp_dir();
        let ts = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        dir.push(format!("authwire-env-test-{ts}"));
        std::fs::create_dir_all(&dir).unwrap();
        Utf8PathBuf::from_path_buf(dir).unwrap()
    }

    #[test]
    fn composed_env_has_connection_string_and_auth_keys() {
        let env = compose(Utf8Path::new("/proj/.env"), &selection(&[]));
        let rendered = env.render();

        assert!(rendered.contains("DATABASE_URL=\"postgresql://user:pw@localhost:5432/app\"\n"));
        assert!(rendered.contains("NEXTAUTH_URL=http://localhost:3000\n"));
        assert!(rendered.contains("NEXTAUTH_SECRET=secret_token\n"));
        assert_eq!(rendered.matches("CLIENT_ID").count(), 0);
    }

    #[test]
    fn each_selected_provider_contributes_an_id_and_secret_pair() {
        let env = compose(Utf8Path::new("/proj/.env"), &selection(&["Google", "Twitch"]));
        let rendered = env.render();

        assert!(rendered.contains("GOOGLE_CLIENT_ID=\n"));
        assert!(rendered.contains("GOOGLE_CLIENT_SECRET=\n"));
        assert!(rendered.contains("TWITCH_CLIENT_ID=\n"));
        assert!(rendered.contains("TWITCH_CLIENT_SECRET=\n"));
        assert!(!rendered.contains("GITHUB_CLIENT_ID"));
    }

    #[test]
    fn saving_overwrites_instead_of_merging() {
        let dir = unique_temp_dir();
        let path = dir.join(".env");
        std::fs::write(path.as_std_path(), "CUSTOM_KEY=kept-by-hand\n").unwrap();

        compose(&path, &selection(&["GitHub"])).save().unwrap();

        let contents = std::fs::read_to_string(path.as_std_path()).unwrap();
        assert!(!contents.contains("CUSTOM_KEY"));
        assert!(contents.starts_with("DATABASE_URL="));
        assert!(contents.contains("GITHUB_CLIENT_ID=\n"));

        let _ = std::fs::remove_dir_all(dir.as_std_path());
    }
}
