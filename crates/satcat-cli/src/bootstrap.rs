use std::path::Path;

use anyhow::Context;
use satcat_config::SatcatConfig;

/// Load `.env` from the working directory if present, then the layered config.
pub fn load_config() -> anyhow::Result<SatcatConfig> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    load_dotenv(&cwd)?;

    SatcatConfig::load().context("failed to load satcat configuration")
}

/// Export the variables of `dir/.env` into the process environment.
/// Variables already set are left alone; a missing file is not an error.
fn load_dotenv(dir: &Path) -> anyhow::Result<()> {
    let env_path = dir.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dotenv_values_reach_the_environment() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(".env"),
            "SATCAT_BOOTSTRAP_DOTENV_MARKER=loaded\n",
        )
        .unwrap();

        load_dotenv(dir.path()).unwrap();
        assert_eq!(
            std::env::var("SATCAT_BOOTSTRAP_DOTENV_MARKER").as_deref(),
            Ok("loaded")
        );
    }

    #[test]
    fn missing_dotenv_is_fine() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_dotenv(dir.path()).is_ok());
    }

    #[test]
    fn malformed_dotenv_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".env"), "NOT A VALID LINE\n").unwrap();
        let err = load_dotenv(dir.path()).unwrap_err();
        assert!(format!("{err:#}").contains("failed to load dotenv file"));
    }
}
