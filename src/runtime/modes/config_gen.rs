use std::path::Path;

use anyhow::{Result, bail};

use crate::config::StaticConfig;

/// 输出示例配置；指定路径时写文件，已存在且未加 --force 时拒绝覆盖
pub fn run_generate_config(output: Option<&Path>, force: bool) -> Result<()> {
    let Some(path) = output else {
        print!("{}", StaticConfig::generate_sample_config());
        return Ok(());
    };

    if path.exists() && !force {
        bail!(
            "{} already exists, pass --force to overwrite",
            path.display()
        );
    }

    StaticConfig::default().save_to_file(path)?;
    println!("Configuration written to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refuses_to_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "# keep me").unwrap();

        assert!(run_generate_config(Some(&path), false).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# keep me");

        run_generate_config(Some(&path), true).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("[database]"));
    }
}
