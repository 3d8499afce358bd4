use crate::{arguments::Arguments, common::*};

pub struct Environment {
  pub(crate) arguments: Vec<OsString>,
  pub(crate) working_directory: PathBuf,
  #[cfg(test)]
  _working_directory_tempdir: TempDir,
}

impl Environment {
  pub fn production() -> Result<Self> {
    Ok(Environment {
      arguments: env::args_os().collect(),
      working_directory: env::current_dir().context(error::CurrentDir)?,
      #[cfg(test)]
      _working_directory_tempdir: TempDir::new().unwrap(),
    })
  }

  #[cfg(test)]
  pub(crate) fn test(arguments: &[&str]) -> Self {
    let tempdir = tempfile::Builder::new()
      .prefix("invoice-sync-test")
      .tempdir()
      .unwrap();

    Environment {
      arguments: std::iter::once("invoice-sync")
        .chain(arguments.iter().cloned())
        .map(OsString::from)
        .collect(),
      working_directory: tempdir.path().to_owned(),
      _working_directory_tempdir: tempdir,
    }
  }

  pub(crate) fn arguments(&self) -> Result<Arguments> {
    Ok(Arguments::from_iter_safe(&self.arguments)?)
  }

  /// Resolves `path` against the working directory.
  pub(crate) fn resolve(&self, path: &Path) -> PathBuf {
    self.working_directory.join(path)
  }
}
