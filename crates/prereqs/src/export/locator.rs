use std::{
    fs, io,
    path::{Path, PathBuf},
};

use log::{debug, info};

use super::Error;

/// Provides the directory a department's document is written into.
pub trait OutputLocator {
    /// Returns an existing directory for the given institution and department,
    /// creating it if necessary.
    fn locate(&self, institution: &str, department: &str) -> Result<PathBuf, Error>;
}

/// Lays out output as `root/<institution>/<department>`.
///
/// A department directory that does not exist yet is created as a copy of
/// the template directory, or empty when no template is set. Existing
/// directories are reused as they are.
#[derive(Debug, Clone)]
pub struct TemplateScaffold {
    root: PathBuf,
    template: Option<PathBuf>,
}

impl TemplateScaffold {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            template: None,
        }
    }

    /// Sets the directory copied into every new department directory.
    pub fn with_template(mut self, template: impl Into<PathBuf>) -> Self {
        self.template = Some(template.into());
        self
    }
}

impl OutputLocator for TemplateScaffold {
    fn locate(&self, institution: &str, department: &str) -> Result<PathBuf, Error> {
        let directory = self.root.join(institution).join(department);
        if directory.is_dir() {
            return Ok(directory);
        }

        let created = match &self.template {
            Some(template) => {
                info!(template:? = template, directory:? = directory; "Scaffolding department directory");
                copy_dir(template, &directory)
            }
            None => {
                debug!(directory:? = directory; "Creating department directory");
                fs::create_dir_all(&directory)
            }
        };

        created.map_err(|source| Error::Location {
            path: directory.clone(),
            source,
        })?;
        Ok(directory)
    }
}

fn copy_dir(from: &Path, to: &Path) -> io::Result<()> {
    let entries = fs::read_dir(from)?;
    fs::create_dir_all(to)?;
    for entry in entries {
        let entry = entry?;
        let target = to.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_dir(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}
