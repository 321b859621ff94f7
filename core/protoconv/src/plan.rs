use std::fmt::{self, Display, Formatter};
use std::path::{Path, PathBuf};

/// Role of a file the converter can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FileRole {
    C4dSymbols,
    Header,
    Description,
    StringsUs,
    Plugin,
    Icon,
}

impl FileRole {
    /// Files that are created only when absent; an existing copy never blocks
    /// a run.
    #[must_use]
    pub fn is_optional(self) -> bool {
        matches!(self, FileRole::C4dSymbols | FileRole::Plugin)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FileRole::C4dSymbols => "c4d_symbols",
            FileRole::Header => "header",
            FileRole::Description => "description",
            FileRole::StringsUs => "strings_us",
            FileRole::Plugin => "plugin",
            FileRole::Icon => "icon",
        }
    }
}

impl Display for FileRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    pub role: FileRole,
    pub path: PathBuf,
}

/// Files a converter run produces, below the plugin directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePlan {
    pub directory: PathBuf,
    pub files: Vec<PlannedFile>,
}

impl FilePlan {
    #[must_use]
    pub fn new(directory: PathBuf) -> Self {
        Self {
            directory,
            files: vec![],
        }
    }

    pub fn push(&mut self, role: FileRole, path: PathBuf) {
        self.files.push(PlannedFile { role, path });
    }

    #[must_use]
    pub fn get(&self, role: FileRole) -> Option<&Path> {
        self.files
            .iter()
            .find(|file| file.role == role)
            .map(|file| file.path.as_path())
    }

    #[must_use]
    pub fn contains(&self, role: FileRole) -> bool {
        self.get(role).is_some()
    }

    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.files.iter().map(|file| file.path.as_path())
    }

    /// Planned files that already exist and would block a run without
    /// overwrite.
    pub fn conflicts(&self) -> impl Iterator<Item = &Path> {
        self.files
            .iter()
            .filter(|file| !file.role.is_optional() && file.path.exists())
            .map(|file| file.path.as_path())
    }
}
