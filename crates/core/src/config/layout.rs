//! Default directory layout of a GWT project

use std::path::{Path, PathBuf};

pub const BUILD_DIR: &str = "build";
pub const GWT_BUILD_DIR: &str = "gwt";
pub const EXTRA_DIR: &str = "extra";
pub const WORK_DIR: &str = "work";
pub const GEN_DIR: &str = "gen";
pub const CACHE_DIR: &str = "cache";
pub const DEV_WAR: &str = "war";

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectLayout {
    project_dir: PathBuf,
}

impl ProjectLayout {
    pub fn new(project_dir: impl Into<PathBuf>) -> Self {
        Self {
            project_dir: project_dir.into(),
        }
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    /// `<project>/build/gwt`
    pub fn gwt_build_dir(&self) -> PathBuf {
        self.project_dir.join(BUILD_DIR).join(GWT_BUILD_DIR)
    }

    pub fn extra_dir(&self) -> PathBuf {
        self.gwt_build_dir().join(EXTRA_DIR)
    }

    pub fn work_dir(&self) -> PathBuf {
        self.gwt_build_dir().join(WORK_DIR)
    }

    pub fn gen_dir(&self) -> PathBuf {
        self.gwt_build_dir().join(GEN_DIR)
    }

    pub fn cache_dir(&self) -> PathBuf {
        self.gwt_build_dir().join(CACHE_DIR)
    }

    pub fn dev_war(&self) -> PathBuf {
        self.project_dir.join(DEV_WAR)
    }

    /// Java sources and resources of the main source set
    pub fn source_dirs(&self) -> Vec<PathBuf> {
        vec![
            self.project_dir.join("src").join("main").join("java"),
            self.project_dir.join("src").join("main").join("resources"),
        ]
    }

    /// Compiled classes and processed resources of the main source set
    pub fn class_dirs(&self) -> Vec<PathBuf> {
        vec![
            self.project_dir
                .join(BUILD_DIR)
                .join("classes")
                .join("java")
                .join("main"),
            self.project_dir.join(BUILD_DIR).join("resources").join("main"),
        ]
    }

    /// Resolve a configured path against the project directory.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.project_dir.join(path)
        }
    }
}
