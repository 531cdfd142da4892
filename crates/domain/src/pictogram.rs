use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PictogramEntry {
    Category {
        name: String,
        path: PathBuf,
        children: Vec<PictogramEntry>,
    },
    Leaf {
        name: String,
        path: PathBuf,
    },
}

impl PictogramEntry {
    pub fn name(&self) -> &str {
        match self {
            Self::Category { name, .. } | Self::Leaf { name, .. } => name,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::Category { path, .. } | Self::Leaf { path, .. } => path,
        }
    }

    pub fn is_category(&self) -> bool {
        matches!(self, Self::Category { .. })
    }

    pub fn children(&self) -> &[PictogramEntry] {
        match self {
            Self::Category { children, .. } => children,
            Self::Leaf { .. } => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PictogramCatalog {
    root: PathBuf,
    entries: Vec<PictogramEntry>,
}

impl PictogramCatalog {
    pub fn new(root: impl Into<PathBuf>, entries: Vec<PictogramEntry>) -> Self {
        Self {
            root: root.into(),
            entries,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn entries(&self) -> &[PictogramEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn leaves(&self) -> Vec<&PictogramEntry> {
        let mut found = Vec::new();
        let mut pending: Vec<&PictogramEntry> = self.entries.iter().rev().collect();
        while let Some(entry) = pending.pop() {
            match entry {
                PictogramEntry::Leaf { .. } => found.push(entry),
                PictogramEntry::Category { children, .. } => {
                    pending.extend(children.iter().rev());
                }
            }
        }
        found
    }

    pub fn leaf_count(&self) -> usize {
        self.leaves().len()
    }

    pub fn find(&self, path: &Path) -> Option<&PictogramEntry> {
        let mut level = self.entries.as_slice();
        loop {
            let entry = level
                .iter()
                .find(|entry| path.starts_with(entry.path()))?;
            if entry.path() == path {
                return Some(entry);
            }
            level = entry.children();
        }
    }
}

/// Assembles a catalog from a pre-order walk, where a directory is visited
/// before everything inside it. Depth 1 is a direct child of the root.
#[derive(Debug)]
pub struct CatalogBuilder {
    root: PathBuf,
    top_level: Vec<PictogramEntry>,
    open: Vec<OpenCategory>,
}

#[derive(Debug)]
struct OpenCategory {
    depth: usize,
    name: String,
    path: PathBuf,
    children: Vec<PictogramEntry>,
}

impl CatalogBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            top_level: Vec::new(),
            open: Vec::new(),
        }
    }

    pub fn push_category(&mut self, depth: usize, name: impl Into<String>, path: PathBuf) {
        self.close_to(depth);
        self.open.push(OpenCategory {
            depth,
            name: name.into(),
            path,
            children: Vec::new(),
        });
    }

    pub fn push_leaf(&mut self, depth: usize, name: impl Into<String>, path: PathBuf) {
        self.close_to(depth);
        self.attach(PictogramEntry::Leaf {
            name: name.into(),
            path,
        });
    }

    pub fn finish(mut self) -> PictogramCatalog {
        self.close_to(0);
        PictogramCatalog::new(self.root, self.top_level)
    }

    fn close_to(&mut self, depth: usize) {
        while self.open.last().is_some_and(|open| open.depth >= depth) {
            if let Some(done) = self.open.pop() {
                self.attach(PictogramEntry::Category {
                    name: done.name,
                    path: done.path,
                    children: done.children,
                });
            }
        }
    }

    fn attach(&mut self, entry: PictogramEntry) {
        match self.open.last_mut() {
            Some(parent) => parent.children.push(entry),
            None => self.top_level.push(entry),
        }
    }
}

pub fn accept_all(_path: &Path) -> bool {
    true
}

pub fn is_pictogram_file(path: &Path) -> bool {
    let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
        return false;
    };

    matches!(
        ext.to_ascii_lowercase().as_str(),
        "png" | "jpg" | "jpeg" | "gif" | "svg" | "bmp"
    )
}
