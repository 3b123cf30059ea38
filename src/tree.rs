//! In-memory directory tree built from slash-delimited path strings.
//!
//! Children keep insertion order. Lookups are linear scans, which is fine for
//! the size of a single disk image listing.

/// An owned node, used to hand a new child to a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    File(File),
    Directory(Directory),
}

/// A borrowed view of one child of a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryRef<'a> {
    File(&'a File),
    Directory(&'a Directory),
}

impl<'a> EntryRef<'a> {
    #[must_use]
    pub fn name(self) -> &'a str {
        match self {
            EntryRef::File(file) => file.name(),
            EntryRef::Directory(dir) => dir.name(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    name: String,
}

impl File {
    pub fn new(name: impl Into<String>) -> Self {
        File { name: name.into() }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Position of a child in `Directory::files` or `Directory::directories`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    File(usize),
    Directory(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directory {
    name: String,
    files: Vec<File>,
    directories: Vec<Directory>,
    /// Insertion order across both kinds.
    order: Vec<Slot>,
}

impl Directory {
    pub fn new(name: impl Into<String>) -> Self {
        Directory {
            name: name.into(),
            files: Vec::new(),
            directories: Vec::new(),
            order: Vec::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Children in the order they were added, files and directories mixed.
    pub fn children(&self) -> impl ExactSizeIterator<Item = EntryRef<'_>> + '_ {
        self.order.iter().map(|slot| match *slot {
            Slot::File(i) => EntryRef::File(&self.files[i]),
            Slot::Directory(i) => EntryRef::Directory(&self.directories[i]),
        })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn add_child(&mut self, child: Entry) {
        match child {
            Entry::File(file) => {
                self.order.push(Slot::File(self.files.len()));
                self.files.push(file);
            }
            Entry::Directory(dir) => {
                self.order.push(Slot::Directory(self.directories.len()));
                self.directories.push(dir);
            }
        }
    }

    /// Creates a directory from a path like `"folder1/.../folder2"`, creating
    /// every missing directory along the way.
    pub fn add_directory(&mut self, path: &str) {
        match path.split_once('/') {
            None => {
                self.find_or_create_directory(path);
            }
            Some((first, rest)) => self.find_or_create_directory(first).add_directory(rest),
        }
    }

    /// Creates a file from a path like `"folder1/.../file.ext"`, creating
    /// every missing directory along the way.
    ///
    /// Files are never de-duplicated: adding the same path twice yields two
    /// entries.
    pub fn add_file(&mut self, path: &str) {
        match path.split_once('/') {
            None => self.add_child(Entry::File(File::new(path))),
            Some((first, rest)) => self.find_or_create_directory(first).add_file(rest),
        }
    }

    /// Returns the child directory called `name`, appending a new empty one
    /// if none exists. A file with the same name does not count as a match.
    pub fn find_or_create_directory(&mut self, name: &str) -> &mut Directory {
        let index = match self.directories.iter().position(|dir| dir.name == name) {
            Some(index) => index,
            None => {
                self.add_child(Entry::Directory(Directory::new(name)));
                self.directories.len() - 1
            }
        };
        &mut self.directories[index]
    }

    /// Number of directories below this one, at any depth.
    #[must_use]
    pub fn count_directories(&self) -> usize {
        self.directories
            .iter()
            .map(|dir| 1 + dir.count_directories())
            .sum()
    }

    /// Number of files below this one, at any depth.
    #[must_use]
    pub fn count_files(&self) -> usize {
        self.files.len()
            + self
                .directories
                .iter()
                .map(Directory::count_files)
                .sum::<usize>()
    }
}
