use std::cmp::Ordering;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{AppError, Result};
use crate::fs::extensions;

/// Display name of the synthetic parent entry.
pub const PARENT_ENTRY: &str = "..";

/// Kind of a listed child. Only files carry a size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File { size: u64 },
}

/// One row of the directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub kind: EntryKind,
}

impl Entry {
    pub fn directory(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Directory,
        }
    }

    pub fn file(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::File { size },
        }
    }

    /// The synthetic `..` entry.
    pub fn parent() -> Self {
        Self::directory(PARENT_ENTRY)
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    pub fn is_parent(&self) -> bool {
        self.is_dir() && self.name == PARENT_ENTRY
    }

    /// Byte size for files, 0 for directories.
    pub fn size(&self) -> u64 {
        match self.kind {
            EntryKind::File { size } => size,
            EntryKind::Directory => 0,
        }
    }
}

/// Check that `path` is a directory we can open.
///
/// Missing paths and non-directories map to `NotADirectory`; permission
/// problems map to `AccessDenied`.
pub fn ensure_readable_dir(path: &Path) -> Result<()> {
    let metadata = match fs::metadata(path) {
        Ok(m) => m,
        Err(e) if e.kind() == ErrorKind::PermissionDenied => {
            return Err(AppError::AccessDenied(path.to_path_buf()))
        }
        Err(_) => return Err(AppError::NotADirectory(path.to_path_buf())),
    };
    if !metadata.is_dir() {
        return Err(AppError::NotADirectory(path.to_path_buf()));
    }
    fs::read_dir(path).map_err(|_| AppError::AccessDenied(path.to_path_buf()))?;
    Ok(())
}

/// List the immediate children of `path` in display order.
///
/// The result always starts with `..`, followed by directories and then
/// supported text files, each group sorted by name. Children that vanish or
/// cannot be inspected mid-enumeration are skipped. Symlinks are followed,
/// so a link to a directory lists as a directory.
pub fn list_directory(path: &Path) -> Result<Vec<Entry>> {
    let read_dir = fs::read_dir(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => AppError::NotADirectory(path.to_path_buf()),
        _ => AppError::AccessDenied(path.to_path_buf()),
    })?;

    let mut entries = Vec::new();
    for dir_entry in read_dir {
        let dir_entry = match dir_entry {
            Ok(e) => e,
            Err(e) => {
                debug!("skipping unreadable entry in {}: {}", path.display(), e);
                continue;
            }
        };
        let name = match dir_entry.file_name().into_string() {
            Ok(name) => name,
            Err(raw) => {
                debug!("skipping non-UTF-8 name in {}: {:?}", path.display(), raw);
                continue;
            }
        };
        let metadata = match fs::metadata(dir_entry.path()) {
            Ok(m) => m,
            Err(e) => {
                debug!("skipping {}: {}", name, e);
                continue;
            }
        };

        if metadata.is_dir() {
            entries.push(Entry::directory(name));
        } else if metadata.is_file() && extensions::is_supported_file_name(&name) {
            entries.push(Entry::file(name, metadata.len()));
        }
    }

    sort_entries(&mut entries);
    entries.insert(0, Entry::parent());
    Ok(entries)
}

/// Directories before files, then byte-wise ascending by name.
pub fn sort_entries(entries: &mut [Entry]) {
    entries.sort_by(compare_entries);
}

fn compare_entries(a: &Entry, b: &Entry) -> Ordering {
    b.is_dir()
        .cmp(&a.is_dir())
        .then_with(|| a.name.cmp(&b.name))
}

/// Parent of `path`, or `None` at the filesystem root.
pub fn parent_of(path: &Path) -> Option<PathBuf> {
    path.parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
}

/// Child path for an entry name inside `dir`.
pub fn join_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    fn names(entries: &[Entry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_mixed_directory_is_sorted() {
        let dir = TempDir::new().unwrap();
        let mut f = File::create(dir.path().join("b.txt")).unwrap();
        f.write_all(b"hello").unwrap();
        fs::create_dir(dir.path().join("A")).unwrap();
        let mut f = File::create(dir.path().join("a.py")).unwrap();
        f.write_all(b"hi").unwrap();

        let entries = list_directory(dir.path()).unwrap();
        assert_eq!(names(&entries), vec!["..", "A", "a.py", "b.txt"]);
        assert_eq!(entries[2].kind, EntryKind::File { size: 2 });
        assert_eq!(entries[3].kind, EntryKind::File { size: 5 });
        assert_eq!(entries[1].kind, EntryKind::Directory);
    }

    #[test]
    fn test_empty_directory_lists_only_parent() {
        let dir = TempDir::new().unwrap();
        let entries = list_directory(dir.path()).unwrap();
        assert_eq!(entries, vec![Entry::parent()]);
    }

    #[test]
    fn test_unsupported_files_are_filtered_but_directories_are_not() {
        let dir = TempDir::new().unwrap();
        File::create(dir.path().join("image.png")).unwrap();
        File::create(dir.path().join("notes.TXT")).unwrap();
        File::create(dir.path().join("Makefile")).unwrap();
        File::create(dir.path().join("keep.md")).unwrap();
        fs::create_dir(dir.path().join("assets.png")).unwrap();

        let entries = list_directory(dir.path()).unwrap();
        assert_eq!(names(&entries), vec!["..", "assets.png", "keep.md"]);
    }

    #[test]
    fn test_directories_precede_files_and_names_ascend() {
        let dir = TempDir::new().unwrap();
        for d in ["zeta", "Beta", "alpha"] {
            fs::create_dir(dir.path().join(d)).unwrap();
        }
        for f in ["z.rs", "B.md", "a.txt"] {
            File::create(dir.path().join(f)).unwrap();
        }

        let entries = list_directory(dir.path()).unwrap();
        assert_eq!(entries[0].name, "..");
        let rest = &entries[1..];
        let first_file = rest.iter().position(|e| !e.is_dir()).unwrap();
        assert!(rest[..first_file].iter().all(Entry::is_dir));
        assert!(rest[first_file..].iter().all(|e| !e.is_dir()));
        assert!(rest[..first_file].windows(2).all(|w| w[0].name <= w[1].name));
        assert!(rest[first_file..].windows(2).all(|w| w[0].name <= w[1].name));
        // Byte ordering: uppercase sorts before lowercase
        assert_eq!(
            names(&entries),
            vec!["..", "Beta", "alpha", "zeta", "B.md", "a.txt", "z.rs"]
        );
    }

    #[test]
    fn test_listing_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        assert!(matches!(
            list_directory(&missing),
            Err(AppError::NotADirectory(_))
        ));
    }

    #[test]
    fn test_ensure_readable_dir_rejects_files() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("a.txt");
        File::create(&file).unwrap();
        assert!(matches!(
            ensure_readable_dir(&file),
            Err(AppError::NotADirectory(_))
        ));
        assert!(ensure_readable_dir(dir.path()).is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_directory_lists_as_directory() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("real")).unwrap();
        std::os::unix::fs::symlink(dir.path().join("real"), dir.path().join("link")).unwrap();
        // Dangling links are skipped silently
        std::os::unix::fs::symlink(dir.path().join("gone"), dir.path().join("dangling.txt"))
            .unwrap();

        let entries = list_directory(dir.path()).unwrap();
        assert_eq!(names(&entries), vec!["..", "link", "real"]);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_non_utf8_names_are_skipped() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join(OsStr::from_bytes(b"bad\xffdir"))).unwrap();
        File::create(dir.path().join(OsStr::from_bytes(b"bad\xfe.txt"))).unwrap();
        File::create(dir.path().join("good.txt")).unwrap();

        let entries = list_directory(dir.path()).unwrap();
        assert_eq!(names(&entries), vec!["..", "good.txt"]);
        for entry in &entries[1..] {
            assert!(join_path(dir.path(), &entry.name).exists());
        }
    }

    #[test]
    fn test_parent_of_root_is_none() {
        assert_eq!(parent_of(Path::new("/")), None);
        assert_eq!(parent_of(Path::new("/usr")), Some(PathBuf::from("/")));
        assert_eq!(
            parent_of(Path::new("/usr/share")),
            Some(PathBuf::from("/usr"))
        );
    }

    #[test]
    fn test_join_path_appends_name() {
        assert_eq!(
            join_path(Path::new("/tmp"), "x.txt"),
            PathBuf::from("/tmp/x.txt")
        );
    }

    #[test]
    fn test_entry_accessors() {
        assert!(Entry::parent().is_parent());
        assert!(!Entry::directory("src").is_parent());
        assert_eq!(Entry::directory("src").size(), 0);
        assert_eq!(Entry::file("a.rs", 42).size(), 42);
    }
}
