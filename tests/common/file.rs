use derive_new::new;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Eq, PartialEq, new)]
pub struct FileSpec {
    pub path: PathBuf,
    pub content: String,
}

pub fn write_file(file_spec: FileSpec) {
    write_bytes(&file_spec.path, file_spec.content.as_bytes());
}

pub fn write_bytes(path: &Path, content: &[u8]) {
    // make sure the parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .unwrap_or_else(|e| panic!("Failed to create directory {:?}: {}", parent, e));
    }

    std::fs::write(path, content)
        .unwrap_or_else(|e| panic!("Failed to write file {:?}: {}", path, e));
}

/// Writes the same random text files under both roots, returning their
/// relative paths.
pub fn write_generated_pairs(root_a: &Path, root_b: &Path, files_count: usize) -> Vec<PathBuf> {
    use fake::{
        Fake,
        faker::lorem::en::{Word, Words},
    };

    (0..files_count)
        .map(|i| {
            let relative = PathBuf::from(format!("{}_{}.txt", Word().fake::<String>(), i));
            let content = Words(5..10).fake::<Vec<String>>().join(" ");

            write_file(FileSpec::new(root_a.join(&relative), content.clone()));
            write_file(FileSpec::new(root_b.join(&relative), content));

            relative
        })
        .collect()
}

pub fn create_directory(path: &Path) {
    std::fs::create_dir_all(path)
        .unwrap_or_else(|e| panic!("Failed to create directory {:?}: {}", path, e));
}
