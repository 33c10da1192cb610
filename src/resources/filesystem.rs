//! Module defining and implementing filesystem resource loaders.

use std::fs::{self, File};
use std::io::{self, BufReader, Read};

use super::Loader;


/// Loader for files, which opens resource names as paths verbatim
/// (relative ones against the current directory).
///
/// The resources it doles out are just file handles (std::fs::File).
/// Wrappers around this loader can then implement their own decoding.
#[derive(Clone, Debug, Default)]
pub struct FileLoader;

impl FileLoader {
    #[inline]
    pub fn new() -> Self {
        FileLoader
    }
}

impl Loader for FileLoader {
    type Item = File;
    type Err = io::Error;

    fn load(&self, name: &str) -> Result<Self::Item, Self::Err> {
        trace!("Opening {}", name);
        fs::OpenOptions::new().read(true).open(name)
    }
}


/// Wrapper around FileLoader that loads the entire content of the files.
#[derive(Clone, Debug, Default)]
pub struct BytesLoader {
    inner: FileLoader,
}

impl BytesLoader {
    #[inline]
    pub fn new(inner: FileLoader) -> Self {
        BytesLoader{inner}
    }
}

impl From<FileLoader> for BytesLoader {
    fn from(input: FileLoader) -> Self {
        Self::new(input)
    }
}

impl Loader for BytesLoader {
    type Item = Vec<u8>;
    type Err = io::Error;

    /// Load a file resource as its byte content.
    fn load(&self, name: &str) -> Result<Self::Item, Self::Err> {
        let file = self.inner.load(name)?;

        let mut bytes = match file.metadata() {
            Ok(stat) => Vec::with_capacity(stat.len() as usize),
            Err(e) => {
                warn!("Failed to stat file of resource `{}` to obtain its size: {}",
                    name, e);
                Vec::new()
            },
        };

        let mut reader = BufReader::new(file);
        reader.read_to_end(&mut bytes)?;
        Ok(bytes)
    }
}


#[cfg(test)]
mod tests {
    use std::fs;
    use std::io::ErrorKind;

    use spectral::prelude::*;
    use tempfile::tempdir;

    use super::super::Loader;
    use super::{BytesLoader, FileLoader};

    #[test]
    fn bytes_of_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("hello.txt");
        fs::write(&path, b"hello").unwrap();

        let loader = BytesLoader::new(FileLoader::new());
        assert_that!(loader.load(path.to_str().unwrap()))
            .is_ok().is_equal_to(b"hello".to_vec());
    }

    #[test]
    fn empty_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.bin");
        fs::write(&path, b"").unwrap();

        let loader = BytesLoader::from(FileLoader::new());
        assert_that!(loader.load(path.to_str().unwrap())).is_ok().is_equal_to(vec![]);
    }

    #[test]
    fn missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope.ttf");
        let loader = BytesLoader::new(FileLoader::new());
        let err = loader.load(path.to_str().unwrap()).unwrap_err();
        assert_that!(err.kind()).is_equal_to(ErrorKind::NotFound);
    }
}
