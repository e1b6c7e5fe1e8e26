//! Array stores: access to named multidimensional arrays in a data file.

use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;

use ndarray::{ArrayD, IxDyn, OwnedRepr};
use ndarray_npy::{NpzReader, ReadNpzError};

use crate::error::ProjectionError;

/// Read access to named multidimensional arrays.
///
/// This is the seam between the loaders and the on-disk encoding: loaders
/// only ever ask for an array by name. Implementations return arrays of
/// dynamic dimensionality with all numeric members widened to `f64`.
pub trait ArrayStore {
    /// Read the named array.
    ///
    /// Returns [ProjectionError::ArrayMissing] if the store holds no array
    /// under `name`.
    fn read(&mut self, name: &str) -> Result<ArrayD<f64>, ProjectionError>;
}

/// An [ArrayStore] backed by an NPZ archive (a zip of NumPy `.npy` members).
pub struct NpzStore<R: Read + Seek> {
    npz: NpzReader<R>,
    members: Vec<String>,
}

impl<R: Read + Seek> fmt::Debug for NpzStore<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // NpzReader offers no Debug impl, so show the member list only.
        f.debug_struct("NpzStore")
            .field("members", &self.members)
            .finish_non_exhaustive()
    }
}

impl NpzStore<File> {
    /// Open an NPZ archive on the filesystem.
    ///
    /// # Arguments
    ///
    /// * `path`: Path of the archive
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ProjectionError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ProjectionError::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;
        Self::new(file)
    }
}

impl<R: Read + Seek> NpzStore<R> {
    /// Wrap a seekable reader holding an NPZ archive.
    pub fn new(reader: R) -> Result<Self, ProjectionError> {
        let mut npz = NpzReader::new(reader)?;
        let members = npz.names()?;
        Ok(NpzStore { npz, members })
    }

    /// Names of the archive members, as stored.
    pub fn members(&self) -> &[String] {
        &self.members
    }

    /// Resolve an array name to the archive member holding it.
    ///
    /// NumPy's `savez` stores an array `x` as a member named `x.npy`; accept
    /// both spellings.
    fn member_name(&self, name: &str) -> Option<String> {
        let suffixed = format!("{name}.npy");
        self.members
            .iter()
            .find(|member| member.as_str() == name || member.as_str() == suffixed)
            .cloned()
    }

    /// Decode a member as an `f64` array.
    ///
    /// Axis vectors are integer-encoded by some producers, so fall back to
    /// the common numeric element types and widen.
    fn read_member(&mut self, member: &str) -> Result<ArrayD<f64>, ReadNpzError> {
        let f64_error = match self.npz.by_name::<OwnedRepr<f64>, IxDyn>(member) {
            Ok(array) => return Ok(array),
            Err(error) => error,
        };
        if let Ok(array) = self.npz.by_name::<OwnedRepr<i64>, IxDyn>(member) {
            return Ok(array.mapv(|value| value as f64));
        }
        if let Ok(array) = self.npz.by_name::<OwnedRepr<i32>, IxDyn>(member) {
            return Ok(array.mapv(f64::from));
        }
        if let Ok(array) = self.npz.by_name::<OwnedRepr<f32>, IxDyn>(member) {
            return Ok(array.mapv(f64::from));
        }
        Err(f64_error)
    }
}

impl<R: Read + Seek> ArrayStore for NpzStore<R> {
    fn read(&mut self, name: &str) -> Result<ArrayD<f64>, ProjectionError> {
        let member = self
            .member_name(name)
            .ok_or_else(|| ProjectionError::ArrayMissing {
                name: name.to_string(),
            })?;
        self.read_member(&member)
            .map_err(|source| ProjectionError::ArrayDecode {
                name: name.to_string(),
                source,
            })
    }
}

/// An in-memory [ArrayStore] holding named arrays directly.
///
/// Useful for synthetic datasets and as a mock data source in tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    arrays: HashMap<String, ArrayD<f64>>,
}

impl MemoryStore {
    /// Return an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an array under the given name, replacing any existing entry.
    pub fn insert(&mut self, name: impl Into<String>, array: ArrayD<f64>) {
        self.arrays.insert(name.into(), array);
    }
}

impl ArrayStore for MemoryStore {
    fn read(&mut self, name: &str) -> Result<ArrayD<f64>, ProjectionError> {
        self.arrays
            .get(name)
            .cloned()
            .ok_or_else(|| ProjectionError::ArrayMissing {
                name: name.to_string(),
            })
    }
}
