//! Directory-backed low-level object storage, as replayed by the rebuild
//! path.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use resindex::DigitalObject;

#[derive(Debug, thiserror::Error)]
pub enum ObjectStoreError {
	#[error(transparent)]
	Io(#[from] io::Error),

	#[error("unable to decode object file `{}`", path.display())]
	Decode {
		path: PathBuf,
		#[source]
		source: ron::error::SpannedError,
	},

	#[error("unable to encode object `{pid}`")]
	Encode {
		pid: String,
		#[source]
		source: ron::Error,
	},
}

/// A directory of serialized digital objects, one RON file per object.
#[derive(Debug, Clone)]
pub struct ObjectStore {
	root: PathBuf,
}

impl ObjectStore {
	pub fn new(root: impl Into<PathBuf>) -> Self {
		Self { root: root.into() }
	}

	pub fn root(&self) -> &Path {
		&self.root
	}

	/// Persists one object, overwriting any previous version.
	pub fn put(&self, object: &DigitalObject) -> Result<(), ObjectStoreError> {
		let content = ron::ser::to_string_pretty(object, ron::ser::PrettyConfig::default())
			.map_err(|source| ObjectStoreError::Encode {
				pid: object.pid.clone(),
				source,
			})?;
		fs::create_dir_all(&self.root)?;
		fs::write(self.object_path(&object.pid), content)?;
		Ok(())
	}

	/// Iterates every persisted object exactly once, in file-name order.
	///
	/// Per-file read or decode failures surface as per-item errors; they do
	/// not end the iteration.
	pub fn iter(&self) -> Result<Objects, ObjectStoreError> {
		let mut paths = Vec::new();
		for entry in fs::read_dir(&self.root)? {
			let path = entry?.path();
			if path.extension().is_some_and(|ext| ext == "ron") {
				paths.push(path);
			}
		}
		paths.sort();

		Ok(Objects {
			paths: paths.into_iter(),
		})
	}

	fn object_path(&self, pid: &str) -> PathBuf {
		self.root.join(format!("{pid}.ron"))
	}
}

/// Iterator over the objects of an [`ObjectStore`].
pub struct Objects {
	paths: std::vec::IntoIter<PathBuf>,
}

impl Iterator for Objects {
	type Item = Result<DigitalObject, ObjectStoreError>;

	fn next(&mut self) -> Option<Self::Item> {
		let path = self.paths.next()?;
		Some(read_object(&path))
	}
}

fn read_object(path: &Path) -> Result<DigitalObject, ObjectStoreError> {
	let content = fs::read_to_string(path)?;
	ron::from_str(&content).map_err(|source| ObjectStoreError::Decode {
		path: path.to_owned(),
		source,
	})
}
