use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::{Builder, NamedTempFile};
use tracing::{debug, info};

use crate::error::{GostubError, Result};

/// Where a finished stub document is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sink {
	/// The process's standard output.
	Stdout,
	/// A named file, replaced only once the full document has been written.
	File(PathBuf),
}

impl Sink {
	/// Select the sink for an optional output path.
	pub fn from_path(path: Option<&Path>) -> Self {
		match path {
			Some(path) => Self::File(path.to_path_buf()),
			None => Self::Stdout,
		}
	}

	/// Write a complete document in one go.
	pub fn write_document(&self, document: &str) -> Result<()> {
		match self {
			Self::Stdout => {
				let mut out = io::stdout().lock();
				write_flushed(&mut out, document).map_err(GostubError::Stdout)
			}
			Self::File(path) => write_file(path, document),
		}
	}
}

/// Write and flush `document` to `writer`.
pub fn write_flushed(writer: &mut impl Write, document: &str) -> io::Result<()> {
	writer.write_all(document.as_bytes())?;
	writer.flush()
}

/// Write through a temporary file in the destination directory, then move it into place.
///
/// The destination is never created or truncated unless the whole document reached disk;
/// the temporary file is removed on every failure path when it is dropped. A replaced file
/// keeps its mode; a new one gets the mode a plain create would give it (0666 less umask).
fn write_file(path: &Path, document: &str) -> Result<()> {
	let output_err = |source: io::Error| GostubError::Output {
		path: path.to_path_buf(),
		source,
	};

	let dir = match path.parent() {
		Some(parent) if !parent.as_os_str().is_empty() => parent,
		_ => Path::new("."),
	};
	let mut file = staging_file(dir).map_err(output_err)?;
	debug!(temp = %file.path().display(), "staging output");
	if let Ok(existing) = fs::metadata(path) {
		file.as_file()
			.set_permissions(existing.permissions())
			.map_err(output_err)?;
	}

	write_flushed(&mut file, document).map_err(output_err)?;
	file.as_file().sync_all().map_err(output_err)?;
	file.persist(path).map_err(|err| output_err(err.error))?;

	info!(path = %path.display(), bytes = document.len(), "wrote stub");
	Ok(())
}

/// Create the temporary file without the owner-only mode `tempfile` uses by default.
fn staging_file(dir: &Path) -> io::Result<NamedTempFile> {
	let mut builder = Builder::new();
	builder.prefix(".gostub");
	#[cfg(unix)]
	{
		use std::os::unix::fs::PermissionsExt;
		builder.permissions(fs::Permissions::from_mode(0o666));
	}
	builder.tempfile_in(dir)
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn file_sink_writes_document() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("stub.go");
		Sink::from_path(Some(&path))
			.write_document("package p\n\n")
			.unwrap();
		assert_eq!(fs::read_to_string(&path).unwrap(), "package p\n\n");
	}

	#[test]
	fn file_sink_replaces_existing_file() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("stub.go");
		fs::write(&path, "old contents that are longer than the new ones").unwrap();
		Sink::File(path.clone()).write_document("new\n").unwrap();
		assert_eq!(fs::read_to_string(&path).unwrap(), "new\n");
	}

	#[test]
	fn unwritable_destination_reports_path() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("missing").join("stub.go");
		let err = Sink::File(path.clone()).write_document("x").unwrap_err();
		assert!(matches!(err, GostubError::Output { .. }));
		assert!(err.to_string().contains("stub.go"));
		assert!(!path.exists());
	}

	#[cfg(unix)]
	fn mode(path: &Path) -> u32 {
		use std::os::unix::fs::PermissionsExt;
		fs::metadata(path).unwrap().permissions().mode() & 0o777
	}

	#[cfg(unix)]
	#[test]
	fn new_file_gets_default_create_mode() {
		let dir = tempfile::tempdir().unwrap();
		let reference = dir.path().join("reference.go");
		fs::File::create(&reference).unwrap();
		let path = dir.path().join("stub.go");
		Sink::File(path.clone()).write_document("package p\n\n").unwrap();
		assert_eq!(mode(&path), mode(&reference));
	}

	#[cfg(unix)]
	#[test]
	fn replaced_file_keeps_its_mode() {
		use std::os::unix::fs::PermissionsExt;

		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("stub.go");
		fs::write(&path, "old\n").unwrap();
		fs::set_permissions(&path, fs::Permissions::from_mode(0o640)).unwrap();
		Sink::File(path.clone()).write_document("new\n").unwrap();
		assert_eq!(mode(&path), 0o640);
		assert_eq!(fs::read_to_string(&path).unwrap(), "new\n");
	}

	#[test]
	fn stdout_sink_selected_without_path() {
		assert_eq!(Sink::from_path(None), Sink::Stdout);
	}

	#[test]
	fn write_flushed_writes_everything() {
		let mut buffer = Vec::new();
		write_flushed(&mut buffer, "abc").unwrap();
		assert_eq!(buffer, b"abc");
	}
}
