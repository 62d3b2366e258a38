//! Output sink selection.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use tracing::info;

/// Open the byte sink frames are written to.
///
/// With no path, frames go to stdout. A path may name a character device such
/// as a serial port or a regular file; it is opened for appending and created
/// if missing. Port settings such as baud rate are left as the OS has them.
pub fn open_sink(path: Option<&Path>) -> io::Result<Box<dyn Write + Send>> {
    match path {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            info!(path = %path.display(), "writing frames to device");
            Ok(Box::new(file))
        }
        None => Ok(Box::new(io::stdout())),
    }
}
