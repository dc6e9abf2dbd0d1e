//! JSON stroke documents.
//!
//! A document is a serialized [`GreasePencil`]. Positions and UV vectors are
//! arrays; optional fields may be omitted:
//!
//! ```json
//! {
//!   "name": "Drawing",
//!   "materials": [{ "name": "Ink", "pass_index": 1 }],
//!   "vertex_groups": ["Tips"],
//!   "layers": [{
//!     "name": "Lines",
//!     "frames": [{
//!       "frame_number": 1,
//!       "strokes": [{
//!         "points": [
//!           { "position": [0.0, 0.0, 0.0], "uv_factor": [0.0, 0.0] },
//!           { "position": [1.0, 0.0, 0.0], "weights": [{ "group": 0, "weight": 0.5 }] }
//!         ]
//!       }]
//!     }]
//!   }]
//! }
//! ```

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::error::{NibError, Result};
use crate::stroke::GreasePencil;

/// Parse a document from a reader.
pub fn read<R: Read>(reader: R) -> Result<GreasePencil> {
    Ok(serde_json::from_reader(reader)?)
}

/// Write a document to a writer as pretty-printed JSON.
pub fn write<W: Write>(gp: &GreasePencil, writer: W) -> Result<()> {
    serde_json::to_writer_pretty(writer, gp)?;
    Ok(())
}

/// Load a document from a JSON file.
pub fn load<P: AsRef<Path>>(path: P) -> Result<GreasePencil> {
    let path = path.as_ref();
    let file = File::open(path)?;
    read(BufReader::new(file)).map_err(|e| NibError::LoadError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Save a document to a JSON file.
pub fn save<P: AsRef<Path>>(gp: &GreasePencil, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write(gp, &mut writer)
        .and_then(|()| writer.flush().map_err(NibError::from))
        .map_err(|e| NibError::SaveError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}
