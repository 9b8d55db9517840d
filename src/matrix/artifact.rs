//! Persisted score-matrix artifact
//!
//! Layout (little-endian header, then row-major scores):
//!
//! ```text
//! magic        4 bytes  "OVLM"
//! version      u32
//! dimension    u32
//! fingerprint  u64      vocabulary fingerprint at build time
//! scores       dimension² × u8
//! ```

use super::ScoreMatrix;
use crate::core::Vocabulary;
use std::fmt;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// File magic
pub const MAGIC: &[u8; 4] = b"OVLM";

/// Current artifact format version
pub const FORMAT_VERSION: u32 = 1;

/// Bytes before the first score
pub const HEADER_LEN: usize = 4 + 4 + 4 + 8;

/// Errors from loading or validating a score matrix
#[derive(Debug)]
pub enum MatrixError {
    Io(io::Error),
    BadMagic,
    UnsupportedVersion(u32),
    Truncated { expected: usize, actual: usize },
    DimensionMismatch { matrix: usize, vocabulary: usize },
    FingerprintMismatch { matrix: u64, vocabulary: u64 },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Score matrix I/O error: {e}"),
            Self::BadMagic => write!(f, "Not a score matrix artifact (bad magic)"),
            Self::UnsupportedVersion(v) => {
                write!(f, "Unsupported score matrix version {v} (expected {FORMAT_VERSION})")
            }
            Self::Truncated { expected, actual } => {
                write!(f, "Score matrix has {actual} scores, expected {expected}")
            }
            Self::DimensionMismatch { matrix, vocabulary } => write!(
                f,
                "Stale score matrix: {matrix}x{matrix} matrix for a {vocabulary}-word vocabulary"
            ),
            Self::FingerprintMismatch { matrix, vocabulary } => write!(
                f,
                "Stale score matrix: built for vocabulary {matrix:016x}, current is {vocabulary:016x}"
            ),
        }
    }
}

impl std::error::Error for MatrixError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for MatrixError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Serialize a matrix into the artifact layout
#[must_use]
pub fn encode(matrix: &ScoreMatrix) -> Vec<u8> {
    let mut out = Vec::with_capacity(HEADER_LEN + matrix.as_bytes().len());

    out.extend_from_slice(MAGIC);
    out.extend_from_slice(&FORMAT_VERSION.to_le_bytes());
    out.extend_from_slice(&(matrix.dimension() as u32).to_le_bytes());
    out.extend_from_slice(&matrix.fingerprint().to_le_bytes());
    out.extend_from_slice(matrix.as_bytes());

    out
}

/// Parse an artifact produced by [`encode`]
///
/// # Errors
/// Returns `BadMagic`, `UnsupportedVersion`, or `Truncated` for malformed input.
pub fn decode(bytes: &[u8]) -> Result<ScoreMatrix, MatrixError> {
    if bytes.len() < HEADER_LEN {
        return Err(MatrixError::Truncated {
            expected: HEADER_LEN,
            actual: bytes.len(),
        });
    }

    let (magic, rest) = bytes.split_at(4);
    if magic != MAGIC {
        return Err(MatrixError::BadMagic);
    }

    let (version, rest) = rest.split_at(4);
    let version = u32::from_le_bytes([version[0], version[1], version[2], version[3]]);
    if version != FORMAT_VERSION {
        return Err(MatrixError::UnsupportedVersion(version));
    }

    let (dimension, rest) = rest.split_at(4);
    let dimension = u32::from_le_bytes([dimension[0], dimension[1], dimension[2], dimension[3]]);

    let (fingerprint, scores) = rest.split_at(8);
    let mut fp = [0u8; 8];
    fp.copy_from_slice(fingerprint);

    ScoreMatrix::from_raw(dimension as usize, u64::from_le_bytes(fp), scores.to_vec())
}

/// Write a matrix artifact to disk
///
/// # Errors
/// Returns `MatrixError::Io` if the file cannot be created or written.
pub fn save_to_file<P: AsRef<Path>>(matrix: &ScoreMatrix, path: P) -> Result<(), MatrixError> {
    let file = fs::File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(&encode(matrix))?;
    writer.flush()?;
    Ok(())
}

/// Load a matrix artifact and check it against the vocabulary it will be used with
///
/// # Errors
/// Returns `MatrixError` if the file is unreadable or malformed, or if it was built for a
/// different vocabulary (size or fingerprint mismatch).
pub fn load_from_file<P: AsRef<Path>>(
    path: P,
    vocabulary: &Vocabulary,
) -> Result<ScoreMatrix, MatrixError> {
    let bytes = fs::read(path)?;
    let matrix = decode(&bytes)?;
    matrix.verify(vocabulary)?;
    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (Vocabulary, ScoreMatrix) {
        let vocabulary = Vocabulary::from_words(["abc", "abd", "xyz", "little"]).unwrap();
        let matrix = ScoreMatrix::build(&vocabulary);
        (vocabulary, matrix)
    }

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("overlap_solver_{}_{name}", std::process::id()))
    }

    #[test]
    fn encode_header_layout() {
        let (vocabulary, matrix) = sample();
        let bytes = encode(&matrix);

        assert_eq!(&bytes[..4], MAGIC);
        assert_eq!(&bytes[4..8], &1u32.to_le_bytes());
        assert_eq!(&bytes[8..12], &4u32.to_le_bytes());
        assert_eq!(&bytes[12..20], &vocabulary.fingerprint().to_le_bytes());
        assert_eq!(bytes.len(), HEADER_LEN + 16);
    }

    #[test]
    fn decode_restores_matrix() {
        let (_, matrix) = sample();
        assert_eq!(decode(&encode(&matrix)).unwrap(), matrix);
    }

    #[test]
    fn decode_rejects_bad_magic() {
        let (_, matrix) = sample();
        let mut bytes = encode(&matrix);
        bytes[0] = b'X';
        assert!(matches!(decode(&bytes), Err(MatrixError::BadMagic)));
    }

    #[test]
    fn decode_rejects_future_version() {
        let (_, matrix) = sample();
        let mut bytes = encode(&matrix);
        bytes[4..8].copy_from_slice(&7u32.to_le_bytes());
        assert!(matches!(
            decode(&bytes),
            Err(MatrixError::UnsupportedVersion(7))
        ));
    }

    #[test]
    fn decode_rejects_truncated() {
        let (_, matrix) = sample();
        let bytes = encode(&matrix);

        assert!(matches!(
            decode(&bytes[..bytes.len() - 1]),
            Err(MatrixError::Truncated {
                expected: 16,
                actual: 15
            })
        ));
        assert!(matches!(
            decode(&bytes[..10]),
            Err(MatrixError::Truncated { .. })
        ));
    }

    #[test]
    fn file_roundtrip_and_stale_detection() {
        let (vocabulary, matrix) = sample();
        let path = temp_path("roundtrip.bin");

        save_to_file(&matrix, &path).unwrap();
        assert_eq!(load_from_file(&path, &vocabulary).unwrap(), matrix);

        let changed = Vocabulary::from_words(["abc", "abd", "xyz", "tweety"]).unwrap();
        assert!(matches!(
            load_from_file(&path, &changed),
            Err(MatrixError::FingerprintMismatch { .. })
        ));

        let grown = Vocabulary::from_words(["abc", "abd", "xyz", "little", "tweety"]).unwrap();
        assert!(matches!(
            load_from_file(&path, &grown),
            Err(MatrixError::DimensionMismatch {
                matrix: 4,
                vocabulary: 5
            })
        ));

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let (vocabulary, _) = sample();
        assert!(matches!(
            load_from_file(temp_path("missing.bin"), &vocabulary),
            Err(MatrixError::Io(_))
        ));
    }
}
