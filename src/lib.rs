//! LZ77 codec with a 4095-byte window.
//!
//! Each token is a flag bit followed by either a literal byte (`0`) or a 12-bit distance and
//! 4-bit length (`1`), packed most significant bit first. There is no header; the stream ends
//! where the bits run out, padded with zeros to a whole byte.

pub mod bitio;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod hash;
pub mod hash_chain;
pub mod lz77;
pub mod matcher;
pub mod naming;
pub mod options;
pub mod token;

use std::io::Write;

pub use decoder::Decoder;
pub use encoder::Encoder;
pub use error::{Error, Result};
pub use lz77::Lz77;
pub use options::{EncoderOptions, MatchStrategy, WindowSize};

/// Encode `data` with the default look-ahead and the given window.
pub fn encode(data: &[u8], window_size: WindowSize) -> Vec<u8> {
    let options = EncoderOptions::with_window_size(window_size);
    // default look-ahead is always valid and Vec never fails to write
    match encode_with(data, &options) {
        Ok(out) => out,
        Err(err) => unreachable!("encoding into memory failed: {}", err),
    }
}

pub fn encode_with(data: &[u8], options: &EncoderOptions) -> Result<Vec<u8>> {
    let (out, _) = encoder::encode_into(data, options, Vec::new())?;
    Ok(out)
}

/// Encode `data` into `sink`, returning the number of bytes written.
pub fn encode_to<W: Write>(data: &[u8], options: &EncoderOptions, sink: W) -> Result<u64> {
    let (_, n_bytes) = encoder::encode_into(data, options, sink)?;
    Ok(n_bytes)
}

pub fn decode(data: &[u8]) -> Result<Vec<u8>> {
    Decoder::new(data).decode_all()
}

/// Decode `data` into `sink`, writing bytes as each token is resolved.
pub fn decode_to<W: Write>(data: &[u8], sink: W) -> Result<W> {
    Decoder::new(data).decode_into(sink)
}

#[cfg(feature = "python")]
mod python {
    use numpy::{PyArray1, PyReadonlyArrayDyn};
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;

    use crate::WindowSize;

    fn to_py_err(err: crate::Error) -> PyErr {
        PyValueError::new_err(err.to_string())
    }

    /// A Python module implemented in Rust. The name of this function must match
    /// the `lib.name` setting in the `Cargo.toml`, else Python will not be able to
    /// import the module.
    #[pymodule]
    fn lz12(m: &Bound<'_, PyModule>) -> PyResult<()> {
        #[pyfn(m)]
        #[pyo3(name = "encode")]
        #[pyo3(signature = (xs, window_size = 4095))]
        fn encode_py<'py>(
            py: Python<'py>,
            xs: PyReadonlyArrayDyn<'py, u8>,
            window_size: usize,
        ) -> PyResult<Bound<'py, PyArray1<u8>>> {
            let window_size = WindowSize::new(window_size).map_err(to_py_err)?;
            let result = crate::encode(xs.as_slice()?, window_size);
            Ok(PyArray1::from_vec_bound(py, result))
        }

        #[pyfn(m)]
        #[pyo3(name = "decode")]
        fn decode_py<'py>(
            py: Python<'py>,
            xs: PyReadonlyArrayDyn<'py, u8>,
        ) -> PyResult<Bound<'py, PyArray1<u8>>> {
            let result = crate::decode(xs.as_slice()?).map_err(to_py_err)?;
            Ok(PyArray1::from_vec_bound(py, result))
        }

        Ok(())
    }
}
