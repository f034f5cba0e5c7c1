/// Payload Encoding
///
/// A byte payload is right-padded with zeros to `chunk_count * chunk_size`
/// bytes and cut into chunks. Chunk i, read as a big-endian integer, becomes
/// the evaluation point (i, chunk_i); the committed polynomial interpolates
/// those points. With chunks of at most 31 bytes every value is below the
/// group order, so no information is lost to reduction.

use tracing::debug;

use crate::config::ProtocolConfig;
use crate::error::{Error, Result};
use crate::fields::{Field, Fr};
use crate::polynomial::Polynomial;

/// Right-pads `data` with zero bytes up to `length`.
pub fn format_data(data: &[u8], length: usize) -> Result<Vec<u8>> {
    if data.len() > length {
        return Err(Error::SizeMismatch {
            expected: length,
            actual: data.len(),
        });
    }
    let mut padded = Vec::with_capacity(length);
    padded.extend_from_slice(data);
    padded.resize(length, 0);
    Ok(padded)
}

/// Evaluation points of a payload, one per chunk.
pub fn encode_points(data: &[u8], config: &ProtocolConfig) -> Result<Vec<(Fr, Fr)>> {
    config.validate()?;
    let padded = format_data(data, config.capacity())?;
    Ok(padded
        .chunks(config.chunk_size)
        .enumerate()
        .map(|(i, chunk)| (Fr::from_u64(i as u64), Fr::from_bytes_be(chunk)))
        .collect())
}

/// Encodes a payload as its evaluation points and their interpolating
/// polynomial.
pub fn encode(data: &[u8], config: &ProtocolConfig) -> Result<(Vec<(Fr, Fr)>, Polynomial)> {
    let points = encode_points(data, config)?;
    let poly = Polynomial::interpolate(&points)?;
    debug!(
        payload_bytes = data.len(),
        points = points.len(),
        "encoded payload"
    );
    Ok((points, poly))
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;

    #[test]
    fn test_format_data_pads() {
        assert_eq!(format_data(b"ab", 4).unwrap(), b"ab\0\0".to_vec());
        assert_eq!(format_data(b"", 2).unwrap(), vec![0, 0]);
        assert_eq!(format_data(b"abcd", 4).unwrap(), b"abcd".to_vec());
    }

    #[test]
    fn test_format_data_rejects_oversized() {
        assert_eq!(
            format_data(&[1u8; 5], 4),
            Err(Error::SizeMismatch { expected: 4, actual: 5 })
        );
    }

    #[test]
    fn test_encode_points_layout() {
        let config = ProtocolConfig::default();
        let points = encode_points(&[0xff; 32], &config).unwrap();
        assert_eq!(points.len(), 16);

        let all_ones = (BigUint::from(1u32) << 248u32) - 1u32;
        assert_eq!(points[0], (Fr::zero(), Fr::new(all_ones)));
        // second chunk holds one 0xff byte followed by 30 bytes of padding
        assert_eq!(points[1].1, Fr::new(BigUint::from(0xffu32) << 240u32));
        assert_eq!(points[2], (Fr::from_u64(2), Fr::zero()));
    }

    #[test]
    fn test_encode_interpolates_points() {
        let config = ProtocolConfig::default();
        let (points, poly) = encode(b"correct horse battery staple", &config).unwrap();
        assert_eq!(poly.len(), config.chunk_count);
        for (x, y) in &points {
            assert_eq!(&poly.evaluate_scalar(x), y);
        }
    }

    #[test]
    fn test_encode_rejects_payload_over_capacity() {
        let config = ProtocolConfig::default();
        let result = encode(&[0u8; 497], &config);
        assert_eq!(result, Err(Error::SizeMismatch { expected: 496, actual: 497 }));
    }

    #[test]
    fn test_encode_with_small_config() {
        let config = ProtocolConfig {
            chunk_size: 2,
            chunk_count: 3,
            challenge_max: 5,
        };
        let points = encode_points(&[1, 2, 3], &config).unwrap();
        let ys: Vec<Fr> = points.into_iter().map(|(_, y)| y).collect();
        assert_eq!(ys, vec![Fr::from_u64(0x0102), Fr::from_u64(0x0300), Fr::zero()]);
    }
}
