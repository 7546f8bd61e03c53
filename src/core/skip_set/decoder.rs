use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine;
use byteorder::{ByteOrder, LittleEndian, ReadBytesExt};

use crate::common::constants::{
    ARRAY_CONTAINER_MAX_CARDINALITY, BITMAP_CONTAINER_WORDS, MAX_CONTAINERS, NO_OFFSET_THRESHOLD,
    SERIAL_COOKIE, SERIAL_COOKIE_NO_RUNCONTAINER,
};

use super::{Container, DecodeError, Interval, SkipSet};

/// Standard alphabet, padding accepted but not required.
const SKIP_SET_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Decode a base64 query parameter into a [`SkipSet`].
pub fn decode_base64(data: &str) -> Result<SkipSet, DecodeError> {
    let bytes = SKIP_SET_BASE64.decode(data)?;
    decode(&bytes)
}

/// Deserialize the portable roaring bitmap layout.
///
/// Any byte sequence is accepted as input, malformed ones produce a [`DecodeError`].
/// Bytes following the last container are ignored.
pub fn decode(bytes: &[u8]) -> Result<SkipSet, DecodeError> {
    let mut reader: &[u8] = bytes;

    let cookie = reader.read_u32::<LittleEndian>().map_err(|_| DecodeError::Truncated("cookie"))?;
    let (size, run_flags) = if cookie == SERIAL_COOKIE_NO_RUNCONTAINER {
        let size = reader
            .read_u32::<LittleEndian>()
            .map_err(|_| DecodeError::Truncated("container count"))?;
        (size, None)
    } else if cookie & 0xFFFF == SERIAL_COOKIE {
        let size = (cookie >> 16) + 1;
        let flags = take(&mut reader, (size as usize + 7) / 8, "run container flags")?;
        (size, Some(flags))
    } else {
        return Err(DecodeError::InvalidCookie(cookie));
    };
    if size > MAX_CONTAINERS {
        return Err(DecodeError::TooManyContainers(size));
    }
    let size = size as usize;

    let descriptive = take(&mut reader, size * 4, "descriptive header")?;
    let mut keys: Vec<u16> = Vec::with_capacity(size);
    let mut cardinalities: Vec<usize> = Vec::with_capacity(size);
    for entry in descriptive.chunks_exact(4) {
        let key = LittleEndian::read_u16(&entry[0..2]);
        let cardinality = LittleEndian::read_u16(&entry[2..4]) as usize + 1;
        if let Some(&previous) = keys.last() {
            if key <= previous {
                return Err(DecodeError::UnsortedKeys { previous, current: key });
            }
        }
        keys.push(key);
        cardinalities.push(cardinality);
    }

    if run_flags.is_none() || size >= NO_OFFSET_THRESHOLD {
        // offsets only matter for random access, containers are read sequentially.
        take(&mut reader, size * 4, "offset header")?;
    }

    let mut containers: Vec<Container> = Vec::with_capacity(size);
    for (idx, (&key, &cardinality)) in keys.iter().zip(cardinalities.iter()).enumerate() {
        let is_run = run_flags.map_or(false, |flags| flags[idx / 8] & (1 << (idx % 8)) != 0);
        let container = if is_run {
            read_run_container(&mut reader, key)?
        } else if cardinality > ARRAY_CONTAINER_MAX_CARDINALITY {
            read_bitmap_container(&mut reader)?
        } else {
            read_array_container(&mut reader, key, cardinality)?
        };
        containers.push(container);
    }

    Ok(SkipSet::from_parts(keys, containers))
}

/// Split `len` bytes off the front of `reader`.
fn take<'a>(
    reader: &mut &'a [u8],
    len: usize,
    what: &'static str,
) -> Result<&'a [u8], DecodeError> {
    if reader.len() < len {
        return Err(DecodeError::Truncated(what));
    }
    let (head, tail) = reader.split_at(len);
    *reader = tail;
    Ok(head)
}

fn read_array_container(
    reader: &mut &[u8],
    key: u16,
    cardinality: usize,
) -> Result<Container, DecodeError> {
    let raw = take(reader, cardinality * 2, "array container")?;
    let mut values = vec![0u16; cardinality];
    LittleEndian::read_u16_into(raw, &mut values);
    if !values.windows(2).all(|pair| pair[0] < pair[1]) {
        return Err(DecodeError::UnsortedArray(key));
    }
    Ok(Container::Array(values))
}

fn read_bitmap_container(reader: &mut &[u8]) -> Result<Container, DecodeError> {
    let raw = take(reader, BITMAP_CONTAINER_WORDS * 8, "bitmap container")?;
    let mut words = Box::new([0u64; BITMAP_CONTAINER_WORDS]);
    LittleEndian::read_u64_into(raw, &mut words[..]);
    Ok(Container::Bitmap(words))
}

fn read_run_container(reader: &mut &[u8], key: u16) -> Result<Container, DecodeError> {
    let run_count = reader
        .read_u16::<LittleEndian>()
        .map_err(|_| DecodeError::Truncated("run container length"))? as usize;
    let raw = take(reader, run_count * 4, "run container")?;

    let mut intervals: Vec<Interval> = Vec::with_capacity(run_count);
    for run in raw.chunks_exact(4) {
        let start = LittleEndian::read_u16(&run[0..2]);
        let length = LittleEndian::read_u16(&run[2..4]);
        let end = start as u32 + length as u32;
        if end > u16::MAX as u32 {
            return Err(DecodeError::RunOverflow { key, start });
        }
        if let Some(previous) = intervals.last() {
            if start <= previous.end {
                return Err(DecodeError::UnsortedRuns(key));
            }
        }
        intervals.push(Interval::new(start, end as u16));
    }
    Ok(Container::Run(intervals))
}
