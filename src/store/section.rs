use std::io::{Read, Seek, Write};

use binrw::{BinRead, BinResult, BinWrite, Endian};

use crate::marker::{MarkerType, ObjectiveMarker};

use super::MarkerStore;

/// Persisted layout of a store, big endian:
///
/// ```text
/// i32 count
/// count * { u8 marker type, i32 id, u8 flags, variant payload }
/// ```
impl MarkerStore {
    /// Reads a marker section written by [`MarkerStore::write`].
    pub fn read<R: Read + Seek>(reader: &mut R) -> BinResult<Self> {
        let count_pos = reader.stream_position()?;
        let count = i32::read_be(reader)?;
        let count = usize::try_from(count).map_err(|_| binrw::Error::AssertFail {
            pos: count_pos,
            message: format!("Negative marker count {count}"),
        })?;

        let mut store = MarkerStore::new();
        for _ in 0..count {
            let tag_pos = reader.stream_position()?;
            let tag = u8::read_be(reader)?;
            let Ok(marker_type) = MarkerType::try_from(tag) else {
                return Err(binrw::Error::AssertFail {
                    pos: tag_pos,
                    message: format!("Unknown marker type {tag}"),
                });
            };

            let id = i32::read_be(reader)?;
            let marker = ObjectiveMarker::read_be_args(reader, (marker_type,))?;

            if store.add(id, marker).is_some() {
                tracing::warn!("Marker {id} appears more than once, keeping the last one");
            }
        }

        tracing::debug!("Read {} markers", store.size());

        Ok(store)
    }

    /// Writes every marker in slot order, so reading it back yields the same iteration order.
    pub fn write<W: Write + Seek>(&self, writer: &mut W) -> BinResult<()> {
        let count = record_count(self.size(), writer.stream_position()?)?;
        count.write_be(writer)?;

        for (id, marker) in self.iter_with_ids() {
            (marker.marker_type() as u8).write_be(writer)?;
            id.write_be(writer)?;
            marker.write_options(writer, Endian::Big, ())?;
        }

        Ok(())
    }
}

/// The persisted count is an `i32`, `pos` is where it would be written.
fn record_count(size: usize, pos: u64) -> BinResult<i32> {
    i32::try_from(size).map_err(|_| binrw::Error::AssertFail {
        pos,
        message: format!("Too many markers to persist: {size}"),
    })
}
