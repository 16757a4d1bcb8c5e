//! Fixed-layout binary save files.
//!
//! The record is 40 little-endian 4-byte signed fields, 160 bytes total, in
//! a fixed order: 36 occupancy codes (0 empty, 1 player, 2 computer), player
//! score, computer score, current factor (−1 when unset), game-over flag.
//! There is no header, version, or checksum; a load must match the exact
//! length or fail.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::SaveError;
use crate::game::{Cell, SIZE};

/// Total record length in bytes: 36 occupancy fields plus 4 scalar fields.
pub const RECORD_LEN: usize = (SIZE + 4) * 4;

/// Staged image of a full session record. Loads decode into this first and
/// commit to live state only once the whole record is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveData {
    pub cells: [Cell; SIZE],
    pub player_score: i32,
    pub computer_score: i32,
    pub current_factor: i32,
    pub game_over: bool,
}

impl SaveData {
    pub fn encode(&self) -> [u8; RECORD_LEN] {
        let mut buf = [0u8; RECORD_LEN];
        let mut fields = self.cells.iter().map(|c| c.to_code()).collect::<Vec<_>>();
        fields.push(self.player_score);
        fields.push(self.computer_score);
        fields.push(self.current_factor);
        fields.push(i32::from(self.game_over));

        for (chunk, field) in buf.chunks_exact_mut(4).zip(fields) {
            chunk.copy_from_slice(&field.to_le_bytes());
        }
        buf
    }

    pub fn decode(buf: &[u8; RECORD_LEN]) -> Result<Self, SaveError> {
        let field = |i: usize| {
            let mut bytes = [0u8; 4];
            bytes.copy_from_slice(&buf[i * 4..i * 4 + 4]);
            i32::from_le_bytes(bytes)
        };

        let mut cells = [Cell::Empty; SIZE];
        for (pos, cell) in cells.iter_mut().enumerate() {
            let code = field(pos);
            *cell = Cell::from_code(code).ok_or(SaveError::BadOwnerCode(code))?;
        }

        Ok(SaveData {
            cells,
            player_score: field(SIZE),
            computer_score: field(SIZE + 1),
            current_factor: field(SIZE + 2),
            game_over: field(SIZE + 3) != 0,
        })
    }

    /// Write the record in one shot.
    pub fn write_to(&self, path: &Path) -> Result<(), SaveError> {
        fs::write(path, self.encode())?;
        Ok(())
    }

    /// Read and decode a full record. Fails with `FileAbsent` when the file
    /// is missing and `ShortRead` when its length is not exactly
    /// [`RECORD_LEN`]; nothing is committed on failure.
    pub fn read_from(path: &Path) -> Result<Self, SaveError> {
        let bytes = fs::read(path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                SaveError::FileAbsent(path.to_path_buf())
            } else {
                SaveError::Io(e)
            }
        })?;

        let buf: &[u8; RECORD_LEN] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| SaveError::short_read(bytes.len()))?;
        Self::decode(buf)
    }
}
