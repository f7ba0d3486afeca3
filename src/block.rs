//! Numbered block store with a dirty-tracking buffer pool.
//!
//! The backing store here is an in-process `Vec` of fixed-size blocks,
//! with `BlockStore::open` as the seam where a file-backed store plugs
//! in for persisted state.

use crate::error::{VmError, VmResult};
use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};

pub const BLOCK_SIZE: usize = 1024;

struct Buffer {
    block: u32,
    data: [u8; BLOCK_SIZE],
    dirty: bool,
}

/// A numbered pool of fixed-size blocks.
pub struct BlockStore {
    buffers: Vec<Buffer>,
    capacity: usize,
    /// Total number of addressable blocks; `0` and anything `> max_block`
    /// is `InvalidBlock`.
    max_block: u32,
    backing: Option<File>,
}

impl BlockStore {
    pub fn new(max_block: u32, buffer_capacity: usize) -> BlockStore {
        BlockStore {
            buffers: Vec::with_capacity(buffer_capacity),
            capacity: buffer_capacity.max(1),
            max_block,
            backing: None,
        }
    }

    /// Back the store with a file of 1024-byte records indexed from 1.
    /// Missing file is created empty.
    pub fn open(&mut self, path: &std::path::Path) -> VmResult<()> {
        let file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .open(path)
        .map_err(|_| VmError::InvalidBlock)?;
        self.backing = Some(file);
        Ok(())
    }

    fn validate(&self, block: i64) -> VmResult<u32> {
        if block <= 0 || block as u64 > self.max_block as u64 {
            return Err(VmError::InvalidBlock);
        }
        Ok(block as u32)
    }

    fn find_buffer(&self, block: u32) -> Option<usize> {
        self.buffers.iter().position(|b| b.block == block)
    }

    fn read_from_backing(&mut self, block: u32) -> [u8; BLOCK_SIZE] {
        let mut data = [0u8; BLOCK_SIZE];
        if let Some(file) = self.backing.as_mut() {
            let offset = (block as u64 - 1) * BLOCK_SIZE as u64;
            if file.seek(SeekFrom::Start(offset)).is_ok() {
                let _ = file.read_exact(&mut data);
            }
        }
        data
    }

    fn write_to_backing(&mut self, block: u32, data: &[u8; BLOCK_SIZE]) {
        if let Some(file) = self.backing.as_mut() {
            let offset = (block as u64 - 1) * BLOCK_SIZE as u64;
            if file.seek(SeekFrom::Start(offset)).is_ok() {
                let _ = file.write_all(data);
            }
        }
    }

    /// Evict the oldest buffer to make room, flushing it first if dirty.
    fn evict_one(&mut self) {
        if self.buffers.is_empty() {
            return;
        }
        let victim = self.buffers.remove(0);
        if victim.dirty {
            self.write_to_backing(victim.block, &victim.data);
        }
    }

    fn ensure_room(&mut self) {
        while self.buffers.len() >= self.capacity {
            self.evict_one();
        }
    }

    /// `BLOCK n` — ensure block `n` is buffered, returning its index into
    /// the buffer pool (the VM maps this to a memory-visible address).
    pub fn block(&mut self, n: i64) -> VmResult<usize> {
        let block = self.validate(n)?;
        if let Some(idx) = self.find_buffer(block) {
            return Ok(idx);
        }
        let data = self.read_from_backing(block);
        self.ensure_room();
        self.buffers.push(Buffer {
                block,
                data,
                dirty: false,
        });
        Ok(self.buffers.len() - 1)
    }

    /// `BUFFER n` — like `block`, but never reads backing contents.
    pub fn buffer(&mut self, n: i64) -> VmResult<usize> {
        let block = self.validate(n)?;
        if let Some(idx) = self.find_buffer(block) {
            return Ok(idx);
        }
        self.ensure_room();
        self.buffers.push(Buffer {
                block,
                data: [0u8; BLOCK_SIZE],
                dirty: false,
        });
        Ok(self.buffers.len() - 1)
    }

    pub fn data(&self, idx: usize) -> &[u8; BLOCK_SIZE] {
        &self.buffers[idx].data
    }

    pub fn data_mut(&mut self, idx: usize) -> &mut [u8; BLOCK_SIZE] {
        &mut self.buffers[idx].data
    }

    pub fn block_number(&self, idx: usize) -> u32 {
        self.buffers[idx].block
    }

    /// `UPDATE` — mark a buffer dirty.
    pub fn mark_dirty(&mut self, idx: usize) {
        self.buffers[idx].dirty = true;
    }

    /// `SAVE-BUFFERS` — flush every dirty buffer without invalidating it.
    pub fn save_buffers(&mut self) {
        for i in 0..self.buffers.len() {
            if self.buffers[i].dirty {
                let (block, data) = (self.buffers[i].block, self.buffers[i].data);
                self.write_to_backing(block, &data);
                self.buffers[i].dirty = false;
            }
        }
    }

    /// `EMPTY-BUFFERS` — invalidate every buffer, discarding dirty data.
    pub fn empty_buffers(&mut self) {
        self.buffers.clear();
    }

    /// `FLUSH` — `SAVE-BUFFERS` then `EMPTY-BUFFERS`.
    pub fn flush(&mut self) {
        self.save_buffers();
        self.empty_buffers();
    }

    pub fn max_block(&self) -> u32 {
        self.max_block
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_zero_is_invalid() {
        let mut s = BlockStore::new(10, 4);
        assert_eq!(s.block(0), Err(VmError::InvalidBlock));
    }

    #[test]
    fn block_beyond_range_is_invalid() {
        let mut s = BlockStore::new(10, 4);
        assert_eq!(s.block(11), Err(VmError::InvalidBlock));
    }

    #[test]
    fn update_flush_round_trips_in_memory() {
        let mut s = BlockStore::new(10, 4);
        let idx = s.block(1).unwrap();
        s.data_mut(idx)[0] = 42;
        s.mark_dirty(idx);
        s.save_buffers();
        s.empty_buffers();
        let idx2 = s.block(1).unwrap();
        // No backing file: after empty_buffers a fresh read is zeroed,
        // matching "no backing store configured" rather than persistence.
        assert_eq!(s.data(idx2)[0], 0);
    }

    #[test]
    fn eviction_flushes_dirty_buffer_before_reuse() {
        let mut s = BlockStore::new(10, 1);
        let idx = s.block(1).unwrap();
        s.data_mut(idx)[0] = 7;
        s.mark_dirty(idx);
        // Forces eviction of block 1's buffer since capacity is 1.
        let _ = s.block(2).unwrap();
        assert_eq!(s.buffers.len(), 1);
    }
}
