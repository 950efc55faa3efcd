//=========================================================================
// Engine Linear Memory
//=========================================================================
//
// The engine owns one linear memory region and hands out byte offsets
// into it. The region can be relocated when it grows, which invalidates
// every view formed over the old allocation.
//
// Relocation is published through a generation counter: a view records
// the generation it was formed under and is stale as soon as the
// counter moves.
//
//=========================================================================

//=== LinearMemory ========================================================

/// Read access to the engine's linear memory.
pub trait LinearMemory {
    /// Increments every time the backing allocation is replaced.
    fn generation(&self) -> u64;

    /// Current size of the region in bytes.
    fn size_bytes(&self) -> usize;

    /// Borrows `len` 32-bit words starting at `byte_offset`.
    ///
    /// Returns `None` if the offset is not word-aligned or the range
    /// runs past the end of the region.
    fn words(&self, byte_offset: usize, len: usize) -> Option<&[u32]>;
}

//=== HeapMemory ==========================================================

const WORD: usize = std::mem::size_of::<u32>();

/// Growable, word-addressed linear memory.
///
/// Offset 0 is reserved so that a zero handle can always mean "null";
/// allocations start at the first word after it.
#[derive(Debug, Clone)]
pub struct HeapMemory {
    words: Vec<u32>,
    generation: u64,
    next_free: usize,
}

impl HeapMemory {
    /// Creates a zeroed region of at least `size_bytes` (rounded up to a
    /// whole word, minimum one word).
    pub fn new(size_bytes: usize) -> Self {
        let len = size_bytes.div_ceil(WORD).max(1);
        Self {
            words: vec![0; len],
            generation: 0,
            next_free: WORD,
        }
    }

    /// Grows the region by `additional_bytes` and relocates it.
    ///
    /// Returns the previous size in bytes, or `None` (region untouched)
    /// if the new size overflows or cannot be allocated.
    pub fn grow(&mut self, additional_bytes: usize) -> Option<usize> {
        let old = self.size_bytes();
        let new_len = self.words.len().checked_add(additional_bytes.div_ceil(WORD))?;
        new_len.checked_mul(WORD)?;

        let mut moved = Vec::new();
        moved.try_reserve_exact(new_len).ok()?;
        moved.extend_from_slice(&self.words);
        moved.resize(new_len, 0);
        self.words = moved;
        self.generation += 1;
        Some(old)
    }

    /// Reserves `len` words and returns their byte offset, growing the
    /// region if needed.
    ///
    /// Returns `None` and leaves the allocator unchanged if the request
    /// overflows or the region cannot grow.
    pub fn alloc_words(&mut self, len: usize) -> Option<usize> {
        let offset = self.next_free;
        let end = len.checked_mul(WORD)?.checked_add(offset)?;
        if end > self.size_bytes() {
            self.grow(end - self.size_bytes())?;
        }
        self.next_free = end;
        Some(offset)
    }

    /// Mutable counterpart of [`LinearMemory::words`].
    pub fn words_mut(&mut self, byte_offset: usize, len: usize) -> Option<&mut [u32]> {
        let range = word_range(byte_offset, len, self.words.len())?;
        Some(&mut self.words[range])
    }
}

impl LinearMemory for HeapMemory {
    fn generation(&self) -> u64 {
        self.generation
    }

    fn size_bytes(&self) -> usize {
        self.words.len() * WORD
    }

    fn words(&self, byte_offset: usize, len: usize) -> Option<&[u32]> {
        let range = word_range(byte_offset, len, self.words.len())?;
        Some(&self.words[range])
    }
}

fn word_range(byte_offset: usize, len: usize, total: usize) -> Option<std::ops::Range<usize>> {
    if byte_offset % WORD != 0 {
        return None;
    }
    let start = byte_offset / WORD;
    let end = start.checked_add(len)?;
    (end <= total).then_some(start..end)
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rounds_up_to_whole_words() {
        let mem = HeapMemory::new(5);
        assert_eq!(mem.size_bytes(), 8);
        assert_eq!(mem.generation(), 0);
    }

    #[test]
    fn words_rejects_misaligned_offset() {
        let mem = HeapMemory::new(64);
        assert!(mem.words(2, 1).is_none());
    }

    #[test]
    fn words_rejects_out_of_range() {
        let mem = HeapMemory::new(16);
        assert!(mem.words(8, 2).is_some());
        assert!(mem.words(8, 3).is_none());
    }

    #[test]
    fn words_rejects_overflowing_length() {
        let mem = HeapMemory::new(16);
        assert!(mem.words(4, usize::MAX).is_none());
    }

    #[test]
    fn grow_bumps_generation_and_keeps_contents() {
        let mut mem = HeapMemory::new(16);
        mem.words_mut(4, 1).unwrap()[0] = 0xDEAD_BEEF;

        let old = mem.grow(16);

        assert_eq!(old, Some(16));
        assert_eq!(mem.size_bytes(), 32);
        assert_eq!(mem.generation(), 1);
        assert_eq!(mem.words(4, 1).unwrap(), &[0xDEAD_BEEF]);
    }

    #[test]
    fn alloc_never_hands_out_offset_zero() {
        let mut mem = HeapMemory::new(4);
        let offset = mem.alloc_words(4).unwrap();
        assert_ne!(offset, 0);
        assert!(mem.words(offset, 4).is_some());
    }

    #[test]
    fn alloc_grows_when_full() {
        let mut mem = HeapMemory::new(8);
        mem.alloc_words(1);
        let before = mem.generation();

        mem.alloc_words(16);

        assert!(mem.generation() > before);
    }

    #[test]
    fn oversized_alloc_is_refused_without_moving_the_cursor() {
        let mut mem = HeapMemory::new(16);

        assert_eq!(mem.alloc_words(usize::MAX / 2), None);
        assert_eq!(mem.alloc_words(usize::MAX), None);
        assert_eq!(mem.generation(), 0);
        assert_eq!(mem.alloc_words(1), Some(4));
    }

    #[test]
    fn overflowing_grow_leaves_region_untouched() {
        let mut mem = HeapMemory::new(16);

        assert_eq!(mem.grow(usize::MAX), None);
        assert_eq!(mem.size_bytes(), 16);
        assert_eq!(mem.generation(), 0);
    }
}
