/// Fixed-capacity ring of 16-bit cells. Writes past the end wrap around and
/// overwrite whatever occupies the slot.
///
/// The write cursor counts every value ever pushed, so it keeps growing after
/// the ring has wrapped. Reads are addressed by that same logical position and
/// resolve to the slot it maps onto.
#[derive(Debug)]
pub struct RingBuffer {
    data: Vec<u16>,
    written: u64,
}

impl RingBuffer {
    pub fn new(cap: usize) -> Self {
        assert!(cap > 0, "ring capacity must be non-zero");
        Self { data: vec![0; cap], written: 0 }
    }

    fn slot(&self, pos: u64) -> usize {
        (pos % self.data.len() as u64) as usize
    }

    pub fn push(&mut self, val: u16) {
        let idx = self.slot(self.written);
        self.data[idx] = val;
        self.written += 1;
    }

    /// Current contents of the slot that logical position `pos` maps to.
    pub fn get(&self, pos: u64) -> u16 {
        self.data[self.slot(pos)]
    }

    /// Replays logical positions `0..written` in write order.
    pub fn iter(&self) -> impl Iterator<Item = u16> + '_ {
        (0..self.written()).map(move |pos| self.get(pos))
    }

    pub fn written(&self) -> u64 { self.written }
}
