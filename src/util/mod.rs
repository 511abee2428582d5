pub mod hex;
pub mod ring_buffer;
