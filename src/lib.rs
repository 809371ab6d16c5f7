//! ringq - a fixed-capacity ring queue
//!
//! A generic circular buffer that overwrites its oldest element when full,
//! addresses elements relative to a rotating head, and can grow or shrink
//! while keeping logical order.
//!
//! - **Ring**: overwrite-on-full append, positional get/set, resize
//! - **Concurrency**: one `parking_lot::RwLock` per ring, exclusive for writes
//! - **Config**: TOML + environment capacity settings
//! - **CLI**: `ringq`, a `tail -n` style line keeper
//!
//! # Quick Start
//!
//! ```
//! use ringq::RingBuffer;
//!
//! let ring = RingBuffer::new(3)?;
//! for v in 1..=5 {
//!     ring.append(v);
//! }
//! assert_eq!(ring.slice(), vec![3, 4, 5]);
//! assert_eq!(ring.data(), vec![4, 5, 3]);
//! # Ok::<(), ringq::RingError>(())
//! ```

pub mod cli;
pub mod config;
pub mod errors;
pub mod ring;
pub mod telemetry;

pub use config::RingConfig;
pub use errors::{Result, RingError};
pub use ring::RingBuffer;
