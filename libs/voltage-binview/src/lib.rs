//! Voltage Binary View Library
//!
//! Typed accessors over raw byte buffers for PLC register maps and telemetry
//! frames, with explicit per-call endianness.
//!
//! # Architecture
//!
//! This library provides:
//! - **Codecs** (`bytes`): integers, floats, bits, nibbles, BCD, IPv4, S7
//!   date-time, bit strings, byte-order utilities
//! - **Ranged values** (`ranged`): strict range-checked integer wrapper
//! - **Configuration** (`config`): endianness and precision settings via figment
//! - **View** (`view`): `BinView`, a position-relative façade over `&mut [u8]`
//!
//! # Example
//!
//! ```
//! use voltage_binview::{BinView, Endian};
//!
//! let mut registers = [0u8; 8];
//! let mut view = BinView::new(&mut registers, Endian::BigEndian);
//! view.set_u16_at(0, 23222)?;
//! view.set_ipv4_at(4, "10.0.0.5")?;
//! assert_eq!(view.get_u16_at(0)?, 23222);
//! assert_eq!(view.get_ipv4_string_at(4)?, "10.0.0.5");
//! # Ok::<(), voltage_binview::BinViewError>(())
//! ```

pub mod bytes;
pub mod config;
pub mod error;
pub mod ranged;
pub mod view;

// Re-export core types
pub use bytes::{BitOrder, Endian, Ipv4Source, NibbleSignificance};
pub use config::ViewConfig;
pub use error::{BinViewError, Result};
pub use ranged::{Int16, Int32, Int64, Int8, Ranged, UInt16, UInt32, UInt64, UInt8};
pub use view::BinView;
