//! Декодер слова статуса AEU
//!
//! AEU (контроллер усилителя мощности панели фазированной решётки)
//! периодически выдаёт слово статуса: последовательность шестнадцатеричных
//! токенов в одном из пяти исторических форматов (0-4). Библиотека
//! восстанавливает из него аварии, разрешения, аналоговые мониторы в
//! физических единицах, а также прямую/отражённую мощность, выходную
//! мощность и сводное состояние аварий.
//!
//! # Быстрый старт
//!
//! ```
//! use aeu_core::{decode, AlarmState};
//!
//! let status = decode(
//!     "5A 02 01 01 1A 51 00 C4 93 01 01 01 01FF 0292 0263 0182 00BA 00BA 02EE 0000 01AE8F8B FF 01 FF",
//! )?;
//! assert_eq!(status.alarm_state, AlarmState::Ok);
//! assert!(status.pwatts > 72.0);
//! # Ok::<(), aeu_core::StatusError>(())
//! ```

pub mod config;
pub mod consts;
pub mod decoder;
pub mod layout;
pub mod raw;
pub mod report;

pub use aeu_types::*;
pub use config::*;
pub use decoder::*;
pub use raw::*;
pub use report::*;

/// Версия библиотеки.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
