use crate::{StatusError, StatusResult};

/// Длина заголовка слова статуса (board_id, format, firmware x3)
pub const STATUS_HEADER_LEN: usize = 5;

/// Версия формата слова статуса
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum StatusFormat {
    /// Базовая раскладка
    V0 = 0,
    /// V0 + флаг bypass
    V1 = 1,
    /// V1 + флаг offset
    V2 = 2,
    /// Упакованный байт разрешений
    V3 = 3,
    /// 10 сигналов + 8 кодов лучей
    V4 = 4,
}

impl StatusFormat {
    /// Все поддерживаемые форматы по порядку.
    pub const ALL: [StatusFormat; 5] = [
        StatusFormat::V0,
        StatusFormat::V1,
        StatusFormat::V2,
        StatusFormat::V3,
        StatusFormat::V4,
    ];

    pub fn from_u32(v: u32) -> StatusResult<Self> {
        match v {
            0 => Ok(StatusFormat::V0),
            1 => Ok(StatusFormat::V1),
            2 => Ok(StatusFormat::V2),
            3 => Ok(StatusFormat::V3),
            4 => Ok(StatusFormat::V4),
            _ => Err(StatusError::UnsupportedFormat(v)),
        }
    }

    pub fn as_u8(&self) -> u8 {
        *self as u8
    }

    /// Количество токенов после заголовка, нужное этому формату
    pub fn body_len(&self) -> usize {
        match self {
            StatusFormat::V0 => 17,
            StatusFormat::V1 => 18,
            StatusFormat::V2 => 19,
            StatusFormat::V3 => 15,
            StatusFormat::V4 => 30,
        }
    }

    /// Полная длина слова в токенах, включая заголовок
    pub fn word_len(&self) -> usize {
        STATUS_HEADER_LEN + self.body_len()
    }

    /// Есть ли в формате упакованный байт разрешений (и флаг brownout)
    pub fn has_enables_byte(&self) -> bool {
        matches!(self, StatusFormat::V3 | StatusFormat::V4)
    }
}

impl std::fmt::Display for StatusFormat {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "v{}", self.as_u8())
    }
}
