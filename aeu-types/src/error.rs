use thiserror::Error;

/// Результат для операций декодирования статуса AEU
pub type StatusResult<T> = std::result::Result<T, StatusError>;

/// Типы ошибок декодирования слова статуса.
///
/// Каждая ошибка окончательна для данного слова: частичный результат
/// никогда не возвращается.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatusError {
    /// На вход подана не строка (или текст элемента отсутствует)
    #[error("Input is not a string")]
    InvalidInputType,

    /// Токен не является шестнадцатеричным числом
    #[error("Malformed token #{index}: '{token}'")]
    MalformedToken { index: usize, token: String },

    /// Обращение к полю за пределами слова (индекс абсолютный, с заголовком)
    #[error("Truncated status word: field #{index} requested, {len} tokens present")]
    TruncatedWord { index: usize, len: usize },

    /// Идентификатор платы не равен 0x5A
    #[error("Unknown board type: 0x{0:X}")]
    UnknownBoardType(u32),

    /// Версия формата вне диапазона 0..=4
    #[error("Unknown status_format: {0}")]
    UnsupportedFormat(u32),
}

impl StatusError {
    /// Удобные конструкторы
    pub fn malformed<S: Into<String>>(
        index: usize,
        token: S,
    ) -> Self {
        Self::MalformedToken {
            index,
            token: token.into(),
        }
    }

    pub fn truncated(
        index: usize,
        len: usize,
    ) -> Self {
        Self::TruncatedWord { index, len }
    }
}
