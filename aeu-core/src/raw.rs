//! Токенизация слова статуса и доступ к полям с проверкой границ.

use aeu_types::{FirmwareVersion, StatusError, StatusHeader, StatusResult, STATUS_HEADER_LEN};

/// Слово статуса как последовательность шестнадцатеричных токенов.
///
/// Порядок токенов сохраняется и служит индексом полей для всех форматов.
/// Длина не проверяется заранее: ошибка [`StatusError::TruncatedWord`]
/// возникает при первом обращении за конец слова.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawWord {
    values: Vec<u32>,
}

/// Тело слова: вид на токены после заголовка.
#[derive(Debug, Clone, Copy)]
pub struct Body<'a> {
    word: &'a RawWord,
}

impl RawWord {
    /// Разбирает токены, разделённые пробельными символами.
    pub fn parse(text: &str) -> StatusResult<Self> {
        let values = text
            .split_whitespace()
            .enumerate()
            .map(|(index, token)| parse_token(index, token))
            .collect::<StatusResult<Vec<_>>>()?;

        Ok(Self { values })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[u32] {
        &self.values
    }

    /// Значение по абсолютному индексу.
    pub fn get(
        &self,
        index: usize,
    ) -> StatusResult<u32> {
        self.values
            .get(index)
            .copied()
            .ok_or_else(|| StatusError::truncated(index, self.values.len()))
    }

    /// `len` значений начиная с `start`.
    ///
    /// Ошибка указывает на первый отсутствующий индекс.
    pub fn slice(
        &self,
        start: usize,
        len: usize,
    ) -> StatusResult<&[u32]> {
        let end = start + len;
        if end > self.values.len() {
            let missing = start.max(self.values.len());
            return Err(StatusError::truncated(missing, self.values.len()));
        }

        Ok(&self.values[start..end])
    }

    /// Читает пять полей заголовка (без проверки идентификатора платы).
    pub fn header(&self) -> StatusResult<StatusHeader> {
        let board_id = self.get(0)?;
        let status_format = self.get(1)?;
        let major = self.get(2)?;
        let minor = self.get(3)?;
        let patch = self.get(4)?;

        Ok(StatusHeader {
            board_id,
            status_format,
            firmware: FirmwareVersion {
                major,
                minor,
                patch,
            },
        })
    }

    pub fn body(&self) -> Body<'_> {
        Body { word: self }
    }
}

impl Body<'_> {
    pub fn get(
        &self,
        offset: usize,
    ) -> StatusResult<u32> {
        self.word.get(STATUS_HEADER_LEN + offset)
    }

    /// Истина, если значение ненулевое.
    pub fn flag(
        &self,
        offset: usize,
    ) -> StatusResult<bool> {
        Ok(self.get(offset)? != 0)
    }

    pub fn slice(
        &self,
        offset: usize,
        len: usize,
    ) -> StatusResult<&[u32]> {
        self.word.slice(STATUS_HEADER_LEN + offset, len)
    }
}

impl std::str::FromStr for RawWord {
    type Err = StatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn parse_token(
    index: usize,
    token: &str,
) -> StatusResult<u32> {
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token);

    // from_str_radix принимает ведущий '+', поэтому цифры проверяем сами
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(StatusError::malformed(index, token));
    }

    u32::from_str_radix(digits, 16).map_err(|_| StatusError::malformed(index, token))
}
