/// Ключи, убираемые из компактного отчёта
pub const COMPACT_KEY_FILTER: [&str; 8] = [
    "firmware_major",
    "firmware_minor",
    "firmware_patch",
    "signal_count",
    "signal_voltage",
    "beamcodes",
    "interrupt_count",
    "status_format",
];

/// Параметры представления отчёта по решётке.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReportConfig {
    /// Убрать редко используемые поля и свернуть прошивку в строку
    pub compact: bool,
    /// Округлять числа с плавающей точкой до n знаков (None = без округления)
    pub ndigits: Option<u32>,
}

////////////////////////////////////////////////////////////////////////////////
// Собственные методы
////////////////////////////////////////////////////////////////////////////////

impl ReportConfig {
    pub fn compact(mut self) -> Self {
        self.compact = true;
        self
    }

    pub fn with_ndigits(
        mut self,
        ndigits: u32,
    ) -> Self {
        self.ndigits = Some(ndigits);
        self
    }
}
