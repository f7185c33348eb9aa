use serde::Serialize;

use crate::{AlarmState, StatusFormat};

/// Версия прошивки контроллера AEU
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FirmwareVersion {
    #[serde(rename = "firmware_major")]
    pub major: u32,
    #[serde(rename = "firmware_minor")]
    pub minor: u32,
    #[serde(rename = "firmware_patch")]
    pub patch: u32,
}

/// Заголовок слова статуса: первые пять токенов, общие для всех форматов
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusHeader {
    pub board_id: u32,
    pub status_format: u32,
    pub firmware: FirmwareVersion,
}

/// Раскодированное слово статуса AEU.
///
/// Значение неизменяемо и не хранит ссылок на исходный текст. Поля,
/// которых нет в данной версии формата, равны `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodedStatus {
    // --- Заголовок ---
    /// Идентификатор платы (всегда 0x5A)
    pub board_id: u32,
    /// Версия формата слова (0..=4)
    pub status_format: u32,
    #[serde(flatten)]
    pub firmware: FirmwareVersion,

    // --- Аварии ---
    /// Сырой байт аварий
    pub alarms: u32,
    pub pulse_width_alarm: bool,
    pub sspa_overdrive_alarm: bool,
    pub sspa_overtemp_alarm: bool,
    pub sspa_overtemp_alarm_latch: bool,
    pub dew_sensor_alarm: bool,
    /// Расширенные функции доступны (инверсный бит 0x40)
    pub extended_funcs: bool,
    pub sspa_overcurrent_alarm: bool,
    /// Только в форматах 3 и 4
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brownout_alarm: Option<bool>,

    // --- Сигналы ---
    /// Выбранный канал (биты 5..7), нет в формате 4
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signal_select: Option<u32>,
    /// Сырые отсчёты детекторов (2 или 10)
    pub signal_count: Vec<u32>,
    /// Напряжения детекторов, В
    pub signal_voltage: Vec<f64>,

    // --- Разрешения ---
    pub sspa_power_enabled: bool,
    pub sspa_gating_enabled: bool,
    pub interrupt_enabled: bool,
    pub bypass_enabled: bool,
    pub offset_enabled: bool,
    pub forced_enabled: bool,

    // --- Аналоговые мониторы ---
    /// +5 В, В
    pub p5v_voltage_monitor: f64,
    /// +8 В, В
    pub p8v_voltage_monitor: f64,
    /// -8 В (восстановлено через делитель), В
    pub m8v_voltage_monitor: f64,
    /// Напряжение питания SSPA, В
    pub sspa_voltage_monitor: f64,
    /// Ток SSPA, А
    pub sspa_current_monitor: f64,
    /// Температура контроллера, °C
    pub controller_temp: f64,
    /// Температура SSPA, °C
    pub sspa_temp: f64,

    // --- Счётчики ---
    pub interrupt_count: u32,
    /// Коды лучей, только в формате 4
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beamcodes: Option<Vec<u32>>,
    /// Задержка выборки мощности, мкс
    pub power_sample_delay: f64,
    pub power_sample_counts: u32,

    // --- Производные величины ---
    /// Прямая мощность, дБм
    pub pfwd: f64,
    /// Отражённая мощность, дБм
    pub pref: f64,
    /// Выходная мощность, Вт (0 вне рабочего режима)
    pub pwatts: f64,
    pub alarm_state: AlarmState,
}

impl DecodedStatus {
    /// Версия формата в виде перечисления.
    ///
    /// Всегда успешна для значения, полученного из декодера.
    pub fn format(&self) -> Option<StatusFormat> {
        StatusFormat::from_u32(self.status_format).ok()
    }
}

impl std::fmt::Display for FirmwareVersion {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
