//! Физические константы и раскладки полей слова статуса AEU.
//!
//! Смещения внутри форматов отсчитываются от начала тела слова, т.е. сразу
//! после пятибайтного заголовка.

/// Идентификатор платы AEU в первом байте слова
pub const AEU_BOARD_ID: u32 = 0x5A;

////////////////////////////////////////////////////////////////////////////////
// Маски байта аварий (одинаковы во всех форматах)
////////////////////////////////////////////////////////////////////////////////

pub const ALARM_PULSEWIDTH: u32 = 0x02;
pub const ALARM_OVERDRIVE: u32 = 0x04;
pub const ALARM_OVERTEMP_LATCH: u32 = 0x08;
pub const ALARM_DEWSENSOR: u32 = 0x10;
pub const ALARM_OVERCURRENT: u32 = 0x20;
/// Бит установлен, когда расширенные функции НЕ доступны
pub const ALARM_EXTENDED: u32 = 0x40;
pub const ALARM_OVERTEMP: u32 = 0x80;

////////////////////////////////////////////////////////////////////////////////
// Маски байта разрешений (форматы 3 и 4)
////////////////////////////////////////////////////////////////////////////////

pub const ENABLE_INTERRUPT: u32 = 0x01;
pub const ENABLE_BYPASS: u32 = 0x02;
pub const ENABLE_OFFSET: u32 = 0x04;
pub const ENABLE_FORCED: u32 = 0x08;
pub const ENABLE_BROWNOUT: u32 = 0x10;
pub const ENABLE_SSPAPOWER: u32 = 0x20;
pub const ENABLE_SSPAGATE: u32 = 0x40;

////////////////////////////////////////////////////////////////////////////////
// Масштабирование АЦП
////////////////////////////////////////////////////////////////////////////////

/// Вольт на отсчёт 10-битного АЦП мониторов
pub const ADC_SCALE: f64 = 5.0 / 1023.0;

/// Полная шкала детекторов сигнала, В
pub const SIGNAL_FULL_SCALE_V: f64 = 2.5;
/// Максимальный отсчёт 8-битного детектора
pub const SIGNAL_MAX_COUNT: f64 = 255.0;

/// Делитель монитора +5 В и +8 В
pub const RAIL_DIVIDER_GAIN: f64 = 2.0;
/// Делитель монитора питания SSPA
pub const SSPA_VOLTAGE_GAIN: f64 = 11.0;
/// Коэффициент датчика тока SSPA, В/А
pub const SSPA_CURRENT_SENSE: f64 = 0.8592;

/// Резисторы делителя, по которому восстанавливается -8 В
pub const M8V_DIVIDER_TOP: f64 = 5.11;
pub const M8V_DIVIDER_BOTTOM: f64 = 2.0;
pub const M8V_DIVIDER_RATIO: f64 = M8V_DIVIDER_TOP / (M8V_DIVIDER_TOP + M8V_DIVIDER_BOTTOM);

/// Датчик температуры: 0.5 В при 0 °C, 10 мВ/°C
pub const TEMP_OFFSET_V: f64 = 0.5;
pub const TEMP_SLOPE_V_PER_C: f64 = 0.01;

/// Отсчётов выборки мощности на микросекунду
pub const POWER_SAMPLE_COUNTS_PER_US: f64 = 4.0;

////////////////////////////////////////////////////////////////////////////////
// Калибровка мощности
////////////////////////////////////////////////////////////////////////////////

/// Индексы детекторов прямой и отражённой мощности
pub const SIGNAL_POWER_FWD: usize = 0;
pub const SIGNAL_POWER_REF: usize = 1;

/// Типичная прямая мощность, дБм, и соответствующий отсчёт детектора
pub const PFWD_CAL_DBM: f64 = 57.0;
pub const VFWD_CAL_COUNTS: f64 = 215.0;
pub const VFWD_CAL_V: f64 = VFWD_CAL_COUNTS * (SIGNAL_FULL_SCALE_V / SIGNAL_MAX_COUNT);
/// Наклон детектора, В/дБм
pub const DETECTOR_SLOPE_V_PER_DBM: f64 = 0.045;

/// Пороги, выше которых ток и напряжение SSPA отражают выходную мощность
pub const PWATTS_MIN_CURRENT_A: f64 = 0.3;
pub const PWATTS_MIN_PFWD_DBM: f64 = 45.0;

////////////////////////////////////////////////////////////////////////////////
// Раскладки форматов
////////////////////////////////////////////////////////////////////////////////

/// Смещения аналоговых мониторов и счётчиков внутри тела слова
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalogOffsets {
    pub p5v: usize,
    pub m8v_adc: usize,
    pub sspa_voltage: usize,
    pub sspa_current: usize,
    pub controller_temp: usize,
    pub sspa_temp: usize,
    pub p8v: usize,
    pub interrupt_count: usize,
    pub power_sample: usize,
}

/// Базовая раскладка (формат 0), общая для форматов 0-2
pub mod v0 {
    use super::AnalogOffsets;

    pub const ALARMS: usize = 0;
    pub const SIGNAL_SELECT: usize = 1;
    pub const SIGNAL_COUNT: usize = 2;
    pub const SIGNAL_COUNT_LEN: usize = 2;
    pub const SSPA_POWER_ENABLE: usize = 4;
    pub const SSPA_GATING_ENABLE: usize = 5;
    pub const INTERRUPT_ENABLE: usize = 6;

    pub const ANALOG: AnalogOffsets = AnalogOffsets {
        p5v: 7,
        m8v_adc: 8,
        sspa_voltage: 9,
        sspa_current: 10,
        controller_temp: 11,
        sspa_temp: 12,
        p8v: 13,
        interrupt_count: 15,
        power_sample: 16,
    };
}

/// Формат 1: база плюс флаг bypass
pub mod v1 {
    pub const BYPASS_ENABLE: usize = 17;
}

/// Формат 2: формат 1 плюс флаг offset
pub mod v2 {
    pub const OFFSET_ENABLE: usize = 18;
}

/// Формат 3: три байта разрешений заменены одним упакованным
pub mod v3 {
    use super::AnalogOffsets;

    pub const ALARMS: usize = 0;
    pub const SIGNAL_SELECT: usize = 1;
    pub const SIGNAL_COUNT: usize = 2;
    pub const SIGNAL_COUNT_LEN: usize = 2;
    pub const ENABLES: usize = 4;

    pub const ANALOG: AnalogOffsets = AnalogOffsets {
        p5v: 5,
        m8v_adc: 6,
        sspa_voltage: 7,
        sspa_current: 8,
        controller_temp: 9,
        sspa_temp: 10,
        p8v: 11,
        interrupt_count: 13,
        power_sample: 14,
    };
}

/// Формат 4: десять детекторов, восемь кодов лучей, без signal_select
pub mod v4 {
    use super::AnalogOffsets;

    pub const ALARMS: usize = 0;
    pub const SIGNAL_COUNT: usize = 1;
    pub const SIGNAL_COUNT_LEN: usize = 10;
    pub const ENABLES: usize = 11;
    pub const BEAMCODES: usize = 21;
    pub const BEAMCODES_LEN: usize = 8;

    pub const ANALOG: AnalogOffsets = AnalogOffsets {
        p5v: 12,
        m8v_adc: 13,
        sspa_voltage: 14,
        sspa_current: 15,
        controller_temp: 16,
        sspa_temp: 17,
        p8v: 18,
        interrupt_count: 20,
        power_sample: 29,
    };
}
