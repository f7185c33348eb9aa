//! Интерпретаторы раскладок полей для форматов 0-4.
//!
//! Каждый формат описан отдельной функцией от тела слова к набору
//! регистров, выбор идёт по плоской таблице [`INTERPRETERS`]. Форматы 0-2
//! разделяют помощник базовой раскладки, но не вызывают друг друга.

use aeu_types::{StatusFormat, StatusResult};

use crate::{
    consts::{self, v0, v1, v2, v3, v4, AnalogOffsets},
    raw::Body,
};

/// Поля тела слова в физических единицах (без заголовка и производных).
#[derive(Debug, Clone, PartialEq)]
pub struct Registers {
    pub alarms: AlarmFlags,
    pub signal_select: Option<u32>,
    pub signal_count: Vec<u32>,
    pub signal_voltage: Vec<f64>,
    pub enables: EnableFlags,
    pub brownout_alarm: Option<bool>,
    pub analog: AnalogReadings,
    pub beamcodes: Option<Vec<u32>>,
}

/// Разобранный байт аварий
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlarmFlags {
    pub raw: u32,
    pub pulse_width: bool,
    pub sspa_overdrive: bool,
    pub sspa_overtemp: bool,
    pub sspa_overtemp_latch: bool,
    pub dew_sensor: bool,
    pub extended_funcs: bool,
    pub sspa_overcurrent: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EnableFlags {
    pub sspa_power: bool,
    pub sspa_gating: bool,
    pub interrupt: bool,
    pub bypass: bool,
    pub offset: bool,
    pub forced: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalogReadings {
    pub p5v_voltage: f64,
    pub p8v_voltage: f64,
    pub m8v_voltage: f64,
    pub sspa_voltage: f64,
    pub sspa_current: f64,
    pub controller_temp: f64,
    pub sspa_temp: f64,
    pub interrupt_count: u32,
    pub power_sample_delay: f64,
    pub power_sample_counts: u32,
}

/// Интерпретатор одной раскладки
pub type Interpreter = fn(&Body<'_>) -> StatusResult<Registers>;

/// Таблица интерпретаторов, индекс равен номеру формата.
pub const INTERPRETERS: [Interpreter; 5] = [parse_v0, parse_v1, parse_v2, parse_v3, parse_v4];

/// Интерпретатор для данного формата.
pub fn interpreter(format: StatusFormat) -> Interpreter {
    INTERPRETERS[format.as_u8() as usize]
}

////////////////////////////////////////////////////////////////////////////////
// Раскладки
////////////////////////////////////////////////////////////////////////////////

pub fn parse_v0(body: &Body<'_>) -> StatusResult<Registers> {
    base_layout(body)
}

pub fn parse_v1(body: &Body<'_>) -> StatusResult<Registers> {
    let mut regs = base_layout(body)?;
    regs.enables.bypass = body.flag(v1::BYPASS_ENABLE)?;

    Ok(regs)
}

pub fn parse_v2(body: &Body<'_>) -> StatusResult<Registers> {
    let mut regs = base_layout(body)?;
    regs.enables.bypass = body.flag(v1::BYPASS_ENABLE)?;
    regs.enables.offset = body.flag(v2::OFFSET_ENABLE)?;

    Ok(regs)
}

pub fn parse_v3(body: &Body<'_>) -> StatusResult<Registers> {
    let alarms = read_alarms(body, v3::ALARMS)?;
    let signal_select = Some(read_signal_select(body, v3::SIGNAL_SELECT)?);
    let signal_count = body.slice(v3::SIGNAL_COUNT, v3::SIGNAL_COUNT_LEN)?.to_vec();
    let (enables, brownout) = read_packed_enables(body, v3::ENABLES)?;
    let analog = read_analog(body, &v3::ANALOG)?;

    Ok(Registers {
        alarms,
        signal_select,
        signal_voltage: signal_voltages(&signal_count),
        signal_count,
        enables,
        brownout_alarm: Some(brownout),
        analog,
        beamcodes: None,
    })
}

pub fn parse_v4(body: &Body<'_>) -> StatusResult<Registers> {
    let alarms = read_alarms(body, v4::ALARMS)?;
    let signal_count = body.slice(v4::SIGNAL_COUNT, v4::SIGNAL_COUNT_LEN)?.to_vec();
    let (enables, brownout) = read_packed_enables(body, v4::ENABLES)?;
    let analog = read_analog(body, &v4::ANALOG)?;

    Ok(Registers {
        alarms,
        signal_select: None,
        signal_voltage: signal_voltages(&signal_count),
        signal_count,
        enables,
        brownout_alarm: Some(brownout),
        analog,
        beamcodes: Some(body.slice(v4::BEAMCODES, v4::BEAMCODES_LEN)?.to_vec()),
    })
}

/// Общая часть форматов 0-2: три отдельных байта разрешений.
fn base_layout(body: &Body<'_>) -> StatusResult<Registers> {
    let alarms = read_alarms(body, v0::ALARMS)?;
    let signal_select = Some(read_signal_select(body, v0::SIGNAL_SELECT)?);
    let signal_count = body.slice(v0::SIGNAL_COUNT, v0::SIGNAL_COUNT_LEN)?.to_vec();

    let enables = EnableFlags {
        sspa_power: body.flag(v0::SSPA_POWER_ENABLE)?,
        sspa_gating: body.flag(v0::SSPA_GATING_ENABLE)?,
        interrupt: body.flag(v0::INTERRUPT_ENABLE)?,
        ..EnableFlags::default()
    };

    let analog = read_analog(body, &v0::ANALOG)?;

    Ok(Registers {
        alarms,
        signal_select,
        signal_voltage: signal_voltages(&signal_count),
        signal_count,
        enables,
        brownout_alarm: None,
        analog,
        beamcodes: None,
    })
}

////////////////////////////////////////////////////////////////////////////////
// Общие поля
////////////////////////////////////////////////////////////////////////////////

fn read_alarms(
    body: &Body<'_>,
    offset: usize,
) -> StatusResult<AlarmFlags> {
    let raw = body.get(offset)?;

    Ok(AlarmFlags {
        raw,
        pulse_width: raw & consts::ALARM_PULSEWIDTH != 0,
        sspa_overdrive: raw & consts::ALARM_OVERDRIVE != 0,
        sspa_overtemp: raw & consts::ALARM_OVERTEMP != 0,
        sspa_overtemp_latch: raw & consts::ALARM_OVERTEMP_LATCH != 0,
        dew_sensor: raw & consts::ALARM_DEWSENSOR != 0,
        extended_funcs: raw & consts::ALARM_EXTENDED == 0,
        sspa_overcurrent: raw & consts::ALARM_OVERCURRENT != 0,
    })
}

fn read_signal_select(
    body: &Body<'_>,
    offset: usize,
) -> StatusResult<u32> {
    Ok((body.get(offset)? >> 5) & 0x07)
}

/// Байт разрешений форматов 3-4. Возвращает флаги и аварию brownout.
fn read_packed_enables(
    body: &Body<'_>,
    offset: usize,
) -> StatusResult<(EnableFlags, bool)> {
    let raw = body.get(offset)?;

    let enables = EnableFlags {
        sspa_power: raw & consts::ENABLE_SSPAPOWER != 0,
        sspa_gating: raw & consts::ENABLE_SSPAGATE != 0,
        interrupt: raw & consts::ENABLE_INTERRUPT != 0,
        bypass: raw & consts::ENABLE_BYPASS != 0,
        offset: raw & consts::ENABLE_OFFSET != 0,
        forced: raw & consts::ENABLE_FORCED != 0,
    };

    Ok((enables, raw & consts::ENABLE_BROWNOUT != 0))
}

// Порядок чтения повторяет прошивочный: +8 В читается раньше АЦП -8 В.
fn read_analog(
    body: &Body<'_>,
    at: &AnalogOffsets,
) -> StatusResult<AnalogReadings> {
    let p5v_voltage = rail_voltage(body.get(at.p5v)?);
    let p8v_voltage = rail_voltage(body.get(at.p8v)?);
    let m8v_voltage = negative_rail_voltage(p8v_voltage, body.get(at.m8v_adc)?);
    let sspa_voltage = SSPA_VOLTAGE_SCALE * body.get(at.sspa_voltage)? as f64;
    let sspa_current = adc_volts(body.get(at.sspa_current)?) / consts::SSPA_CURRENT_SENSE;
    let controller_temp = temperature_c(body.get(at.controller_temp)?);
    let sspa_temp = temperature_c(body.get(at.sspa_temp)?);
    let interrupt_count = body.get(at.interrupt_count)?;
    let power_sample_counts = body.get(at.power_sample)?;

    Ok(AnalogReadings {
        p5v_voltage,
        p8v_voltage,
        m8v_voltage,
        sspa_voltage,
        sspa_current,
        controller_temp,
        sspa_temp,
        interrupt_count,
        power_sample_delay: power_sample_counts as f64 / consts::POWER_SAMPLE_COUNTS_PER_US,
        power_sample_counts,
    })
}

////////////////////////////////////////////////////////////////////////////////
// Масштабирование
////////////////////////////////////////////////////////////////////////////////

const SSPA_VOLTAGE_SCALE: f64 = consts::SSPA_VOLTAGE_GAIN * consts::ADC_SCALE;

fn adc_volts(count: u32) -> f64 {
    consts::ADC_SCALE * count as f64
}

/// Отсчёт детектора → В
pub fn signal_voltage(count: u32) -> f64 {
    count as f64 * consts::SIGNAL_FULL_SCALE_V / consts::SIGNAL_MAX_COUNT
}

fn signal_voltages(counts: &[u32]) -> Vec<f64> {
    counts.iter().copied().map(signal_voltage).collect()
}

/// Монитор +5 В / +8 В за делителем 1:2
pub fn rail_voltage(count: u32) -> f64 {
    consts::RAIL_DIVIDER_GAIN * consts::ADC_SCALE * count as f64
}

/// -8 В из делителя между +8 В и -8 В: АЦП видит среднюю точку.
pub fn negative_rail_voltage(
    p8v: f64,
    midpoint_count: u32,
) -> f64 {
    let c = consts::M8V_DIVIDER_RATIO;
    (p8v * c - adc_volts(midpoint_count)) / (c - 1.0)
}

pub fn temperature_c(count: u32) -> f64 {
    (adc_volts(count) - consts::TEMP_OFFSET_V) / consts::TEMP_SLOPE_V_PER_C
}
