//! Декодер слова статуса AEU.
//!
//! Чистая функция от текста: без состояния между вызовами, без ввода-вывода.
//! Вызовы можно выполнять параллельно без синхронизации.

use aeu_types::{AlarmState, DecodedStatus, StatusError, StatusFormat, StatusHeader, StatusResult};
use log::{debug, trace};

use crate::{
    consts::{self, AEU_BOARD_ID},
    layout::{self, Registers},
    raw::RawWord,
};

/// Декодирует одно слово статуса.
///
/// # Примеры
/// ```
/// let status = aeu_core::decode(
///     "5A 02 01 01 1A 51 00 C4 93 01 01 01 01FF 0292 0263 0182 00BA 00BA 02EE 0000 01AE8F8B FF 01 FF",
/// )
/// .unwrap();
/// assert_eq!(status.status_format, 2);
/// assert_eq!(status.firmware.to_string(), "1.1.26");
/// ```
pub fn decode(text: &str) -> StatusResult<DecodedStatus> {
    let raw = RawWord::parse(text)?;
    decode_raw(&raw)
}

/// Текст элемента документа может отсутствовать: `None` означает не строку.
pub fn decode_text(text: Option<&str>) -> StatusResult<DecodedStatus> {
    match text {
        Some(t) => decode(t),
        None => Err(StatusError::InvalidInputType),
    }
}

/// Декодирует JSON-значение; всё, кроме строки, отвергается.
pub fn decode_value(value: &serde_json::Value) -> StatusResult<DecodedStatus> {
    match value {
        serde_json::Value::String(s) => decode(s),
        _ => Err(StatusError::InvalidInputType),
    }
}

/// Декодирует уже токенизированное слово.
pub fn decode_raw(raw: &RawWord) -> StatusResult<DecodedStatus> {
    let header = raw.header()?;

    if header.board_id != AEU_BOARD_ID {
        return Err(StatusError::UnknownBoardType(header.board_id));
    }

    let format = StatusFormat::from_u32(header.status_format)?;

    trace!(
        "AEU status: format {format}, firmware {}, {} tokens",
        header.firmware,
        raw.len()
    );

    let regs = layout::interpreter(format)(&raw.body())?;
    let status = assemble(header, regs);

    debug!(
        "AEU status decoded: {format}, pfwd {:.2} dBm, pwatts {:.1} W, alarm {}",
        status.pfwd, status.pwatts, status.alarm_state
    );

    Ok(status)
}

fn assemble(
    header: StatusHeader,
    regs: Registers,
) -> DecodedStatus {
    let Registers {
        alarms,
        signal_select,
        signal_count,
        signal_voltage,
        enables,
        brownout_alarm,
        analog,
        beamcodes,
    } = regs;

    let pfwd = detector_power_dbm(signal_voltage[consts::SIGNAL_POWER_FWD]);
    let pref = detector_power_dbm(signal_voltage[consts::SIGNAL_POWER_REF]);
    let pwatts = output_power_watts(
        enables.sspa_power,
        enables.sspa_gating,
        analog.sspa_current,
        analog.sspa_voltage,
        pfwd,
    );

    DecodedStatus {
        board_id: header.board_id,
        status_format: header.status_format,
        firmware: header.firmware,
        alarms: alarms.raw,
        pulse_width_alarm: alarms.pulse_width,
        sspa_overdrive_alarm: alarms.sspa_overdrive,
        sspa_overtemp_alarm: alarms.sspa_overtemp,
        sspa_overtemp_alarm_latch: alarms.sspa_overtemp_latch,
        dew_sensor_alarm: alarms.dew_sensor,
        extended_funcs: alarms.extended_funcs,
        sspa_overcurrent_alarm: alarms.sspa_overcurrent,
        brownout_alarm,
        signal_select,
        signal_count,
        signal_voltage,
        sspa_power_enabled: enables.sspa_power,
        sspa_gating_enabled: enables.sspa_gating,
        interrupt_enabled: enables.interrupt,
        bypass_enabled: enables.bypass,
        offset_enabled: enables.offset,
        forced_enabled: enables.forced,
        p5v_voltage_monitor: analog.p5v_voltage,
        p8v_voltage_monitor: analog.p8v_voltage,
        m8v_voltage_monitor: analog.m8v_voltage,
        sspa_voltage_monitor: analog.sspa_voltage,
        sspa_current_monitor: analog.sspa_current,
        controller_temp: analog.controller_temp,
        sspa_temp: analog.sspa_temp,
        interrupt_count: analog.interrupt_count,
        beamcodes,
        power_sample_delay: analog.power_sample_delay,
        power_sample_counts: analog.power_sample_counts,
        pfwd,
        pref,
        pwatts,
        alarm_state: AlarmState::classify(alarms.sspa_overdrive, alarms.sspa_overtemp),
    }
}

////////////////////////////////////////////////////////////////////////////////
// Производные величины
////////////////////////////////////////////////////////////////////////////////

/// Мощность по напряжению детектора, дБм (линейная калибровка).
pub fn detector_power_dbm(volts: f64) -> f64 {
    consts::PFWD_CAL_DBM - (consts::VFWD_CAL_V - volts) / consts::DETECTOR_SLOPE_V_PER_DBM
}

/// Выходная мощность SSPA, Вт.
///
/// Ненулевая только при включённом питании и стробировании, токе выше
/// 0.3 А и прямой мощности выше 45 дБм.
pub fn output_power_watts(
    power_enabled: bool,
    gating_enabled: bool,
    current_a: f64,
    voltage_v: f64,
    pfwd_dbm: f64,
) -> f64 {
    if power_enabled
        && gating_enabled
        && current_a > consts::PWATTS_MIN_CURRENT_A
        && pfwd_dbm > consts::PWATTS_MIN_PFWD_DBM
    {
        current_a * voltage_v
    } else {
        0.0
    }
}
