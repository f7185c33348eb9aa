//! Отчёт по решётке: декодирование всех слов статуса панелей.
//!
//! Разбор XML и распаковка документа выполняются снаружи; сюда приходят
//! уже извлечённые элементы `<aeu>`. Ошибка одного слова не прерывает обход.

use std::collections::BTreeMap;

use aeu_types::DecodedStatus;
use log::warn;
use serde_json::{Map, Number, Value};

use crate::{config::COMPACT_KEY_FILTER, decoder::decode_text, ReportConfig};

/// Элемент `<aeu>` документа состояния решётки.
#[derive(Debug, Clone, PartialEq)]
pub struct AeuElement {
    /// Позиция AEU на панели
    pub position: u32,
    /// Мощность из атрибута элемента, Вт
    pub pwatts: f64,
    /// Текст слова статуса (может отсутствовать)
    pub text: Option<String>,
}

/// Результат по одному AEU.
#[derive(Debug, Clone, PartialEq)]
pub enum AeuReport {
    Decoded(Box<DecodedStatus>),
    /// Слово не раскодировано, известна только мощность из атрибута
    Undecoded { pwatts: f64 },
}

/// Статистика декодирования по отчёту.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DecodeStats {
    /// Успешно раскодированных слов.
    pub decoded: u64,
    /// Слов с ошибкой.
    pub failed: u64,
    /// Максимальная `pwatts` среди раскодированных слов.
    pub peak_pwatts: f64,
}

/// Отчёт по всей решётке, панели упорядочены по идентификатору.
#[derive(Debug, Default, Clone)]
pub struct ArrayReport {
    panels: BTreeMap<String, BTreeMap<u32, AeuReport>>,
    stats: DecodeStats,
}

impl AeuReport {
    pub fn status(&self) -> Option<&DecodedStatus> {
        match self {
            AeuReport::Decoded(s) => Some(&**s),
            AeuReport::Undecoded { .. } => None,
        }
    }

    /// Мощность AEU: раскодированная или из атрибута.
    pub fn pwatts(&self) -> f64 {
        match self {
            AeuReport::Decoded(s) => s.pwatts,
            AeuReport::Undecoded { pwatts } => *pwatts,
        }
    }
}

impl DecodeStats {
    pub fn total(&self) -> u64 {
        self.decoded + self.failed
    }
}

impl ArrayReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Декодирует все элементы панели. Повторная панель дополняется.
    pub fn add_panel<I>(
        &mut self,
        id: &str,
        elements: I,
    ) where
        I: IntoIterator<Item = AeuElement>,
    {
        let panel = self.panels.entry(id.to_string()).or_default();

        for element in elements {
            let report = match decode_text(element.text.as_deref()) {
                Ok(status) => {
                    self.stats.decoded += 1;
                    self.stats.peak_pwatts = self.stats.peak_pwatts.max(status.pwatts);
                    AeuReport::Decoded(Box::new(status))
                }
                Err(e) => {
                    warn!("panel {id}, AEU {}: no status ({e})", element.position);
                    self.stats.failed += 1;
                    AeuReport::Undecoded {
                        pwatts: element.pwatts,
                    }
                }
            };

            panel.insert(element.position, report);
        }
    }

    pub fn panel(
        &self,
        id: &str,
    ) -> Option<&BTreeMap<u32, AeuReport>> {
        self.panels.get(id)
    }

    pub fn panel_ids(&self) -> impl Iterator<Item = &str> {
        self.panels.keys().map(String::as_str)
    }

    pub fn stats(&self) -> &DecodeStats {
        &self.stats
    }

    /// `{"panels": {id: {position: {...}}}}`
    pub fn to_json(
        &self,
        cfg: &ReportConfig,
    ) -> Value {
        let panels: Map<String, Value> = self
            .panels
            .iter()
            .map(|(id, aeus)| {
                let units: Map<String, Value> = aeus
                    .iter()
                    .map(|(pos, report)| (pos.to_string(), render_report(report, cfg)))
                    .collect();
                (id.clone(), Value::Object(units))
            })
            .collect();

        let mut root = Map::new();
        root.insert("panels".to_string(), Value::Object(panels));
        Value::Object(root)
    }
}

fn render_report(
    report: &AeuReport,
    cfg: &ReportConfig,
) -> Value {
    match report {
        AeuReport::Decoded(status) => render_status(status, cfg),
        AeuReport::Undecoded { pwatts } => {
            let mut m = Map::new();
            m.insert("pwatts".to_string(), float_value(*pwatts));
            Value::Object(m)
        }
    }
}

/// JSON-представление одного статуса с учётом `compact` и `ndigits`.
pub fn render_status(
    status: &DecodedStatus,
    cfg: &ReportConfig,
) -> Value {
    let mut value = serde_json::to_value(status).unwrap_or_default();

    if cfg.compact {
        if let Value::Object(map) = &mut value {
            map.insert(
                "firmware".to_string(),
                Value::String(status.firmware.to_string()),
            );
            for key in COMPACT_KEY_FILTER {
                map.remove(key);
            }
        }
    }

    if let Some(n) = cfg.ndigits {
        round_floats(&mut value, n);
    }

    value
}

/// Округляет все числа с плавающей точкой, рекурсивно.
pub fn round_floats(
    value: &mut Value,
    ndigits: u32,
) {
    match value {
        Value::Number(n) if n.is_f64() => {
            if let Some(rounded) = n.as_f64().and_then(|x| Number::from_f64(round_to(x, ndigits))) {
                *n = rounded;
            }
        }
        Value::Array(items) => items.iter_mut().for_each(|v| round_floats(v, ndigits)),
        Value::Object(map) => map.values_mut().for_each(|v| round_floats(v, ndigits)),
        _ => {}
    }
}

fn round_to(
    x: f64,
    ndigits: u32,
) -> f64 {
    let scale = 10f64.powi(ndigits as i32);
    (x * scale).round() / scale
}

fn float_value(x: f64) -> Value {
    Number::from_f64(x).map(Value::Number).unwrap_or(Value::Null)
}
