use serde::{Serialize, Serializer};

/// Сводное состояние аварий SSPA (Comtech)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum AlarmState {
    /// Аварий нет
    Ok = 0,
    /// Только перегрев
    Temp = 1,
    /// Только перегрузка по входу (КСВ)
    Vswr = 2,
    /// Обе аварии одновременно
    Summary = 3,
}

impl AlarmState {
    /// Классификация по паре флагов (overdrive, overtemp).
    pub fn classify(
        overdrive: bool,
        overtemp: bool,
    ) -> Self {
        match (overdrive, overtemp) {
            (false, false) => AlarmState::Ok,
            (false, true) => AlarmState::Temp,
            (true, false) => AlarmState::Vswr,
            (true, true) => AlarmState::Summary,
        }
    }

    pub fn as_u8(&self) -> u8 {
        *self as u8
    }
}

impl std::fmt::Display for AlarmState {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            AlarmState::Ok => write!(f, "OK"),
            AlarmState::Temp => write!(f, "TEMP"),
            AlarmState::Vswr => write!(f, "VSWR"),
            AlarmState::Summary => write!(f, "SUMMARY"),
        }
    }
}

// В JSON состояние пишется числом, как его ждут потребители отчёта.
impl Serialize for AlarmState {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_u8())
    }
}
