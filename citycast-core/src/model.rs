use crate::icon::{IconVariant, select_icon};

/// Current conditions for one city, as returned by a single query.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherResult {
    pub city_name: String,
    pub temperature_c: f64,
    pub condition_text: String,
}

impl WeatherResult {
    /// Temperature as shown in the result panel, e.g. `21°C` or `-3.5°C`.
    pub fn temperature_display(&self) -> String {
        // -0.0 == 0.0, so this also turns a provider's `-0` into `0`
        let celsius = if self.temperature_c == 0.0 { 0.0 } else { self.temperature_c };
        format!("{celsius}°C")
    }

    pub fn icon(&self) -> IconVariant {
        select_icon(&self.condition_text)
    }
}

/// What the view currently displays. Replaced as a whole on every transition.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum QueryState {
    #[default]
    Idle,
    Loading,
    Success(WeatherResult),
    Failure(String),
}

impl QueryState {
    pub fn is_loading(&self) -> bool {
        matches!(self, QueryState::Loading)
    }
}

pub const TRIGGER_LABEL: &str = "Get Weather";
pub const TRIGGER_LABEL_BUSY: &str = "Loading...";

/// Visual transition a view should play when applying a [`ViewModel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    None,
    FadeIn,
}

/// Contents of the result panel.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultPanel {
    pub city_name: String,
    pub temperature: String,
    pub condition: String,
    pub icon: IconVariant,
}

/// Complete snapshot of every UI element the controller drives.
///
/// Views render this as-is; they never inspect [`QueryState`] directly.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel {
    pub trigger_label: &'static str,
    pub trigger_enabled: bool,
    pub busy_visible: bool,
    pub message: String,
    pub panel: Option<ResultPanel>,
    pub transition: Transition,
}

impl From<&QueryState> for ViewModel {
    fn from(state: &QueryState) -> Self {
        let idle = ViewModel {
            trigger_label: TRIGGER_LABEL,
            trigger_enabled: true,
            busy_visible: false,
            message: String::new(),
            panel: None,
            transition: Transition::None,
        };

        match state {
            QueryState::Idle => idle,
            QueryState::Loading => ViewModel {
                trigger_label: TRIGGER_LABEL_BUSY,
                trigger_enabled: false,
                busy_visible: true,
                ..idle
            },
            QueryState::Success(result) => ViewModel {
                panel: Some(ResultPanel {
                    city_name: result.city_name.clone(),
                    temperature: result.temperature_display(),
                    condition: result.condition_text.clone(),
                    icon: result.icon(),
                }),
                transition: Transition::FadeIn,
                ..idle
            },
            QueryState::Failure(message) => ViewModel { message: message.clone(), ..idle },
        }
    }
}
