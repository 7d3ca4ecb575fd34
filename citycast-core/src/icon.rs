/// Symbolic weather icon shown next to the condition text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconVariant {
    Clear,
    Cloudy,
    Rain,
    Snow,
    Thunderstorm,
    Default,
}

/// Keyword groups in match order. The first group with a hit wins.
const KEYWORDS: &[(&[&str], IconVariant)] = &[
    (&["sunny", "clear"], IconVariant::Clear),
    (&["cloud", "overcast"], IconVariant::Cloudy),
    (&["rain", "drizzle"], IconVariant::Rain),
    (&["snow", "sleet"], IconVariant::Snow),
    (&["thunder"], IconVariant::Thunderstorm),
];

/// Pick an icon for free-form condition text such as "Patchy light rain".
///
/// Matching is case-insensitive and substring based, so
/// "Partly cloudy" and "Overcast" both map to [`IconVariant::Cloudy`].
/// Text matching none of the groups (including `""`) yields
/// [`IconVariant::Default`].
pub fn select_icon(condition_text: &str) -> IconVariant {
    let lower = condition_text.to_lowercase();

    KEYWORDS
        .iter()
        .find(|(words, _)| words.iter().any(|w| lower.contains(w)))
        .map(|(_, variant)| *variant)
        .unwrap_or(IconVariant::Default)
}

impl IconVariant {
    /// Single-character rendering for terminal views.
    pub fn glyph(&self) -> &'static str {
        match self {
            IconVariant::Clear => "☀",
            IconVariant::Cloudy => "☁",
            IconVariant::Rain => "☂",
            IconVariant::Snow => "❄",
            IconVariant::Thunderstorm => "⚡",
            IconVariant::Default => "ℹ",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_each_keyword_group() {
        assert_eq!(select_icon("Sunny"), IconVariant::Clear);
        assert_eq!(select_icon("Clear"), IconVariant::Clear);
        assert_eq!(select_icon("Partly cloudy"), IconVariant::Cloudy);
        assert_eq!(select_icon("Overcast"), IconVariant::Cloudy);
        assert_eq!(select_icon("Light drizzle"), IconVariant::Rain);
        assert_eq!(select_icon("Moderate rain"), IconVariant::Rain);
        assert_eq!(select_icon("Light sleet"), IconVariant::Snow);
        assert_eq!(select_icon("Heavy snow"), IconVariant::Snow);
        assert_eq!(select_icon("Thundery outbreaks possible"), IconVariant::Thunderstorm);
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(select_icon("HEAVY RAIN"), IconVariant::Rain);
        assert_eq!(select_icon("rAiN"), IconVariant::Rain);
        assert_eq!(select_icon("OVERCAST"), IconVariant::Cloudy);
    }

    #[test]
    fn earlier_group_wins() {
        assert_eq!(select_icon("Sunny with rain later"), IconVariant::Clear);
        assert_eq!(select_icon("Cloudy with rain"), IconVariant::Cloudy);
        assert_eq!(select_icon("Patchy rain nearby"), IconVariant::Rain);
        assert_eq!(select_icon("Moderate or heavy rain with thunder"), IconVariant::Rain);
    }

    #[test]
    fn rain_wins_over_later_groups() {
        for text in ["rain and snow", "Snow, then RAIN", "thunder rain", "rainy"] {
            assert_eq!(select_icon(text), IconVariant::Rain, "text: {text}");
        }
    }

    #[test]
    fn unmatched_text_falls_back_to_default() {
        assert_eq!(select_icon(""), IconVariant::Default);
        assert_eq!(select_icon("Mist"), IconVariant::Default);
        assert_eq!(select_icon("Fog"), IconVariant::Default);
    }
}
