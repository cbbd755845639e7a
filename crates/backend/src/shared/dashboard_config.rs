use chrono::Weekday;
use contracts::shared::periods::PeriodKind;

pub const DEFAULT_CUSTOM_LOOKBACK_DAYS: u32 = 14;
pub const DEFAULT_WEEK_START_DAY: Weekday = Weekday::Mon;
pub const DEFAULT_TOP_DROPS_LIMIT: usize = 50;
/// Upper bound on the custom lookback; larger values fall back to the default.
pub const MAX_CUSTOM_LOOKBACK_DAYS: u32 = 36_500;

/// Clan-level settings published by the ETL in the `dashboard_config` table.
///
/// The table is a loose key/value list; it is parsed once per request into
/// this struct and passed down explicitly. Missing or malformed values fall
/// back to the documented defaults and are never reported to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Lookback of the custom period, in days (>= 1). Default 14.
    pub custom_lookback_days: u32,
    /// First day of the clan week. Default Monday.
    pub week_start_day: Weekday,
    pub label_custom_days: String,
    pub label_prev_week: String,
    pub label_prev_month: String,
    pub label_ytd: String,
    /// Rows shown by the YTD and all-time detail feeds. Default 50.
    pub top_drops_limit: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            custom_lookback_days: DEFAULT_CUSTOM_LOOKBACK_DAYS,
            week_start_day: DEFAULT_WEEK_START_DAY,
            label_custom_days: PeriodKind::CustomDays.default_label().to_string(),
            label_prev_week: PeriodKind::PrevWeek.default_label().to_string(),
            label_prev_month: PeriodKind::PrevMonth.default_label().to_string(),
            label_ytd: PeriodKind::Ytd.default_label().to_string(),
            top_drops_limit: DEFAULT_TOP_DROPS_LIMIT,
        }
    }
}

impl DashboardConfig {
    /// Build from `(key, value)` rows of the `dashboard_config` table.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut config = Self::default();

        for (key, value) in pairs {
            let key = key.as_ref().trim();
            let value = value.as_ref().trim();

            match key {
                "custom_lookback_days" => match parse_positive(value)
                    .filter(|days| *days <= MAX_CUSTOM_LOOKBACK_DAYS)
                {
                    Some(days) => config.custom_lookback_days = days,
                    None => tracing::debug!(
                        "dashboard_config: invalid custom_lookback_days '{}', using {}",
                        value,
                        DEFAULT_CUSTOM_LOOKBACK_DAYS
                    ),
                },
                "week_start_day" => match parse_weekday(value) {
                    Some(day) => config.week_start_day = day,
                    None => tracing::debug!(
                        "dashboard_config: unknown week_start_day '{}', using Monday",
                        value
                    ),
                },
                "label_custom_days" => set_label(&mut config.label_custom_days, value),
                "label_prev_week" => set_label(&mut config.label_prev_week, value),
                "label_prev_month" => set_label(&mut config.label_prev_month, value),
                "label_ytd" => set_label(&mut config.label_ytd, value),
                "top_drops_limit" => match parse_positive(value) {
                    Some(limit) => config.top_drops_limit = limit as usize,
                    None => tracing::debug!(
                        "dashboard_config: invalid top_drops_limit '{}', using {}",
                        value,
                        DEFAULT_TOP_DROPS_LIMIT
                    ),
                },
                _ => {}
            }
        }

        config
    }

    /// Selector label for a period. The all-time label is not configurable.
    pub fn label_for(&self, kind: PeriodKind) -> &str {
        match kind {
            PeriodKind::CustomDays => &self.label_custom_days,
            PeriodKind::PrevWeek => &self.label_prev_week,
            PeriodKind::PrevMonth => &self.label_prev_month,
            PeriodKind::Ytd => &self.label_ytd,
            PeriodKind::AllTime => PeriodKind::AllTime.default_label(),
        }
    }
}

fn set_label(target: &mut String, value: &str) {
    if !value.is_empty() {
        *target = value.to_string();
    }
}

/// Full English day name, exactly as the ETL writes it ("Sunday", not "sun").
fn parse_weekday(value: &str) -> Option<Weekday> {
    match value {
        "Monday" => Some(Weekday::Mon),
        "Tuesday" => Some(Weekday::Tue),
        "Wednesday" => Some(Weekday::Wed),
        "Thursday" => Some(Weekday::Thu),
        "Friday" => Some(Weekday::Fri),
        "Saturday" => Some(Weekday::Sat),
        "Sunday" => Some(Weekday::Sun),
        _ => None,
    }
}

/// Accepts "14" and the "14.0" pandas tends to write for integer columns.
fn parse_positive(value: &str) -> Option<u32> {
    if let Ok(n) = value.parse::<u32>() {
        return (n > 0).then_some(n);
    }
    let f = value.parse::<f64>().ok()?;
    (f.is_finite() && f.fract() == 0.0 && f >= 1.0 && f <= f64::from(u32::MAX)).then(|| f as u32)
}
