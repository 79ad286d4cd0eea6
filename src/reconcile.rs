use crate::{
    config::{parse_config, RawConfig},
    encoder::{build_primary, build_secondary, needs_secondary},
    error, info,
    locale::LocaleDataProvider,
    platform::PlatformVariant,
    slots::{normalize_slots, replaceable_slot},
    store::SettingsStore,
    transport::MessageTransport,
    weather::{
        derive_weather_flags, is_weather_disabled, persist_weather_flags, persist_weather_prefs,
        WeatherUpdater,
    },
    DEBUG_NAME,
};

/// What one reconciliation pass actually did. Failures are logged and
/// absorbed here; nothing propagates back to the settings form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileOutcome {
    pub primary_sent: bool,
    pub secondary_sent: bool,
    pub weather_refresh_triggered: bool,
}

/// One full settings reconciliation, driven by a closed webview session:
/// parse, normalize, persist the weather flags, then the two causally
/// ordered sends. The locale message goes out only after the primary send
/// succeeds, and the weather refresh only after the whole chain completes.
pub fn reconcile_settings(
    response: &str,
    platform: PlatformVariant,
    store: &mut dyn SettingsStore,
    transport: &mut dyn MessageTransport,
    locales: &dyn LocaleDataProvider,
    weather: &mut dyn WeatherUpdater,
) -> ReconcileOutcome {
    let mut outcome = ReconcileOutcome::default();

    let Some(raw) = RawConfig::from_webview_response(response) else {
        info!("[{}] No settings changed", DEBUG_NAME);
        return outcome;
    };

    let settings = parse_config(&raw);
    let slots = normalize_slots(settings.requested_widgets, settings.bar_position, platform);
    let replaceable = replaceable_slot(&slots, settings.bar_position, platform);

    // persisted flags are committed before any transport traffic
    let flags = derive_weather_flags(&slots);
    persist_weather_flags(store, flags);
    persist_weather_prefs(store, &settings, &slots);

    let primary = build_primary(&settings, &slots, replaceable, platform);
    info!(
        "[{}] Sending settings message with {} entries ({} bytes)",
        DEBUG_NAME,
        primary.len(),
        primary.encoded_size()
    );

    if let Err(e) = transport.send(&primary) {
        error!("[{}] Failed to send settings message: {e}", DEBUG_NAME);
        return outcome;
    }
    outcome.primary_sent = true;

    if needs_secondary(&settings, &slots) {
        // needs_secondary() already proved the language id is present
        let language_id = settings.language_id.unwrap_or_default();

        let secondary = match build_secondary(language_id, locales) {
            Ok(dict) => dict,
            Err(e) => {
                error!("[{}] Locale lookup failed: {e}", DEBUG_NAME);
                return outcome;
            }
        };

        info!(
            "[{}] Sending locale message with {} entries ({} bytes)",
            DEBUG_NAME,
            secondary.len(),
            secondary.encoded_size()
        );

        if let Err(e) = transport.send(&secondary) {
            error!("[{}] Failed to send locale message: {e}", DEBUG_NAME);
            return outcome;
        }
        outcome.secondary_sent = true;
    }

    // settings may have just enabled weather; force a refresh so the first
    // rotation shows current data
    if !is_weather_disabled(store) {
        weather.update_weather(true);
        outcome.weather_refresh_triggered = true;
    }

    outcome
}
