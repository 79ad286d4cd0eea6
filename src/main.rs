use std::io::Read;

use settings_bridge::{
	config::config_page_url,
	error, info,
	locale::BundledLocales,
	logging,
	paths::bridge_data_dir,
	platform::PlatformVariant,
	reconcile::reconcile_settings,
	store::FileSettingsStore,
	transport::StdoutTransport,
	weather::{handle_device_weather_request, handle_startup, WeatherUpdater},
	warn, DEBUG_NAME,
};

/// Stand-in for the external weather retrieval process: record that a
/// refresh was requested and leave the fetching to it.
struct WeatherTrigger;

impl WeatherUpdater for WeatherTrigger {
	fn update_weather(&mut self, force_refresh: bool) {
		warn!(
			"[{}][WEATHER] Refresh requested (force={})",
			DEBUG_NAME, force_refresh
		);
	}
}

fn read_response(arg: Option<&str>) -> Option<String> {
	match arg {
		Some("-") | None => {
			let mut buf = String::new();
			std::io::stdin().read_to_string(&mut buf).ok()?;
			Some(buf)
		}
		Some(path) => match std::fs::read_to_string(path) {
			Ok(text) => Some(text),
			Err(e) => {
				error!("[{}] Failed to read {path}: {e}", DEBUG_NAME);
				None
			}
		},
	}
}

fn print_usage() {
	eprintln!("usage: settings-bridge <platform> [response-file|-]");
	eprintln!("       settings-bridge <platform> --startup");
	eprintln!("       settings-bridge <platform> --device-request");
	eprintln!("       settings-bridge <platform> --config-url");
	eprintln!("platforms: aplite, basalt, chalk, diorite");
}

fn main() {
	let debug = std::env::var("BRIDGE_DEBUG").map(|v| v == "1").unwrap_or(false);
	logging::init(debug, "info");

	std::panic::set_hook(Box::new(|panic_info| {
		error!("[{}] Panic: {}", DEBUG_NAME, panic_info);
	}));

	let args: Vec<String> = std::env::args().skip(1).collect();
	let Some(platform) = args.first().and_then(|a| PlatformVariant::parse(a)) else {
		print_usage();
		std::process::exit(2);
	};

	info!(
		"!---------- [{}] Settings bridge starting ({}) ----------!",
		DEBUG_NAME,
		platform.name()
	);

	let store_path = bridge_data_dir().join("settings-store.json");
	let mut store = FileSettingsStore::load(store_path);
	let mut weather = WeatherTrigger;

	match args.get(1).map(String::as_str) {
		Some("--config-url") => {
			println!("{}", config_page_url(platform));
		}
		Some("--startup") => {
			handle_startup(&mut store, &mut weather);
		}
		Some("--device-request") => {
			handle_device_weather_request(&mut store, &mut weather);
		}
		other => {
			let Some(response) = read_response(other) else {
				std::process::exit(1);
			};

			let mut transport = StdoutTransport::new();
			let outcome = reconcile_settings(
				&response,
				platform,
				&mut store,
				&mut transport,
				&BundledLocales,
				&mut weather,
			);

			info!(
				"[{}] Reconciliation finished: primary={}, locale={}, weather={}",
				DEBUG_NAME,
				outcome.primary_sent,
				outcome.secondary_sent,
				outcome.weather_refresh_triggered
			);
		}
	}
}
