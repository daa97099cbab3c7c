pub mod alphabet;
pub mod config;
pub mod dsp;
pub mod encoder;
pub mod error;
pub mod playback;
pub mod speech;
pub mod timeline;
pub mod token;

pub use crate::config::MorseConfig;
pub use crate::dsp::{SignalBuffer, synthesize};
pub use crate::encoder::encode;
pub use crate::error::{MorseError, Result};
pub use crate::playback::{PlaybackEvent, schedule_playback};
pub use crate::token::MorseCode;

use wasm_bindgen::prelude::*;

/// The crate version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// One text-to-Morse conversion: the code and its rendered audio.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub code: MorseCode,
    pub signal: SignalBuffer,
}

/// Encode `text` and synthesize its audio in one step.
pub fn convert(text: &str, config: &MorseConfig) -> Result<Conversion> {
    let code = encode(text)?;
    let signal = synthesize(&code, config)?;
    Ok(Conversion { code, signal })
}

fn js_err(e: MorseError) -> JsValue {
    JsValue::from_str(&format!("{e}"))
}

fn config_from(json: Option<String>) -> std::result::Result<MorseConfig, JsValue> {
    match json {
        Some(json) => MorseConfig::from_json(&json).map_err(js_err),
        None => Ok(MorseConfig::default()),
    }
}

/// WASM-exposed: return the morsewalker-core version string.
#[wasm_bindgen]
pub fn core_version() -> String {
    VERSION.to_string()
}

/// WASM-exposed: encode text to Morse (`... --- ...`).
#[wasm_bindgen]
pub fn encode_text(text: &str) -> std::result::Result<String, JsValue> {
    encode(text).map(|code| code.to_string()).map_err(js_err)
}

/// WASM-exposed: encode and render text to a WAV byte array.
/// `config_json` uses the camelCase `MorseConfig` fields; omitted fields
/// take their defaults.
#[wasm_bindgen]
pub fn render_morse_wav(
    text: &str,
    config_json: Option<String>,
) -> std::result::Result<Vec<u8>, JsValue> {
    let config = config_from(config_json)?;
    let conversion = convert(text, &config).map_err(js_err)?;
    Ok(conversion.signal.to_wav())
}

/// WASM-exposed: encode and render text to mono f32 samples.
/// Returns the raw audio buffer for AudioWorklet playback.
#[wasm_bindgen]
pub fn render_morse_samples(
    text: &str,
    sample_rate: u32,
    frequency: f64,
    dot_duration: f64,
) -> std::result::Result<Vec<f32>, JsValue> {
    let config = MorseConfig {
        sample_rate,
        frequency,
        dot_duration,
        ..MorseConfig::default()
    };
    let conversion = convert(text, &config).map_err(js_err)?;
    Ok(conversion.signal.to_f32())
}

/// WASM-exposed: the blink schedule for text, as a JSON-like event list.
#[wasm_bindgen]
pub fn playback_events(
    text: &str,
    config_json: Option<String>,
) -> std::result::Result<JsValue, JsValue> {
    let config = config_from(config_json)?;
    let code = encode(text).map_err(js_err)?;
    let events: Vec<PlaybackEvent> = schedule_playback(&code, &config).map_err(js_err)?.collect();
    serde_wasm_bindgen::to_value(&events).map_err(|e| JsValue::from_str(&format!("{e}")))
}
