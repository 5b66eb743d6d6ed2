//! Compile-time credential configuration for the Vaktpost node.
//!
//! The flat constants in [`secrets`] are the canonical interface; the
//! records here just group them by what they unlock (WiFi join, broker
//! connection, Telegram notifications). Everything is `'static` and
//! read-only, so any task can borrow a value without synchronisation.
//!
//! `Debug` and `defmt::Format` output redact secret-bearing fields so a
//! stray log line can't leak a password or bot token.

#![cfg_attr(not(test), no_std)]

use core::fmt;

pub mod secrets;

/// Credentials for joining the access point.
#[derive(Clone, Copy)]
pub struct WifiCredentials {
    pub ssid: &'static str,
    pub password: &'static str,
}

pub const WIFI: WifiCredentials = WifiCredentials {
    ssid: secrets::WIFI_SSID,
    password: secrets::WIFI_PASSWORD,
};

/// Credentials for connecting to the MQTT broker.
#[derive(Clone, Copy)]
pub struct MqttCredentials {
    pub client_id: &'static str,
    pub username: &'static str,
    pub password: &'static str,
}

pub const MQTT: MqttCredentials = MqttCredentials {
    client_id: secrets::MQTT_CLIENT_ID,
    username: secrets::MQTT_USERNAME,
    password: secrets::MQTT_PASSWORD,
};

/// Credentials for pushing notifications through the Telegram Bot API.
#[derive(Clone, Copy)]
pub struct TelegramCredentials {
    pub bot_token: &'static str,
    pub chat_id: &'static str,
}

pub const TELEGRAM: TelegramCredentials = TelegramCredentials {
    bot_token: secrets::TELEGRAM_BOT_TOKEN,
    chat_id: secrets::TELEGRAM_CHAT_ID,
};

impl fmt::Debug for WifiCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WifiCredentials")
            .field("ssid", &self.ssid)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl fmt::Debug for MqttCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MqttCredentials")
            .field("client_id", &self.client_id)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl fmt::Debug for TelegramCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramCredentials")
            .field("bot_token", &"<redacted>")
            .field("chat_id", &self.chat_id)
            .finish()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for WifiCredentials {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "WifiCredentials {{ ssid: {=str}, password: <redacted> }}",
            self.ssid
        );
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for MqttCredentials {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "MqttCredentials {{ client_id: {=str}, username: {=str}, password: <redacted> }}",
            self.client_id,
            self.username
        );
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for TelegramCredentials {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "TelegramCredentials {{ bot_token: <redacted>, chat_id: {=str} }}",
            self.chat_id
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [(&str, &str); 7] = [
        ("WIFI_SSID", secrets::WIFI_SSID),
        ("WIFI_PASSWORD", secrets::WIFI_PASSWORD),
        ("MQTT_CLIENT_ID", secrets::MQTT_CLIENT_ID),
        ("MQTT_USERNAME", secrets::MQTT_USERNAME),
        ("MQTT_PASSWORD", secrets::MQTT_PASSWORD),
        ("TELEGRAM_BOT_TOKEN", secrets::TELEGRAM_BOT_TOKEN),
        ("TELEGRAM_CHAT_ID", secrets::TELEGRAM_CHAT_ID),
    ];

    #[test]
    fn names_are_unique() {
        for (i, (name, _)) in ALL.iter().enumerate() {
            for (other, _) in &ALL[i + 1..] {
                assert_ne!(name, other);
            }
        }
    }

    #[test]
    fn values_are_non_empty() {
        for (name, value) in ALL {
            assert!(!value.is_empty(), "{name} must not be empty");
        }
    }

    #[test]
    fn records_mirror_flat_constants() {
        assert_eq!(WIFI.ssid, secrets::WIFI_SSID);
        assert_eq!(WIFI.password, secrets::WIFI_PASSWORD);
        assert_eq!(MQTT.client_id, secrets::MQTT_CLIENT_ID);
        assert_eq!(MQTT.username, secrets::MQTT_USERNAME);
        assert_eq!(MQTT.password, secrets::MQTT_PASSWORD);
        assert_eq!(TELEGRAM.bot_token, secrets::TELEGRAM_BOT_TOKEN);
        assert_eq!(TELEGRAM.chat_id, secrets::TELEGRAM_CHAT_ID);
    }

    #[test]
    fn rereads_are_identical() {
        let first = secrets::WIFI_SSID;
        let second = secrets::WIFI_SSID;
        assert_eq!(first, second);
        assert_eq!(WIFI.ssid, first);
    }

    #[test]
    fn debug_output_redacts_secrets() {
        let wifi = format!("{WIFI:?}");
        assert!(wifi.contains(WIFI.ssid));
        assert!(!wifi.contains(secrets::WIFI_PASSWORD));

        let mqtt = format!("{MQTT:?}");
        assert!(mqtt.contains(MQTT.client_id));
        assert!(mqtt.contains(MQTT.username));
        assert!(!mqtt.contains(secrets::MQTT_PASSWORD));

        let telegram = format!("{TELEGRAM:?}");
        assert!(telegram.contains(TELEGRAM.chat_id));
        assert!(!telegram.contains(secrets::TELEGRAM_BOT_TOKEN));
    }
}
